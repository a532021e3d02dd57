//! Tolerant aggregation over sparse numeric records.
//!
//! The entry point is [`aggregate`]: sum, count, average, min and max over a
//! collection that may be absent and may hold absent or negative records.
//! Bad records are skipped and counted; each skip is reported to a
//! [`NoticeSink`]. Nothing here returns an error or panics on bad data.

mod aggregate;
pub mod notice;
mod parse;

pub use aggregate::{
    TolerantAggregator, aggregate, aggregate_records, aggregate_records_with_settings,
};
pub use notice::{
    CollectingSink, DiscardSink, FnSink, Notice, NoticeLevel, NoticeSink, TracingSink, from_fn,
};
pub use parse::parse_records;

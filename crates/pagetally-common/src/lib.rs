//! Common types, settings and error handling for pagetally.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod result;
pub mod settings;
pub mod types;

pub use error::{Error, Result};
pub use result::AggregationResult;
pub use settings::{AggregatorSettings, DEFAULT_RECORD_LABEL};
pub use types::{InputKind, Record, SkipReason};

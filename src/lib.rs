//! pagetally - tolerant aggregation over sparse numeric records.
//!
//! Computes total, count, average, min and max over a collection that may be
//! absent and may contain absent (`None`) or invalid (negative) records. Bad
//! records never abort the computation: they are skipped, counted separately,
//! and reported as notices.
//!
//! # Example
//!
//! ```rust
//! use pagetally::{CollectingSink, aggregate};
//!
//! let mut sink = CollectingSink::new();
//! let records = [Some(50), None, Some(75), Some(-10), Some(100)];
//! let result = aggregate(Some(&records), &mut sink);
//!
//! assert_eq!(result.total, 225);
//! assert_eq!(result.count, 3);
//! assert_eq!(
//!     sink.messages(),
//!     vec!["Skipping null page count", "Skipping negative page count: -10"]
//! );
//! ```

use tracing::instrument;

pub use pagetally_common::error::{Error, Result};
pub use pagetally_common::{
    AggregationResult, AggregatorSettings, DEFAULT_RECORD_LABEL, InputKind, Record, SkipReason,
};
pub use pagetally_executor::{
    CollectingSink, DiscardSink, FnSink, Notice, NoticeLevel, NoticeSink, TolerantAggregator,
    TracingSink, aggregate, aggregate_records, aggregate_records_with_settings, from_fn,
    parse_records,
};

/// Aggregation handle carrying [`AggregatorSettings`].
///
/// `PageTally` holds no mutable state, so one handle can be shared across
/// threads and used by many callers at once. Each call gets its own
/// accumulator.
///
/// # Example
///
/// ```rust
/// use pagetally::{AggregatorSettings, PageTally};
///
/// let tally = PageTally::with_settings(AggregatorSettings::new().with_record_label("chapter length"));
/// let result = tally.aggregate(Some(&[Some(12), Some(30)]));
/// assert_eq!(result.max, Some(30));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageTally {
    settings: AggregatorSettings,
}

impl PageTally {
    /// Creates a handle with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AggregatorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AggregatorSettings {
        &self.settings
    }

    /// Aggregates and routes notices through `tracing`, labelled with the
    /// configured record label.
    #[instrument(level = "debug", skip_all)]
    pub fn aggregate(&self, collection: Option<&[Record]>) -> AggregationResult {
        let sink = TracingSink::with_label(self.settings.record_label.clone());
        aggregate_records_with_settings(collection, sink, &self.settings)
    }

    /// A [`CollectingSink`] that renders messages with the configured record
    /// label.
    pub fn collecting_sink(&self) -> CollectingSink {
        CollectingSink::with_label(self.settings.record_label.clone())
    }

    /// Aggregates and hands notices to `sink`.
    ///
    /// The settings' `notices` flag applies here. The record label does not,
    /// since `sink` renders notices itself; see [`collecting_sink`](Self::collecting_sink).
    pub fn aggregate_with<S: NoticeSink>(
        &self,
        collection: Option<&[Record]>,
        sink: S,
    ) -> AggregationResult {
        aggregate_records_with_settings(collection, sink, &self.settings)
    }

    /// Parses `text` with [`parse_records`] and aggregates the result.
    ///
    /// Only parsing can fail. Text with no tokens is an empty collection.
    #[instrument(level = "debug", skip_all)]
    pub fn aggregate_text<S: NoticeSink>(&self, text: &str, sink: S) -> Result<AggregationResult> {
        let records = parse_records(text)?;
        Ok(self.aggregate_with(Some(&records), sink))
    }
}

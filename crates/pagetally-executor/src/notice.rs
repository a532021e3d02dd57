//! The side channel an aggregation reports skipped records on.
//!
//! The aggregator never prints. It hands each [`Notice`] to a caller-supplied
//! [`NoticeSink`], so tests can capture notices directly and binaries can route
//! them through `tracing`.

use std::fmt;

use pagetally_common::{DEFAULT_RECORD_LABEL, SkipReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoticeLevel {
    Info,
    Warn,
}

/// One observable event of an aggregation. `index` is the zero-based
/// position of the record within the input handed to the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    NullOrEmptyInput,
    SkippedNull { index: usize },
    SkippedInvalid { index: usize, value: i64 },
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::NullOrEmptyInput => NoticeLevel::Info,
            Notice::SkippedNull { .. } | Notice::SkippedInvalid { .. } => NoticeLevel::Warn,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Notice::NullOrEmptyInput => None,
            Notice::SkippedNull { .. } => Some(SkipReason::NullRecord),
            Notice::SkippedInvalid { .. } => Some(SkipReason::InvalidRecord),
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Notice::NullOrEmptyInput => None,
            Notice::SkippedNull { index } | Notice::SkippedInvalid { index, .. } => Some(*index),
        }
    }

    /// Renders the notice text with `label` naming the kind of record.
    pub fn message(&self, label: &str) -> String {
        match self {
            Notice::NullOrEmptyInput => "List is null or empty".to_string(),
            Notice::SkippedNull { .. } => format!("Skipping null {}", label),
            Notice::SkippedInvalid { value, .. } => {
                format!("Skipping negative {}: {}", label, value)
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(DEFAULT_RECORD_LABEL))
    }
}

/// Receives notices in the order the aggregator emits them.
pub trait NoticeSink {
    fn notice(&mut self, notice: &Notice);
}

impl<S: NoticeSink + ?Sized> NoticeSink for &mut S {
    fn notice(&mut self, notice: &Notice) {
        (**self).notice(notice)
    }
}

impl<S: NoticeSink + ?Sized> NoticeSink for Box<S> {
    fn notice(&mut self, notice: &Notice) {
        (**self).notice(notice)
    }
}

/// Forwards notices to `tracing`, warn level for skipped records and info
/// level for null-or-empty input.
#[derive(Debug, Clone)]
pub struct TracingSink {
    label: String,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::with_label(DEFAULT_RECORD_LABEL)
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSink for TracingSink {
    fn notice(&mut self, notice: &Notice) {
        let message = notice.message(&self.label);
        match (notice.level(), notice.index()) {
            (NoticeLevel::Warn, Some(index)) => tracing::warn!(index, "{}", message),
            (NoticeLevel::Warn, None) => tracing::warn!("{}", message),
            (NoticeLevel::Info, _) => tracing::info!("{}", message),
        }
    }
}

/// Keeps every notice it receives, in order.
///
/// [`messages`](Self::messages) renders them with the sink's record label.
#[derive(Debug, Clone)]
pub struct CollectingSink {
    notices: Vec<Notice>,
    label: String,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::with_label(DEFAULT_RECORD_LABEL)
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            notices: Vec::new(),
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices.iter().map(|n| n.message(&self.label)).collect()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

impl Default for CollectingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSink for CollectingSink {
    fn notice(&mut self, notice: &Notice) {
        self.notices.push(*notice);
    }
}

/// Drops every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl NoticeSink for DiscardSink {
    fn notice(&mut self, _notice: &Notice) {}
}

/// A sink backed by a closure. Built with [`from_fn`].
pub struct FnSink<F>(F);

impl<F: FnMut(&Notice)> NoticeSink for FnSink<F> {
    fn notice(&mut self, notice: &Notice) {
        (self.0)(notice)
    }
}

pub fn from_fn<F: FnMut(&Notice)>(f: F) -> FnSink<F> {
    FnSink(f)
}

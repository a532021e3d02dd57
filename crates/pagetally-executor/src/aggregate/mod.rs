mod accumulator;

use std::borrow::Borrow;

use accumulator::Accumulator;
use pagetally_common::{AggregationResult, AggregatorSettings, InputKind, Record};

use crate::notice::{Notice, NoticeSink};

/// Aggregates a possibly absent collection of records.
///
/// `None` and an empty slice both produce a zero result and a single
/// [`Notice::NullOrEmptyInput`]. Otherwise every null or negative record is
/// skipped, counted and reported to `sink`, in input order. This never fails.
pub fn aggregate<S: NoticeSink>(collection: Option<&[Record]>, sink: S) -> AggregationResult {
    aggregate_records(collection, sink)
}

/// [`aggregate`] over any iterable of records or record references.
pub fn aggregate_records<I, S>(collection: Option<I>, sink: S) -> AggregationResult
where
    I: IntoIterator,
    I::Item: Borrow<Record>,
    S: NoticeSink,
{
    aggregate_records_with_settings(collection, sink, &AggregatorSettings::default())
}

pub fn aggregate_records_with_settings<I, S>(
    collection: Option<I>,
    sink: S,
    settings: &AggregatorSettings,
) -> AggregationResult
where
    I: IntoIterator,
    I::Item: Borrow<Record>,
    S: NoticeSink,
{
    let mut aggregator = TolerantAggregator::with_settings(sink, settings);
    match collection {
        Some(records) => {
            aggregator.extend(records);
            aggregator.finish()
        }
        None => aggregator.finish_absent(),
    }
}

/// Incremental form of [`aggregate`].
///
/// Records can be pushed one at a time or in batches, and partial
/// aggregators over disjoint chunks can be merged. Notice indices count
/// records pushed into this aggregator only.
pub struct TolerantAggregator<S> {
    acc: Accumulator,
    sink: S,
    emit_skips: bool,
}

impl<S: NoticeSink> TolerantAggregator<S> {
    pub fn new(sink: S) -> Self {
        Self {
            acc: Accumulator::new(),
            sink,
            emit_skips: true,
        }
    }

    pub fn with_settings(sink: S, settings: &AggregatorSettings) -> Self {
        Self {
            acc: Accumulator::new(),
            sink,
            emit_skips: settings.notices,
        }
    }

    pub fn push(&mut self, record: Record) {
        let index = self.acc.seen();
        if self.acc.accumulate(record).is_none() || !self.emit_skips {
            return;
        }
        let notice = match record {
            Some(value) => Notice::SkippedInvalid { index, value },
            None => Notice::SkippedNull { index },
        };
        self.sink.notice(&notice);
    }

    pub fn extend<I>(&mut self, records: I)
    where
        I: IntoIterator,
        I::Item: Borrow<Record>,
    {
        for record in records {
            self.push(*record.borrow());
        }
    }

    /// Folds another partial aggregate in. Its notices were already emitted
    /// to its own sink.
    pub fn merge<T>(&mut self, other: &TolerantAggregator<T>) {
        self.acc.merge(&other.acc);
    }

    /// Number of records pushed so far, valid or not.
    pub fn seen(&self) -> usize {
        self.acc.seen()
    }

    /// Current statistics without emitting anything.
    pub fn snapshot(&self) -> AggregationResult {
        self.acc.finalize()
    }

    pub fn finish(self) -> AggregationResult {
        self.finish_with_sink().0
    }

    /// Like [`finish`](Self::finish), also handing the sink back.
    pub fn finish_with_sink(mut self) -> (AggregationResult, S) {
        let result = self.acc.finalize();
        if result.input.is_null_or_empty() {
            self.sink.notice(&Notice::NullOrEmptyInput);
        }
        (result, self.sink)
    }

    fn finish_absent(mut self) -> AggregationResult {
        self.sink.notice(&Notice::NullOrEmptyInput);
        AggregationResult::null_or_empty(InputKind::Absent)
    }
}

mod numeric;
mod skipped;

use numeric::{CountAccumulator, MaxAccumulator, MinAccumulator, SumAccumulator, average};
use pagetally_common::{AggregationResult, InputKind, Record, SkipReason};
use skipped::SkipAccumulator;

/// Every running statistic of one aggregation, updated together per record.
#[derive(Clone, Default)]
pub(crate) struct Accumulator {
    sum: SumAccumulator,
    count: CountAccumulator,
    min: MinAccumulator,
    max: MaxAccumulator,
    skipped: SkipAccumulator,
    seen: usize,
}

impl Accumulator {
    pub(crate) fn new() -> Self {
        Self {
            sum: SumAccumulator::new(),
            count: CountAccumulator::new(),
            min: MinAccumulator::new(),
            max: MaxAccumulator::new(),
            skipped: SkipAccumulator::new(),
            seen: 0,
        }
    }

    /// Folds one record in. Returns the reason when the record was skipped.
    pub(crate) fn accumulate(&mut self, record: Record) -> Option<SkipReason> {
        self.seen += 1;
        match record {
            Some(value) if value >= 0 => {
                self.sum.accumulate(value);
                self.count.accumulate();
                self.min.accumulate(value);
                self.max.accumulate(value);
                None
            }
            Some(_) => self.skip(SkipReason::InvalidRecord),
            None => self.skip(SkipReason::NullRecord),
        }
    }

    fn skip(&mut self, reason: SkipReason) -> Option<SkipReason> {
        self.skipped.accumulate(reason);
        Some(reason)
    }

    pub(crate) fn merge(&mut self, other: &Self) {
        self.sum.merge(&other.sum);
        self.count.merge(&other.count);
        self.min.merge(&other.min);
        self.max.merge(&other.max);
        self.skipped.merge(&other.skipped);
        self.seen += other.seen;
    }

    pub(crate) fn seen(&self) -> usize {
        self.seen
    }

    pub(crate) fn finalize(&self) -> AggregationResult {
        AggregationResult {
            total: self.sum.finalize(),
            count: self.count.finalize(),
            average: average(&self.sum, &self.count),
            min: self.min.finalize(),
            max: self.max.finalize(),
            skipped_nulls: self.skipped.nulls,
            skipped_invalid: self.skipped.invalid,
            input: InputKind::from_len(self.seen),
        }
    }
}

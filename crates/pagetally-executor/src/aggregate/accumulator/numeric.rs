use ordered_float::OrderedFloat;

/// Running sum widened to `i128`, so any number of `i64` records adds exactly.
#[derive(Clone, Default)]
pub(crate) struct SumAccumulator(pub(crate) i128);

impl SumAccumulator {
    pub(crate) fn new() -> Self {
        Self(0)
    }

    pub(crate) fn accumulate(&mut self, value: i64) {
        self.0 += i128::from(value);
    }

    pub(crate) fn finalize(&self) -> i128 {
        self.0
    }

    pub(crate) fn merge(&mut self, other: &Self) {
        self.0 += other.0;
    }
}

#[derive(Clone, Default)]
pub(crate) struct CountAccumulator(pub(crate) u64);

impl CountAccumulator {
    pub(crate) fn new() -> Self {
        Self(0)
    }

    pub(crate) fn accumulate(&mut self) {
        self.0 += 1;
    }

    pub(crate) fn finalize(&self) -> u64 {
        self.0
    }

    pub(crate) fn merge(&mut self, other: &Self) {
        self.0 += other.0;
    }
}

#[derive(Clone, Default)]
pub(crate) struct MinAccumulator(pub(crate) Option<i64>);

impl MinAccumulator {
    pub(crate) fn new() -> Self {
        Self(None)
    }

    pub(crate) fn accumulate(&mut self, value: i64) {
        self.0 = Some(match self.0 {
            Some(m) if m <= value => m,
            _ => value,
        });
    }

    pub(crate) fn finalize(&self) -> Option<i64> {
        self.0
    }

    pub(crate) fn merge(&mut self, other: &Self) {
        self.0 = match (self.0, other.0) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (Some(x), None) => Some(x),
            (None, Some(y)) => Some(y),
            (None, None) => None,
        };
    }
}

#[derive(Clone, Default)]
pub(crate) struct MaxAccumulator(pub(crate) Option<i64>);

impl MaxAccumulator {
    pub(crate) fn new() -> Self {
        Self(None)
    }

    pub(crate) fn accumulate(&mut self, value: i64) {
        self.0 = Some(match self.0 {
            Some(m) if m >= value => m,
            _ => value,
        });
    }

    pub(crate) fn finalize(&self) -> Option<i64> {
        self.0
    }

    pub(crate) fn merge(&mut self, other: &Self) {
        self.0 = match (self.0, other.0) {
            (Some(x), Some(y)) => Some(x.max(y)),
            (Some(x), None) => Some(x),
            (None, Some(y)) => Some(y),
            (None, None) => None,
        };
    }
}

/// Exact division of the running sum; `None` when nothing was counted.
pub(crate) fn average(sum: &SumAccumulator, count: &CountAccumulator) -> Option<OrderedFloat<f64>> {
    if count.0 > 0 {
        Some(OrderedFloat(sum.0 as f64 / count.0 as f64))
    } else {
        None
    }
}

use pagetally_common::SkipReason;

#[derive(Clone, Default)]
pub(crate) struct SkipAccumulator {
    pub(crate) nulls: u64,
    pub(crate) invalid: u64,
}

impl SkipAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn accumulate(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::NullRecord => self.nulls += 1,
            SkipReason::InvalidRecord => self.invalid += 1,
        }
    }

    pub(crate) fn merge(&mut self, other: &Self) {
        self.nulls += other.nulls;
        self.invalid += other.invalid;
    }
}

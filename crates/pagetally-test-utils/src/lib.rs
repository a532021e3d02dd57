use pagetally::{AggregationResult, CollectingSink, Notice, Record, SkipReason, aggregate};

/// Aggregates `records` and returns the result with every notice emitted.
pub fn aggregate_capturing(records: Option<&[Record]>) -> (AggregationResult, Vec<Notice>) {
    let mut sink = CollectingSink::new();
    let result = aggregate(records, &mut sink);
    (result, sink.into_notices())
}

pub fn messages(notices: &[Notice]) -> Vec<String> {
    notices.iter().map(|n| n.to_string()).collect()
}

pub fn count_notices(notices: &[Notice], reason: SkipReason) -> usize {
    notices
        .iter()
        .filter(|n| n.skip_reason() == Some(reason))
        .count()
}

pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not equal within epsilon: actual={}, expected={}, diff={}, epsilon={}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Checks the structural invariants every result must satisfy.
pub fn assert_result_invariants(result: &AggregationResult) {
    assert!(result.total >= 0, "total must be non-negative: {:?}", result);
    assert_eq!(
        result.count > 0,
        result.average.is_some(),
        "average defined iff count > 0: {:?}",
        result
    );
    assert_eq!(
        result.count > 0,
        result.min.is_some() && result.max.is_some(),
        "min/max defined iff count > 0: {:?}",
        result
    );
    assert_eq!(
        result.count + result.skipped(),
        result.input.len() as u64,
        "every record is either counted or skipped: {:?}",
        result
    );
    if let (Some(min), Some(max)) = (result.min, result.max) {
        assert!(min <= max, "min exceeds max: {:?}", result);
        assert!(min >= 0, "min must be a valid record: {:?}", result);
    }
}

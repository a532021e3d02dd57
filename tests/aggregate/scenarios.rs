use pagetally::{InputKind, Notice, Record, SkipReason};

use crate::common::{
    aggregate_capturing, assert_float_eq, assert_result_invariants, chapter_pages, count_notices,
    messages,
};

#[test]
fn test_all_valid_pages() {
    let records = chapter_pages();
    let (result, notices) = aggregate_capturing(Some(&records));

    assert_eq!(result.total, 330);
    assert_eq!(result.count, 5);
    assert_eq!(result.average(), Some(66.0));
    assert_eq!(result.min, Some(25));
    assert_eq!(result.max, Some(100));
    assert_eq!(result.skipped_nulls, 0);
    assert_eq!(result.skipped_invalid, 0);
    assert!(notices.is_empty());
    assert_result_invariants(&result);
}

#[test]
fn test_absent_collection() {
    let (result, notices) = aggregate_capturing(None);

    assert_eq!(result.total, 0);
    assert_eq!(result.count, 0);
    assert!(result.average().is_none());
    assert!(result.min.is_none());
    assert!(result.max.is_none());
    assert!(result.is_null_or_empty());
    assert_eq!(result.input, InputKind::Absent);
    assert_eq!(messages(&notices), vec!["List is null or empty"]);
}

#[test]
fn test_empty_collection_matches_absent() {
    let (empty, empty_notices) = aggregate_capturing(Some(&[]));
    let (absent, absent_notices) = aggregate_capturing(None);

    assert_eq!(empty.total, absent.total);
    assert_eq!(empty.count, absent.count);
    assert_eq!(empty.average, absent.average);
    assert!(empty.is_null_or_empty());
    assert_eq!(empty.input, InputKind::Empty);
    assert_eq!(empty_notices, absent_notices);
    assert_eq!(empty_notices, vec![Notice::NullOrEmptyInput]);
}

#[test]
fn test_nulls_are_skipped() {
    let records: Vec<Record> = vec![Some(50), None, Some(75), None, Some(100)];
    let (result, notices) = aggregate_capturing(Some(&records));

    assert_eq!(result.total, 225);
    assert_eq!(result.count, 3);
    assert_eq!(result.skipped_nulls, 2);
    assert_eq!(result.skipped_invalid, 0);
    assert_eq!(count_notices(&notices, SkipReason::NullRecord), 2);
    assert_eq!(
        messages(&notices),
        vec!["Skipping null page count", "Skipping null page count"]
    );
    assert_float_eq(result.average().unwrap(), 75.0, 1e-12);
    assert_result_invariants(&result);
}

#[test]
fn test_negative_and_null_are_skipped() {
    let records: Vec<Record> = vec![Some(50), Some(-10), Some(75), None, Some(100)];
    let (result, notices) = aggregate_capturing(Some(&records));

    assert_eq!(result.total, 225);
    assert_eq!(result.count, 3);
    assert_eq!(result.skipped_nulls, 1);
    assert_eq!(result.skipped_invalid, 1);
    assert_eq!(
        messages(&notices),
        vec![
            "Skipping negative page count: -10",
            "Skipping null page count"
        ]
    );
    assert_eq!(result.min, Some(50));
    assert_eq!(result.max, Some(100));
    assert_result_invariants(&result);
}

#[test]
fn test_notices_follow_input_order() {
    let records: Vec<Record> = vec![None, Some(-1), Some(3), Some(-2), None];
    let (_, notices) = aggregate_capturing(Some(&records));

    let indices: Vec<usize> = notices.iter().filter_map(|n| n.index()).collect();
    assert_eq!(indices, vec![0, 1, 3, 4]);
    assert_eq!(
        notices[2],
        Notice::SkippedInvalid {
            index: 3,
            value: -2
        }
    );
}

#[test]
fn test_only_invalid_records() {
    let records: Vec<Record> = vec![None, Some(-5), None];
    let (result, notices) = aggregate_capturing(Some(&records));

    assert_eq!(result.total, 0);
    assert_eq!(result.count, 0);
    assert!(result.average().is_none());
    assert!(result.min.is_none());
    assert!(!result.is_null_or_empty());
    assert_eq!(notices.len(), 3);
    assert_result_invariants(&result);
}

#[test]
fn test_zero_counts_as_valid() {
    let records: Vec<Record> = vec![Some(0), Some(0)];
    let (result, notices) = aggregate_capturing(Some(&records));

    assert_eq!(result.total, 0);
    assert_eq!(result.count, 2);
    assert_eq!(result.average(), Some(0.0));
    assert_eq!(result.min, Some(0));
    assert!(notices.is_empty());
}

#[test]
fn test_average_keeps_fraction() {
    let records: Vec<Record> = vec![Some(1), Some(2)];
    let (result, _) = aggregate_capturing(Some(&records));
    assert_eq!(result.average(), Some(1.5));
}

#[test]
fn test_total_past_i64_range_is_exact() {
    let records: Vec<Record> = vec![Some(i64::MAX), Some(i64::MAX), Some(0)];
    let (result, notices) = aggregate_capturing(Some(&records));
    let expected = 2 * i128::from(i64::MAX);

    assert_eq!(result.total, expected);
    assert_eq!(result.count, 3);
    assert_eq!(result.average(), Some(expected as f64 / 3.0));
    assert_eq!(result.max, Some(i64::MAX));
    assert!(notices.is_empty());
}

#[test]
fn test_average_of_two_max_values() {
    let records: Vec<Record> = vec![Some(i64::MAX), Some(i64::MAX)];
    let (result, _) = aggregate_capturing(Some(&records));
    assert_eq!(result.total, 2 * i128::from(i64::MAX));
    assert_eq!(result.average(), Some(i64::MAX as f64));
}

#[test]
fn test_result_json() {
    let records: Vec<Record> = vec![Some(50), None, Some(-10), Some(100)];
    let (result, _) = aggregate_capturing(Some(&records));
    let json = result.to_json();

    assert_eq!(json["total"], 150);
    assert_eq!(json["count"], 2);
    assert_eq!(json["average"], 75.0);
    assert_eq!(json["skipped_nulls"], 1);
    assert_eq!(json["skipped_invalid"], 1);
    assert_eq!(json["null_or_empty"], false);
}

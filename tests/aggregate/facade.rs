use std::io::Write;

use pagetally::{
    AggregatorSettings, CollectingSink, DiscardSink, Error, InputKind, Notice, PageTally, from_fn,
};

#[test]
fn test_aggregate_text() {
    let tally = PageTally::new();
    let mut sink = CollectingSink::new();
    let result = tally
        .aggregate_text("50, -10, 75, null, 100", &mut sink)
        .unwrap();

    assert_eq!(result.total, 225);
    assert_eq!(result.count, 3);
    assert_eq!(
        sink.messages(),
        vec![
            "Skipping negative page count: -10",
            "Skipping null page count"
        ]
    );
}

#[test]
fn test_aggregate_blank_text_is_empty() {
    let mut sink = CollectingSink::new();
    let result = PageTally::new().aggregate_text("  \n", &mut sink).unwrap();
    assert_eq!(result.input, InputKind::Empty);
    assert_eq!(sink.notices(), &[Notice::NullOrEmptyInput]);
}

#[test]
fn test_aggregate_text_rejects_garbage() {
    let err = PageTally::new()
        .aggregate_text("10, ten", DiscardSink)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidRecord { position: 2, .. }));
}

#[test]
fn test_quiet_settings() {
    let tally = PageTally::with_settings(AggregatorSettings::new().with_notices(false));
    let mut sink = CollectingSink::new();
    let result = tally.aggregate_with(Some(&[Some(5), None, Some(-1)]), &mut sink);

    assert_eq!(result.total, 5);
    assert_eq!(result.skipped(), 2);
    assert!(sink.is_empty());
}

#[test]
fn test_label_from_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "record_label = \"chapter length\"").unwrap();
    let settings = AggregatorSettings::from_path(file.path()).unwrap();
    let tally = PageTally::with_settings(settings);

    let mut sink = tally.collecting_sink();
    tally.aggregate_with(Some(&[None, Some(-3)]), &mut sink);

    assert_eq!(
        sink.messages(),
        vec![
            "Skipping null chapter length",
            "Skipping negative chapter length: -3"
        ]
    );
}

#[test]
fn test_closure_sink_renders_its_own_label() {
    let tally = PageTally::with_settings(AggregatorSettings::new().with_record_label("word count"));
    let mut rendered = Vec::new();
    tally.aggregate_with(
        Some(&[Some(4), None]),
        from_fn(|n: &Notice| rendered.push(n.message("line"))),
    );
    assert_eq!(rendered, vec!["Skipping null line"]);
}

#[test]
fn test_tracing_path_returns_same_numbers() {
    let tally = PageTally::new();
    let records = [Some(50), Some(75), Some(100), Some(25), Some(80)];
    let traced = tally.aggregate(Some(&records));
    let captured = tally.aggregate_with(Some(&records), DiscardSink);
    assert_eq!(traced, captured);
    assert_eq!(traced.average(), Some(66.0));
}

#[test]
fn test_absent_through_facade() {
    let result = PageTally::new().aggregate(None);
    assert_eq!(result.input, InputKind::Absent);
    assert_eq!(result.total, 0);
}

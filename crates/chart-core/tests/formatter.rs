// File: crates/chart-core/tests/formatter.rs
// Purpose: Display records map 1:1 onto records, in order, with deterministic labels.

use chart_core::{
    display_records, Dataset, FieldValue, Record, TimeFormatter, FORMATTED_TIME_KEY, INVALID_DATE,
};

fn dataset() -> Dataset {
    Dataset::from_json_slice(
        br#"[
            {"TimeStamp": "2024-01-01T10:00:00Z", "Speed": 10.0},
            {"TimeStamp": 1704103201000, "Speed": 11.5},
            {"TimeStamp": "not a date", "Speed": 12.0},
            {"Speed": 13.0},
            {"TimeStamp": "2024-01-01T12:00:03+02:00", "Speed": null}
        ]"#,
    )
    .expect("valid dataset")
}

#[test]
fn order_and_fields_preserved() {
    let ds = dataset();
    let rows: Vec<_> = display_records(&ds, "TimeStamp", TimeFormatter::utc()).collect();
    assert_eq!(rows.len(), ds.len());
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.index, i);
        assert!(std::ptr::eq(row.record, ds.get(i).unwrap()));
    }
    let labels: Vec<&str> = rows.iter().map(|r| r.time_label.as_str()).collect();
    assert_eq!(labels, ["10:00:00", "10:00:01", INVALID_DATE, INVALID_DATE, "10:00:03"]);
}

#[test]
fn labels_are_deterministic_for_a_fixed_offset() {
    let ds = dataset();
    let f = TimeFormatter::with_offset_str("+05:30").unwrap();
    let a: Vec<String> = display_records(&ds, "TimeStamp", f).map(|r| r.time_label).collect();
    let b: Vec<String> = display_records(&ds, "TimeStamp", f).map(|r| r.time_label).collect();
    assert_eq!(a, b);
    assert_eq!(a[0], "15:30:00");
}

#[test]
fn display_record_exposes_formatted_time_field() {
    let ds = Dataset::new(vec![Record::new().with("TimeStamp", "2024-01-01T10:00:00Z").with("Speed", 42.0)]);
    let row = display_records(&ds, "TimeStamp", TimeFormatter::utc()).next().unwrap();
    assert_eq!(row.get(FORMATTED_TIME_KEY), Some(FieldValue::Text("10:00:00".into())));
    assert_eq!(row.get("Speed"), Some(FieldValue::Number(42.0)));

    let owned = row.to_record();
    assert_eq!(owned.len(), 3);
    assert_eq!(owned.get(FORMATTED_TIME_KEY).and_then(FieldValue::as_str), Some("10:00:00"));
    // the source record is untouched
    assert!(!ds.get(0).unwrap().contains(FORMATTED_TIME_KEY));
}

#[test]
fn empty_dataset_yields_nothing() {
    let ds = Dataset::empty();
    assert_eq!(display_records(&ds, "TimeStamp", TimeFormatter::utc()).len(), 0);
}

//! Property-Based Tests for cosmicscan-planning
//!
//! Uses proptest for table invariants:
//! - Equal column lengths are accepted, any mismatch is rejected
//! - Export header and record count follow the declaration
//! - Score ranges are enforced
//! - Every shipped score column stays within its range

use proptest::prelude::*;

use cosmicscan_planning::{PlanningError, ScoreRange, Table, TableBuilder, datasets};

/// Strategy for short cell text, including delimiter, quote and Hangul
fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 ]{0,8}",
        "[가-힣]{1,6}",
        Just("a,b".to_string()),
        Just("\"quoted\"".to_string()),
        Just("±15%".to_string()),
    ]
}

fn build(names: &[String], rows: &[Vec<String>], scores: &[i64]) -> Result<Table, PlanningError> {
    let mut builder = TableBuilder::new("generated", "generated.csv");
    for (i, name) in names.iter().enumerate() {
        builder = builder.text(name, rows.iter().map(|row| row[i].clone()));
    }
    builder.scored("점수", ScoreRange::SCORE, scores.iter().copied()).build()
}

proptest! {
    /// Equal-length columns: header, row count and CSV records follow the declaration
    #[test]
    fn consistent_table_exports_declared_shape(
        width in 1usize..5,
        height in 0usize..12,
        seed in prop::collection::vec(cell_strategy(), 60),
        scores in prop::collection::vec(1i64..=10, 12),
    ) {
        let names: Vec<String> = (0..width).map(|i| format!("열{i}")).collect();
        let rows: Vec<Vec<String>> = (0..height)
            .map(|r| (0..width).map(|c| seed[(r * width + c) % seed.len()].clone()).collect())
            .collect();
        let table = build(&names, &rows, &scores[..height]).unwrap();

        prop_assert_eq!(table.row_count(), height);
        let mut expected_headers: Vec<&str> = names.iter().map(String::as_str).collect();
        expected_headers.push("점수");
        prop_assert_eq!(table.headers(), expected_headers.clone());

        let bytes = table.to_csv_bytes().unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        prop_assert_eq!(headers, expected_headers);
        let records: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        prop_assert_eq!(records, table.rows());

        // byte-identical on repeat
        prop_assert_eq!(table.to_csv_bytes().unwrap(), bytes);
    }

    /// Any column whose length differs from the first is rejected
    #[test]
    fn mismatched_lengths_rejected(a in 0usize..10, b in 0usize..10) {
        prop_assume!(a != b);
        let result = TableBuilder::new("t", "t.csv")
            .integers("a", vec![1; a])
            .integers("b", vec![1; b])
            .build();
        let is_mismatch = matches!(
            result,
            Err(PlanningError::ColumnLengthMismatch { expected, found, .. })
                if expected == a && found == b
        );
        prop_assert!(is_mismatch);
    }

    /// Score columns accept exactly the values inside their range
    #[test]
    fn score_range_enforced(value in -20i64..130) {
        let result = TableBuilder::new("t", "t.csv")
            .scored("p", ScoreRange::PERCENT, [value])
            .build();
        prop_assert_eq!(result.is_ok(), (0..=100).contains(&value));
    }
}

#[test]
fn shipped_score_columns_within_range() {
    for (report, table) in datasets::all_tables().unwrap() {
        for column in table.columns() {
            if let (Some(range), Some(values)) = (column.range, column.integers()) {
                assert!(
                    values.iter().all(|v| range.contains(*v)),
                    "{report}/{}/{} out of range",
                    table.file_name(),
                    column.name
                );
            }
        }
    }
}

#[test]
fn shipped_tables_have_consistent_lengths() {
    for (_, table) in datasets::all_tables().unwrap() {
        let rows = table.row_count();
        assert!(rows > 0, "{} is empty", table.file_name());
        assert!(table.columns().iter().all(|c| c.len() == rows));
    }
}

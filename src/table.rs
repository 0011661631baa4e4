//! Table assembly and delimited text export
//!
//! A [`Table`] is an ordered set of named columns that all hold the same
//! number of values. Tables are declared from literals through
//! [`TableBuilder`], validated once, and written as UTF-8 CSV with a header
//! row and one record per row index.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PlanningError, Result};

/// Inclusive bounds an integer score column must stay within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    pub min: i64,
    pub max: i64,
}

impl ScoreRange {
    /// Priority, difficulty and importance scores
    pub const SCORE: Self = Self::new(1, 10);
    /// Percentages (confidence, accuracy contribution, stability)
    pub const PERCENT: Self = Self::new(0, 100);
    /// Counts, durations and sizes
    pub const POSITIVE: Self = Self::new(1, i64::MAX);

    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Values of a single column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValues {
    Integers(Vec<i64>),
    Text(Vec<String>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Integers(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at `row` rendered as text; integers in plain decimal
    pub fn render(&self, row: usize) -> Option<String> {
        match self {
            Self::Integers(values) => values.get(row).map(|v| v.to_string()),
            Self::Text(values) => values.get(row).cloned(),
        }
    }
}

/// Named column, optionally constrained to a score range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: ColumnValues,
    pub range: Option<ScoreRange>,
}

impl Column {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Integer values, if this is a numeric column
    pub fn integers(&self) -> Option<&[i64]> {
        match &self.values {
            ColumnValues::Integers(values) => Some(values),
            ColumnValues::Text(_) => None,
        }
    }
}

/// A validated table bound to its output file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    title: String,
    file_name: String,
    columns: Vec<Column>,
}

impl Table {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in declared order
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Common length of every column
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// One rendered record per row index
    pub fn rows(&self) -> Vec<Vec<String>> {
        (0..self.row_count())
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| c.values.render(row).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Check the structural rules every table must satisfy
    ///
    /// A table needs at least one column, unique column names, equal column
    /// lengths, and score columns within their declared ranges.
    pub fn validate(&self) -> Result<()> {
        let Some(first) = self.columns.first() else {
            return Err(PlanningError::EmptyTable {
                table: self.file_name.clone(),
            });
        };
        let expected = first.len();

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(PlanningError::DuplicateColumn {
                    table: self.file_name.clone(),
                    column: column.name.clone(),
                });
            }

            if column.len() != expected {
                return Err(PlanningError::ColumnLengthMismatch {
                    table: self.file_name.clone(),
                    column: column.name.clone(),
                    expected,
                    found: column.len(),
                });
            }

            if let (Some(range), Some(values)) = (column.range, column.integers()) {
                if let Some((row, &value)) =
                    values.iter().enumerate().find(|(_, v)| !range.contains(**v))
                {
                    return Err(PlanningError::ValueOutOfRange {
                        table: self.file_name.clone(),
                        column: column.name.clone(),
                        row,
                        value,
                        min: range.min,
                        max: range.max,
                    });
                }
            }
        }

        Ok(())
    }

    /// Serialize as CSV: header row, one record per row, `\n` terminated,
    /// fields quoted only when they contain a delimiter, quote or line break.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .quote_style(QuoteStyle::Necessary)
            .from_writer(Vec::new());

        writer.write_record(self.headers())?;
        for row in self.rows() {
            writer.write_record(&row)?;
        }

        writer
            .into_inner()
            .map_err(|e| PlanningError::Io(e.into_error()))
    }

    /// Write the table into `dir` under its file name
    pub fn write_csv(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        let bytes = self.to_csv_bytes()?;
        fs::write(&path, &bytes)?;
        debug!(
            "Wrote {} ({} rows, {} bytes)",
            path.display(),
            self.row_count(),
            bytes.len()
        );
        Ok(path)
    }
}

/// Declares a table column by column from literal values
#[derive(Debug)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub fn new(title: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            table: Table {
                title: title.into(),
                file_name: file_name.into(),
                columns: Vec::new(),
            },
        }
    }

    /// Unconstrained integer column
    pub fn integers(self, name: &str, values: impl IntoIterator<Item = i64>) -> Self {
        self.push(name, ColumnValues::Integers(values.into_iter().collect()), None)
    }

    /// Integer column whose values must lie within `range`
    pub fn scored(
        self,
        name: &str,
        range: ScoreRange,
        values: impl IntoIterator<Item = i64>,
    ) -> Self {
        self.push(
            name,
            ColumnValues::Integers(values.into_iter().collect()),
            Some(range),
        )
    }

    /// Short category or description strings
    pub fn text<S: Into<String>>(self, name: &str, values: impl IntoIterator<Item = S>) -> Self {
        self.push(
            name,
            ColumnValues::Text(values.into_iter().map(Into::into).collect()),
            None,
        )
    }

    fn push(mut self, name: &str, values: ColumnValues, range: Option<ScoreRange>) -> Self {
        self.table.columns.push(Column {
            name: name.to_string(),
            values,
            range,
        });
        self
    }

    /// Validate and return the finished table
    pub fn build(self) -> Result<Table> {
        self.table.validate()?;
        Ok(self.table)
    }
}

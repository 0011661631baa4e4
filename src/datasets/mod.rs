//! Literal planning tables, grouped by report
//!
//! Every report is a fixed sequence of tables. Building a report validates
//! each of its tables; nothing here reads input or keeps state.

pub mod product_analysis;
pub mod visual_recognition;

use strum::IntoEnumIterator;

use crate::error::{PlanningError, Result};
use crate::table::Table;
use crate::types::ReportKind;

/// Build every table of `report`, in export order
pub fn report_tables(report: ReportKind) -> Result<Vec<Table>> {
    match report {
        ReportKind::ProductAnalysis => product_analysis::tables(),
        ReportKind::VisualRecognition => visual_recognition::tables(),
    }
}

/// Build every table of every report
pub fn all_tables() -> Result<Vec<(ReportKind, Table)>> {
    let mut tables = Vec::new();
    for report in ReportKind::iter() {
        tables.extend(report_tables(report)?.into_iter().map(|t| (report, t)));
    }
    Ok(tables)
}

/// Look up a table by its output file name
pub fn find_table(file_name: &str) -> Result<Table> {
    all_tables()?
        .into_iter()
        .map(|(_, table)| table)
        .find(|table| table.file_name() == file_name)
        .ok_or_else(|| PlanningError::not_found(format!("table '{file_name}'")))
}

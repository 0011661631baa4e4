//! Writes tables and charts into the output directory
//!
//! Every operation creates the output directory if needed, writes its files
//! in a fixed order and returns the written paths. Failures propagate as
//! they occur; nothing is retried and earlier files are left in place.

use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::chart::{ChartSize, catalog};
use crate::datasets;
use crate::error::Result;
use crate::types::{ChartKind, ImageFormat, ReportKind};

/// Files written by one export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub tables: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
}

impl ExportSummary {
    pub fn total(&self) -> usize {
        self.tables.len() + self.images.len()
    }
}

#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    size: ChartSize,
    formats: Vec<ImageFormat>,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>, size: ChartSize, formats: Vec<ImageFormat>) -> Self {
        Self {
            output_dir: output_dir.into(),
            size,
            formats,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn ensure_output_dir(&self) -> Result<()> {
        if !self.output_dir.is_dir() {
            debug!("Creating output directory {}", self.output_dir.display());
            fs::create_dir_all(&self.output_dir)?;
        }
        Ok(())
    }

    /// Write every table of `report` as CSV
    pub fn export_report(&self, report: ReportKind) -> Result<Vec<PathBuf>> {
        self.ensure_output_dir()?;
        info!("=== {} ===", report.title());

        let mut written = Vec::new();
        for table in datasets::report_tables(report)? {
            let path = table.write_csv(&self.output_dir)?;
            info!("{} 생성 ({})", table.file_name(), table.title());
            written.push(path);
        }

        info!("{report}: {} CSV files written", written.len());
        Ok(written)
    }

    /// Render `kind` once per configured format
    pub fn render_chart(&self, kind: ChartKind) -> Result<Vec<PathBuf>> {
        self.ensure_output_dir()?;
        let chart = catalog::chart(kind)?;

        let mut written = Vec::new();
        for format in &self.formats {
            let path = self
                .output_dir
                .join(format!("{}.{}", kind.file_stem(), format.extension()));
            chart.render(&path, *format, self.size)?;
            info!("Chart '{}' saved as {}", chart.title(), path.display());
            written.push(path);
        }

        Ok(written)
    }

    /// Every report, then every chart
    pub fn export_all(&self) -> Result<ExportSummary> {
        let mut summary = ExportSummary::default();

        for report in ReportKind::iter() {
            summary.tables.extend(self.export_report(report)?);
        }
        for kind in ChartKind::iter() {
            summary.images.extend(self.render_chart(kind)?);
        }

        info!(
            "Export complete: {} tables, {} images in {}",
            summary.tables.len(),
            summary.images.len(),
            self.output_dir.display()
        );
        Ok(summary)
    }
}

/// Validate every table and chart without writing anything
///
/// Returns the number of tables and charts checked.
pub fn check_all() -> Result<(usize, usize)> {
    let tables = datasets::all_tables()?;
    let mut charts = 0;
    for kind in ChartKind::iter() {
        catalog::chart(kind)?.validate()?;
        charts += 1;
    }
    Ok((tables.len(), charts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_report_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        let exporter = Exporter::new(&out, ChartSize::default(), vec![ImageFormat::Svg]);

        let written = exporter.export_report(ReportKind::ProductAnalysis).unwrap();
        assert_eq!(written.len(), 4);
        assert!(written.iter().all(|p| p.starts_with(&out) && p.is_file()));
    }

    #[test]
    fn test_check_all_counts() {
        assert_eq!(check_all().unwrap(), (8, 2));
    }
}

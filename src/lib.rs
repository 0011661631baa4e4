//! CosmicScan planning library
//!
//! Builds the product-planning tables and charts of the CosmicScan research
//! workspace from literal data and writes them as CSV, PNG and SVG files.

pub mod chart;
pub mod cli;
pub mod config;
pub mod datasets;
pub mod error;
pub mod export;
pub mod table;
pub mod types;

// Re-export main types for convenience
pub use chart::{BarChart, Chart, ChartSize, FlowDiagram};
pub use config::OutputConfig;
pub use error::{PlanningError, Result};
pub use export::{ExportSummary, Exporter, check_all};
pub use table::{Column, ColumnValues, ScoreRange, Table, TableBuilder};
pub use types::{ChartKind, ImageFormat, NodeShape, ReportKind};

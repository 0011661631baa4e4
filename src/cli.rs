use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{ChartKind, ReportKind};

/// CosmicScan planning - regenerate the product-planning tables and charts
#[derive(Parser, Debug)]
#[command(name = "cosmicscan-plan")]
#[command(about = "Writes the CosmicScan planning tables (CSV) and charts (PNG/SVG)")]
#[command(version)]
pub struct Cli {
    /// JSON file with output settings (directory, chart size, formats)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to write into; overrides the configuration file
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Write every table and render every chart (default)
    All,
    /// Write the CSV tables of one report, or of all reports
    Tables {
        /// Report to export (product-analysis, visual-recognition)
        report: Option<ReportKind>,
    },
    /// Render one chart, or all charts, in every configured format
    Charts {
        /// Chart to render (feature-importance, user-journey)
        chart: Option<ChartKind>,
    },
    /// List reports, tables and charts with their output file names
    List,
    /// Print one table as CSV on stdout
    Show {
        /// Output file name of the table (e.g. price_comparison_sources_utf8.csv)
        file: String,
    },
    /// Validate every table and chart without writing files
    Check,
    /// Write the default output configuration to a JSON file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["cosmicscan-plan"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output_dir.is_none());
    }

    #[test]
    fn test_tables_with_report() {
        let cli = Cli::try_parse_from(["cosmicscan-plan", "tables", "visual-recognition"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Tables {
                report: Some(ReportKind::VisualRecognition)
            })
        );
    }

    #[test]
    fn test_global_output_dir_after_subcommand() {
        let cli =
            Cli::try_parse_from(["cosmicscan-plan", "charts", "user-journey", "-o", "out"]).unwrap();
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(
            cli.command,
            Some(Commands::Charts {
                chart: Some(ChartKind::UserJourney)
            })
        );
    }

    #[test]
    fn test_show_takes_file_name() {
        let cli = Cli::try_parse_from([
            "cosmicscan-plan",
            "show",
            "minimal_info_accuracy_utf8.csv",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                file: "minimal_info_accuracy_utf8.csv".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_chart_rejected() {
        assert!(Cli::try_parse_from(["cosmicscan-plan", "charts", "pie"]).is_err());
    }
}

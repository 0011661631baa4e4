//! CosmicScan planning - Main entry point
//!
//! Regenerates the planning tables and charts into the configured directory.

use anyhow::{Context, Result};
use strum::IntoEnumIterator;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use cosmicscan_planning::cli::{Cli, Commands};
use cosmicscan_planning::{
    ChartKind, Exporter, OutputConfig, ReportKind, chart::catalog, check_all, datasets,
};

/// Initialize the logger with appropriate settings
fn init_logger() {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run(Cli::parse_args()) {
        error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    debug!("Resolved output configuration: {:?}", config);

    let exporter = Exporter::new(&config.output_dir, config.chart_size(), config.formats.clone());

    match cli.command.unwrap_or(Commands::All) {
        Commands::All => {
            let summary = exporter.export_all()?;
            println!(
                "✓ {} CSV files and {} images written to {}",
                summary.tables.len(),
                summary.images.len(),
                exporter.output_dir().display()
            );
        }
        Commands::Tables { report } => {
            let reports: Vec<ReportKind> = match report {
                Some(report) => vec![report],
                None => ReportKind::iter().collect(),
            };
            for report in reports {
                for path in exporter.export_report(report)? {
                    println!("✅ {}", path.display());
                }
            }
        }
        Commands::Charts { chart } => {
            let charts: Vec<ChartKind> = match chart {
                Some(chart) => vec![chart],
                None => ChartKind::iter().collect(),
            };
            for chart in charts {
                let paths = exporter.render_chart(chart)?;
                let names: Vec<_> = paths.iter().map(|p| p.display().to_string()).collect();
                println!("Chart saved as {}", names.join(" and "));
            }
        }
        Commands::List => print_catalog()?,
        Commands::Show { file } => {
            let table = datasets::find_table(&file)?;
            let csv = String::from_utf8(table.to_csv_bytes()?)
                .context("CSV output is not valid UTF-8")?;
            print!("{csv}");
        }
        Commands::Check => {
            let (tables, charts) = check_all()?;
            println!("✓ {tables} tables and {charts} charts are valid");
        }
        Commands::InitConfig { path } => {
            OutputConfig::default().save_to_file(&path)?;
            info!("Default configuration written to {:?}", path);
            println!("✓ Configuration written to {}", path.display());
        }
    }

    Ok(())
}

/// Load the configuration file if given, then apply command-line overrides
fn resolve_config(cli: &Cli) -> Result<OutputConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading output configuration from {:?}", path);
            OutputConfig::load_from_file(path)?
        }
        None => OutputConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }

    config.validate().context("Invalid output configuration")?;
    Ok(config)
}

fn print_catalog() -> Result<()> {
    for report in ReportKind::iter() {
        println!("{report}: {}", report.title());
        for table in datasets::report_tables(report)? {
            println!(
                "  {:<45} {:>3} rows  {}",
                table.file_name(),
                table.row_count(),
                table.title()
            );
        }
    }
    for kind in ChartKind::iter() {
        let chart = catalog::chart(kind)?;
        println!("{kind}: {} ({}.*)", chart.title(), kind.file_stem());
    }
    Ok(())
}

use clap::Parser;
use log::info;
use std::path::PathBuf;

use health_analysis::analysis::{AbnormalCounts, VitalStatistics};
use health_analysis::config::Config;
use health_analysis::dataset;
use health_analysis::error::HealthResult;
use health_analysis::output;
use health_analysis::report;

#[derive(Parser)]
#[command(name = "health_analysis")]
#[command(about = "Health sensor data analysis program")]
struct Cli {
    /// Configuration file path (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input CSV file of sensor readings
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report destination path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> HealthResult<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut config = match &cli.config {
        Some(path) => {
            let config = Config::from_file(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };
    if let Some(input) = cli.input {
        config.data_file = input;
    }
    if let Some(output) = cli.output {
        config.report_file = output;
    }

    let readings = dataset::load_dataset(&config.data_file)?;
    info!("Analyzing {} readings from {:?}", readings.len(), config.data_file);

    let stats = VitalStatistics::from_readings(&readings);
    let abnormal = AbnormalCounts::from_readings(&readings);
    let report = report::generate_report(&stats, &abnormal, readings.len());

    output::save_report(&report, &config.report_file)?;

    println!(
        "✓ Analysis complete. Report saved to: {}",
        config.report_file.display()
    );
    Ok(())
}

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use std::path::PathBuf;

use health_analysis::dataset::Reading;

#[derive(Parser)]
#[command(name = "data_generator")]
#[command(about = "Generate a synthetic health sensor CSV for the analyzer")]
struct Cli {
    /// Output CSV path
    #[arg(short, long, default_value = "health_data.csv")]
    output: PathBuf,

    /// Number of readings to generate
    #[arg(short, long, default_value = "50")]
    rows: usize,

    /// Number of distinct patients to cycle through
    #[arg(short, long, default_value = "10")]
    patients: usize,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.patients == 0 {
        anyhow::bail!("--patients must be at least 1");
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let heart_rate = Normal::new(76.0, 12.0)?;
    let systolic = Normal::new(121.0, 14.0)?;
    let diastolic = Normal::new(79.0, 9.0)?;
    let temperature = Normal::new(98.6, 0.6)?;
    let glucose = Normal::new(104.0, 22.0)?;

    let start = NaiveDateTime::parse_from_str("2024-01-01T00:00:00", "%Y-%m-%dT%H:%M:%S")?;

    let mut writer = csv::Writer::from_path(&cli.output)?;
    for i in 0..cli.rows {
        let patient = (i % cli.patients) + 1;
        let timestamp = start + chrono::Duration::minutes(5 * i as i64);

        let reading = Reading {
            patient_id: format!("P{:05}", patient),
            timestamp: timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            heart_rate: sample_vital(&mut rng, heart_rate, 40, 180),
            blood_pressure_systolic: sample_vital(&mut rng, systolic, 85, 210),
            blood_pressure_diastolic: sample_vital(&mut rng, diastolic, 50, 130),
            temperature: (rng.sample::<f64, _>(temperature).clamp(95.0, 104.0) * 10.0).round() / 10.0,
            glucose_level: sample_vital(&mut rng, glucose, 55, 250),
            sensor_id: format!("S{:03}", patient),
        };
        writer.serialize(&reading)?;
    }
    writer.flush()?;

    println!(
        "Sample data written to {} ({} readings)",
        cli.output.display(),
        cli.rows
    );
    Ok(())
}

fn sample_vital(rng: &mut StdRng, dist: Normal<f64>, low: i32, high: i32) -> i32 {
    (rng.sample(dist).round() as i32).clamp(low, high)
}

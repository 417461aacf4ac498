use serde::{Deserialize, Serialize};
use std::path::Path;
use log::info;
use crate::error::HealthResult;

/// One row of sensor data for one patient at one timestamp.
///
/// Field order matches the input file's column order; `timestamp` is kept as
/// text and never parsed into a date type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub patient_id: String,
    pub timestamp: String,
    pub heart_rate: i32,
    pub blood_pressure_systolic: i32,
    pub blood_pressure_diastolic: i32,
    pub temperature: f64,
    pub glucose_level: i32,
    pub sensor_id: String,
}

/// Load a comma-delimited sensor file into memory.
///
/// The header row is consumed unconditionally and its names are not checked;
/// data rows are deserialized positionally against the `Reading` schema, in
/// file order. A non-numeric value in a numeric column or a row with the
/// wrong field count aborts the load.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> HealthResult<Vec<Reading>> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let mut readings = Vec::new();
    for record in reader.records() {
        let reading: Reading = record?.deserialize(None)?;
        readings.push(reading);
    }

    info!("Loaded {} readings", readings.len());
    Ok(readings)
}

//! Health sensor data analysis pipeline.
//!
//! Loads a comma-delimited file of per-patient sensor readings, computes
//! average vitals and abnormal-reading counts against fixed clinical
//! thresholds, renders a text report, and saves it to disk.

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod output;
pub mod report;

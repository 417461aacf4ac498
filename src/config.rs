use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{HealthError, HealthResult};

/// Run configuration: where to read sensor data and where to save the report.
///
/// Defaults reproduce the standard layout (`health_data.csv` in the working
/// directory, report under `output/`); either path can be overridden from a
/// JSON config file or the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("health_data.csv")
}

fn default_report_file() -> PathBuf {
    PathBuf::from("output/analysis_report.txt")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            report_file: default_report_file(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> HealthResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HealthResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(HealthError::InvalidConfig(
                "data_file must not be empty".to_string()
            ));
        }

        if self.report_file.as_os_str().is_empty() {
            return Err(HealthError::InvalidConfig(
                "report_file must not be empty".to_string()
            ));
        }

        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use crate::dataset::Reading;

/// Average values of the monitored vitals across a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalStatistics {
    pub avg_heart_rate: f64,
    pub avg_systolic_bp: f64,
    pub avg_glucose: f64,
}

impl VitalStatistics {
    /// Arithmetic means over all readings. An empty dataset yields NaN for
    /// each average; callers formatting the result must tolerate that.
    pub fn from_readings(readings: &[Reading]) -> Self {
        Self {
            avg_heart_rate: mean(readings.iter().map(|r| f64::from(r.heart_rate))),
            avg_systolic_bp: mean(readings.iter().map(|r| f64::from(r.blood_pressure_systolic))),
            avg_glucose: mean(readings.iter().map(|r| f64::from(r.glucose_level))),
        }
    }
}

fn mean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    sum / f64::from(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reading(heart_rate: i32, systolic: i32, glucose: i32) -> Reading {
        Reading {
            patient_id: "P00001".to_string(),
            timestamp: "2024-01-01T00:00:00".to_string(),
            heart_rate,
            blood_pressure_systolic: systolic,
            blood_pressure_diastolic: 80,
            temperature: 98.6,
            glucose_level: glucose,
            sensor_id: "S001".to_string(),
        }
    }

    #[test]
    fn test_averages() {
        let readings = vec![
            reading(80, 120, 100),
            reading(95, 135, 120),
            reading(70, 110, 90),
        ];

        let stats = VitalStatistics::from_readings(&readings);
        assert_relative_eq!(stats.avg_heart_rate, 245.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(stats.avg_systolic_bp, 365.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(stats.avg_glucose, 310.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_single_reading_is_exact() {
        let stats = VitalStatistics::from_readings(&[reading(72, 118, 95)]);
        assert_relative_eq!(stats.avg_heart_rate, 72.0, epsilon = 1e-6);
        assert_relative_eq!(stats.avg_systolic_bp, 118.0, epsilon = 1e-6);
        assert_relative_eq!(stats.avg_glucose, 95.0, epsilon = 1e-6);
    }

    #[test]
    fn test_empty_dataset_propagates_nan() {
        let stats = VitalStatistics::from_readings(&[]);
        assert!(stats.avg_heart_rate.is_nan());
        assert!(stats.avg_systolic_bp.is_nan());
        assert!(stats.avg_glucose.is_nan());
    }
}

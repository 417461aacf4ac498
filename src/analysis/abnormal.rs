use serde::{Deserialize, Serialize};
use crate::dataset::Reading;

/// Clinical thresholds; a reading is abnormal when it is strictly above one.
pub const HIGH_HEART_RATE_BPM: i32 = 90;
pub const HIGH_SYSTOLIC_BP_MMHG: i32 = 130;
pub const HIGH_GLUCOSE_MG_DL: i32 = 110;

/// Number of readings above each threshold, counted independently; one
/// reading may contribute to several counters or to none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbnormalCounts {
    pub high_heart_rate: usize,
    pub high_blood_pressure: usize,
    pub high_glucose: usize,
}

impl AbnormalCounts {
    pub fn from_readings(readings: &[Reading]) -> Self {
        Self {
            high_heart_rate: readings
                .iter()
                .filter(|r| r.heart_rate > HIGH_HEART_RATE_BPM)
                .count(),
            high_blood_pressure: readings
                .iter()
                .filter(|r| r.blood_pressure_systolic > HIGH_SYSTOLIC_BP_MMHG)
                .count(),
            high_glucose: readings
                .iter()
                .filter(|r| r.glucose_level > HIGH_GLUCOSE_MG_DL)
                .count(),
        }
    }
}

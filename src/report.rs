use crate::analysis::{
    AbnormalCounts, VitalStatistics, HIGH_GLUCOSE_MG_DL, HIGH_HEART_RATE_BPM,
    HIGH_SYSTOLIC_BP_MMHG,
};

/// Render the analysis report.
///
/// Layout and wording are fixed; the output carries no trailing newline.
/// Averages are printed as-is, so a NaN average from an empty dataset shows
/// up literally, while percentages fall back to 0 when there are no readings.
pub fn generate_report(
    stats: &VitalStatistics,
    abnormal: &AbnormalCounts,
    total_readings: usize,
) -> String {
    let hr_pct = percentage(abnormal.high_heart_rate, total_readings);
    let bp_pct = percentage(abnormal.high_blood_pressure, total_readings);
    let glucose_pct = percentage(abnormal.high_glucose, total_readings);

    format!(
        r#"Health Sensor Data Analysis Report
==================================

Dataset Summary:
- Total readings: {total}

Average Measurements:
- Heart Rate: {avg_hr:.1} bpm
- Systolic BP: {avg_bp:.1} mmHg
- Glucose Level: {avg_glucose:.1} mg/dL

Abnormal Readings:
- High Heart Rate (>{hr_limit}): {hr_count} readings ({hr_pct:.1}%)
- High Blood Pressure (>{bp_limit}): {bp_count} readings ({bp_pct:.1}%)
- High Glucose (>{glucose_limit}): {glucose_count} readings ({glucose_pct:.1}%)"#,
        total = total_readings,
        avg_hr = stats.avg_heart_rate,
        avg_bp = stats.avg_systolic_bp,
        avg_glucose = stats.avg_glucose,
        hr_limit = HIGH_HEART_RATE_BPM,
        hr_count = abnormal.high_heart_rate,
        bp_limit = HIGH_SYSTOLIC_BP_MMHG,
        bp_count = abnormal.high_blood_pressure,
        glucose_limit = HIGH_GLUCOSE_MG_DL,
        glucose_count = abnormal.high_glucose,
    )
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(avg_hr: f64, avg_bp: f64, avg_glucose: f64) -> VitalStatistics {
        VitalStatistics {
            avg_heart_rate: avg_hr,
            avg_systolic_bp: avg_bp,
            avg_glucose: avg_glucose,
        }
    }

    fn counts(hr: usize, bp: usize, glucose: usize) -> AbnormalCounts {
        AbnormalCounts {
            high_heart_rate: hr,
            high_blood_pressure: bp,
            high_glucose: glucose,
        }
    }

    #[test]
    fn test_report_layout_is_fixed() {
        let report = generate_report(&stats(80.0, 120.0, 100.0), &counts(1, 2, 3), 10);

        let expected = "\
Health Sensor Data Analysis Report
==================================

Dataset Summary:
- Total readings: 10

Average Measurements:
- Heart Rate: 80.0 bpm
- Systolic BP: 120.0 mmHg
- Glucose Level: 100.0 mg/dL

Abnormal Readings:
- High Heart Rate (>90): 1 readings (10.0%)
- High Blood Pressure (>130): 2 readings (20.0%)
- High Glucose (>110): 3 readings (30.0%)";

        assert_eq!(report, expected);
        assert!(!report.ends_with('\n'));
    }

    #[test]
    fn test_values_rounded_to_one_decimal() {
        let report = generate_report(
            &stats(245.0 / 3.0, 365.0 / 3.0, 310.0 / 3.0),
            &counts(1, 1, 1),
            3,
        );

        assert!(report.contains("- Heart Rate: 81.7 bpm"));
        assert!(report.contains("- Systolic BP: 121.7 mmHg"));
        assert!(report.contains("- Glucose Level: 103.3 mg/dL"));
        assert!(report.contains("- High Heart Rate (>90): 1 readings (33.3%)"));
    }

    #[test]
    fn test_zero_readings_guards_percentages() {
        let report = generate_report(
            &stats(f64::NAN, f64::NAN, f64::NAN),
            &counts(0, 0, 0),
            0,
        );

        assert!(report.contains("- Total readings: 0"));
        assert!(report.contains("- Heart Rate: NaN bpm"));
        assert_eq!(report.matches("(0.0%)").count(), 3);
    }
}

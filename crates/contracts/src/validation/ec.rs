//! Energy-consumption (EC) plausibility checks.
//!
//! Historical electricity usage is entered either as one annual figure or
//! as 24 monthly / 12 bimonthly readings covering two years. The series
//! forms are cross-checked: the two yearly means must not diverge by more
//! than 20%, and the raw readings by more than 50%.

use serde::{Deserialize, Serialize};

/// How the building's historical EC is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcInputMode {
    /// One aggregate annual value; no cross-check possible.
    #[default]
    Direct,
    /// 24 monthly readings, two consecutive years of 12.
    Monthly,
    /// 12 bimonthly readings, two consecutive years of 6.
    Bimonthly,
}

impl EcInputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Monthly => "monthly",
            Self::Bimonthly => "bimonthly",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "direct" => Some(Self::Direct),
            "monthly" => Some(Self::Monthly),
            "bimonthly" => Some(Self::Bimonthly),
            _ => None,
        }
    }

    /// Number of value inputs the mode renders.
    pub fn input_count(&self) -> usize {
        match self {
            Self::Direct => 1,
            Self::Monthly => 24,
            Self::Bimonthly => 12,
        }
    }

    /// Readings per year, the grouping unit of the yearly-mean check.
    fn year_len(&self) -> Option<usize> {
        match self {
            Self::Direct => None,
            Self::Monthly => Some(12),
            Self::Bimonthly => Some(6),
        }
    }
}

/// Minimum min/max ratio of the two yearly means.
const YEARLY_MEAN_RATIO_FLOOR: f64 = 0.8;
/// Minimum min/max ratio of the raw readings.
const RAW_VALUE_RATIO_FLOOR: f64 = 0.5;

pub fn yearly_ratio_message(percent: i64) -> String {
    format!("年平均電費最小值與最大值之比必須大於 80%（目前為{percent}%）")
}

pub fn raw_ratio_message(percent: i64) -> String {
    format!("月電費最小值與最大值之比必須大於 50%。（目前為{percent}%）")
}

/// Run the plausibility checks and collect every applicable message.
/// An empty result means the EC series passes.
pub fn check_ec_values(mode: EcInputMode, values: &[f64]) -> Vec<String> {
    let Some(year_len) = mode.year_len() else {
        return Vec::new();
    };

    let mut messages = Vec::new();

    let yearly_means: Vec<f64> = values
        .chunks(year_len)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.iter().sum::<f64>() / chunk.len() as f64)
        .collect();

    if let Some(ratio) = min_max_ratio(&yearly_means) {
        if ratio < YEARLY_MEAN_RATIO_FLOOR {
            messages.push(yearly_ratio_message(rounded_percent(ratio)));
        }
    }
    if let Some(ratio) = min_max_ratio(values) {
        if ratio < RAW_VALUE_RATIO_FLOOR {
            messages.push(raw_ratio_message(rounded_percent(ratio)));
        }
    }

    messages
}

/// Parse raw EC inputs, skipping blank or non-numeric entries.
pub fn parse_ec_values<S: AsRef<str>>(raw: &[S]) -> Vec<f64> {
    raw.iter()
        .filter_map(|value| value.as_ref().trim().parse().ok())
        .collect()
}

/// min/max over the sequence; `None` when the sequence is empty or its
/// maximum is not positive (no meaningful ratio, treated as passing).
fn min_max_ratio(values: &[f64]) -> Option<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if values.is_empty() || !(max > 0.0) {
        return None;
    }
    Some(min / max)
}

fn rounded_percent(ratio: f64) -> i64 {
    (ratio * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_mode_always_passes() {
        assert!(check_ec_values(EcInputMode::Direct, &[123456.0]).is_empty());
        assert!(check_ec_values(EcInputMode::Direct, &[]).is_empty());
    }

    #[test]
    fn flat_monthly_series_passes() {
        let values = vec![100.0; 24];
        assert!(check_ec_values(EcInputMode::Monthly, &values).is_empty());
    }

    #[test]
    fn diverging_yearly_means_fail_with_the_rounded_percentage() {
        // Yearly means 50 and 100: ratio 0.5, below the 0.8 floor. The raw
        // ratio is also 0.5, exactly at its floor, so only one message.
        let values = [vec![50.0; 12], vec![100.0; 12]].concat();
        let messages = check_ec_values(EcInputMode::Monthly, &values);
        assert_eq!(messages, vec![yearly_ratio_message(50)]);
        assert!(messages[0].contains("50%"));
    }

    #[test]
    fn raw_outlier_fails_the_raw_check_only() {
        // One month at 40% of the others: raw ratio 0.4, yearly means stay
        // within 80%.
        let mut values = vec![100.0; 24];
        values[5] = 40.0;
        let messages = check_ec_values(EcInputMode::Monthly, &values);
        assert_eq!(messages, vec![raw_ratio_message(40)]);
    }

    #[test]
    fn both_checks_can_fail_together() {
        let values = [vec![10.0; 12], vec![100.0; 12]].concat();
        let messages = check_ec_values(EcInputMode::Monthly, &values);
        assert_eq!(
            messages,
            vec![yearly_ratio_message(10), raw_ratio_message(10)]
        );
    }

    #[test]
    fn flat_bimonthly_series_passes() {
        let values = vec![250.0; 12];
        assert!(check_ec_values(EcInputMode::Bimonthly, &values).is_empty());
    }

    #[test]
    fn bimonthly_groups_by_six() {
        // First year mean 60, second 100: ratio 0.6 fails the yearly check;
        // raw ratio 0.6 passes its 0.5 floor.
        let values = [vec![60.0; 6], vec![100.0; 6]].concat();
        let messages = check_ec_values(EcInputMode::Bimonthly, &values);
        assert_eq!(messages, vec![yearly_ratio_message(60)]);
    }

    #[test]
    fn all_zero_series_has_no_ratio_and_passes() {
        let values = vec![0.0; 24];
        assert!(check_ec_values(EcInputMode::Monthly, &values).is_empty());
    }

    #[test]
    fn parse_skips_blank_and_garbage_entries() {
        let raw = ["100", "", "abc", " 250.5 "];
        assert_eq!(parse_ec_values(&raw), vec![100.0, 250.5]);
    }

    #[test]
    fn mode_round_trips_through_codes() {
        for mode in [
            EcInputMode::Direct,
            EcInputMode::Monthly,
            EcInputMode::Bimonthly,
        ] {
            assert_eq!(EcInputMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(EcInputMode::from_str("weekly"), None);
    }
}

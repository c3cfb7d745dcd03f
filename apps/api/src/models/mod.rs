pub mod career;
pub mod gap;
pub mod job;
pub mod market;
pub mod profile;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use career::{
    Certification, CertificationRoadmap, CareerRecommendations, CurrentSkills, IndustryInsights,
    JobRecommendations, PrioritySkill, SalaryProjection, SkillsAnalysis,
};
pub use gap::{GapAnalysis, Level, Recommendation, SkillGap};
pub use job::{JobMarketData, JobMarketSummary, JobPosting, RecommendedJob};
pub use market::{MarketInsights, MarketSnapshot, SalaryTrends};
pub use profile::{CareerProfile, ExperienceLevel};

/// Where a response payload came from. Fallback payloads drive the UI's
/// "Demo mode" label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Fallback,
}

/// A payload tagged with its [`DataSource`]. Serializes as the payload's
/// own fields plus `source`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    #[serde(flatten)]
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            source: DataSource::Live,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            source: DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

/// Accepts `3`, `3.4`, `"3"` or `"3 weeks"` for a whole-number field.
/// Model replies are inconsistent about numeric types.
pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n
            .as_u64()
            .map(|v| v.min(u32::MAX as u64) as u32)
            .or_else(|| n.as_f64().map(|f| f.max(0.0).round() as u32)),
        Value::String(s) => s
            .split(|c: char| !c.is_ascii_digit())
            .find(|part| !part.is_empty())
            .and_then(|digits| digits.parse().ok()),
        Value::Null => Some(0),
        _ => None,
    };
    parsed.ok_or_else(|| serde::de::Error::custom(format!("expected a whole number, got {value}")))
}

/// Accepts a number or a numeric string such as `"65.0"`.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        Value::Null => Some(0.0),
        _ => None,
    };
    parsed.ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Weeks {
        #[serde(deserialize_with = "lenient_u32")]
        weeks: u32,
    }

    #[derive(Debug, Deserialize)]
    struct Percent {
        #[serde(deserialize_with = "lenient_f64")]
        value: f64,
    }

    #[test]
    fn test_lenient_u32_accepts_numbers_and_text() {
        let from = |v: Value| serde_json::from_value::<Weeks>(json!({ "weeks": v })).unwrap().weeks;
        assert_eq!(from(json!(6)), 6);
        assert_eq!(from(json!(3.6)), 4);
        assert_eq!(from(json!("8 weeks")), 8);
        assert_eq!(from(json!(null)), 0);
    }

    #[test]
    fn test_lenient_u32_rejects_non_numeric_text() {
        assert!(serde_json::from_value::<Weeks>(json!({ "weeks": "soon" })).is_err());
    }

    #[test]
    fn test_lenient_f64_accepts_percent_strings() {
        let parsed: Percent = serde_json::from_value(json!({ "value": "65.0%" })).unwrap();
        assert_eq!(parsed.value, 65.0);
    }

    #[test]
    fn test_data_source_serializes_lowercase() {
        assert_eq!(serde_json::to_value(DataSource::Fallback).unwrap(), json!("fallback"));
        assert!(Sourced::fallback(()).is_fallback());
    }

    #[test]
    fn test_sourced_flattens_payload() {
        let value = serde_json::to_value(Sourced::live(MarketSnapshot {
            market_demand: "High".to_string(),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(value["marketDemand"], "High");
        assert_eq!(value["source"], "live");
    }
}

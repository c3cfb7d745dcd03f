use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient_u32;

/// Ordinal used for market demand and priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Value")]
pub enum Level {
    High,
    #[default]
    Medium,
    Low,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::High => "high",
            Level::Medium => "medium",
            Level::Low => "low",
        }
    }

    /// Radar-chart value: high=3, medium=2, low=1.
    pub fn demand_score(&self) -> u8 {
        match self {
            Level::High => 3,
            Level::Medium => 2,
            Level::Low => 1,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Level {
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.trim().to_lowercase();
        if lower.starts_with("medium") || lower == "moderate" {
            Some(Level::Medium)
        } else if lower.contains("high") || lower == "critical" {
            Some(Level::High)
        } else if lower.contains("low") {
            Some(Level::Low)
        } else {
            None
        }
    }
}

/// `null`, non-strings and unrecognized labels become `Medium`.
impl From<Value> for Level {
    fn from(value: Value) -> Self {
        value.as_str().and_then(Level::from_label).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillGap {
    pub skill: String,
    #[serde(alias = "user_level")]
    pub user_level: String,
    #[serde(alias = "market_demand")]
    pub market_demand: Level,
    pub priority: Level,
    #[serde(alias = "learning_time_weeks", deserialize_with = "lenient_u32")]
    pub learning_time_weeks: u32,
}

/// A learning recommendation. Model replies sometimes send bare strings,
/// which become the description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecommendationRepr")]
pub struct Recommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Recommendation {
    pub fn new(title: &str, description: &str, priority: &str, duration: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: description.to_string(),
            priority: Some(priority.to_string()),
            duration: Some(duration.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendationRepr {
    Text(String),
    Full {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: String,
        #[serde(default)]
        priority: Option<String>,
        #[serde(default)]
        duration: Option<String>,
    },
}

impl From<RecommendationRepr> for Recommendation {
    fn from(repr: RecommendationRepr) -> Self {
        match repr {
            RecommendationRepr::Text(description) => Recommendation {
                description,
                ..Default::default()
            },
            RecommendationRepr::Full {
                title,
                description,
                priority,
                duration,
            } => Recommendation {
                title,
                description,
                priority,
                duration,
            },
        }
    }
}

/// Skills-gap result. The AI path and the fallback tables produce the
/// same shape; the trailing fields are only filled on the live path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GapAnalysis {
    #[serde(alias = "missing_skills")]
    pub missing_skills: Vec<String>,
    #[serde(alias = "skill_gaps")]
    pub skill_gaps: Vec<SkillGap>,
    pub recommendations: Vec<Recommendation>,
    #[serde(alias = "salary_impact")]
    pub salary_impact: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub market_required_skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matched_skills: Vec<String>,
}

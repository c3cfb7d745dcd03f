use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient_u32, MarketSnapshot};

const TEXT_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Value")]
pub enum ExperienceLevel {
    #[default]
    Junior,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ExperienceLevel {
    /// Case-insensitive; tolerates suffixes such as "Mid-level" or "Senior Engineer".
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.trim().to_lowercase();
        if lower.starts_with("junior") || lower.starts_with("entry") || lower.starts_with("intern") {
            Some(ExperienceLevel::Junior)
        } else if lower.starts_with("mid") || lower.starts_with("intermediate") {
            Some(ExperienceLevel::Mid)
        } else if lower.starts_with("senior") {
            Some(ExperienceLevel::Senior)
        } else if lower.starts_with("lead") || lower.starts_with("principal") {
            Some(ExperienceLevel::Lead)
        } else {
            None
        }
    }
}

/// `null`, non-strings and unrecognized labels become the default level.
impl From<Value> for ExperienceLevel {
    fn from(value: Value) -> Self {
        value
            .as_str()
            .and_then(ExperienceLevel::from_label)
            .unwrap_or_default()
    }
}

/// Skills profile extracted from a CV. Missing fields default to empty/zero.
/// The optional enhanced fields are only populated in enhanced mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerProfile {
    #[serde(alias = "technical_skills")]
    pub technical_skills: Vec<String>,
    #[serde(alias = "soft_skills")]
    pub soft_skills: Vec<String>,
    pub certifications: Vec<String>,
    #[serde(alias = "experience_years", deserialize_with = "lenient_u32")]
    pub experience_years: u32,
    #[serde(alias = "education_level")]
    pub education_level: String,
    #[serde(alias = "job_titles")]
    pub job_titles: Vec<String>,
    #[serde(alias = "detected_career_field")]
    pub detected_career_field: String,
    #[serde(alias = "experience_level")]
    pub experience_level: ExperienceLevel,

    #[serde(alias = "career_path", skip_serializing_if = "Option::is_none")]
    pub career_path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industries: Vec<String>,
    #[serde(alias = "roles_suitable", skip_serializing_if = "Vec::is_empty")]
    pub roles_suitable: Vec<String>,
    #[serde(alias = "strength_areas", skip_serializing_if = "Vec::is_empty")]
    pub strength_areas: Vec<String>,
    #[serde(alias = "improvement_areas", skip_serializing_if = "Vec::is_empty")]
    pub improvement_areas: Vec<String>,
    #[serde(alias = "salary_range", skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(alias = "market_insights", skip_serializing_if = "Option::is_none")]
    pub market_insights: Option<MarketSnapshot>,
    #[serde(alias = "extracted_text", skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
}

impl CareerProfile {
    /// Technical skills followed by soft skills.
    pub fn all_skills(&self) -> Vec<String> {
        self.technical_skills
            .iter()
            .chain(&self.soft_skills)
            .cloned()
            .collect()
    }

    /// Stores the first 500 characters of the OCR text, with an ellipsis.
    pub fn set_text_preview(&mut self, text: &str) {
        let preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
        self.extracted_text = Some(format!("{preview}..."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_experience_level_is_case_insensitive() {
        let level: ExperienceLevel = serde_json::from_value(json!("Senior")).unwrap();
        assert_eq!(level, ExperienceLevel::Senior);
        let level: ExperienceLevel = serde_json::from_value(json!("Mid-level")).unwrap();
        assert_eq!(level, ExperienceLevel::Mid);
    }

    #[test]
    fn test_unknown_experience_level_defaults() {
        for value in [json!("wizard"), json!("Associate"), json!(null), json!(3)] {
            let level: ExperienceLevel = serde_json::from_value(value).unwrap();
            assert_eq!(level, ExperienceLevel::Junior);
        }
    }

    #[test]
    fn test_null_experience_level_keeps_profile() {
        let profile: CareerProfile = serde_json::from_value(json!({
            "technicalSkills": ["SQL"],
            "detectedCareerField": "Data Science",
            "experienceLevel": null
        }))
        .unwrap();
        assert_eq!(profile.detected_career_field, "Data Science");
        assert_eq!(profile.experience_level, ExperienceLevel::Junior);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let profile: CareerProfile = serde_json::from_value(json!({
            "technicalSkills": ["Rust"]
        }))
        .unwrap();
        assert_eq!(profile.technical_skills, vec!["Rust"]);
        assert!(profile.soft_skills.is_empty());
        assert_eq!(profile.experience_years, 0);
        assert_eq!(profile.experience_level, ExperienceLevel::Junior);
    }

    #[test]
    fn test_snake_case_keys_are_accepted() {
        let profile: CareerProfile = serde_json::from_value(json!({
            "technical_skills": ["Python"],
            "soft_skills": ["Communication"],
            "experience_years": "3",
            "job_titles": ["Data Analyst"]
        }))
        .unwrap();
        assert_eq!(profile.all_skills(), vec!["Python", "Communication"]);
        assert_eq!(profile.experience_years, 3);
    }

    #[test]
    fn test_enhanced_fields_skipped_when_empty() {
        let value = serde_json::to_value(CareerProfile::default()).unwrap();
        assert!(value.get("marketInsights").is_none());
        assert!(value.get("industries").is_none());
        assert_eq!(value["experienceLevel"], "junior");
    }

    #[test]
    fn test_text_preview_truncates_on_char_boundary() {
        let mut profile = CareerProfile::default();
        profile.set_text_preview(&"é".repeat(600));
        let preview = profile.extracted_text.unwrap();
        assert_eq!(preview.chars().count(), 503);
        assert!(preview.ends_with("..."));
    }
}

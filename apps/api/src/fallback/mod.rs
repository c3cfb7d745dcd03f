//! Static, career-field-keyed sample data substituted whenever a provider
//! call fails. Fields without a dedicated entry use the Software
//! Engineering entry.

pub mod analysis;
pub mod certifications;
pub mod insights;
pub mod jobs;
pub mod profiles;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use analysis::{gap_analysis, skills_analysis};
pub use certifications::certification_roadmap;
pub use insights::market_insights;
pub use jobs::{job_market, job_recommendations, sample_postings};
pub use profiles::enhanced_profile;

/// The fixed set of career buckets the static tables are keyed by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareerField {
    #[default]
    #[serde(rename = "Software Engineering")]
    SoftwareEngineering,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Digital Marketing")]
    DigitalMarketing,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    #[serde(rename = "Project Management")]
    ProjectManagement,
}

impl CareerField {
    pub const ALL: [CareerField; 5] = [
        CareerField::SoftwareEngineering,
        CareerField::DataScience,
        CareerField::DigitalMarketing,
        CareerField::UiUxDesign,
        CareerField::ProjectManagement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CareerField::SoftwareEngineering => "Software Engineering",
            CareerField::DataScience => "Data Science",
            CareerField::DigitalMarketing => "Digital Marketing",
            CareerField::UiUxDesign => "UI/UX Design",
            CareerField::ProjectManagement => "Project Management",
        }
    }

    /// Exact (case-insensitive) label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(label))
    }

    /// Keyword classifier over a filename or free text. Order matters:
    /// "data analyst" is Data Science even though it also reads as a role.
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        let has = |needle: &str| lower.contains(needle);

        if has("data") || has("analyst") {
            CareerField::DataScience
        } else if has("marketing") || has("digital") {
            CareerField::DigitalMarketing
        } else if has("design") || has("ui") || has("ux") {
            CareerField::UiUxDesign
        } else if has("project") || has("manager") {
            CareerField::ProjectManagement
        } else {
            CareerField::SoftwareEngineering
        }
    }

    /// A known label maps directly; anything else goes through [`detect`](Self::detect).
    pub fn resolve(label: &str) -> Self {
        Self::from_label(label).unwrap_or_else(|| Self::detect(label))
    }
}

impl fmt::Display for CareerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

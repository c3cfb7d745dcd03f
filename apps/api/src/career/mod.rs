//! Career-specific advice: skill priorities, certifications, salary
//! projection and learning path for a field and level, plus the
//! certification roadmap built from them.

pub mod handlers;
pub mod prompts;
pub mod roadmap;

use tracing::{info, warn};

use crate::ai_client::{complete_json, prompts::market_context, prompts::JSON_ONLY_SYSTEM, AiProvider, MistralError};
use crate::fallback::{self, CareerField};
use crate::models::{CareerRecommendations, CertificationRoadmap, ExperienceLevel, Sourced};
use prompts::{CAREER_RECOMMENDATIONS_TEMPLATE, CAREER_REQUIRED_KEYS, DEFAULT_TARGET_ROLE};

const RECOMMENDATIONS_MAX_TOKENS: u32 = 2000;

/// Asks the model for recommendations tailored to a field, level and skill set.
pub async fn career_recommendations(
    ai: &dyn AiProvider,
    career_field: &str,
    level: ExperienceLevel,
    current_skills: &[String],
    target_role: Option<&str>,
    location: &str,
) -> Result<CareerRecommendations, MistralError> {
    let prompt = CAREER_RECOMMENDATIONS_TEMPLATE
        .replace("{career_field}", career_field)
        .replace("{experience_level}", level.as_str())
        .replace("{current_skills}", &serde_json::to_string(current_skills)?)
        .replace("{target_role}", target_role.unwrap_or(DEFAULT_TARGET_ROLE))
        .replace("{market_context}", &market_context(location));

    complete_json(
        ai,
        &prompt,
        JSON_ONLY_SYSTEM,
        CAREER_REQUIRED_KEYS,
        RECOMMENDATIONS_MAX_TOKENS,
    )
    .await
}

/// Certifications for a field with their total timeline and cost. Uses the
/// mid level, and the field's static roadmap on failure.
pub async fn certification_roadmap(
    ai: &dyn AiProvider,
    career_field: &str,
    current_skills: &[String],
    target_role: Option<&str>,
    location: &str,
) -> Sourced<CertificationRoadmap> {
    let recs = career_recommendations(
        ai,
        career_field,
        ExperienceLevel::Mid,
        current_skills,
        target_role,
        location,
    )
    .await;

    match recs {
        Ok(recs) => {
            let certifications = recs.certification_recommendations;
            info!(
                "Certification roadmap for {}: {} certifications",
                career_field,
                certifications.len()
            );
            Sourced::live(CertificationRoadmap {
                timeline: roadmap::timeline(&certifications),
                cost: roadmap::total_cost(&certifications),
                certifications,
            })
        }
        Err(e) => {
            warn!("Certification roadmap failed for '{}', using fallback: {}", career_field, e);
            Sourced::fallback(fallback::certification_roadmap(CareerField::resolve(career_field)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai_client::testing::ScriptedProvider;

    #[tokio::test]
    async fn test_roadmap_falls_back_on_outage() {
        let ai = ScriptedProvider::new();
        let roadmap = certification_roadmap(&ai, "Project Management", &[], None, "Kenya").await;
        assert!(roadmap.is_fallback());
        assert_eq!(
            roadmap.data,
            fallback::certification_roadmap(CareerField::ProjectManagement)
        );
    }

    #[tokio::test]
    async fn test_live_roadmap_totals() {
        let ai = ScriptedProvider::new().with_completion(
            r#"{"skillPriorities": [],
                "certificationRecommendations": [
                  {"certification": "CKA", "provider": "CNCF", "cost": "KES 40,000", "duration": "2 months"},
                  {"certification": "Terraform Associate", "provider": "HashiCorp", "cost": "Free", "duration": "4 weeks"}
                ]}"#,
        );
        let roadmap =
            certification_roadmap(&ai, "Software Engineering", &["Go".to_string()], None, "Kenya").await;
        assert!(!roadmap.is_fallback());
        assert_eq!(roadmap.data.certifications.len(), 2);
        assert_eq!(roadmap.data.timeline, "3 months");
        assert_eq!(roadmap.data.cost, "KES 40,000");
    }

    #[tokio::test]
    async fn test_recommendations_require_priorities() {
        let ai = ScriptedProvider::new().with_completion(r#"{"learningPath": ["Learn Rust"]}"#);
        let err = career_recommendations(&ai, "Software Engineering", ExperienceLevel::Junior, &[], None, "Kenya")
            .await
            .unwrap_err();
        assert!(matches!(err, MistralError::Schema { .. }));
    }
}

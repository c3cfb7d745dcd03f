//! CV profile extraction: OCR over the stored upload, a structured profile
//! prompt, and a short role-classification prompt when the model leaves the
//! career field empty.
//!
//! Provider failures never surface to callers; they get the static profile
//! for the field the upload's file name suggests.

pub mod handlers;
pub mod prompts;

use std::path::Path;

use tracing::{info, warn};

use crate::ai_client::{complete_json, prompts::JSON_ONLY_SYSTEM, AiProvider, Completion, MistralError};
use crate::fallback::{self, CareerField};
use crate::intake::mime_for_path;
use crate::market::insights::market_insights;
use crate::models::{CareerProfile, Sourced};
use prompts::{PROFILE_PROMPT_TEMPLATE, PROFILE_REQUIRED_KEYS, ROLE_DETECTOR_SYSTEM, ROLE_DETECTOR_TEMPLATE};

const PROFILE_MAX_TOKENS: u32 = 1500;
const ROLE_DETECTOR_TEMPERATURE: f32 = 0.1;

/// Static profile for an upload, keyed by its file name.
pub fn fallback_profile(handle: &str) -> CareerProfile {
    fallback::enhanced_profile(CareerField::detect(handle))
}

/// Labels the profession behind a CV. Falls back to the keyword classifier.
pub async fn detect_role(ai: &dyn AiProvider, cv_text: &str) -> String {
    let prompt = ROLE_DETECTOR_TEMPLATE.replace("{cv_text}", cv_text);
    let reply = ai
        .complete(Completion::text(&prompt, ROLE_DETECTOR_SYSTEM, ROLE_DETECTOR_TEMPERATURE))
        .await;

    let label = match reply {
        Ok(reply) => reply
            .lines()
            .map(|line| line.trim().trim_start_matches(['-', '*']).trim())
            .find(|line| !line.is_empty())
            .map(str::to_string),
        Err(e) => {
            warn!("Role detection failed, using keyword classifier: {}", e);
            None
        }
    };

    label.unwrap_or_else(|| CareerField::detect(cv_text).label().to_string())
}

/// Turns extracted CV text into a [`CareerProfile`].
pub async fn analyze_profile(ai: &dyn AiProvider, cv_text: &str) -> Result<CareerProfile, MistralError> {
    let prompt = PROFILE_PROMPT_TEMPLATE.replace("{cv_text}", cv_text);
    let mut profile: CareerProfile = complete_json(
        ai,
        &prompt,
        JSON_ONLY_SYSTEM,
        PROFILE_REQUIRED_KEYS,
        PROFILE_MAX_TOKENS,
    )
    .await?;

    if profile.detected_career_field.trim().is_empty() {
        profile.detected_career_field = detect_role(ai, cv_text).await;
    }
    Ok(profile)
}

async fn profile_from_document(
    ai: &dyn AiProvider,
    document: &[u8],
    mime: &str,
    enhanced: bool,
    location: &str,
) -> Result<CareerProfile, MistralError> {
    let text = ai.ocr(document, mime).await?;
    if text.trim().is_empty() {
        return Err(MistralError::EmptyContent);
    }
    info!("Text extracted: {} chars", text.len());

    let mut profile = analyze_profile(ai, &text).await?;
    info!("Career profile analyzed: {}", profile.detected_career_field);

    if enhanced {
        let insights = market_insights(ai, &profile.detected_career_field, location).await;
        profile.market_insights = Some(insights.data.snapshot());
        profile.set_text_preview(&text);
    }
    Ok(profile)
}

/// Extracts a profile from a stored upload.
///
/// Only a failure to read the file back is returned as an error; every
/// provider failure yields the static profile for `handle`.
pub async fn process_cv(
    ai: &dyn AiProvider,
    path: &Path,
    handle: &str,
    enhanced: bool,
    location: &str,
) -> Result<Sourced<CareerProfile>, std::io::Error> {
    let document = tokio::fs::read(path).await?;

    match profile_from_document(ai, &document, mime_for_path(path), enhanced, location).await {
        Ok(profile) => Ok(Sourced::live(profile)),
        Err(e) => {
            warn!("CV processing failed for {}, using fallback: {}", handle, e);
            Ok(Sourced::fallback(fallback_profile(handle)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai_client::testing::ScriptedProvider;

    const PROFILE_REPLY: &str = r#"{
        "technicalSkills": ["Python", "SQL"],
        "softSkills": ["Communication"],
        "jobTitles": ["Data Analyst"],
        "experienceYears": "3",
        "experienceLevel": "Mid-level",
        "detectedCareerField": ""
    }"#;

    fn stored(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"%PDF-1.4 fake").unwrap();
        path
    }

    #[tokio::test]
    async fn test_ocr_failure_yields_field_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let handle = "1700000000000-data-analyst-cv.pdf";
        let path = stored(&dir, handle);

        let result = process_cv(&ScriptedProvider::new(), &path, handle, true, "Kenya")
            .await
            .unwrap();
        assert!(result.is_fallback());
        assert_eq!(result.data, fallback::enhanced_profile(CareerField::DataScience));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.pdf");
        let result = process_cv(&ScriptedProvider::new(), &path, "gone.pdf", false, "Kenya").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_ocr_text_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = stored(&dir, "1-resume.pdf");
        let ai = ScriptedProvider::new().with_ocr("   \n");

        let result = process_cv(&ai, &path, "1-resume.pdf", false, "Kenya").await.unwrap();
        assert!(result.is_fallback());
        assert_eq!(result.data.detected_career_field, "Software Engineering");
    }

    #[tokio::test]
    async fn test_role_detector_fills_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = stored(&dir, "1-cv.pdf");
        let ai = ScriptedProvider::new()
            .with_ocr("Jane Doe\nData Analyst at Equity Bank\nPython, SQL")
            .with_completion(PROFILE_REPLY)
            .with_completion("- Data Analyst\n");

        let result = process_cv(&ai, &path, "1-cv.pdf", false, "Kenya").await.unwrap();
        assert!(!result.is_fallback());
        assert_eq!(result.data.detected_career_field, "Data Analyst");
        assert_eq!(result.data.experience_years, 3);
        assert!(result.data.market_insights.is_none());
        assert!(result.data.extracted_text.is_none());
    }

    #[tokio::test]
    async fn test_role_detector_outage_uses_keywords() {
        let ai = ScriptedProvider::new();
        let label = detect_role(&ai, "Digital marketing lead, SEO and social campaigns").await;
        assert_eq!(label, "Digital Marketing");
    }

    #[tokio::test]
    async fn test_enhanced_mode_adds_snapshot_and_preview() {
        let dir = tempfile::tempdir().unwrap();
        let path = stored(&dir, "1-cv.pdf");
        let text = "x".repeat(800);
        let ai = ScriptedProvider::new()
            .with_ocr(&text)
            .with_completion(
                r#"{"technicalSkills": ["Figma"], "softSkills": [], "jobTitles": ["Designer"],
                    "detectedCareerField": "UI/UX Design"}"#,
            );

        let result = process_cv(&ai, &path, "1-cv.pdf", true, "Kenya").await.unwrap();
        assert!(!result.is_fallback());
        let profile = result.data;
        // No scripted search reply, so the snapshot comes from the static insights.
        assert_eq!(
            profile.market_insights,
            Some(fallback::market_insights(CareerField::UiUxDesign).snapshot())
        );
        let preview = profile.extracted_text.unwrap();
        assert_eq!(preview.chars().count(), 503);
        assert!(preview.ends_with("..."));
    }

    #[tokio::test]
    async fn test_profile_reply_missing_keys_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = stored(&dir, "1-marketing-cv.pdf");
        let ai = ScriptedProvider::new()
            .with_ocr("Some CV text")
            .with_completion(r#"{"technicalSkills": ["SEO"]}"#);

        let result = process_cv(&ai, &path, "1-marketing-cv.pdf", true, "Kenya").await.unwrap();
        assert!(result.is_fallback());
        assert_eq!(result.data, fallback::enhanced_profile(CareerField::DigitalMarketing));
    }
}

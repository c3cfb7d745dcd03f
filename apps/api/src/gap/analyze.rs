use serde_json::json;
use tracing::{info, warn};

use super::prompts::{GAP_ANALYSIS_TEMPLATE, GAP_REQUIRED_KEYS};
use super::scoring::{rank_required_skills, GapScorer, TOP_REQUIRED_SKILLS};
use crate::ai_client::{complete_json, prompts::JSON_ONLY_SYSTEM, AiProvider, MistralError};
use crate::career::career_recommendations;
use crate::fallback::{self, CareerField};
use crate::market::{scan::search_postings, JobQuery, MarketError};
use crate::models::{
    CareerProfile, CurrentSkills, GapAnalysis, JobMarketData, SkillsAnalysis, Sourced,
};

const GAP_MAX_TOKENS: u32 = 1500;
const MAX_PRIORITY_SKILLS: usize = 5;

/// Market-required skills: a summary's own ranking when it has one,
/// otherwise the top skills across its postings.
pub fn required_skills(market: &JobMarketData) -> Vec<String> {
    match market {
        JobMarketData::Summary(summary) if !summary.required_skills.is_empty() => summary
            .required_skills
            .iter()
            .take(TOP_REQUIRED_SKILLS)
            .cloned()
            .collect(),
        _ => rank_required_skills(market.postings(), TOP_REQUIRED_SKILLS),
    }
}

async fn request_gap_analysis(
    ai: &dyn AiProvider,
    profile: &CareerProfile,
    market: &JobMarketData,
) -> Result<GapAnalysis, MistralError> {
    let user_skills = json!({
        "technicalSkills": profile.technical_skills,
        "softSkills": profile.soft_skills,
        "certifications": profile.certifications,
        "experienceLevel": profile.experience_level,
        "detectedCareerField": profile.detected_career_field,
    });
    let prompt = GAP_ANALYSIS_TEMPLATE
        .replace("{user_skills}", &user_skills.to_string())
        .replace("{market_demand}", &serde_json::to_string(market)?);

    complete_json(ai, &prompt, JSON_ONLY_SYSTEM, GAP_REQUIRED_KEYS, GAP_MAX_TOKENS).await
}

/// Gap report for a profile against a job market. The model writes the
/// report; the local scorer adds the match figures. Falls back to the static
/// report for the profile's field.
pub async fn analyze_gaps(
    ai: &dyn AiProvider,
    scorer: &dyn GapScorer,
    profile: &CareerProfile,
    market: &JobMarketData,
) -> Sourced<GapAnalysis> {
    match request_gap_analysis(ai, profile, market).await {
        Ok(mut analysis) => {
            let report = scorer.score(&profile.all_skills(), &required_skills(market));
            if !report.market_required_skills.is_empty() {
                analysis.match_percentage = Some(report.match_percentage);
                analysis.market_required_skills = report.market_required_skills;
                analysis.matched_skills = report.matched;
            }
            info!(
                "Gap analysis complete: {} gaps ({} backend)",
                analysis.skill_gaps.len(),
                report.scorer_backend
            );
            Sourced::live(analysis)
        }
        Err(e) => {
            warn!("Gap analysis failed, using fallback: {}", e);
            let field = CareerField::resolve(&profile.detected_career_field);
            Sourced::fallback(fallback::gap_analysis(field))
        }
    }
}

async fn live_skills_analysis(
    ai: &dyn AiProvider,
    scorer: &dyn GapScorer,
    profile: &CareerProfile,
    target_role: Option<&str>,
    location: &str,
) -> Result<SkillsAnalysis, MarketError> {
    let career_field = if profile.detected_career_field.trim().is_empty() {
        CareerField::SoftwareEngineering.label()
    } else {
        profile.detected_career_field.as_str()
    };
    let current = profile.all_skills();

    let recs = career_recommendations(
        ai,
        career_field,
        profile.experience_level,
        &current,
        target_role,
        location,
    )
    .await?;

    let query = JobQuery::for_field(target_role.unwrap_or(career_field), location);
    let postings = search_postings(ai, &query).await?;
    let report = scorer.score(&current, &rank_required_skills(&postings, TOP_REQUIRED_SKILLS));

    let mut priority_skills = recs.skill_priorities;
    priority_skills.truncate(MAX_PRIORITY_SKILLS);

    Ok(SkillsAnalysis {
        career_field: career_field.to_string(),
        experience_level: profile.experience_level,
        current_skills: CurrentSkills::new(&profile.technical_skills, &profile.soft_skills),
        market_required_skills: report.market_required_skills,
        skill_matches: report.matched,
        skill_gaps: report.missing,
        match_percentage: report.match_percentage,
        priority_skills,
        certification_recommendations: recs.certification_recommendations,
        salary_projection: recs.salary_projection,
        industry_insights: recs.industry_insights,
        learning_path: recs.learning_path,
        career_roadmap: recs.career_roadmap,
    })
}

/// Enhanced skills analysis: career advice plus a live market comparison
/// for the target role (or the profile's field).
pub async fn analyze_skills(
    ai: &dyn AiProvider,
    scorer: &dyn GapScorer,
    profile: &CareerProfile,
    target_role: Option<&str>,
    location: &str,
) -> Sourced<SkillsAnalysis> {
    info!(
        "Analyzing skills gap for {} ({})",
        profile.detected_career_field, profile.experience_level
    );
    match live_skills_analysis(ai, scorer, profile, target_role, location).await {
        Ok(analysis) => Sourced::live(analysis),
        Err(e) => {
            warn!("Skills analysis failed, using fallback: {}", e);
            Sourced::fallback(fallback::skills_analysis(profile))
        }
    }
}

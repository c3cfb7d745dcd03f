use tracing::warn;

use super::insights::market_insights;
use super::scan::{search_postings, JobQuery};
use crate::ai_client::AiProvider;
use crate::fallback::{self, jobs, CareerField};
use crate::models::{ExperienceLevel, JobPosting, JobRecommendations, RecommendedJob, Sourced};

const MAX_RECOMMENDED: usize = 5;
const BASE_MATCH: u32 = 70;
const MAX_MATCH: u32 = 95;

/// Heuristic match: 70 base, +15 when the title names the field, +10 when
/// the experience requirement names the level, capped at 95.
pub fn job_match(job: &JobPosting, career_field: &str, level: ExperienceLevel) -> String {
    let mut score = BASE_MATCH;
    if !career_field.is_empty() && job.title.to_lowercase().contains(&career_field.to_lowercase()) {
        score += 15;
    }
    if job.experience_required.to_lowercase().contains(level.as_str()) {
        score += 10;
    }
    format!("{}%", score.min(MAX_MATCH))
}

fn recommend(job: JobPosting, career_field: &str, level: ExperienceLevel) -> RecommendedJob {
    let match_score = job_match(&job, career_field, level);
    let mut requirements = Vec::with_capacity(job.skills_required.len() + 1);
    if !job.experience_required.is_empty() {
        requirements.push(job.experience_required);
    }
    requirements.extend(job.skills_required);

    RecommendedJob {
        title: job.title,
        company: job.company,
        location: job.location,
        salary: job.salary_range,
        match_score,
        requirements,
    }
}

/// Searches `"<field> <level>"` postings and bundles them with progression,
/// demand trends and insights for the field.
pub async fn job_recommendations(
    ai: &dyn AiProvider,
    career_field: &str,
    level: ExperienceLevel,
    location: &str,
) -> Sourced<JobRecommendations> {
    let field = CareerField::resolve(career_field);
    let query = JobQuery::for_field(&format!("{} {}", career_field, level), location);

    let postings = match search_postings(ai, &query).await {
        Ok(postings) => postings,
        Err(e) => {
            warn!("Job recommendations failed for '{}', using fallback: {}", career_field, e);
            return Sourced::fallback(fallback::job_recommendations(field, level));
        }
    };

    let recommended_jobs = postings
        .into_iter()
        .take(MAX_RECOMMENDED)
        .map(|job| recommend(job, career_field, level))
        .collect();

    Sourced::live(JobRecommendations {
        recommended_jobs,
        career_progression: jobs::career_progression(field, level),
        skill_demand_trends: jobs::skill_demand_trends(field),
        market_insights: market_insights(ai, career_field, location).await.data,
    })
}

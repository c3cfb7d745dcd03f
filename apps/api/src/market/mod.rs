//! Job-market adapter: web-search-backed posting scans, market summaries,
//! market insights and job recommendations. Every entry point returns a
//! [`Sourced`](crate::models::Sourced) value and substitutes the static
//! tables when the provider fails.

pub mod handlers;
pub mod insights;
pub mod prompts;
pub mod recommendations;
pub mod scan;
pub mod summary;

use thiserror::Error;
use tracing::warn;

use crate::ai_client::{AiProvider, MistralError};
use crate::fallback::{self, CareerField};
use crate::models::{JobMarketSummary, Sourced};

pub use scan::JobQuery;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("No job postings collected from {queries} search queries")]
    NoPostings { queries: usize },

    #[error(transparent)]
    Provider(#[from] MistralError),
}

/// Scans the market for `query` and summarizes the postings. Falls back to
/// the static summary for `field`.
pub async fn scan_market(
    ai: &dyn AiProvider,
    query: &JobQuery,
    field: CareerField,
) -> Sourced<JobMarketSummary> {
    match scan::search_postings(ai, query).await {
        Ok(postings) => Sourced::live(summary::summarize(postings, field)),
        Err(e) => {
            warn!("Job market scan failed for {}, using fallback: {}", field, e);
            Sourced::fallback(fallback::job_market(field))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai_client::testing::ScriptedProvider;

    #[tokio::test]
    async fn test_scan_market_falls_back_when_every_query_fails() {
        let ai = ScriptedProvider::new();
        let query = JobQuery::for_field("Data Science", "Kenya");
        let result = scan_market(&ai, &query, CareerField::DataScience).await;
        assert!(result.is_fallback());
        assert_eq!(result.data, fallback::job_market(CareerField::DataScience));
    }

    #[tokio::test]
    async fn test_scan_market_summarizes_live_postings() {
        let ai = ScriptedProvider::new().with_search(
            r#"{"jobs": [
                {"title": "Backend Engineer", "company": "Andela", "location": "Remote",
                 "skillsRequired": ["Go", "PostgreSQL"], "salaryRange": "KES 200,000 - 300,000"}
            ]}"#,
        );
        let query = JobQuery::for_field("Backend Engineer", "Kenya");
        let result = scan_market(&ai, &query, CareerField::SoftwareEngineering).await;
        assert!(!result.is_fallback());
        assert_eq!(result.data.total_jobs, 1);
        assert_eq!(result.data.remote_opportunities, "100%");
        assert_eq!(result.data.required_skills, vec!["Go", "PostgreSQL"]);
    }
}

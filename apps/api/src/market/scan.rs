use serde::Deserialize;
use tracing::{debug, info, warn};

use super::prompts::{JOB_SEARCH_REQUIRED_KEYS, JOB_SEARCH_TEMPLATE};
use super::MarketError;
use crate::ai_client::{parse_json_reply, prompts::market_context, AiProvider};
use crate::fallback::{sample_postings, CareerField};
use crate::models::{CareerProfile, JobPosting};

/// Upper bound on web-search calls per scan.
pub const MAX_QUERIES: usize = 3;
const DEFAULT_TITLE: &str = "Software Developer";

/// What to search for: one query per title, in one location.
#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    pub titles: Vec<String>,
    pub location: String,
}

impl JobQuery {
    pub fn for_field(field: &str, location: &str) -> Self {
        let title = if field.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            field.trim()
        };
        Self {
            titles: vec![title.to_string()],
            location: location.to_string(),
        }
    }

    /// Searches the profile's job titles, or its career field when it has none.
    pub fn for_profile(profile: &CareerProfile, location: &str) -> Self {
        let titles: Vec<String> = profile
            .job_titles
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        if titles.is_empty() {
            Self::for_field(&profile.detected_career_field, location)
        } else {
            Self {
                titles,
                location: location.to_string(),
            }
        }
    }

    /// `"<title> jobs <location> 2025 requirements skills"`, at most [`MAX_QUERIES`].
    pub fn search_queries(&self) -> Vec<String> {
        self.titles
            .iter()
            .take(MAX_QUERIES)
            .map(|title| format!("{} jobs {} 2025 requirements skills", title, self.location))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct JobsReply {
    #[serde(default)]
    jobs: Vec<JobPosting>,
}

/// Parses `{"jobs": [...]}` from a search reply. When the reply carries no
/// usable postings, demo postings for the query's classified field stand in.
pub fn parse_postings(reply: &str, query: &str) -> Vec<JobPosting> {
    let parsed = parse_json_reply::<JobsReply>(reply, JOB_SEARCH_REQUIRED_KEYS).map(|r| {
        r.jobs
            .into_iter()
            .filter(|job| !job.title.trim().is_empty())
            .collect::<Vec<_>>()
    });

    match parsed {
        Ok(jobs) if !jobs.is_empty() => jobs,
        Ok(_) => {
            debug!("Search reply for '{}' had no postings, synthesizing", query);
            sample_postings(CareerField::detect(query))
        }
        Err(e) => {
            debug!("Search reply for '{}' not parsable ({}), synthesizing", query, e);
            sample_postings(CareerField::detect(query))
        }
    }
}

/// Runs one web search per query. Failing queries are logged and skipped;
/// the scan fails only when nothing at all was collected.
pub async fn search_postings(
    ai: &dyn AiProvider,
    query: &JobQuery,
) -> Result<Vec<JobPosting>, MarketError> {
    let queries = query.search_queries();
    let context = market_context(&query.location);
    let mut postings = Vec::new();

    for search in &queries {
        let prompt = JOB_SEARCH_TEMPLATE
            .replace("{query}", search)
            .replace("{market_context}", &context);

        match ai.web_search(&prompt).await {
            Ok(reply) => postings.extend(parse_postings(&reply, search)),
            Err(e) => warn!("Search query failed: '{}': {}", search, e),
        }
    }

    if postings.is_empty() {
        return Err(MarketError::NoPostings {
            queries: queries.len(),
        });
    }

    info!("Collected {} postings from {} queries", postings.len(), queries.len());
    Ok(postings)
}

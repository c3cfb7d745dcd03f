//! Gap scoring: pluggable, trait-based comparison of a candidate's skills
//! against the skills the market asks for.
//!
//! Default: `SubstringGapScorer` (pure-Rust, deterministic, no provider call).
//! `AppState` holds an `Arc<dyn GapScorer>`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::JobPosting;

/// How many market skills the comparison considers.
pub const TOP_REQUIRED_SKILLS: usize = 10;

/// Result of comparing current skills with market-required skills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatchReport {
    pub market_required_skills: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub match_percentage: f64, // 0.0 – 100.0, one decimal
    pub scorer_backend: String,
}

/// The gap scorer trait. Implement this to swap matching strategies without
/// touching the handlers or the pipeline.
pub trait GapScorer: Send + Sync {
    fn score(&self, current: &[String], required: &[String]) -> SkillMatchReport;
}

/// Case-insensitive substring containment in either direction.
///
/// Known over-match: "Java" matches "JavaScript", and single letters such
/// as "R" match any skill containing an "r".
pub struct SubstringGapScorer;

impl GapScorer for SubstringGapScorer {
    fn score(&self, current: &[String], required: &[String]) -> SkillMatchReport {
        compute_substring_match(current, required)
    }
}

fn skills_overlap(current: &str, required: &str) -> bool {
    let current = current.to_lowercase();
    let required = required.to_lowercase();
    current.contains(&required) || required.contains(&current)
}

fn compute_substring_match(current: &[String], required: &[String]) -> SkillMatchReport {
    let current: Vec<&String> = current.iter().filter(|s| !s.trim().is_empty()).collect();

    let (matched, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|req| current.iter().any(|cur| skills_overlap(cur, req)));

    SkillMatchReport {
        match_percentage: match_percentage(matched.len(), required.len()),
        market_required_skills: required.to_vec(),
        matched,
        missing,
        scorer_backend: "substring".to_string(),
    }
}

/// matches / required × 100, rounded to one decimal; 0 when nothing is required.
pub fn match_percentage(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    let raw = matched as f64 / required as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Flattens the postings' skill lists and returns the `limit` most frequent
/// names (exact spelling). Ties keep first-seen order.
pub fn rank_required_skills(postings: &[JobPosting], limit: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for skill in postings.iter().flat_map(|p| &p.skills_required) {
        let skill = skill.as_str();
        if skill.trim().is_empty() {
            continue;
        }
        let count = counts.entry(skill).or_insert(0);
        if *count == 0 {
            order.push(skill);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.into_iter().take(limit).map(str::to_string).collect()
}

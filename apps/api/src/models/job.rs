use serde::{Deserialize, Serialize};

/// A single job posting, either parsed from a web-search reply or drawn
/// from the static tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(alias = "skills_required", alias = "skills")]
    pub skills_required: Vec<String>,
    #[serde(alias = "salary_range", alias = "salary")]
    pub salary_range: String,
    #[serde(alias = "experience_required")]
    pub experience_required: String,
    #[serde(alias = "remote_option", skip_serializing_if = "Option::is_none")]
    pub remote_option: Option<bool>,
}

impl JobPosting {
    pub fn is_remote(&self) -> bool {
        self.remote_option == Some(true) || self.location.to_lowercase().contains("remote")
    }
}

/// Aggregate view over a set of postings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobMarketSummary {
    #[serde(alias = "total_jobs")]
    pub total_jobs: usize,
    pub jobs: Vec<JobPosting>,
    #[serde(alias = "average_salary")]
    pub average_salary: String,
    #[serde(alias = "top_companies")]
    pub top_companies: Vec<String>,
    #[serde(alias = "required_skills")]
    pub required_skills: Vec<String>,
    pub locations: Vec<String>,
    #[serde(alias = "remote_opportunities")]
    pub remote_opportunities: String,
}

/// Job-market input accepted by gap analysis: a bare postings array or a
/// full summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobMarketData {
    Postings(Vec<JobPosting>),
    Summary(JobMarketSummary),
}

impl Default for JobMarketData {
    fn default() -> Self {
        JobMarketData::Postings(Vec::new())
    }
}

impl JobMarketData {
    pub fn postings(&self) -> &[JobPosting] {
        match self {
            JobMarketData::Postings(jobs) => jobs,
            JobMarketData::Summary(summary) => &summary.jobs,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "match")]
    pub match_score: String,
    pub requirements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_posting_accepts_snake_case_keys() {
        let job: JobPosting = serde_json::from_value(json!({
            "title": "Software Developer",
            "company": "Safaricom PLC",
            "location": "Nairobi, Kenya",
            "skills_required": ["JavaScript", "React"],
            "salary_range": "KES 100,000 - 180,000",
            "experience_required": "2-4 years",
            "remote_option": true
        }))
        .unwrap();
        assert_eq!(job.skills_required, vec!["JavaScript", "React"]);
        assert!(job.is_remote());
    }

    #[test]
    fn test_remote_detected_from_location() {
        let job = JobPosting {
            location: "Remote/Nairobi".to_string(),
            ..Default::default()
        };
        assert!(job.is_remote());
    }

    #[test]
    fn test_market_data_accepts_array_or_summary() {
        let postings: JobMarketData =
            serde_json::from_value(json!([{ "title": "Data Analyst" }])).unwrap();
        assert_eq!(postings.postings().len(), 1);

        let summary: JobMarketData = serde_json::from_value(json!({
            "totalJobs": 1,
            "jobs": [{ "title": "Data Analyst" }]
        }))
        .unwrap();
        assert!(matches!(summary, JobMarketData::Summary(_)));
        assert_eq!(summary.postings()[0].title, "Data Analyst");
    }

    #[test]
    fn test_recommended_job_match_key() {
        let value = serde_json::to_value(RecommendedJob {
            match_score: "85%".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(value["match"], "85%");
    }
}

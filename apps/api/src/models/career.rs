use serde::{Deserialize, Serialize};

use super::{lenient_f64, ExperienceLevel, MarketInsights, RecommendedJob};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrioritySkill {
    pub skill: String,
    pub importance: String,
    pub reason: String,
    #[serde(alias = "time_to_learn")]
    pub time_to_learn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryProjection {
    pub current: String,
    #[serde(alias = "with_skills")]
    pub with_skills: String,
    #[serde(alias = "top_tier")]
    pub top_tier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndustryInsights {
    #[serde(alias = "trending_skills")]
    pub trending_skills: Vec<String>,
    #[serde(alias = "emerging_opportunities")]
    pub emerging_opportunities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentSkills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub total: usize,
}

impl CurrentSkills {
    pub fn new(technical: &[String], soft: &[String]) -> Self {
        Self {
            technical: technical.to_vec(),
            soft: soft.to_vec(),
            total: technical.len() + soft.len(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub certification: String,
    pub provider: String,
    pub cost: String,
    pub duration: String,
    pub impact: String,
    pub priority: String,
}

/// Career-specific advice returned by the model for a field and level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerRecommendations {
    #[serde(alias = "skill_priorities")]
    pub skill_priorities: Vec<PrioritySkill>,
    #[serde(alias = "certification_recommendations")]
    pub certification_recommendations: Vec<Certification>,
    #[serde(alias = "salary_projection")]
    pub salary_projection: Option<SalaryProjection>,
    #[serde(alias = "industry_insights")]
    pub industry_insights: Option<IndustryInsights>,
    #[serde(alias = "learning_path")]
    pub learning_path: Vec<String>,
    #[serde(alias = "career_roadmap")]
    pub career_roadmap: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsAnalysis {
    pub career_field: String,
    pub experience_level: ExperienceLevel,
    pub current_skills: CurrentSkills,
    pub market_required_skills: Vec<String>,
    pub skill_matches: Vec<String>,
    pub skill_gaps: Vec<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub match_percentage: f64,
    pub priority_skills: Vec<PrioritySkill>,
    pub certification_recommendations: Vec<Certification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_projection: Option<SalaryProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_insights: Option<IndustryInsights>,
    pub learning_path: Vec<String>,
    pub career_roadmap: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationRoadmap {
    pub certifications: Vec<Certification>,
    pub timeline: String,
    pub cost: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecommendations {
    pub recommended_jobs: Vec<RecommendedJob>,
    pub career_progression: Vec<String>,
    pub skill_demand_trends: Vec<String>,
    pub market_insights: MarketInsights,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_current_skills_total() {
        let skills = CurrentSkills::new(&["Rust".to_string()], &["Teamwork".to_string()]);
        assert_eq!(skills.total, 2);
    }

    #[test]
    fn test_career_recommendations_from_partial_reply() {
        let recs: CareerRecommendations = serde_json::from_value(json!({
            "skillPriorities": [{
                "skill": "Docker",
                "importance": "medium",
                "reason": "Containerization is becoming standard",
                "timeToLearn": "1 month"
            }],
            "certificationRecommendations": []
        }))
        .unwrap();
        assert_eq!(recs.skill_priorities[0].time_to_learn, "1 month");
        assert!(recs.salary_projection.is_none());
    }
}

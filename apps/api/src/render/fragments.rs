use minijinja::{context, Environment, UndefinedBehavior};
use serde::Serialize;

use super::RenderError;
use crate::models::{CareerProfile, GapAnalysis};

const SKILLS_PROFILE: &str = "skills_profile.html";
const GAP_DETAILS: &str = "gap_details.html";
const RECOMMENDATIONS: &str = "recommendations.html";

const TEMPLATES: &[(&str, &str)] = &[
    (SKILLS_PROFILE, include_str!("../../templates/skills_profile.html")),
    (GAP_DETAILS, include_str!("../../templates/gap_details.html")),
    (RECOMMENDATIONS, include_str!("../../templates/recommendations.html")),
];

const MAX_GAP_CARDS: usize = 5;
const DEFAULT_SALARY_IMPACT: &str = "+35%";
const DEFAULT_PRIORITY: &str = "High";
const DEFAULT_DURATION: &str = "4-6 weeks";

#[derive(Debug, Serialize)]
struct GapCard<'a> {
    skill: &'a str,
    priority: &'static str,
    market_demand: &'static str,
    learning_time_weeks: u32,
}

#[derive(Debug, Serialize)]
struct RecommendationCard<'a> {
    title: String,
    description: &'a str,
    priority: &'a str,
    duration: &'a str,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// HTML fragments for the results page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedFragments {
    pub skills_profile: String,
    pub gap_details: String,
    pub recommendations: String,
}

/// Renders result widgets from strict, HTML-escaping templates. Any field a
/// template names must be present in its context.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, RenderError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }

    /// Technical, soft and certification chips.
    pub fn skills_profile(&self, profile: &CareerProfile) -> Result<String, RenderError> {
        self.render(
            SKILLS_PROFILE,
            context! {
                technical => profile.technical_skills,
                soft => profile.soft_skills,
                certifications => profile.certifications,
            },
        )
    }

    /// Cards for the first five skill gaps.
    pub fn gap_details(&self, analysis: &GapAnalysis) -> Result<String, RenderError> {
        let gaps: Vec<GapCard> = analysis
            .skill_gaps
            .iter()
            .take(MAX_GAP_CARDS)
            .map(|gap| GapCard {
                skill: &gap.skill,
                priority: gap.priority.as_str(),
                market_demand: gap.market_demand.as_str(),
                learning_time_weeks: gap.learning_time_weeks,
            })
            .collect();
        self.render(GAP_DETAILS, context! { gaps => gaps })
    }

    /// Salary impact banner and one card per recommendation.
    pub fn recommendations(&self, analysis: &GapAnalysis) -> Result<String, RenderError> {
        let cards: Vec<RecommendationCard> = analysis
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| RecommendationCard {
                title: non_empty(rec.title.as_deref())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Learning Path {}", i + 1)),
                description: &rec.description,
                priority: non_empty(rec.priority.as_deref()).unwrap_or(DEFAULT_PRIORITY),
                duration: non_empty(rec.duration.as_deref()).unwrap_or(DEFAULT_DURATION),
            })
            .collect();
        let salary_impact = non_empty(Some(analysis.salary_impact.as_str())).unwrap_or(DEFAULT_SALARY_IMPACT);

        self.render(
            RECOMMENDATIONS,
            context! { salary_impact => salary_impact, cards => cards },
        )
    }

    pub fn results(
        &self,
        profile: &CareerProfile,
        analysis: &GapAnalysis,
    ) -> Result<RenderedFragments, RenderError> {
        Ok(RenderedFragments {
            skills_profile: self.skills_profile(profile)?,
            gap_details: self.gap_details(analysis)?,
            recommendations: self.recommendations(analysis)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::{enhanced_profile, gap_analysis, CareerField};
    use crate::models::Recommendation;

    fn renderer() -> Renderer {
        Renderer::new().unwrap()
    }

    #[test]
    fn test_every_fallback_record_renders() {
        let renderer = renderer();
        for field in CareerField::ALL {
            let fragments = renderer
                .results(&enhanced_profile(field), &gap_analysis(field))
                .unwrap();
            assert!(!fragments.skills_profile.is_empty());
            assert!(fragments.gap_details.contains("PRIORITY"));
        }
    }

    #[test]
    fn test_empty_certifications_placeholder() {
        let profile = CareerProfile {
            technical_skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        let html = renderer().skills_profile(&profile).unwrap();
        assert!(html.contains("Rust"));
        assert!(html.contains("No certifications found"));
    }

    #[test]
    fn test_skill_names_are_escaped() {
        let profile = CareerProfile {
            technical_skills: vec!["<script>alert(1)</script>".to_string()],
            ..Default::default()
        };
        let html = renderer().skills_profile(&profile).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_gap_cards_capped_and_uppercased() {
        let mut analysis = gap_analysis(CareerField::SoftwareEngineering);
        let extra = analysis.skill_gaps[0].clone();
        analysis.skill_gaps.push(extra);
        let html = renderer().gap_details(&analysis).unwrap();
        assert_eq!(html.matches("class=\"gap-card\"").count(), 5);
        assert!(html.contains("HIGH PRIORITY"));
        assert!(html.contains("12 weeks"));
    }

    #[test]
    fn test_recommendation_defaults() {
        let analysis = GapAnalysis {
            recommendations: vec![Recommendation {
                description: "Build a portfolio".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = renderer().recommendations(&analysis).unwrap();
        assert!(html.contains("+35%"));
        assert!(html.contains("Learning Path 1"));
        assert!(html.contains("High Priority"));
        assert!(html.contains("4-6 weeks"));
    }
}

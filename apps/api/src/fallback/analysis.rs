use super::{owned, CareerField};
use crate::models::{
    CareerProfile, CurrentSkills, GapAnalysis, IndustryInsights, Level, PrioritySkill,
    Recommendation, SalaryProjection, SkillGap, SkillsAnalysis,
};

const DEFAULT_SALARY_IMPACT: &str = "+35%";

fn priority(skill: &str, importance: &str, reason: &str, time_to_learn: &str) -> PrioritySkill {
    PrioritySkill {
        skill: skill.to_string(),
        importance: importance.to_string(),
        reason: reason.to_string(),
        time_to_learn: time_to_learn.to_string(),
    }
}

/// Priority skills, salary projection and match percentage per field.
fn field_analysis(field: CareerField) -> (Vec<PrioritySkill>, SalaryProjection, f64) {
    let projection = |current: &str, with_skills: &str, top_tier: &str| SalaryProjection {
        current: current.to_string(),
        with_skills: with_skills.to_string(),
        top_tier: top_tier.to_string(),
    };

    match field {
        CareerField::DataScience => (
            vec![
                priority("Machine Learning", "critical", "Core requirement for data science roles", "6 months"),
                priority("Tableau", "high", "Data visualization is crucial", "2 months"),
                priority("R", "medium", "Statistical analysis tool", "3 months"),
                priority("Apache Spark", "medium", "Big data processing", "4 months"),
                priority("TensorFlow", "high", "Deep learning framework", "5 months"),
            ],
            projection("KES 100,000 - 150,000", "KES 200,000 - 300,000", "KES 400,000+"),
            58.0,
        ),
        CareerField::DigitalMarketing => (
            vec![
                priority("Google Ads", "critical", "Paid advertising is essential", "2 months"),
                priority("Marketing Automation", "high", "Efficiency and scalability", "3 months"),
                priority("Data Analytics", "high", "Data-driven marketing decisions", "4 months"),
                priority("Content Strategy", "medium", "Content is king in marketing", "2 months"),
                priority("CRM Management", "medium", "Customer relationship management", "1 month"),
            ],
            projection("KES 70,000 - 110,000", "KES 120,000 - 200,000", "KES 280,000+"),
            72.0,
        ),
        _ => (
            vec![
                priority("React", "critical", "High demand in frontend development", "3 months"),
                priority("Node.js", "high", "Essential for full-stack development", "2 months"),
                priority("AWS", "high", "Cloud skills are in high demand", "4 months"),
                priority("Docker", "medium", "Containerization is becoming standard", "1 month"),
                priority("MongoDB", "medium", "NoSQL databases are popular", "2 months"),
            ],
            projection("KES 80,000 - 120,000", "KES 150,000 - 250,000", "KES 300,000+"),
            65.0,
        ),
    }
}

/// Fallback for the enhanced skills analysis, built around the caller's profile.
pub fn skills_analysis(profile: &CareerProfile) -> SkillsAnalysis {
    let field = CareerField::resolve(&profile.detected_career_field);
    let (priority_skills, salary_projection, match_percentage) = field_analysis(field);

    let career_field = if profile.detected_career_field.trim().is_empty() {
        CareerField::SoftwareEngineering.label().to_string()
    } else {
        profile.detected_career_field.clone()
    };

    SkillsAnalysis {
        career_field,
        experience_level: profile.experience_level,
        current_skills: CurrentSkills::new(&profile.technical_skills, &profile.soft_skills),
        skill_gaps: priority_skills.iter().map(|p| p.skill.clone()).collect(),
        match_percentage,
        priority_skills,
        salary_projection: Some(salary_projection),
        industry_insights: Some(IndustryInsights {
            trending_skills: owned(&["AI/ML", "Cloud Computing", "Cybersecurity"]),
            emerging_opportunities: owned(&["Remote Work", "Fintech", "EdTech"]),
        }),
        ..Default::default()
    }
}

fn gap(skill: &str, demand: Level, weeks: u32) -> SkillGap {
    SkillGap {
        skill: skill.to_string(),
        user_level: "none".to_string(),
        market_demand: demand,
        priority: demand,
        learning_time_weeks: weeks,
    }
}

fn software_engineering_gaps() -> GapAnalysis {
    GapAnalysis {
        missing_skills: owned(&["React", "Node.js", "MongoDB", "AWS", "Docker"]),
        skill_gaps: vec![
            gap("React", Level::High, 6),
            gap("Node.js", Level::High, 8),
            gap("MongoDB", Level::Medium, 4),
            gap("AWS", Level::High, 12),
            gap("Docker", Level::Medium, 3),
        ],
        recommendations: vec![
            Recommendation::new(
                "Master React Development",
                "Learn React.js fundamentals, hooks, and modern patterns. Build portfolio projects and get job-ready skills.",
                "High",
                "6 weeks",
            ),
            Recommendation::new(
                "Backend Development with Node.js",
                "Master server-side JavaScript, APIs, and database integration to become a full-stack developer.",
                "High",
                "8 weeks",
            ),
            Recommendation::new(
                "Cloud Computing Fundamentals",
                "Get AWS certified and learn cloud deployment, scaling, and modern DevOps practices.",
                "High",
                "12 weeks",
            ),
            Recommendation::new(
                "Database Management",
                "Learn MongoDB and NoSQL database design for modern web applications.",
                "Medium",
                "4 weeks",
            ),
        ],
        salary_impact: DEFAULT_SALARY_IMPACT.to_string(),
        ..Default::default()
    }
}

fn importance_level(importance: &str) -> Level {
    match importance {
        "critical" | "high" => Level::High,
        "medium" => Level::Medium,
        _ => Level::Low,
    }
}

/// "2 months" is eight weeks; "3 weeks" is three.
fn weeks_from(time_to_learn: &str) -> u32 {
    let amount = time_to_learn
        .split_whitespace()
        .next()
        .and_then(|n| n.parse::<u32>().ok())
        .unwrap_or(1);
    if time_to_learn.contains("month") {
        amount * 4
    } else {
        amount
    }
}

fn capitalized(level: Level) -> &'static str {
    match level {
        Level::High => "High",
        Level::Medium => "Medium",
        Level::Low => "Low",
    }
}

fn gaps_from_priorities(priorities: &[PrioritySkill]) -> GapAnalysis {
    let skill_gaps: Vec<SkillGap> = priorities
        .iter()
        .map(|p| gap(&p.skill, importance_level(&p.importance), weeks_from(&p.time_to_learn)))
        .collect();

    let recommendations = priorities
        .iter()
        .zip(&skill_gaps)
        .map(|(p, g)| {
            Recommendation::new(
                &format!("Learn {}", p.skill),
                &p.reason,
                capitalized(g.priority),
                &p.time_to_learn,
            )
        })
        .collect();

    GapAnalysis {
        missing_skills: priorities.iter().map(|p| p.skill.clone()).collect(),
        skill_gaps,
        recommendations,
        salary_impact: DEFAULT_SALARY_IMPACT.to_string(),
        ..Default::default()
    }
}

/// Static gap analysis for a field. Software Engineering (and every field
/// without its own table) gets the hand-written sample.
pub fn gap_analysis(field: CareerField) -> GapAnalysis {
    match field {
        CareerField::DataScience | CareerField::DigitalMarketing => {
            gaps_from_priorities(&field_analysis(field).0)
        }
        _ => software_engineering_gaps(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_engineering_gap_table() {
        let analysis = gap_analysis(CareerField::SoftwareEngineering);
        let rows: Vec<(&str, Level, u32)> = analysis
            .skill_gaps
            .iter()
            .map(|g| (g.skill.as_str(), g.priority, g.learning_time_weeks))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("React", Level::High, 6),
                ("Node.js", Level::High, 8),
                ("MongoDB", Level::Medium, 4),
                ("AWS", Level::High, 12),
                ("Docker", Level::Medium, 3),
            ]
        );
        assert_eq!(analysis.salary_impact, "+35%");
        assert_eq!(analysis.recommendations.len(), 4);
    }

    #[test]
    fn test_derived_gaps_convert_months_to_weeks() {
        let analysis = gap_analysis(CareerField::DataScience);
        assert_eq!(analysis.skill_gaps[0].skill, "Machine Learning");
        assert_eq!(analysis.skill_gaps[0].learning_time_weeks, 24);
        assert_eq!(analysis.skill_gaps[0].priority, Level::High);
        assert_eq!(analysis.recommendations[0].duration.as_deref(), Some("6 months"));
    }

    #[test]
    fn test_weeks_from_durations() {
        assert_eq!(weeks_from("2 months"), 8);
        assert_eq!(weeks_from("3 weeks"), 3);
        assert_eq!(weeks_from("1 month"), 4);
    }

    #[test]
    fn test_skills_analysis_keeps_profile_skills() {
        let profile = CareerProfile {
            detected_career_field: "Data Science".to_string(),
            technical_skills: owned(&["Python", "SQL"]),
            soft_skills: owned(&["Communication"]),
            ..Default::default()
        };
        let analysis = skills_analysis(&profile);
        assert_eq!(analysis.career_field, "Data Science");
        assert_eq!(analysis.current_skills.total, 3);
        assert_eq!(analysis.match_percentage, 58.0);
        assert_eq!(analysis.skill_gaps[1], "Tableau");
    }

    #[test]
    fn test_skills_analysis_for_empty_profile() {
        let analysis = skills_analysis(&CareerProfile::default());
        assert_eq!(analysis.career_field, "Software Engineering");
        assert_eq!(analysis.match_percentage, 65.0);
    }
}

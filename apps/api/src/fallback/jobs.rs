use super::{insights::market_insights, owned, CareerField};
use crate::models::{
    ExperienceLevel, JobMarketSummary, JobPosting, JobRecommendations, RecommendedJob,
};

fn posting(
    title: &str,
    company: &str,
    skills: &[&str],
    salary_range: &str,
    experience: &str,
    remote: bool,
) -> JobPosting {
    JobPosting {
        title: title.to_string(),
        company: company.to_string(),
        location: "Nairobi, Kenya".to_string(),
        skills_required: owned(skills),
        salary_range: salary_range.to_string(),
        experience_required: experience.to_string(),
        remote_option: Some(remote),
    }
}

/// Demo postings used when a search reply carries no parsable jobs.
pub fn sample_postings(field: CareerField) -> Vec<JobPosting> {
    match field {
        CareerField::DataScience => vec![
            posting(
                "Data Scientist",
                "KCB Group",
                &["Python", "Machine Learning", "SQL", "Tableau"],
                "KES 150,000 - 250,000",
                "2-5 years",
                true,
            ),
            posting(
                "Data Analyst",
                "Equity Bank",
                &["Python", "SQL", "Excel", "Power BI"],
                "KES 80,000 - 140,000",
                "1-3 years",
                false,
            ),
        ],
        CareerField::DigitalMarketing => vec![posting(
            "Digital Marketing Specialist",
            "Jumia Kenya",
            &["Google Analytics", "SEO", "Social Media", "Content Marketing"],
            "KES 70,000 - 120,000",
            "2-4 years",
            true,
        )],
        _ => vec![
            posting(
                "Software Developer",
                "Safaricom PLC",
                &["JavaScript", "React", "Node.js", "MongoDB"],
                "KES 100,000 - 180,000",
                "2-4 years",
                true,
            ),
            posting(
                "Frontend Developer",
                "Jumia Kenya",
                &["React", "TypeScript", "CSS", "Redux"],
                "KES 90,000 - 160,000",
                "1-3 years",
                true,
            ),
        ],
    }
}

/// Static salary band per field, used when no posting carries a parsable range.
pub fn salary_band(field: CareerField) -> &'static str {
    match field {
        CareerField::SoftwareEngineering => "KES 120,000 - 250,000",
        CareerField::DataScience => "KES 140,000 - 300,000",
        CareerField::DigitalMarketing => "KES 80,000 - 180,000",
        CareerField::UiUxDesign => "KES 90,000 - 200,000",
        CareerField::ProjectManagement => "KES 100,000 - 220,000",
    }
}

pub fn job_market(field: CareerField) -> JobMarketSummary {
    let jobs = sample_postings(field);
    match field {
        CareerField::DataScience => JobMarketSummary {
            total_jobs: 45,
            jobs,
            average_salary: "KES 140,000 - 300,000".to_string(),
            top_companies: owned(&["KCB Group", "Equity Bank", "Safaricom", "NCBA Bank", "Cellulant"]),
            required_skills: owned(&["Python", "SQL", "Machine Learning", "Tableau", "R", "Statistics"]),
            locations: owned(&["Nairobi", "Remote", "Mombasa"]),
            remote_opportunities: "60%".to_string(),
        },
        CareerField::DigitalMarketing => JobMarketSummary {
            total_jobs: 65,
            jobs,
            average_salary: "KES 80,000 - 180,000".to_string(),
            top_companies: owned(&["Jumia Kenya", "Carrefour", "Naivas", "Java House", "Safaricom"]),
            required_skills: owned(&[
                "Google Analytics",
                "SEO",
                "Social Media",
                "Content Marketing",
                "Google Ads",
            ]),
            locations: owned(&["Nairobi", "Remote", "Mombasa", "Kisumu"]),
            remote_opportunities: "80%".to_string(),
        },
        _ => JobMarketSummary {
            total_jobs: 85,
            jobs,
            average_salary: "KES 120,000 - 250,000".to_string(),
            top_companies: owned(&[
                "Safaricom PLC",
                "Equity Bank",
                "KCB Group",
                "Jumia Kenya",
                "Andela",
            ]),
            required_skills: owned(&["JavaScript", "React", "Python", "Node.js", "AWS", "Git"]),
            locations: owned(&["Nairobi", "Remote", "Mombasa", "Kisumu"]),
            remote_opportunities: "75%".to_string(),
        },
    }
}

fn recommended(
    title: &str,
    company: &str,
    salary: &str,
    match_score: &str,
    requirements: &[&str],
) -> RecommendedJob {
    RecommendedJob {
        title: title.to_string(),
        company: company.to_string(),
        location: "Nairobi, Kenya".to_string(),
        salary: salary.to_string(),
        match_score: match_score.to_string(),
        requirements: owned(requirements),
    }
}

pub fn recommended_jobs(field: CareerField) -> Vec<RecommendedJob> {
    match field {
        CareerField::DataScience => vec![recommended(
            "Senior Data Scientist",
            "KCB Group",
            "KES 180,000 - 300,000",
            "82%",
            &["3+ years experience", "Python", "Machine Learning", "SQL"],
        )],
        CareerField::DigitalMarketing => vec![recommended(
            "Digital Marketing Manager",
            "Jumia Kenya",
            "KES 120,000 - 180,000",
            "88%",
            &["3+ years experience", "Google Ads", "Analytics", "SEO"],
        )],
        _ => vec![
            recommended(
                "Senior Software Developer",
                "Safaricom PLC",
                "KES 150,000 - 250,000",
                "85%",
                &["3+ years experience", "JavaScript", "React", "Node.js"],
            ),
            recommended(
                "Full Stack Developer",
                "Equity Bank",
                "KES 120,000 - 200,000",
                "78%",
                &["2+ years experience", "Python", "React", "PostgreSQL"],
            ),
        ],
    }
}

/// Next roles for a field and level. Levels without a path get a generic one.
pub fn career_progression(field: CareerField, level: ExperienceLevel) -> Vec<String> {
    use CareerField::*;
    use ExperienceLevel::*;

    let path: &[&str] = match (field, level) {
        (SoftwareEngineering, Junior) => &["Senior Developer", "Tech Lead", "Engineering Manager"],
        (SoftwareEngineering, Mid) => &[
            "Senior Developer",
            "Staff Engineer",
            "Engineering Manager",
            "Solutions Architect",
        ],
        (SoftwareEngineering, Senior) => &[
            "Principal Engineer",
            "Engineering Director",
            "VP Engineering",
            "CTO",
        ],
        (DataScience, Junior) => &["Senior Data Scientist", "ML Engineer", "Analytics Manager"],
        (DataScience, Mid) => &[
            "Principal Data Scientist",
            "Head of Analytics",
            "Data Science Manager",
        ],
        (DataScience, Senior) => &["VP of Data Science", "Chief Data Officer", "Head of AI"],
        (DigitalMarketing, Junior) => &[
            "Senior Digital Marketer",
            "Marketing Specialist",
            "Campaign Manager",
        ],
        (DigitalMarketing, Mid) => &["Marketing Manager", "Growth Manager", "Head of Marketing"],
        (DigitalMarketing, Senior) => &["VP Marketing", "CMO", "Head of Growth"],
        _ => &["Senior Role", "Management Role", "Executive Role"],
    };
    owned(path)
}

pub fn skill_demand_trends(field: CareerField) -> Vec<String> {
    let trends: &[&str] = match field {
        CareerField::SoftwareEngineering => {
            &["Cloud Computing", "AI/ML", "Cybersecurity", "DevOps", "Microservices"]
        }
        CareerField::DataScience => {
            &["Machine Learning", "Deep Learning", "MLOps", "Big Data", "AI Ethics"]
        }
        CareerField::DigitalMarketing => &[
            "Marketing Automation",
            "Data Analytics",
            "Voice Search",
            "Video Marketing",
            "Privacy-First Marketing",
        ],
        CareerField::UiUxDesign => &[
            "Design Systems",
            "Voice UI",
            "AR/VR Design",
            "Accessibility",
            "Motion Design",
        ],
        CareerField::ProjectManagement => &[
            "Digital Transformation",
            "AI Integration",
            "Remote Collaboration",
        ],
    };
    owned(trends)
}

pub fn job_recommendations(field: CareerField, level: ExperienceLevel) -> JobRecommendations {
    JobRecommendations {
        recommended_jobs: recommended_jobs(field),
        career_progression: career_progression(field, level),
        skill_demand_trends: skill_demand_trends(field),
        market_insights: market_insights(field),
    }
}

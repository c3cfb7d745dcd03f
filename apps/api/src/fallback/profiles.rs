use super::{owned, CareerField};
use crate::models::{CareerProfile, ExperienceLevel, MarketSnapshot};

/// Demo profile for a field, with its market snapshot attached.
pub fn enhanced_profile(field: CareerField) -> CareerProfile {
    let mut profile = match field {
        CareerField::DataScience => CareerProfile {
            detected_career_field: CareerField::DataScience.label().to_string(),
            experience_level: ExperienceLevel::Junior,
            career_path: Some("Junior data analyst transitioning to data science".to_string()),
            technical_skills: owned(&["Python", "SQL", "Excel", "Statistics", "Pandas"]),
            soft_skills: owned(&[
                "Analytical Thinking",
                "Communication",
                "Problem-solving",
                "Attention to Detail",
            ]),
            certifications: owned(&["Google Data Analytics"]),
            industries: owned(&["Banking", "Healthcare", "Technology"]),
            roles_suitable: owned(&["Data Analyst", "Business Analyst", "Junior Data Scientist"]),
            strength_areas: owned(&["Data Analysis", "Statistical Analysis", "Excel"]),
            improvement_areas: owned(&["Machine Learning", "Data Visualization", "Big Data"]),
            salary_range: Some("KES 100,000 - 180,000".to_string()),
            experience_years: 1,
            job_titles: owned(&["Data Analyst", "Business Analyst"]),
            ..Default::default()
        },
        CareerField::DigitalMarketing => CareerProfile {
            detected_career_field: CareerField::DigitalMarketing.label().to_string(),
            experience_level: ExperienceLevel::Junior,
            career_path: Some("Digital marketing specialist with social media focus".to_string()),
            technical_skills: owned(&[
                "Google Analytics",
                "Social Media Marketing",
                "SEO",
                "Content Marketing",
            ]),
            soft_skills: owned(&["Creativity", "Communication", "Strategic Thinking", "Adaptability"]),
            certifications: owned(&["Google Ads", "Facebook Marketing"]),
            industries: owned(&["E-commerce", "Retail", "Technology"]),
            roles_suitable: owned(&[
                "Digital Marketer",
                "Social Media Manager",
                "Marketing Coordinator",
            ]),
            strength_areas: owned(&["Social Media", "Content Creation", "Campaign Management"]),
            improvement_areas: owned(&["Data Analytics", "Marketing Automation", "Growth Hacking"]),
            salary_range: Some("KES 70,000 - 130,000".to_string()),
            experience_years: 2,
            job_titles: owned(&["Digital Marketer", "Social Media Specialist"]),
            ..Default::default()
        },
        _ => CareerProfile {
            detected_career_field: CareerField::SoftwareEngineering.label().to_string(),
            experience_level: ExperienceLevel::Junior,
            career_path: Some("Junior software developer with focus on web development".to_string()),
            technical_skills: owned(&["JavaScript", "Python", "HTML", "CSS", "SQL", "Git"]),
            soft_skills: owned(&["Problem-solving", "Communication", "Teamwork", "Critical Thinking"]),
            certifications: owned(&["Google Analytics Certified"]),
            education_level: "Bachelor's Degree".to_string(),
            industries: owned(&["Technology", "Fintech", "E-commerce"]),
            roles_suitable: owned(&[
                "Frontend Developer",
                "Full Stack Developer",
                "Software Engineer",
            ]),
            strength_areas: owned(&["Web Development", "Programming Logic", "Problem Solving"]),
            improvement_areas: owned(&["Cloud Computing", "DevOps", "System Design"]),
            salary_range: Some("KES 80,000 - 150,000".to_string()),
            experience_years: 2,
            job_titles: owned(&["Software Developer", "Web Developer"]),
            ..Default::default()
        },
    };

    profile.market_insights = Some(MarketSnapshot {
        market_demand: "High".to_string(),
        average_salary: profile.salary_range.clone().unwrap_or_default(),
        job_growth_rate: "+15% annually".to_string(),
        remote_opportunities: "65%".to_string(),
    });
    profile
}

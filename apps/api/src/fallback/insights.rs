use super::{owned, CareerField};
use crate::models::{MarketInsights, SalaryTrends};

struct InsightRow {
    demand: &'static str,
    salary: &'static str,
    growth: &'static str,
    remote: &'static str,
    skills: &'static [&'static str],
    companies: &'static [&'static str],
    trends: &'static [&'static str],
    bands: [&'static str; 3],
}

const SOFTWARE_ENGINEERING: InsightRow = InsightRow {
    demand: "Very High",
    salary: "KES 120,000 - 250,000",
    growth: "+18% annually",
    remote: "75%",
    skills: &["JavaScript", "React", "Python", "AWS", "Docker"],
    companies: &["Safaricom PLC", "Equity Bank", "KCB Group", "Jumia Kenya", "Andela"],
    trends: &[
        "Increased demand for full-stack developers",
        "Cloud computing skills are essential",
        "Remote work becoming standard",
        "AI/ML integration in applications",
        "DevOps practices adoption",
    ],
    bands: ["KES 60,000 - 120,000", "KES 120,000 - 200,000", "KES 200,000 - 350,000"],
};

const DATA_SCIENCE: InsightRow = InsightRow {
    demand: "High",
    salary: "KES 140,000 - 300,000",
    growth: "+25% annually",
    remote: "60%",
    skills: &["Python", "Machine Learning", "SQL", "Tableau", "R", "Statistics"],
    companies: &["KCB Group", "Equity Bank", "Safaricom", "NCBA Bank", "Cellulant"],
    trends: &[
        "Banking sector driving demand",
        "Machine learning automation",
        "Real-time analytics requirements",
        "Data governance focus",
        "AI ethics importance",
    ],
    bands: ["KES 80,000 - 150,000", "KES 150,000 - 250,000", "KES 250,000 - 400,000"],
};

const DIGITAL_MARKETING: InsightRow = InsightRow {
    demand: "High",
    salary: "KES 80,000 - 180,000",
    growth: "+15% annually",
    remote: "80%",
    skills: &["Google Analytics", "SEO", "Social Media", "Content Marketing", "Google Ads"],
    companies: &["Jumia Kenya", "Carrefour", "Naivas", "Java House", "Safaricom"],
    trends: &[
        "Performance marketing focus",
        "Video content dominance",
        "Marketing automation adoption",
        "Privacy-first marketing",
        "Influencer marketing growth",
    ],
    bands: ["KES 50,000 - 100,000", "KES 100,000 - 160,000", "KES 160,000 - 250,000"],
};

const UI_UX_DESIGN: InsightRow = InsightRow {
    demand: "High",
    salary: "KES 90,000 - 200,000",
    growth: "+20% annually",
    remote: "85%",
    skills: &["Figma", "Adobe XD", "Sketch", "Prototyping", "User Research", "Design Systems"],
    companies: &["Safaricom", "Jumia Kenya", "M-Kopa", "Flutterwave", "Sendy"],
    trends: &[
        "Mobile-first design approach",
        "Design systems standardization",
        "Voice and conversational UI",
        "Accessibility focus",
        "Data-driven design decisions",
    ],
    bands: ["KES 60,000 - 120,000", "KES 120,000 - 180,000", "KES 180,000 - 280,000"],
};

const PROJECT_MANAGEMENT: InsightRow = InsightRow {
    demand: "Medium-High",
    salary: "KES 100,000 - 220,000",
    growth: "+12% annually",
    remote: "70%",
    skills: &["PMP", "Scrum", "Agile", "JIRA", "Risk Management", "Stakeholder Management"],
    companies: &["Safaricom", "Equity Bank", "KCB Group", "Standard Chartered", "Accenture"],
    trends: &[
        "Agile transformation in enterprises",
        "Digital project management tools",
        "Remote team management",
        "Change management focus",
        "Data-driven project insights",
    ],
    bands: ["KES 70,000 - 130,000", "KES 130,000 - 200,000", "KES 200,000 - 350,000"],
};

pub fn market_insights(field: CareerField) -> MarketInsights {
    let row = match field {
        CareerField::SoftwareEngineering => &SOFTWARE_ENGINEERING,
        CareerField::DataScience => &DATA_SCIENCE,
        CareerField::DigitalMarketing => &DIGITAL_MARKETING,
        CareerField::UiUxDesign => &UI_UX_DESIGN,
        CareerField::ProjectManagement => &PROJECT_MANAGEMENT,
    };

    MarketInsights {
        market_demand: row.demand.to_string(),
        average_salary: row.salary.to_string(),
        job_growth_rate: row.growth.to_string(),
        remote_opportunities: row.remote.to_string(),
        top_skills: owned(row.skills),
        top_hiring_companies: owned(row.companies),
        industry_trends: owned(row.trends),
        salary_trends: SalaryTrends {
            junior: row.bands[0].to_string(),
            mid: row.bands[1].to_string(),
            senior: row.bands[2].to_string(),
        },
    }
}

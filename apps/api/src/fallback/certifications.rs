use super::CareerField;
use crate::models::{Certification, CertificationRoadmap};

fn cert(
    certification: &str,
    provider: &str,
    cost: &str,
    duration: &str,
    impact: &str,
    priority: &str,
) -> Certification {
    Certification {
        certification: certification.to_string(),
        provider: provider.to_string(),
        cost: cost.to_string(),
        duration: duration.to_string(),
        impact: impact.to_string(),
        priority: priority.to_string(),
    }
}

fn roadmap(certifications: Vec<Certification>, timeline: &str, cost: &str) -> CertificationRoadmap {
    CertificationRoadmap {
        certifications,
        timeline: timeline.to_string(),
        cost: cost.to_string(),
    }
}

pub fn certification_roadmap(field: CareerField) -> CertificationRoadmap {
    match field {
        CareerField::SoftwareEngineering => roadmap(
            vec![
                cert(
                    "AWS Certified Developer - Associate",
                    "Amazon Web Services",
                    "KES 20,000",
                    "3 months",
                    "High demand for cloud skills in Kenya tech industry",
                    "high",
                ),
                cert(
                    "Google Cloud Professional Developer",
                    "Google Cloud",
                    "KES 25,000",
                    "4 months",
                    "Growing cloud adoption by Kenyan enterprises",
                    "medium",
                ),
                cert(
                    "React Developer Certification",
                    "Meta (Facebook)",
                    "KES 15,000",
                    "2 months",
                    "React is the most in-demand frontend framework",
                    "high",
                ),
            ],
            "6-9 months",
            "KES 60,000",
        ),
        CareerField::DataScience => roadmap(
            vec![
                cert(
                    "Google Data Analytics Professional Certificate",
                    "Google via Coursera",
                    "KES 15,000",
                    "6 months",
                    "Industry-recognized credential for entry-level positions",
                    "high",
                ),
                cert(
                    "AWS Certified Machine Learning - Specialty",
                    "Amazon Web Services",
                    "KES 30,000",
                    "4 months",
                    "Cloud ML skills are highly valued in the market",
                    "medium",
                ),
                cert(
                    "Microsoft Azure Data Scientist Associate",
                    "Microsoft",
                    "KES 25,000",
                    "3 months",
                    "Growing demand for Azure skills in enterprise",
                    "medium",
                ),
            ],
            "8-12 months",
            "KES 70,000",
        ),
        CareerField::DigitalMarketing => roadmap(
            vec![
                cert(
                    "Google Ads Certification",
                    "Google",
                    "Free",
                    "1 month",
                    "Essential for paid advertising roles",
                    "high",
                ),
                cert(
                    "Facebook Social Media Marketing Professional Certificate",
                    "Meta via Coursera",
                    "KES 12,000",
                    "4 months",
                    "Social media marketing is crucial for brands",
                    "high",
                ),
                cert(
                    "Google Analytics Individual Qualification (IQ)",
                    "Google",
                    "Free",
                    "2 weeks",
                    "Data-driven marketing is the industry standard",
                    "high",
                ),
                cert(
                    "HubSpot Content Marketing Certification",
                    "HubSpot Academy",
                    "Free",
                    "3 weeks",
                    "Content marketing drives engagement and conversions",
                    "medium",
                ),
            ],
            "4-6 months",
            "KES 12,000",
        ),
        CareerField::UiUxDesign => roadmap(
            vec![
                cert(
                    "Google UX Design Professional Certificate",
                    "Google via Coursera",
                    "KES 18,000",
                    "6 months",
                    "Comprehensive UX design foundation",
                    "high",
                ),
                cert(
                    "Adobe Certified Expert (ACE) - Adobe XD",
                    "Adobe",
                    "KES 22,000",
                    "2 months",
                    "Industry-standard design tool proficiency",
                    "medium",
                ),
            ],
            "6-8 months",
            "KES 40,000",
        ),
        CareerField::ProjectManagement => roadmap(
            vec![
                cert(
                    "Project Management Professional (PMP)",
                    "Project Management Institute",
                    "KES 65,000",
                    "6 months",
                    "Gold standard for project management roles",
                    "high",
                ),
                cert(
                    "Certified ScrumMaster (CSM)",
                    "Scrum Alliance",
                    "KES 35,000",
                    "1 month",
                    "Agile methodology expertise is in high demand",
                    "high",
                ),
                cert(
                    "Google Project Management Professional Certificate",
                    "Google via Coursera",
                    "KES 15,000",
                    "6 months",
                    "Entry-level project management credential",
                    "medium",
                ),
            ],
            "6-12 months",
            "KES 115,000",
        ),
    }
}

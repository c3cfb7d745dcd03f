// Prompt constants for CV profile extraction.

/// Profile extraction prompt. Replace `{cv_text}` before sending.
pub const PROFILE_PROMPT_TEMPLATE: &str = r#"Analyze this CV and build a career profile of the candidate.

Return a JSON object with this EXACT schema:
{
  "technicalSkills": ["JavaScript", "SQL"],
  "softSkills": ["Communication"],
  "certifications": ["AWS Certified Cloud Practitioner"],
  "experienceYears": 3,
  "educationLevel": "Bachelor's Degree",
  "jobTitles": ["Software Developer"],
  "detectedCareerField": "Software Engineering",
  "experienceLevel": "junior",
  "careerPath": "One sentence describing the candidate's trajectory",
  "industries": ["Fintech"],
  "rolesSuitable": ["Backend Developer"],
  "strengthAreas": ["API design"],
  "improvementAreas": ["Cloud infrastructure"],
  "salaryRange": "KES 80,000 - 150,000"
}

Rules:
- experienceLevel is exactly one of: junior, mid, senior, lead.
- experienceYears is a whole number; use 0 when the CV gives no dates.
- detectedCareerField is a broad field such as "Software Engineering", "Data Science",
  "Digital Marketing", "UI/UX Design" or "Project Management". Leave it empty when unsure.
- Only list skills, certifications and titles that appear in the CV. Do NOT invent any.

CV text:
---
{cv_text}
---"#;

/// Required top-level keys of a profile reply.
pub const PROFILE_REQUIRED_KEYS: &[&str] = &["technicalSkills", "softSkills", "jobTitles"];

pub const ROLE_DETECTOR_SYSTEM: &str = "You are an AI career classifier. \
    Reply with a short profession label only, no punctuation and no explanation.";

/// Role classification prompt. Replace `{cv_text}` before sending.
pub const ROLE_DETECTOR_TEMPLATE: &str = r#"Based on the following resume, identify the most likely profession or career path.
Return only a short, specific label like:
- Software Engineer
- Data Analyst
- Digital Marketer
- UI/UX Designer
- Project Manager
- Accountant
- Mechanical Engineer

Resume text:
---
{cv_text}
---"#;

// Prompt constants for the job-market adapter.

/// Web-search instruction for one query. Replace `{query}` and `{market_context}`.
pub const JOB_SEARCH_TEMPLATE: &str = r#"Search for current job postings: "{query}".
Extract each posting's requirements, the skills needed and the salary range.

Return a JSON object with this EXACT schema:
{
  "jobs": [
    {
      "title": "Software Developer",
      "company": "Safaricom PLC",
      "location": "Nairobi, Kenya",
      "skillsRequired": ["JavaScript", "React"],
      "salaryRange": "KES 100,000 - 180,000",
      "experienceRequired": "2-4 years",
      "remoteOption": true
    }
  ]
}

Use short canonical skill names ("Node.js", not "experience with Node.js").
Only include postings you actually found. If none are found, return {"jobs": []}.
{market_context}"#;

pub const JOB_SEARCH_REQUIRED_KEYS: &[&str] = &["jobs"];

/// Market insights instruction. Replace `{career_field}` and `{market_context}`.
pub const MARKET_INSIGHTS_TEMPLATE: &str = r#"Search for the current job market outlook for {career_field} professionals.

Return a JSON object with this EXACT schema:
{
  "marketDemand": "High",
  "averageSalary": "KES 120,000 - 250,000",
  "jobGrowthRate": "+18% annually",
  "remoteOpportunities": "75%",
  "topSkills": ["JavaScript", "React"],
  "topHiringCompanies": ["Safaricom PLC"],
  "industryTrends": ["Cloud computing skills are essential"],
  "salaryTrends": {
    "junior": "KES 60,000 - 120,000",
    "mid": "KES 120,000 - 200,000",
    "senior": "KES 200,000 - 350,000"
  }
}

{market_context}"#;

pub const MARKET_INSIGHTS_REQUIRED_KEYS: &[&str] =
    &["marketDemand", "averageSalary", "topSkills", "salaryTrends"];

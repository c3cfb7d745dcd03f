// Prompt constants for skills-gap analysis.

/// Gap analysis prompt. Replace `{user_skills}` and `{market_demand}` (both JSON).
pub const GAP_ANALYSIS_TEMPLATE: &str = r#"Analyze the skills gap between a candidate's current skills and market demand.

User skills: {user_skills}
Market demand: {market_demand}

Return a JSON object with this EXACT schema:
{
  "missingSkills": ["AWS"],
  "skillGaps": [
    {
      "skill": "AWS",
      "userLevel": "none",
      "marketDemand": "high",
      "priority": "high",
      "learningTimeWeeks": 12
    }
  ],
  "recommendations": [
    {"title": "Cloud Fundamentals", "description": "Start with the AWS Cloud Practitioner track",
     "priority": "High", "duration": "4-6 weeks"}
  ],
  "salaryImpact": "+35%"
}

Rules:
- userLevel is one of: none, beginner, intermediate, advanced.
- marketDemand and priority are exactly one of: high, medium, low.
- learningTimeWeeks is a whole number of weeks.
- Order skillGaps by priority, highest first."#;

/// Required top-level keys of a gap analysis reply.
pub const GAP_REQUIRED_KEYS: &[&str] = &["missingSkills", "skillGaps"];

// Prompt constants for career-specific recommendations.

/// Career recommendations prompt. Replace `{career_field}`, `{experience_level}`,
/// `{current_skills}`, `{target_role}` and `{market_context}` before sending.
pub const CAREER_RECOMMENDATIONS_TEMPLATE: &str = r#"Give career-specific recommendations for a {experience_level} professional in {career_field}.

Current skills: {current_skills}
Target role: {target_role}

{market_context}

Return a JSON object with this EXACT schema:
{
  "skillPriorities": [
    {"skill": "AWS", "importance": "high", "reason": "Cloud skills are in high demand", "timeToLearn": "4 months"}
  ],
  "certificationRecommendations": [
    {"certification": "AWS Certified Developer - Associate", "provider": "Amazon Web Services",
     "cost": "KES 20,000", "duration": "3 months", "impact": "High salary impact", "priority": "high"}
  ],
  "salaryProjection": {"current": "KES 80,000 - 120,000", "withSkills": "KES 150,000 - 250,000", "topTier": "KES 300,000+"},
  "industryInsights": {"trendingSkills": ["Cloud Computing"], "emergingOpportunities": ["Fintech"]},
  "learningPath": ["Step 1", "Step 2"],
  "careerRoadmap": ["Next role", "Role after that"]
}

Rules:
- List skills the candidate does NOT already have, most important first.
- importance and priority are one of: critical, high, medium, low.
- Quote certification costs as a single amount in the local currency, or "Free"."#;

/// Required top-level keys of a career recommendations reply.
pub const CAREER_REQUIRED_KEYS: &[&str] = &["skillPriorities", "certificationRecommendations"];

/// Used when the caller names no target role.
pub const DEFAULT_TARGET_ROLE: &str = "career advancement";

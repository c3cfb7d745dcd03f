// Shared prompt constants.
// Each feature module that calls the provider defines its own prompts.rs
// alongside it; this file holds the cross-cutting fragments.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise career and labour-market analyst. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Regional framing appended to market-facing prompts. Replace `{location}`.
pub const MARKET_CONTEXT: &str = "\
    Focus on the job market in {location}. Quote salaries as monthly gross ranges \
    in the local currency, formatted like \"KES 120,000 - 250,000\".";

pub fn market_context(location: &str) -> String {
    MARKET_CONTEXT.replace("{location}", location)
}

use tracing::warn;

use super::prompts::{MARKET_INSIGHTS_REQUIRED_KEYS, MARKET_INSIGHTS_TEMPLATE};
use super::MarketError;
use crate::ai_client::{parse_json_reply, prompts::market_context, AiProvider};
use crate::fallback::{self, CareerField};
use crate::models::{MarketInsights, Sourced};

async fn search_insights(
    ai: &dyn AiProvider,
    career_field: &str,
    location: &str,
) -> Result<MarketInsights, MarketError> {
    let prompt = MARKET_INSIGHTS_TEMPLATE
        .replace("{career_field}", career_field)
        .replace("{market_context}", &market_context(location));

    let reply = ai.web_search(&prompt).await?;
    Ok(parse_json_reply(&reply, MARKET_INSIGHTS_REQUIRED_KEYS)?)
}

/// Market outlook for a career field; the field's static insights on failure.
pub async fn market_insights(
    ai: &dyn AiProvider,
    career_field: &str,
    location: &str,
) -> Sourced<MarketInsights> {
    match search_insights(ai, career_field, location).await {
        Ok(insights) => Sourced::live(insights),
        Err(e) => {
            warn!("Market insights failed for '{}', using fallback: {}", career_field, e);
            Sourced::fallback(fallback::market_insights(CareerField::resolve(career_field)))
        }
    }
}

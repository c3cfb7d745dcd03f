//! SkillBot: a single-turn career assistant over chat completion.

pub mod handlers;
pub mod prompts;

use tracing::warn;

use crate::ai_client::{AiProvider, Completion};
use crate::models::Sourced;
use prompts::{OFFLINE_REPLY, SKILLBOT_SYSTEM};

const CHAT_TEMPERATURE: f32 = 0.7;

/// Answers one user message. Provider failures get a canned reply.
pub async fn ask(ai: &dyn AiProvider, message: &str) -> Sourced<String> {
    match ai
        .complete(Completion::text(message, SKILLBOT_SYSTEM, CHAT_TEMPERATURE))
        .await
    {
        Ok(reply) if !reply.trim().is_empty() => Sourced::live(reply.trim().to_string()),
        Ok(_) => {
            warn!("SkillBot returned an empty reply, using fallback");
            Sourced::fallback(OFFLINE_REPLY.to_string())
        }
        Err(e) => {
            warn!("SkillBot request failed, using fallback: {}", e);
            Sourced::fallback(OFFLINE_REPLY.to_string())
        }
    }
}

/// AI client: the single point of entry for all provider calls in SkillBridge.
///
/// ARCHITECTURAL RULE: No other module may call the provider HTTP API directly.
/// Feature modules depend on the `AiProvider` trait, carried in `AppState` as
/// `Arc<dyn AiProvider>`; `MistralClient` is the production implementation.
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub mod json;
pub mod mistral;
pub mod prompts;

pub use mistral::MistralClient;

#[derive(Debug, Error)]
pub enum MistralError {
    #[error("MISTRAL_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Provider returned empty content")]
    EmptyContent,

    #[error("No JSON object found in provider reply")]
    NoJson,

    #[error("Provider reply is missing required fields: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// A single chat-completion request.
#[derive(Debug, Clone, Copy)]
pub struct Completion<'a> {
    pub system: Option<&'a str>,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Ask the provider for its structured JSON output mode.
    pub json_mode: bool,
}

impl<'a> Completion<'a> {
    /// Low-temperature request in JSON output mode.
    pub fn json(prompt: &'a str, system: &'a str, max_tokens: u32) -> Self {
        Self {
            system: Some(system),
            prompt,
            temperature: 0.1,
            max_tokens: Some(max_tokens),
            json_mode: true,
        }
    }

    /// Free-text conversational request.
    pub fn text(prompt: &'a str, system: &'a str, temperature: f32) -> Self {
        Self {
            system: Some(system),
            prompt,
            temperature,
            max_tokens: None,
            json_mode: false,
        }
    }
}

/// The provider seam. Implement this to swap backends without touching
/// handlers or feature modules.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Runs OCR over a whole document and returns its text.
    async fn ocr(&self, document: &[u8], mime: &str) -> Result<String, MistralError>;

    /// Runs a chat completion and returns the assistant's text reply.
    async fn complete(&self, request: Completion<'_>) -> Result<String, MistralError>;

    /// Runs a completion with the web-search tool enabled.
    async fn web_search(&self, prompt: &str) -> Result<String, MistralError>;
}

/// Calls the provider in JSON mode and deserializes the reply into `T`.
///
/// `required` lists the camelCase keys the top-level object must carry;
/// their snake_case spellings are accepted too.
pub async fn complete_json<T: DeserializeOwned>(
    ai: &dyn AiProvider,
    prompt: &str,
    system: &str,
    required: &[&str],
    max_tokens: u32,
) -> Result<T, MistralError> {
    let reply = ai
        .complete(Completion::json(prompt, system, max_tokens))
        .await?;
    debug!("Provider JSON reply: {} chars", reply.len());
    parse_json_reply(&reply, required)
}

/// Extracts the first JSON object from `reply`, checks `required` keys and
/// deserializes it.
pub fn parse_json_reply<T: DeserializeOwned>(reply: &str, required: &[&str]) -> Result<T, MistralError> {
    let raw = json::extract_json_object(reply).ok_or(MistralError::NoJson)?;
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let missing = json::missing_keys(&value, required);
    if !missing.is_empty() {
        return Err(MistralError::Schema { missing });
    }

    serde_json::from_value(value).map_err(MistralError::Parse)
}

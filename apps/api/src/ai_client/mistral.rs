//! Mistral implementation of [`AiProvider`]: OCR, chat completions and
//! web-search conversations over the public REST API.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::{AiProvider, Completion, MistralError};
use crate::config::Config;

const REQUEST_TIMEOUT_SECS: u64 = 120;
const SEARCH_TEMPERATURE: f32 = 0.1;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Value,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Serialize)]
struct OcrRequest<'a> {
    model: &'a str,
    document: OcrDocument,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OcrDocument {
    DocumentUrl { document_url: String },
    ImageUrl { image_url: String },
}

#[derive(Debug, Deserialize)]
struct OcrResponse {
    pages: Vec<OcrPage>,
}

#[derive(Debug, Deserialize)]
struct OcrPage {
    markdown: String,
}

#[derive(Debug, Serialize)]
struct ConversationRequest<'a> {
    model: &'a str,
    inputs: &'a str,
    tools: Vec<Tool>,
    completion_args: CompletionArgs,
    store: bool,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct CompletionArgs {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ConversationResponse {
    #[serde(default)]
    outputs: Vec<Value>,
}

/// HTTP client for the Mistral API. Cheap to clone.
#[derive(Clone)]
pub struct MistralClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    chat_model: String,
    ocr_model: String,
}

impl MistralClient {
    pub fn from_config(config: &Config) -> Result<Self, MistralError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: config.mistral_api_key.clone(),
            base_url: config.mistral_base_url.trim_end_matches('/').to_string(),
            chat_model: config.chat_model.clone(),
            ocr_model: config.ocr_model.clone(),
        })
    }

    pub fn chat_model(&self) -> &str {
        &self.chat_model
    }

    fn api_key(&self) -> Result<&str, MistralError> {
        self.api_key.as_deref().ok_or(MistralError::MissingApiKey)
    }

    /// POSTs a JSON body and decodes a JSON response. Non-2xx replies become
    /// `MistralError::Api`; there is no retry.
    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, MistralError> {
        let api_key = self.api_key()?;
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Mistral {} returned {}: {}", path, status, body);
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
                .unwrap_or(body);
            return Err(MistralError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<R>().await?)
    }
}

#[async_trait]
impl AiProvider for MistralClient {
    async fn ocr(&self, document: &[u8], mime: &str) -> Result<String, MistralError> {
        let data_uri = format!("data:{};base64,{}", mime, STANDARD.encode(document));
        let document = if mime.starts_with("image/") {
            OcrDocument::ImageUrl {
                image_url: data_uri,
            }
        } else {
            OcrDocument::DocumentUrl {
                document_url: data_uri,
            }
        };

        let response: OcrResponse = self
            .post_json(
                "/ocr",
                &OcrRequest {
                    model: &self.ocr_model,
                    document,
                },
            )
            .await?;

        let text = response
            .pages
            .iter()
            .map(|page| page.markdown.trim())
            .filter(|md| !md.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        if text.is_empty() {
            return Err(MistralError::EmptyContent);
        }
        debug!("OCR succeeded: {} pages, {} chars", response.pages.len(), text.len());
        Ok(text)
    }

    async fn complete(&self, request: Completion<'_>) -> Result<String, MistralError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: request.prompt,
        });

        let body = ChatRequest {
            model: &self.chat_model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let response: ChatResponse = self.post_json("/chat/completions", &body).await?;

        if let Some(usage) = &response.usage {
            debug!(
                "Chat completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        response
            .choices
            .first()
            .and_then(|choice| content_text(&choice.message.content))
            .ok_or(MistralError::EmptyContent)
    }

    async fn web_search(&self, prompt: &str) -> Result<String, MistralError> {
        let body = ConversationRequest {
            model: &self.chat_model,
            inputs: prompt,
            tools: vec![Tool { kind: "web_search" }],
            completion_args: CompletionArgs {
                temperature: SEARCH_TEMPERATURE,
            },
            store: false,
        };

        let response: ConversationResponse = self.post_json("/conversations", &body).await?;

        response
            .outputs
            .iter()
            .rev()
            .filter(|entry| entry.get("type").and_then(Value::as_str) == Some("message.output"))
            .find_map(|entry| entry.get("content").and_then(content_text))
            .ok_or(MistralError::EmptyContent)
    }
}

/// Reads message content that is either a plain string or a list of chunks
/// (`{"type": "text", "text": ...}`); tool-reference chunks are skipped.
fn content_text(content: &Value) -> Option<String> {
    let text = match content {
        Value::String(s) => s.trim().to_string(),
        Value::Array(chunks) => chunks
            .iter()
            .filter(|chunk| chunk.get("type").and_then(Value::as_str) == Some("text"))
            .filter_map(|chunk| chunk.get("text").and_then(Value::as_str))
            .collect::<String>()
            .trim()
            .to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

//! Client for the hosted completion service that produces every piece of travel content.
//!
//! Two calling conventions are supported and selected by `GENERATION_MODE`:
//! - `structured`: the request carries a JSON schema and the service returns a JSON object
//! - `text`: the schema is described in the prompt and the reply text is parsed locally
//!
//! Either way the reply is treated as untrusted and must deserialize into the expected
//! type before it is used.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{CallingConvention, GenerationConfig};

#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Short identifier for the schema, sent as `json_schema.name`.
    pub schema_name: String,
    pub schema: Value,
    pub model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    /// The call itself failed (network, status, missing credentials).
    Service,
    /// The call returned something that does not parse as the expected shape.
    ResponseShape,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation service is not configured: {0}")]
    NotConfigured(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generation request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generation service returned an empty response")]
    EmptyResponse,
    #[error("malformed JSON in generation response: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl GenerationError {
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            GenerationError::NotConfigured(_)
            | GenerationError::Http(_)
            | GenerationError::Status { .. }
            | GenerationError::EmptyResponse => GenerationErrorKind::Service,
            GenerationError::MalformedJson(_) | GenerationError::Shape(_) => {
                GenerationErrorKind::ResponseShape
            }
        }
    }
}

/// The external completion provider.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Schema-constrained generation. The returned value has not been checked locally.
    async fn generate_object(&self, request: &GenerationRequest) -> Result<Value, GenerationError>;

    /// Plain completion of a prompt.
    async fn generate_text(&self, prompt: &str, model: &str) -> Result<String, GenerationError>;

    fn is_configured(&self) -> bool {
        true
    }
}

/// Runs `request` with the given convention and deserializes the reply into `T`.
pub async fn generate_validated<T: DeserializeOwned>(
    service: &dyn GenerationService,
    request: &GenerationRequest,
    convention: CallingConvention,
) -> Result<T, GenerationError> {
    match convention {
        CallingConvention::Structured => {
            let value = service.generate_object(request).await?;
            serde_json::from_value(value).map_err(|e| GenerationError::Shape(e.to_string()))
        }
        CallingConvention::RawText => {
            let prompt = format!(
                "{}\n\nRespond with JSON only, no commentary, matching this JSON schema:\n{}",
                request.prompt, request.schema
            );
            let text = service.generate_text(&prompt, &request.model).await?;
            parse_json_payload(&text)
        }
    }
}

/// A generation service bound to the model and calling convention every prompt uses.
#[derive(Clone)]
pub struct Generator {
    service: Arc<dyn GenerationService>,
    model: String,
    convention: CallingConvention,
}

impl Generator {
    pub fn new(service: Arc<dyn GenerationService>, config: &GenerationConfig) -> Self {
        Self {
            service,
            model: config.model.clone(),
            convention: config.convention,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn convention(&self) -> CallingConvention {
        self.convention
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_configured()
    }

    pub async fn run<T: DeserializeOwned>(&self, request: &GenerationRequest) -> Result<T, GenerationError> {
        generate_validated(self.service.as_ref(), request, self.convention).await
    }
}

fn fenced_block() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)```(?:json|JSON)?\s*(.*?)\s*```").expect("fence pattern is valid")
    })
}

/// Pulls the JSON document out of a model reply that may wrap it in a code fence or prose.
pub fn extract_json_payload(text: &str) -> Option<&str> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(inner) = fenced_block().captures(text).and_then(|c| c.get(1)) {
        return Some(inner.as_str());
    }

    let start = text.find(|c: char| c == '{' || c == '[')?;
    let closing = if text[start..].starts_with('{') { '}' } else { ']' };
    let end = text.rfind(closing)?;
    (end > start).then(|| &text[start..=end])
}

pub fn parse_json_payload<T: DeserializeOwned>(text: &str) -> Result<T, GenerationError> {
    let payload = extract_json_payload(text).ok_or(GenerationError::EmptyResponse)?;
    let value: Value = serde_json::from_str(payload)?;
    serde_json::from_value(value).map_err(|e| GenerationError::Shape(e.to_string()))
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'a str,
    schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible `/chat/completions` client.
#[derive(Clone)]
pub struct OpenAiGenerationService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiGenerationService {
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn complete(
        &self,
        prompt: &str,
        model: &str,
        response_format: Option<ResponseFormat<'_>>,
    ) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::NotConfigured("GENERATION_API_KEY not set".to_string()))?;

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl GenerationService for OpenAiGenerationService {
    async fn generate_object(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        let format = ResponseFormat {
            format_type: "json_schema",
            json_schema: JsonSchemaFormat {
                name: &request.schema_name,
                schema: &request.schema,
            },
        };
        let content = self
            .complete(&request.prompt, &request.model, Some(format))
            .await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn generate_text(&self, prompt: &str, model: &str) -> Result<String, GenerationError> {
        self.complete(prompt, model, None).await
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

use std::time::Duration;

use serde::Deserialize;

use crate::{ChatTurn, FailureKind, ReplyError, TurnRole};

/// Persona sent with every request.
const SYSTEM_INSTRUCTION: &str = "You are a helpful and charismatic AI assistant for a \
     developer's portfolio website. You know about the developer's projects (Nexus, EtherFlow, \
     Lumina, Aura, Zenith) and can discuss their technologies like React, AI, Blockchain, and \
     Design. Keep answers concise and professional.";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone)]
pub struct AssistantSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl AssistantSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The remote generative-text capability, reduced to one logical operation.
/// Callers treat it as `history x text -> text | error`; everything about
/// transport, prompting, and response schema stays behind this seam.
#[async_trait::async_trait]
pub trait Assistant: Send + Sync {
    async fn reply(&self, history: &[ChatTurn], text: &str) -> Result<String, ReplyError>;
}

/// `Assistant` over the Gemini `generateContent` HTTP/JSON endpoint.
#[derive(Debug, Clone)]
pub struct GeminiAssistant {
    settings: AssistantSettings,
}

impl GeminiAssistant {
    pub fn new(settings: AssistantSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ReplyError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ReplyError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn build_body(history: &[ChatTurn], text: &str) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> = history
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": role_name(turn.role),
                    "parts": [{ "text": turn.text }],
                })
            })
            .collect();
        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{ "text": text }],
        }));

        serde_json::json!({
            "system_instruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": contents,
        })
    }
}

fn role_name(role: TurnRole) -> &'static str {
    match role {
        TurnRole::User => "user",
        TurnRole::Model => "model",
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate; empty when absent.
    fn text(&self) -> String {
        let Some(content) = self
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
        else {
            return String::new();
        };
        content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

#[async_trait::async_trait]
impl Assistant for GeminiAssistant {
    async fn reply(&self, history: &[ChatTurn], text: &str) -> Result<String, ReplyError> {
        let client = self.build_client()?;

        let response = client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&Self::build_body(history, text))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReplyError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| ReplyError::new(FailureKind::MalformedResponse, err.to_string()))?;

        // A well-formed reply with no text is Ok(""); the session substitutes
        // its own apology line for that case rather than treating it as an
        // error.
        Ok(parsed.text())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ReplyError {
    if err.is_timeout() {
        return ReplyError::new(FailureKind::Timeout, err.to_string());
    }
    ReplyError::new(FailureKind::Network, err.to_string())
}

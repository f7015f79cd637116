use crate::error::{Result, SteelSalesError};
use crate::llm::types::{ChatMessage, ChatRequest, ChatResponse};
use log::debug;
use reqwest::Client;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Thin client for Groq's chat-completions API. One prompt in, one
/// free-text completion out; no retry, no timeout beyond the transport
/// default. The completion is opaque here and parsed elsewhere.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GROQ_BASE_URL.to_string(),
        }
    }

    /// Builds a client from the `GROQ_API_KEY` environment variable.
    /// A missing or empty variable is a configuration error; nothing that
    /// needs the LLM can proceed without it.
    pub fn from_env() -> Result<Self> {
        match std::env::var("GROQ_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(SteelSalesError::MissingApiKey),
        }
    }

    /// Sends a single user prompt and returns the completion text.
    pub async fn chat(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let payload = ChatRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::user(prompt)],
        };

        debug!("Sending chat request to {} (model {})", url, model);

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SteelSalesError::LlmApi {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = res.json().await?;
        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or(SteelSalesError::EmptyCompletion)?;

        Ok(choice.message.content)
    }
}

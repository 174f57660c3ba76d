use reqwest::Client;

use crate::error::{PlInsightsError, Result};
use crate::llm::types::{ChatCompletionRequest, ChatCompletionResponse};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion model, matching the analyst prompts it is tuned for.
pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| PlInsightsError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Point at a different completions endpoint (proxy, test double).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) async fn chat_completion(&self, request: &ChatCompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await?;
            return Err(PlInsightsError::ProviderError {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatCompletionResponse = res.json().await?;
        let content = body
            .choices
            .first()
            .ok_or_else(|| {
                PlInsightsError::MalformedResponse("empty choices list".to_string())
            })?
            .message
            .content
            .trim()
            .to_string();

        if content.is_empty() {
            return Err(PlInsightsError::MalformedResponse(
                "completion contained no text".to_string(),
            ));
        }

        Ok(content)
    }
}

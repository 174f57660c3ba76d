//! The outermost request boundary around the AI collaborator.
//!
//! `explain` and `ask` are infallible by contract: every provider failure
//! (transport, quota, timeout, unparseable response) is absorbed here and
//! replaced with the deterministic heuristic output, so the caller only
//! ever sees a lower-quality answer, never an error.

use std::time::Duration;

use log::warn;
use tokio::time::timeout;

use crate::commentary::{generate_commentary, parse_commentary};
use crate::error::{PlInsightsError, Result};
use crate::llm::client::{OpenAiClient, DEFAULT_MODEL};
use crate::llm::prompts;
use crate::llm::types::{ChatCompletionRequest, ChatMessage};
use crate::qa::answer_question;
use crate::schema::{AnswerResponse, Commentary, ProfitAndLoss, QuestionRequest};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const COMMENTARY_TEMPERATURE: f32 = 0.3;
const COMMENTARY_MAX_TOKENS: u32 = 800;
const QUESTION_TEMPERATURE: f32 = 0.2;
const QUESTION_MAX_TOKENS: u32 = 300;

pub struct AnalystService {
    client: OpenAiClient,
    model: String,
    timeout: Duration,
}

impl AnalystService {
    pub fn new(client: OpenAiClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Budget for one outbound completion call. Enforced here, at the
    /// collaborator boundary, not inside the aggregator.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Narrative commentary for the report. Falls back to the heuristic
    /// generator on any provider failure.
    pub async fn explain(&self, pl: &ProfitAndLoss) -> Commentary {
        match self.try_explain(pl).await {
            Ok(commentary) => commentary,
            Err(e) => {
                warn!("AI commentary failed ({e}); using heuristic commentary");
                generate_commentary(pl)
            }
        }
    }

    /// Answer to a free-text question about the report. Falls back to the
    /// heuristic answerer on any provider failure.
    pub async fn ask(&self, question: &str, pl: &ProfitAndLoss) -> String {
        match self.try_ask(question, pl).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!("AI answer failed ({e}); using heuristic answer");
                answer_question(question, pl)
            }
        }
    }

    /// Request/response form of [`Self::ask`] for transport layers.
    pub async fn handle_question(&self, request: &QuestionRequest) -> AnswerResponse {
        AnswerResponse {
            answer: self.ask(&request.question, &request.pl).await,
        }
    }

    async fn try_explain(&self, pl: &ProfitAndLoss) -> Result<Commentary> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompts::SYSTEM_PROMPT_COMMENTARY),
                ChatMessage::user(prompts::build_commentary_prompt(pl)),
            ],
            temperature: COMMENTARY_TEMPERATURE,
            max_tokens: COMMENTARY_MAX_TOKENS,
        };

        let text = self.complete(&request).await?;
        Ok(parse_commentary(&text).normalize())
    }

    async fn try_ask(&self, question: &str, pl: &ProfitAndLoss) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompts::SYSTEM_PROMPT_QUESTION),
                ChatMessage::user(prompts::build_question_prompt(question, pl)),
            ],
            temperature: QUESTION_TEMPERATURE,
            max_tokens: QUESTION_MAX_TOKENS,
        };

        self.complete(&request).await
    }

    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String> {
        timeout(self.timeout, self.client.chat_completion(request))
            .await
            .map_err(|_| PlInsightsError::TimeoutError(self.timeout.as_secs()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ReportingPeriod;
    use chrono::NaiveDate;
    use indexmap::IndexMap;

    fn sample_pl() -> ProfitAndLoss {
        let mut revenue = IndexMap::new();
        revenue.insert("Sales".to_string(), vec![1_000.0, 1_500.0]);
        let mut cogs = IndexMap::new();
        cogs.insert("COGS".to_string(), vec![400.0, 600.0]);
        let mut opex = IndexMap::new();
        opex.insert("Utilities".to_string(), vec![100.0, 130.0]);
        ProfitAndLoss {
            period: ReportingPeriod {
                start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
                currency: "GBP".to_string(),
            },
            months: vec!["Jan".to_string(), "Feb".to_string()],
            revenue,
            cogs,
            opex,
            other_income: IndexMap::new(),
            other_expense: IndexMap::new(),
            budget: None,
        }
    }

    fn unreachable_service() -> AnalystService {
        // Nothing listens on this port; the request fails immediately and
        // the service must fall back to the heuristics.
        let client = OpenAiClient::new("test-key".to_string())
            .with_base_url("http://127.0.0.1:1/v1".to_string());
        AnalystService::new(client).with_timeout(Duration::from_secs(2))
    }

    #[tokio::test]
    async fn test_explain_falls_back_to_heuristic_commentary() {
        let pl = sample_pl();
        let commentary = unreachable_service().explain(&pl).await;
        assert_eq!(commentary, generate_commentary(&pl));
    }

    #[tokio::test]
    async fn test_ask_falls_back_to_heuristic_answer() {
        let pl = sample_pl();
        let answer = unreachable_service()
            .ask("What is the revenue?", &pl)
            .await;
        assert_eq!(answer, "Revenue in Feb: £1,500.");
    }

    #[tokio::test]
    async fn test_handle_question_wraps_answer() {
        let request = QuestionRequest {
            question: "Why did utilities increase?".to_string(),
            pl: sample_pl(),
        };
        let response = unreachable_service().handle_question(&request).await;
        assert!(response.answer.starts_with("Utilities increased by £30"));
    }
}

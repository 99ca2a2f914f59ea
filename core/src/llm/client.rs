use crate::config::LlmConfig;
use crate::error::LlmError;

use super::backend::ChatBackend;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// HTTP client for an OpenAI-compatible chat completions endpoint.
///
/// The per-client timeout is the only cancellation mechanism for
/// collaborator calls; a timeout surfaces as `LlmError::Http` and is wrapped
/// into `PlanningError`/`CompositionError` by the adapters.
#[derive(Clone, Debug)]
pub struct HttpChatBackend {
    api_url: String,
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl HttpChatBackend {
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout_ms: u64,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            api_url,
            api_key,
            model,
            http,
        })
    }

    pub fn from_config(cfg: &LlmConfig) -> Result<Self, LlmError> {
        if cfg.api_key.trim().is_empty() {
            return Err(LlmError::Config(
                "api key not set (INSIGHTX_API_KEY / OPENAI_API_KEY or [llm].api_key)".to_string(),
            ));
        }
        Self::new(
            cfg.api_url.clone(),
            cfg.api_key.clone(),
            cfg.model.clone(),
            cfg.timeout_ms,
        )
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpChatBackend {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature,
        };

        tracing::debug!(
            target: "insightx.llm",
            stage = "chat.http.in",
            url = %self.api_url,
            model = %self.model,
            messages = messages.len(),
            temperature = temperature
        );

        let resp = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(
                target: "insightx.llm",
                stage = "chat.http.err",
                status = %status
            );
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = resp.json().await?;
        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::EmptyCompletion)?;

        tracing::debug!(
            target: "insightx.llm",
            stage = "chat.http.out",
            status = %status,
            content_len = content.len()
        );

        Ok(content)
    }
}

use std::sync::Arc;

use crate::error::CompositionError;
use crate::llm::{ChatBackend, ChatMessage};
use crate::pipeline::UnifiedResult;

use super::prompt::{build_composition_prompt, COMPOSER_SYSTEM_PROMPT};

/// Answer Composer adapter: original question + unified document in,
/// leadership narrative out. Pure text transformation; no SQL, no data
/// access. Per-task errors are serialized into the context rather than
/// hidden, so the narrative can acknowledge tasks that could not run.
pub struct Composer {
    backend: Arc<dyn ChatBackend>,
    temperature: f32,
}

impl Composer {
    pub fn new(backend: Arc<dyn ChatBackend>, temperature: f32) -> Self {
        Self {
            backend,
            temperature,
        }
    }

    pub async fn compose(
        &self,
        question: &str,
        unified: &UnifiedResult,
    ) -> Result<String, CompositionError> {
        let serialized = serde_json::to_string_pretty(unified)
            .unwrap_or_else(|_| "{\"tasks\":[]}".to_string());

        let messages = [
            ChatMessage::system(COMPOSER_SYSTEM_PROMPT),
            ChatMessage::user(build_composition_prompt(question, &serialized)),
        ];

        let answer = self.backend.complete(&messages, self.temperature).await?;
        if answer.trim().is_empty() {
            return Err(CompositionError::EmptyAnswer);
        }

        tracing::info!(
            target: "insightx.composer",
            stage = "compose.out",
            answer_len = answer.len()
        );

        Ok(answer)
    }
}

use crate::error::LlmError;

use super::types::ChatMessage;

/// Seam to the external text-generation collaborator.
///
/// The planner and composer adapters only see this trait; production wires
/// in [`super::HttpChatBackend`], tests a scripted fake. The returned text
/// is treated as untrusted input everywhere downstream.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, LlmError>;
}

use std::sync::Arc;

use crate::error::PlanningError;
use crate::llm::{ChatBackend, ChatMessage};
use crate::pipeline::TaskSpec;

use super::parse::parse_task_specs;
use super::prompt::{build_planning_prompt, PLANNER_SYSTEM_PROMPT};

/// Hard upper bound on the per-request analysis fan-out.
pub const MAX_TASKS: usize = 4;

/// Task Planner adapter: question + schema notes in, ordered TaskSpecs out.
///
/// Does no SQL safety checking - the guardrail owns that, applied to every
/// planned task later, so a planning bug can never bypass the read-only
/// policy.
pub struct Planner {
    backend: Arc<dyn ChatBackend>,
    temperature: f32,
}

impl Planner {
    pub fn new(backend: Arc<dyn ChatBackend>, temperature: f32) -> Self {
        Self {
            backend,
            temperature,
        }
    }

    pub async fn plan(
        &self,
        question: &str,
        schema_description: &str,
    ) -> Result<Vec<TaskSpec>, PlanningError> {
        let messages = [
            ChatMessage::system(PLANNER_SYSTEM_PROMPT),
            ChatMessage::user(build_planning_prompt(question, schema_description)),
        ];

        let response = self.backend.complete(&messages, self.temperature).await?;
        let mut tasks = parse_task_specs(&response)?;

        if tasks.len() > MAX_TASKS {
            tracing::warn!(
                target: "insightx.planner",
                stage = "plan.truncate",
                planned = tasks.len(),
                dropped = tasks.len() - MAX_TASKS,
                "planner exceeded the task cap; keeping the first {MAX_TASKS}"
            );
            tasks.truncate(MAX_TASKS);
        }

        tracing::info!(
            target: "insightx.planner",
            stage = "plan.out",
            tasks = tasks.len()
        );

        Ok(tasks)
    }
}

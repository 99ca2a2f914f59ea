use std::sync::Arc;

use uuid::Uuid;

use crate::composer::Composer;
use crate::dataset::Dataset;
use crate::error::PlanningError;
use crate::executor;
use crate::guardrail;
use crate::planner::Planner;

use super::types::{InsightReport, TaskResult, TaskSpec, UnifiedResult};

/// Orchestrates one request: plan, then per task validate + execute, then
/// assemble, then (for [`Pipeline::run`]) compose the narrative.
///
/// Tasks run sequentially in plan order; a failed task is recorded and
/// never aborts the rest. Only total planning failure escapes without a
/// UnifiedResult.
pub struct Pipeline {
    dataset: Arc<Dataset>,
    planner: Planner,
    composer: Composer,
    schema_description: String,
}

impl Pipeline {
    pub fn new(
        dataset: Arc<Dataset>,
        planner: Planner,
        composer: Composer,
        schema_description: String,
    ) -> Self {
        Self {
            dataset,
            planner,
            composer,
            schema_description,
        }
    }

    pub fn schema_description(&self) -> &str {
        &self.schema_description
    }

    /// Plan the question into tasks. Exposed so callers can preview the
    /// decomposition without executing anything.
    pub async fn plan(&self, question: &str) -> Result<Vec<TaskSpec>, PlanningError> {
        self.planner.plan(question, &self.schema_description).await
    }

    /// Plan and execute, returning the unified document. On `PlanningError`
    /// no document is synthesized - that is the one contract-less outcome.
    pub async fn run_analysis(&self, question: &str) -> Result<UnifiedResult, PlanningError> {
        let request_id = Uuid::new_v4();

        tracing::info!(
            target: "insightx.pipeline",
            stage = "planning",
            request_id = %request_id,
            question_len = question.len()
        );

        let specs = self.plan(question).await?;

        let mut tasks = Vec::with_capacity(specs.len());
        for (idx, spec) in specs.iter().enumerate() {
            tasks.push(self.process_task(idx, spec).await);
        }

        Ok(UnifiedResult { tasks })
    }

    /// Full pipeline including narrative generation. A composition failure
    /// is recorded in the report next to the intact unified document.
    pub async fn run(&self, question: &str) -> Result<InsightReport, PlanningError> {
        let response = self.run_analysis(question).await?;

        let (answer, composition_error) = match self.composer.compose(question, &response).await {
            Ok(text) => (Some(text), None),
            Err(e) => {
                tracing::warn!(
                    target: "insightx.pipeline",
                    stage = "composition",
                    error = %e,
                    "narrative generation failed; returning results without it"
                );
                (None, Some(e.to_string()))
            }
        };

        Ok(InsightReport {
            question: question.to_string(),
            response,
            answer,
            composition_error,
        })
    }

    async fn process_task(&self, idx: usize, spec: &TaskSpec) -> TaskResult {
        let query = match guardrail::validate(&spec.sql_query) {
            Ok(q) => q,
            Err(rejection) => {
                tracing::warn!(
                    target: "insightx.pipeline",
                    stage = "task.rejected",
                    task = idx,
                    task_name = %spec.task_name,
                    reason = %rejection.reason
                );
                return TaskResult::failed(spec, rejection.reason);
            }
        };

        match executor::execute(&self.dataset, &query).await {
            Ok(rows) => {
                tracing::info!(
                    target: "insightx.pipeline",
                    stage = "task.done",
                    task = idx,
                    task_name = %spec.task_name,
                    rows = rows.len()
                );
                TaskResult::succeeded(spec, rows)
            }
            Err(e) => {
                tracing::warn!(
                    target: "insightx.pipeline",
                    stage = "task.failed",
                    task = idx,
                    task_name = %spec.task_name,
                    error = %e.message
                );
                TaskResult::failed(spec, e.message)
            }
        }
    }
}

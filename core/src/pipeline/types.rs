//! The unified result contract.
//!
//! `UnifiedResult` is the sole interface between the pipeline and both the
//! answer composer and any visualization consumer. Its JSON shape is fixed
//! across success and failure: every task serializes the same five fields,
//! with `rows` always an array (empty on failure) and `error` always present
//! (null on success), so downstream code never special-cases.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::executor::Row;

/// One bounded analysis sub-question as planned by the collaborator.
/// Order within the plan is significant and preserved end-to-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    #[serde(default = "default_task_name")]
    pub task_name: String,

    #[serde(default)]
    pub task_description: String,

    #[serde(default)]
    pub sql_query: String,
}

fn default_task_name() -> String {
    "Unnamed Task".to_string()
}

/// Tagged per-task outcome: either the engine's rows or a short reason
/// (guardrail rejection or execution failure). Exactly one side exists.
#[derive(Debug, Clone)]
pub enum TaskOutcome {
    Rows(Vec<Row>),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct TaskResult {
    pub task_name: String,
    pub task_description: String,
    pub sql_query: String,
    pub outcome: TaskOutcome,
}

impl TaskResult {
    pub fn succeeded(spec: &TaskSpec, rows: Vec<Row>) -> Self {
        Self {
            task_name: spec.task_name.clone(),
            task_description: spec.task_description.clone(),
            sql_query: spec.sql_query.clone(),
            outcome: TaskOutcome::Rows(rows),
        }
    }

    pub fn failed(spec: &TaskSpec, reason: impl Into<String>) -> Self {
        Self {
            task_name: spec.task_name.clone(),
            task_description: spec.task_description.clone(),
            sql_query: spec.sql_query.clone(),
            outcome: TaskOutcome::Failed(reason.into()),
        }
    }

    pub fn rows(&self) -> &[Row] {
        match &self.outcome {
            TaskOutcome::Rows(rows) => rows,
            TaskOutcome::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            TaskOutcome::Rows(_) => None,
            TaskOutcome::Failed(reason) => Some(reason),
        }
    }
}

impl Serialize for TaskResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut st = serializer.serialize_struct("TaskResult", 5)?;
        st.serialize_field("task_name", &self.task_name)?;
        st.serialize_field("task_description", &self.task_description)?;
        st.serialize_field("sql_query", &self.sql_query)?;
        st.serialize_field("rows", self.rows())?;
        st.serialize_field("error", &self.error())?;
        st.end()
    }
}

/// The single structured document combining all tasks' outcomes for one
/// request. Same length and order as the originating plan.
#[derive(Debug, Clone, Serialize, Default)]
pub struct UnifiedResult {
    pub tasks: Vec<TaskResult>,
}

/// Full pipeline output: the unified document plus the narrative stage's
/// outcome. Exactly one of `answer` / `composition_error` is populated, so a
/// failed narrative never discards the computed results.
#[derive(Debug, Clone, Serialize)]
pub struct InsightReport {
    pub question: String,
    pub response: UnifiedResult,
    pub answer: Option<String>,
    pub composition_error: Option<String>,
}

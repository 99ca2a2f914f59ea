use thiserror::Error;

/// Collaborator transport failures. Shared by the planning and composition
/// adapters; each wraps it into its own request-level error.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("config error: {0}")]
    Config(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error (status {status}): {body}")]
    Api { status: u16, body: String },
    #[error("empty completion")]
    EmptyCompletion,
}

impl LlmError {
    /// True when the failure was a client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LlmError::Http(e) if e.is_timeout())
    }
}

/// Request-fatal: no tasks could be produced, so no UnifiedResult exists.
#[derive(Error, Debug)]
pub enum PlanningError {
    #[error("planner call failed: {0}")]
    Backend(#[from] LlmError),
    #[error("planner output could not be parsed: {0}")]
    Parse(String),
    #[error("planner returned no tasks")]
    Empty,
}

/// Request-level but non-destructive: the UnifiedResult survives alongside it.
#[derive(Error, Debug)]
pub enum CompositionError {
    #[error("composer call failed: {0}")]
    Backend(#[from] LlmError),
    #[error("composer returned an empty answer")]
    EmptyAnswer,
}

/// Task-local: a candidate query failed the read-only safety policy.
/// Execution is skipped and the reason recorded as `TaskResult.error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct GuardrailRejection {
    pub reason: String,
}

impl GuardrailRejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Task-local: a validated query failed at the engine. Carries the engine
/// message verbatim.
#[derive(Error, Debug, Clone)]
#[error("query execution failed: {message}")]
pub struct ExecutionError {
    pub message: String,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset file not found: {0}")]
    NotFound(String),
    #[error("dataset load failed: {0}")]
    Load(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("planning failed: {0}")]
    Planning(#[from] PlanningError),
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("config error: {0}")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("pipeline failed: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("composition failed: {0}")]
    Composition(#[from] CompositionError),
    #[error("command failed: {0}")]
    Command(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

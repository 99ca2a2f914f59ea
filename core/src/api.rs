//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `insightx_core::api` instead of reaching into
//! internal modules.

pub use crate::composer::Composer;
pub use crate::config::{load_default, AppConfig, DatasetConfig, LlmConfig, LoggingConfig};
pub use crate::context::AppContext;
pub use crate::dataset::{load_schema_description, Dataset};
pub use crate::error::{
    CliError, CompositionError, DatasetError, ExecutionError, GuardrailRejection, LlmError,
    PipelineError, PlanningError,
};
pub use crate::executor::{execute, Row};
pub use crate::guardrail::{validate, ValidatedQuery};
pub use crate::llm::{ChatBackend, ChatMessage, HttpChatBackend};
pub use crate::pipeline::{
    InsightReport, Pipeline, TaskOutcome, TaskResult, TaskSpec, UnifiedResult,
};
pub use crate::planner::{Planner, MAX_TASKS};

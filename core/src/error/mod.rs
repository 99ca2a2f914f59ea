#[allow(clippy::module_inception)]
pub mod error;

pub use error::{
    CliError, CompositionError, DatasetError, ExecutionError, GuardrailRejection, LlmError,
    PipelineError, PlanningError,
};

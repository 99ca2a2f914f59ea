pub mod run;
pub mod types;

pub use run::Pipeline;
pub use types::{InsightReport, TaskOutcome, TaskResult, TaskSpec, UnifiedResult};

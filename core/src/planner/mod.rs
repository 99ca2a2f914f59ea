pub mod parse;
pub mod plan;
pub mod prompt;

pub use plan::{Planner, MAX_TASKS};

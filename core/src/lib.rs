//! InsightX core: conversational analytics over a fixed tabular dataset.
//!
//! One request flows planning → guardrail → execution → unified result →
//! narrative. The planner and composer delegate to an external
//! text-generation collaborator behind [`llm::ChatBackend`]; every generated
//! query must pass the [`guardrail`] before the [`executor`] will run it.

pub mod api;
pub mod composer;
pub mod config;
pub mod context;
pub mod dataset;
pub mod error;
pub mod executor;
pub mod guardrail;
pub mod llm;
pub mod pipeline;
pub mod planner;

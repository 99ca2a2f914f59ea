//! Read-only safety gate for generated SQL.
//!
//! Every query produced by the planner collaborator passes through
//! [`validate`] before it can reach the executor. The executor only accepts
//! a [`ValidatedQuery`], whose single constructor is a successful validation,
//! so there is no unvalidated path to the engine.

pub mod validate;

pub use validate::{validate, ValidatedQuery};

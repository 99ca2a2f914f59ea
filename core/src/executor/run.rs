use datafusion::execution::context::SQLOptions;

use crate::dataset::Dataset;
use crate::error::ExecutionError;
use crate::guardrail::ValidatedQuery;

use super::rows::{batches_to_rows, Row};

/// Run one validated query against the dataset and return its rows in
/// engine order.
///
/// The signature is the read-only funnel: only a [`ValidatedQuery`] gets in,
/// and the session itself additionally refuses DDL/DML/statements, so even a
/// guardrail gap cannot mutate the table. Engine failures (unknown column,
/// type mismatch, syntax error) come back as [`ExecutionError`] with the
/// engine message verbatim; nothing panics past this boundary.
pub async fn execute(dataset: &Dataset, query: &ValidatedQuery) -> Result<Vec<Row>, ExecutionError> {
    let options = SQLOptions::new()
        .with_allow_ddl(false)
        .with_allow_dml(false)
        .with_allow_statements(false);

    tracing::debug!(
        target: "insightx.executor",
        stage = "execute.in",
        table = %dataset.table_name(),
        query_len = query.as_str().len()
    );

    let df = dataset
        .session()
        .sql_with_options(query.as_str(), options)
        .await
        .map_err(|e| ExecutionError::new(e.to_string()))?;

    let batches = df
        .collect()
        .await
        .map_err(|e| ExecutionError::new(e.to_string()))?;

    let rows = batches_to_rows(&batches)?;

    tracing::debug!(
        target: "insightx.executor",
        stage = "execute.out",
        rows = rows.len()
    );

    Ok(rows)
}

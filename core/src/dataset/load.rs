use std::path::Path;
use std::sync::Arc;

use datafusion::arrow::datatypes::SchemaRef;
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::datasource::MemTable;
use datafusion::prelude::{CsvReadOptions, SessionContext};

use crate::error::DatasetError;

/// Read-only handle over the loaded analytical table.
///
/// Constructed once per process (or per test) and shared by reference;
/// nothing mutates it after construction, so concurrent requests need no
/// locking. Holding the handle explicitly (rather than a module-level
/// singleton) lets tests run several datasets side by side.
pub struct Dataset {
    ctx: SessionContext,
    table_name: String,
    schema: SchemaRef,
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset")
            .field("table_name", &self.table_name)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl Dataset {
    /// Load the tabular source into an in-memory table. Failure here is
    /// fatal to the process: there is no partial service without data.
    pub async fn from_csv(path: &str, table_name: &str) -> Result<Self, DatasetError> {
        if !Path::new(path).exists() {
            return Err(DatasetError::NotFound(path.to_string()));
        }

        let ctx = SessionContext::new();
        ctx.register_csv(table_name, path, CsvReadOptions::new())
            .await
            .map_err(|e| DatasetError::Load(e.to_string()))?;

        let schema = ctx
            .table_provider(table_name)
            .await
            .map_err(|e| DatasetError::Load(e.to_string()))?
            .schema();

        tracing::info!(
            target: "insightx.dataset",
            stage = "dataset.load",
            path = %path,
            table = %table_name,
            columns = schema.fields().len()
        );

        Ok(Self {
            ctx,
            table_name: table_name.to_string(),
            schema,
        })
    }

    /// Build a dataset from pre-constructed record batches. Test seam; also
    /// the zero-row case (valid schema, no data) is representable this way.
    pub async fn from_batches(
        table_name: &str,
        schema: SchemaRef,
        batches: Vec<RecordBatch>,
    ) -> Result<Self, DatasetError> {
        let ctx = SessionContext::new();
        let mem = MemTable::try_new(schema.clone(), vec![batches])
            .map_err(|e| DatasetError::Load(e.to_string()))?;
        ctx.register_table(table_name, Arc::new(mem))
            .map_err(|e| DatasetError::Load(e.to_string()))?;

        Ok(Self {
            ctx,
            table_name: table_name.to_string(),
            schema,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn column_names(&self) -> Vec<String> {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    pub(crate) fn session(&self) -> &SessionContext {
        &self.ctx
    }
}

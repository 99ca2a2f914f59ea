use std::sync::Arc;

use crate::composer::Composer;
use crate::config::AppConfig;
use crate::dataset::{load_schema_description, Dataset};
use crate::error::PipelineError;
use crate::llm::{ChatBackend, HttpChatBackend};
use crate::pipeline::Pipeline;
use crate::planner::Planner;

/// Constructed services for one process: config, the loaded dataset, and
/// the pipeline wired to a collaborator backend.
pub struct AppContext {
    cfg: AppConfig,
    dataset: Arc<Dataset>,
    pipeline: Pipeline,
}

impl AppContext {
    /// Production wiring: HTTP collaborator from config, dataset from the
    /// configured tabular source. Collaborator credentials must resolve here,
    /// before any planning or composition call can be made.
    pub async fn initialize(cfg: AppConfig) -> Result<Self, PipelineError> {
        let backend: Arc<dyn ChatBackend> = Arc::new(
            HttpChatBackend::from_config(&cfg.llm)
                .map_err(|e| PipelineError::Config(e.to_string()))?,
        );
        Self::with_backend(cfg, backend).await
    }

    /// Same wiring with an injected collaborator backend (test seam).
    pub async fn with_backend(
        cfg: AppConfig,
        backend: Arc<dyn ChatBackend>,
    ) -> Result<Self, PipelineError> {
        let dataset = Arc::new(
            Dataset::from_csv(&cfg.dataset.csv_path, &cfg.dataset.table_name).await?,
        );
        let schema_description = load_schema_description(&cfg.dataset.schema_path, &dataset);

        let planner = Planner::new(backend.clone(), cfg.llm.planner_temperature);
        let composer = Composer::new(backend, cfg.llm.composer_temperature);
        let pipeline = Pipeline::new(dataset.clone(), planner, composer, schema_description);

        Ok(Self {
            cfg,
            dataset,
            pipeline,
        })
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

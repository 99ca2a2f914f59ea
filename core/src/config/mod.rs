pub mod load;
pub mod types;

pub use load::load_default;
pub use types::{AppConfig, DatasetConfig, LlmConfig, LoggingConfig};

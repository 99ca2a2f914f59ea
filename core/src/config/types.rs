use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "insightx_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

/// Text-generation collaborator settings, shared by the planner and the
/// composer. The endpoint speaks the OpenAI-compatible chat completions
/// wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Usually supplied via INSIGHTX_API_KEY / OPENAI_API_KEY rather than
    /// the config file.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Planning wants determinism; composition tolerates a little warmth.
    #[serde(default)]
    pub planner_temperature: f32,

    #[serde(default = "default_composer_temperature")]
    pub composer_temperature: f32,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_ms() -> u64 {
    60_000
}

fn default_composer_temperature() -> f32 {
    0.2
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            planner_temperature: 0.0,
            composer_temperature: default_composer_temperature(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Tabular source loaded once at startup. Load failure is fatal.
    #[serde(default = "default_csv_path")]
    pub csv_path: String,

    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Human-readable column notes injected verbatim into planning context.
    /// When the file is absent, a listing generated from the table schema is
    /// used instead.
    #[serde(default = "default_schema_path")]
    pub schema_path: String,
}

fn default_csv_path() -> String {
    "dataset.csv".to_string()
}

fn default_table_name() -> String {
    "transactions".to_string()
}

fn default_schema_path() -> String {
    "schema.txt".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            table_name: default_table_name(),
            schema_path: default_schema_path(),
        }
    }
}

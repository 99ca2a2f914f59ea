use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Get the default insightx data directory: ~/.insightx
pub fn get_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".insightx"))
}

/// Load configuration with file priority `./insightx.toml` >
/// `~/.insightx/config.toml` > built-in defaults, then apply environment
/// variable overrides on top.
pub fn load_default() -> anyhow::Result<AppConfig> {
    let local_config = Path::new("insightx.toml");
    let home_config = get_data_dir().map(|d| d.join("config.toml"));

    let mut cfg: AppConfig = if local_config.exists() {
        let s = std::fs::read_to_string(local_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else if let Ok(path) = &home_config {
        if path.exists() {
            let s = std::fs::read_to_string(path)?;
            toml::from_str::<AppConfig>(&s)?
        } else {
            AppConfig::default()
        }
    } else {
        AppConfig::default()
    };

    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut AppConfig) {
    if let Ok(v) = std::env::var("INSIGHTX_API_URL") {
        if !v.trim().is_empty() {
            cfg.llm.api_url = v;
        }
    }
    // INSIGHTX_API_KEY wins; OPENAI_API_KEY is honored as the common fallback.
    if let Ok(v) = std::env::var("INSIGHTX_API_KEY") {
        if !v.trim().is_empty() {
            cfg.llm.api_key = v;
        }
    } else if let Ok(v) = std::env::var("OPENAI_API_KEY") {
        if !v.trim().is_empty() && cfg.llm.api_key.trim().is_empty() {
            cfg.llm.api_key = v;
        }
    }
    if let Ok(v) = std::env::var("INSIGHTX_MODEL") {
        if !v.trim().is_empty() {
            cfg.llm.model = v;
        }
    }
    if let Ok(v) = std::env::var("INSIGHTX_DATASET") {
        if !v.trim().is_empty() {
            cfg.dataset.csv_path = v;
        }
    }
    if let Ok(v) = std::env::var("INSIGHTX_SCHEMA") {
        if !v.trim().is_empty() {
            cfg.dataset.schema_path = v;
        }
    }
}

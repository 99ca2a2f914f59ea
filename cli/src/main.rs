use clap::Parser;
use insightx_core::api::{CliError, LoggingConfig, PipelineError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = commands::cli::Args::parse();
    let cfg = insightx_core::api::load_default().map_err(|e| CliError::Config(e.to_string()))?;
    init_tracing(&cfg.logging).map_err(CliError::Command)?;

    app::run(args).await
}

fn exit_code_for_error(e: &CliError) -> i32 {
    match e {
        CliError::Pipeline(PipelineError::Planning(_)) => 3,
        CliError::Pipeline(PipelineError::Dataset(_)) => 4,
        CliError::Config(_) | CliError::Pipeline(PipelineError::Config(_)) => 2,
        _ => 1,
    }
}

fn init_tracing(cfg: &LoggingConfig) -> Result<(), String> {
    if !cfg.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.level.clone()));

    let console_layer = cfg.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
    });

    let file_layer = if cfg.file {
        let dir = cfg
            .directory
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| std::env::temp_dir().to_string_lossy().to_string());
        let appender = tracing_appender::rolling::daily(dir, "insightx.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("tracing init failed: {e}"))?;

    Ok(())
}

//! Logging setup and configuration

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const LOG_FILE_NAME: &str = "orange-allowlist.log";

pub struct LoggingGuard {
    pub _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Filter from `RUST_LOG`-style directives, or `info` when none are given.
pub fn build_filter(directives: Option<&str>) -> Result<EnvFilter> {
    let directives = directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter {:?}", directives))
}

/// Console output plus a daily log file under `<output_dir>/logs`.
pub fn setup_logging(output_dir: &Path, json_file: bool) -> Result<Arc<LoggingGuard>> {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref())?;

    let appender = tracing_appender::rolling::daily(output_dir.join("logs"), LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer: Box<dyn Layer<Registry> + Send + Sync> = if json_file {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer().with_writer(writer).with_ansi(false).compact().boxed()
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .context("Global tracing subscriber already installed")?;

    Ok(Arc::new(LoggingGuard { _guard: guard }))
}

pub fn setup_output_directories(output_dir: &Path) -> Result<()> {
    for sub in ["logs", "allowlist", "deployments"] {
        let dir = output_dir.join(sub);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_directives_default_to_info() {
        let default = build_filter(None).unwrap().to_string();
        assert_eq!(default, EnvFilter::new(DEFAULT_LOG_FILTER).to_string());
        assert_eq!(build_filter(Some("  ")).unwrap().to_string(), default);
    }

    #[test]
    fn module_directives_are_accepted() {
        assert!(build_filter(Some("orange_allowlist=debug,warn")).is_ok());
    }

    #[test]
    fn malformed_directives_are_rejected() {
        assert!(build_filter(Some("orange_allowlist=loud")).is_err());
    }
}

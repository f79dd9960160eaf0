// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Combines env-filter, console, and file layers into the global subscriber

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::SubscriberInitExt};

use crate::config::LoggingConfig;

use parking_lot::Mutex;
use std::sync::OnceLock;

/// Keeps the non-blocking file writer alive for the process lifetime.
static FILE_GUARD: OnceLock<Mutex<Option<WorkerGuard>>> = OnceLock::new();

/// Build an env filter from the configured global and per-module levels.
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut directives = config.level.0.to_string().to_lowercase();
    for (module, level) in &config.module_levels {
        directives.push_str(&format!(",{}={}", module, level.0.to_string().to_lowercase()));
    }
    EnvFilter::try_new(&directives).context(format!("Invalid filter directives: {directives}"))
}

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_subscriber(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config).context("Failed to create environment filter")?;
    let registry = tracing_subscriber::registry().with(env_filter);

    if config.output.file {
        if let Some(parent) = config.file.path.parent() {
            std::fs::create_dir_all(parent).context(format!(
                "Failed to create log directory: {}",
                parent.display()
            ))?;
        }

        let file_name = config
            .file
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .context("Invalid log file path")?;

        let directory = config
            .file
            .path
            .parent()
            .context("Log file path has no parent directory")?;

        let file_appender = tracing_appender::rolling::daily(directory, file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        *FILE_GUARD
            .get_or_init(|| Mutex::new(None))
            .lock() = Some(guard);

        if config.output.console {
            registry
                .with(console_layer(&config))
                .with(file_layer(file_writer))
                .try_init()?;
        } else {
            registry.with(file_layer(file_writer)).try_init()?;
        }
    } else {
        registry.with(console_layer(&config)).try_init()?;
    }

    tracing::info!(
        log_level = %config.level.0,
        console_output = config.output.console,
        file_output = config.output.file,
        json_output = config.output.json,
        "Tinct logging initialized"
    );

    Ok(())
}

fn console_layer<S>(config: &LoggingConfig) -> Box<dyn tracing_subscriber::Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    if config.output.json {
        fmt::layer().with_target(true).json().boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    }
}

fn file_layer<S>(
    writer: tracing_appender::non_blocking::NonBlocking,
) -> Box<dyn tracing_subscriber::Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(writer)
        .boxed()
}

// ABOUTME: Public API for tinct logging infrastructure using tokio-tracing
// ABOUTME: Provides centralized configuration and initialization for structured logging

pub mod config;
pub mod subscriber;

// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

// Re-export configuration types
pub use config::LoggingConfig;

// Re-export initialization functions
pub use subscriber::init_subscriber;

use anyhow::Result;

/// Initialize logging with default configuration plus environment overrides.
///
/// This is a convenience function that builds a LoggingConfig from the
/// environment (TINCT_LOG and friends) and initializes the subscriber.
pub fn init_logging() -> Result<()> {
    let config = LoggingConfig::from_env()?;
    init_subscriber(config)
}

/// Initialize logging with custom configuration.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<()> {
    init_subscriber(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging() {
        // Test that initialization doesn't panic
        let result = init_logging();
        // Might fail if already initialized, which is okay for tests
        let _ = result;
    }

    #[test]
    fn test_macros_available() {
        info!("Test info message");
        debug!("Test debug message");
        warn!("Test warning message");
        error!("Test error message");
    }
}

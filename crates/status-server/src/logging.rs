//! Logging configuration and initialization.
//!
//! This module provides structured logging with:
//! - Presets (production, verbose, debug, quiet) selected from CLI flags
//! - JSON output format for log aggregation
//! - Environment variable fallback (RUST_LOG)

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: '{}'. Use 'text' or 'json'.", s)),
        }
    }
}

/// Logging preset levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogPreset {
    /// Production: startup and request summaries only
    #[default]
    Production,
    /// Verbose: more operational detail
    Verbose,
    /// Debug: detailed info for troubleshooting, including tower_http traces
    Debug,
    /// Quiet: warnings and errors only
    Quiet,
}

/// Logging configuration built from CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Base preset to use
    pub preset: LogPreset,
    /// Output format
    pub format: LogFormat,
}

impl LogConfig {
    /// Create a new LogConfig from CLI arguments.
    pub fn from_cli(verbose: bool, debug: bool, quiet: bool, format: LogFormat) -> Self {
        // Determine preset from flags (quiet wins over the others)
        let preset = if quiet {
            LogPreset::Quiet
        } else if debug {
            LogPreset::Debug
        } else if verbose {
            LogPreset::Verbose
        } else {
            LogPreset::Production
        };

        Self { preset, format }
    }

    /// Build an EnvFilter from this configuration.
    pub fn build_filter(&self) -> EnvFilter {
        // Check for RUST_LOG environment variable first
        if let Ok(env_filter) = EnvFilter::try_from_default_env() {
            return env_filter;
        }

        let directives = match self.preset {
            LogPreset::Production => "status::startup=info,status::api=info,tower_http=warn",
            LogPreset::Verbose => "status=info,tower_http=info",
            LogPreset::Debug => "status=debug,tower_http=debug",
            LogPreset::Quiet => "status=warn,tower_http=error",
        };

        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
pub fn init(config: &LogConfig) {
    let filter = config.build_filter();

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false)
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE)
                )
                .init();
        }
    }
}

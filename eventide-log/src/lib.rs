//! Eventide Logging
//!
//! Configures a `tracing` subscriber for applications built on Eventide,
//! driven by environment variables. The event controller itself logs through
//! `tracing`, and its default diagnostics sink reports pruned and failing
//! listeners as `warn`/`error` events, so installing this subscriber is
//! enough to see them.
//!
//! # Usage
//!
//! ```rust
//! eventide_log::init();
//! tracing::info!("Scene loaded");
//! ```
//!
//! # Environment Variables
//!
//! - `EVENTIDE_DEBUG=1` - Enable debug logging
//! - `EVENTIDE_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `EVENTIDE_LOG_FORMAT=pretty|json|compact` - Set output format
//! - `EVENTIDE_LOG_COLOR=1|0` - Enable/disable colors
//!
//! `RUST_LOG`, when set, takes precedence over `EVENTIDE_LOG_LEVEL`.

use once_cell::sync::Lazy;
use std::env;

// ============================================================================
// Log Levels
// ============================================================================

/// Minimum level of events that are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl Level {
    /// Get level from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_directive().to_uppercase())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line, human oriented
    Pretty,
    /// Single line per event
    Compact,
    /// One JSON object per event
    Json,
}

impl Format {
    /// Get format from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether ANSI colors are enabled
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Compact,
            color: false,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |name: &str| {
            lookup(name).map(|v| v.trim() == "1" || v.trim().eq_ignore_ascii_case("true"))
        };

        let debug = flag("EVENTIDE_DEBUG").unwrap_or(false);

        let level = lookup("EVENTIDE_LOG_LEVEL")
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = lookup("EVENTIDE_LOG_FORMAT")
            .and_then(|s| Format::parse(&s))
            .unwrap_or(Format::Compact);

        let color = flag("EVENTIDE_LOG_COLOR")
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());

        Self {
            debug,
            level,
            format,
            color,
        }
    }

    /// Filter directives for this config, honouring `RUST_LOG` first.
    fn env_filter(&self) -> tracing_subscriber::EnvFilter {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(self.level.as_directive()))
    }
}

/// Get the global configuration, read from the environment on first use.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

// ============================================================================
// Subscriber
// ============================================================================

/// Build a subscriber for `config` without installing it.
pub fn subscriber(config: &LogConfig) -> Box<dyn tracing::Subscriber + Send + Sync> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let registry = tracing_subscriber::registry().with(config.env_filter());

    match config.format {
        Format::Pretty => Box::new(registry.with(fmt::layer().pretty().with_ansi(config.color))),
        Format::Compact => Box::new(registry.with(fmt::layer().compact().with_ansi(config.color))),
        #[cfg(feature = "json")]
        Format::Json => Box::new(registry.with(fmt::layer().json())),
        #[cfg(not(feature = "json"))]
        Format::Json => Box::new(registry.with(fmt::layer().compact().with_ansi(false))),
    }
}

/// Install the global subscriber described by [`config`].
///
/// Returns `false` when a global subscriber was already installed, which
/// makes repeated calls harmless.
pub fn init() -> bool {
    init_with(config())
}

/// Install a global subscriber for `config`.
pub fn init_with(config: &LogConfig) -> bool {
    tracing::subscriber::set_global_default(subscriber(config)).is_ok()
}

// ============================================================================
// Tests
// ============================================================================

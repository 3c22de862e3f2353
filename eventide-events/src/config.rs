//! Controller configuration.

use std::env;

use serde::Deserialize;

/// Event controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Log registrations, removals and cleanup sweeps at debug level
    pub enable_logging: bool,

    /// Contain listener panics instead of unwinding through `trigger`
    pub catch_panics: bool,

    /// Consult listener probes and prune listeners whose owner is gone
    pub prune_stale: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            catch_panics: true,
            prune_stale: true,
        }
    }
}

impl ControllerConfig {
    /// Create config from environment variables.
    ///
    /// - `EVENTIDE_EVENTS_LOGGING`
    /// - `EVENTIDE_EVENTS_CATCH_PANICS`
    /// - `EVENTIDE_EVENTS_PRUNE_STALE`
    ///
    /// Each accepts `1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`, case
    /// insensitive; anything else keeps the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |name: &str, default: bool| {
            lookup(name).and_then(|v| parse_flag(&v)).unwrap_or(default)
        };

        Self {
            enable_logging: flag("EVENTIDE_EVENTS_LOGGING", defaults.enable_logging),
            catch_panics: flag("EVENTIDE_EVENTS_CATCH_PANICS", defaults.catch_panics),
            prune_stale: flag("EVENTIDE_EVENTS_PRUNE_STALE", defaults.prune_stale),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

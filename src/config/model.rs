//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the shell works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub federation: FederationConfig,
    #[serde(default)]
    pub tea_tracker: TeaTrackerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Host shell behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Path navigated to on startup.
    #[serde(default = "default_start_path")]
    pub start_path: String,
    /// Upper bound on a single remote resolution before it is reported as failed.
    #[serde(default = "default_remote_timeout")]
    pub remote_timeout_secs: u64,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            start_path: default_start_path(),
            remote_timeout_secs: default_remote_timeout(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Where remote entries are discovered.
///
/// Without a manifest every remote resolves from the components bundled
/// into this binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FederationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
}

/// Bounds for the tea tracker's cup counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeaTrackerConfig {
    #[serde(default = "default_initial_cups")]
    pub initial_cups: i64,
    #[serde(default)]
    pub min_cups: i64,
    #[serde(default = "default_max_cups")]
    pub max_cups: i64,
}

impl Default for TeaTrackerConfig {
    fn default() -> Self {
        Self {
            initial_cups: default_initial_cups(),
            min_cups: 0,
            max_cups: default_max_cups(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_start_path() -> String {
    "home-page".to_string()
}
fn default_remote_timeout() -> u64 {
    10
}
fn default_tick_rate() -> u64 {
    100
}
fn default_initial_cups() -> i64 {
    1
}
fn default_max_cups() -> i64 {
    8
}
fn default_log_dir() -> String {
    "~/.local/share/mosaic/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

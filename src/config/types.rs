use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Path opened at startup (default: "/", which redirects to the landing project).
    #[serde(default = "default_start_route")]
    pub start_route: String,
    /// Prefix stripped from every route path (default: "/").
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

/// Log file settings. `RUST_LOG` overrides `level` when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "expertconnect=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Where projects and experts come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in sample is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_start_route() -> String {
    "/".to_string()
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            start_route: default_start_route(),
            base_path: default_base_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or `<cache_dir>/expertconnect/expertconnect.log`.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("expertconnect")
                .join("expertconnect.log")
        })
    }
}

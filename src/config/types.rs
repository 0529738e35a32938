use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive (default: "info").
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// Settings for the `replay` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Pretty-print the resulting state (default: true).
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Skip event lines that fail to decode instead of aborting (default: false).
    #[serde(default)]
    pub skip_invalid: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            skip_invalid: false,
        }
    }
}

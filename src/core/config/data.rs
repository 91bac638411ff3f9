use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::timing::TimingConfig;

pub const DEFAULT_TOAST_TTL_MS: u64 = 5000;

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// UI theme name ("dark" or "light")
    pub theme: Option<String>,
    /// Keep the HTML form of rich responses alongside the plain text
    pub rich_responses: Option<bool>,
    /// How long a notification stays on screen, in milliseconds
    pub toast_ttl_ms: Option<u64>,
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    pub fn rich_responses(&self) -> bool {
        self.rich_responses.unwrap_or(true)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms.unwrap_or(DEFAULT_TOAST_TTL_MS))
    }

    pub fn theme_name(&self) -> &str {
        self.theme.as_deref().unwrap_or("dark")
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

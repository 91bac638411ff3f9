//! `set` and `unset` for the keys stored in `config.toml`.

use std::fmt;

use crate::core::config::data::Config;
use crate::ui::theme::Theme;

pub const KNOWN_KEYS: &[&str] = &["theme", "rich-responses", "toast-ttl"];

/// Errors that can occur when modifying configuration settings.
#[derive(Debug, PartialEq, Eq)]
pub enum SettingError {
    /// The provided setting key is not recognized.
    UnknownKey(String),
    UnknownTheme { input: String },
    InvalidBoolean(String),
    /// Durations are whole milliseconds greater than zero.
    InvalidDuration(String),
}

impl SettingError {
    /// Print the error message to stderr with appropriate formatting.
    pub fn print(&self) {
        match self {
            SettingError::UnknownKey(key) => {
                eprintln!("❌ Unknown config key: {key}");
                eprintln!("   Known keys: {}", KNOWN_KEYS.join(", "));
            }
            SettingError::UnknownTheme { input } => {
                eprintln!("❌ Unknown theme: {input}. Available themes: dark, light");
            }
            SettingError::InvalidBoolean(input) => {
                eprintln!("❌ Invalid boolean value: {input}");
                eprintln!("   Use 'on' or 'off' (also accepts true/false, yes/no)");
            }
            SettingError::InvalidDuration(input) => {
                eprintln!("❌ Invalid duration: {input}");
                eprintln!("   Use a number of milliseconds, e.g. 5000");
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::UnknownKey(key) => write!(f, "Unknown config key: {key}"),
            SettingError::UnknownTheme { input } => write!(f, "Unknown theme: {input}"),
            SettingError::InvalidBoolean(input) => write!(f, "Invalid boolean value: {input}"),
            SettingError::InvalidDuration(input) => write!(f, "Invalid duration: {input}"),
        }
    }
}

impl std::error::Error for SettingError {}

/// Accepts: on/off, true/false, yes/no (case-insensitive).
pub fn parse_bool(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Update `config` in memory; the caller persists it.
pub fn apply_set(config: &mut Config, key: &str, value: &str) -> Result<String, SettingError> {
    match key {
        "theme" => {
            if !Theme::is_known(value) {
                return Err(SettingError::UnknownTheme {
                    input: value.to_string(),
                });
            }
            let theme = value.trim().to_lowercase();
            let message = format!("Set theme to: {theme}");
            config.theme = Some(theme);
            Ok(message)
        }
        "rich-responses" => {
            let enabled =
                parse_bool(value).ok_or_else(|| SettingError::InvalidBoolean(value.to_string()))?;
            config.rich_responses = Some(enabled);
            Ok(format!("Set rich-responses to: {}", format_bool(enabled)))
        }
        "toast-ttl" => {
            let millis = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| SettingError::InvalidDuration(value.to_string()))?;
            config.toast_ttl_ms = Some(millis);
            Ok(format!("Set toast-ttl to: {millis} ms"))
        }
        _ => Err(SettingError::UnknownKey(key.to_string())),
    }
}

pub fn apply_unset(config: &mut Config, key: &str) -> Result<String, SettingError> {
    match key {
        "theme" => config.theme = None,
        "rich-responses" => config.rich_responses = None,
        "toast-ttl" => config.toast_ttl_ms = None,
        _ => return Err(SettingError::UnknownKey(key.to_string())),
    }
    Ok(format!("Unset {key}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn set_theme_normalizes_and_validates() {
        let mut config = Config::default();
        assert_eq!(
            apply_set(&mut config, "theme", " Light "),
            Ok("Set theme to: light".to_string())
        );
        assert_eq!(config.theme.as_deref(), Some("light"));

        assert_eq!(
            apply_set(&mut config, "theme", "solarized"),
            Err(SettingError::UnknownTheme {
                input: "solarized".into()
            })
        );
        assert_eq!(config.theme.as_deref(), Some("light"));
    }

    #[test]
    fn set_rich_responses_accepts_boolean_words() {
        let mut config = Config::default();
        apply_set(&mut config, "rich-responses", "off").expect("set");
        assert!(!config.rich_responses());
        apply_set(&mut config, "rich-responses", "YES").expect("set");
        assert!(config.rich_responses());
        assert_eq!(
            apply_set(&mut config, "rich-responses", "talvez"),
            Err(SettingError::InvalidBoolean("talvez".into()))
        );
    }

    #[test]
    fn set_toast_ttl_requires_positive_millis() {
        let mut config = Config::default();
        apply_set(&mut config, "toast-ttl", "2500").expect("set");
        assert_eq!(config.toast_ttl(), Duration::from_millis(2500));
        assert!(apply_set(&mut config, "toast-ttl", "0").is_err());
        assert!(apply_set(&mut config, "toast-ttl", "-3").is_err());
    }

    #[test]
    fn unset_restores_defaults() {
        let mut config = Config {
            theme: Some("light".into()),
            rich_responses: Some(false),
            toast_ttl_ms: Some(100),
            ..Config::default()
        };
        for key in KNOWN_KEYS {
            apply_unset(&mut config, key).expect("unset");
        }
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut config = Config::default();
        assert_eq!(
            apply_set(&mut config, "default-model", "x"),
            Err(SettingError::UnknownKey("default-model".into()))
        );
        assert_eq!(
            apply_unset(&mut config, "nope").map_err(|e| e.to_string()),
            Err("Unknown config key: nope".to_string())
        );
    }
}

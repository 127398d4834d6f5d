//! Engine configuration loaded from environment variables.

use crate::buffer::{IndentWidth, PaneSettings};
use crate::error::SyncError;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// How results of overlapping conversions into the same pane are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Apply a result only if it belongs to the newest write issued for its
    /// target pane; superseded results are discarded.
    #[default]
    DropStale,
    /// Apply every result as it resolves, so a slow older conversion can
    /// overwrite a newer one.
    LastResolvedWins,
}

impl FromStr for StalePolicy {
    type Err = SyncError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "drop-stale" | "drop_stale" | "sequenced" => Ok(Self::DropStale),
            "last-resolved-wins" | "last_resolved_wins" | "unsequenced" => {
                Ok(Self::LastResolvedWins)
            }
            other => Err(SyncError::InvalidPolicy(other.to_string())),
        }
    }
}

/// Runtime configuration for the sync engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub stale_policy: StalePolicy,
    /// Upper bound for a single conversion or format call; `None` waits forever.
    pub conversion_timeout: Option<Duration>,
    /// Initial settings for both panes.
    pub pane_defaults: PaneSettings,
    pub sync_trace: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stale_policy: StalePolicy::DropStale,
            conversion_timeout: None,
            pane_defaults: PaneSettings::default(),
            sync_trace: false,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env_flag_or(name, false)
}

fn env_flag_or(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(default)
}

/// Parse a millisecond timeout; zero disables the timeout.
pub fn parse_timeout_ms(value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
    }
}

fn env_indent(name: &str) -> IndentWidth {
    let Ok(raw) = env::var(name) else {
        return IndentWidth::default();
    };
    match raw.trim().parse::<u8>() {
        Ok(value) => IndentWidth::try_from(value).unwrap_or_else(|err| {
            warn!("{}; using default indent", err);
            IndentWidth::default()
        }),
        Err(_) => {
            warn!("Ignoring non-numeric {}={:?}", name, raw);
            IndentWidth::default()
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`EngineConfig`] with defaults applied when env vars are
    /// missing or invalid.
    pub fn from_env() -> Self {
        let stale_policy = match env::var("TEXTCONVERT_STALE_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("{}; falling back to drop-stale", err);
                StalePolicy::DropStale
            }),
            Err(_) => StalePolicy::DropStale,
        };
        Self {
            stale_policy,
            conversion_timeout: env::var("TEXTCONVERT_CONVERSION_TIMEOUT_MS")
                .ok()
                .and_then(|raw| parse_timeout_ms(&raw)),
            pane_defaults: PaneSettings {
                line_wrapping: env_flag_or("TEXTCONVERT_LINE_WRAP", false),
                beautify: env_flag_or("TEXTCONVERT_BEAUTIFY", true),
                indent_width: env_indent("TEXTCONVERT_INDENT"),
            },
            sync_trace: env_flag_enabled("TEXTCONVERT_SYNC_TRACE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn stale_policy_parses_known_names() {
        assert_eq!("drop-stale".parse::<StalePolicy>(), Ok(StalePolicy::DropStale));
        assert_eq!(
            " Last-Resolved-Wins ".parse::<StalePolicy>(),
            Ok(StalePolicy::LastResolvedWins)
        );
        assert_eq!(
            "newest".parse::<StalePolicy>(),
            Err(SyncError::InvalidPolicy("newest".to_string()))
        );
    }

    #[test]
    fn zero_or_garbage_timeout_disables_it() {
        assert_eq!(parse_timeout_ms("250"), Some(Duration::from_millis(250)));
        assert_eq!(parse_timeout_ms("0"), None);
        assert_eq!(parse_timeout_ms("soon"), None);
    }

    #[test]
    fn default_config_sequences_results() {
        let config = EngineConfig::default();
        assert_eq!(config.stale_policy, StalePolicy::DropStale);
        assert!(config.conversion_timeout.is_none());
        assert!(config.pane_defaults.beautify);
    }
}

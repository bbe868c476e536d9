// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Filter precedence: `--log` CLI argument, then `RUST_LOG`, then
//! `[logging] level` in `settings.toml`, then [`DEFAULT_LOG_LEVEL`].

use crate::config::{LoggingConfig, DEFAULT_LOG_LEVEL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Picks the filter directive to use.
fn resolve_directive(
    cli_filter: Option<&str>,
    env_filter: Option<&str>,
    config: &LoggingConfig,
) -> String {
    [cli_filter, env_filter, config.level.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_string()
}

/// Builds an `EnvFilter`, falling back to the default level when the
/// directive does not parse.
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global stderr subscriber. Safe to call more than once;
/// only the first call takes effect.
pub fn init(cli_filter: Option<&str>, config: &LoggingConfig) {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_directive(cli_filter, env_filter.as_deref(), config);

    let subscriber = tracing_subscriber::registry()
        .with(build_filter(&directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_ok() {
        tracing::debug!(%directive, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_filter_wins() {
        let config = LoggingConfig {
            level: Some("warn".to_string()),
        };
        assert_eq!(
            resolve_directive(Some("debug"), Some("error"), &config),
            "debug"
        );
    }

    #[test]
    fn env_beats_config() {
        let config = LoggingConfig {
            level: Some("warn".to_string()),
        };
        assert_eq!(resolve_directive(None, Some("error"), &config), "error");
    }

    #[test]
    fn config_used_when_nothing_else_set() {
        let config = LoggingConfig {
            level: Some("iced_feed=trace".to_string()),
        };
        assert_eq!(resolve_directive(None, None, &config), "iced_feed=trace");
    }

    #[test]
    fn blank_values_are_skipped() {
        assert_eq!(
            resolve_directive(Some("  "), Some(""), &LoggingConfig::default()),
            DEFAULT_LOG_LEVEL
        );
    }

    #[test]
    fn invalid_directive_falls_back() {
        // Must not panic.
        let _ = build_filter("[[not a directive");
    }
}

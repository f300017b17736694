//! Core runtime configuration shared by the library and the demo binary.

use clap::{ArgAction, Parser};

/// Session-core settings that apply regardless of which frontend drives it.
#[derive(Debug, Parser, Clone)]
pub struct AppConfig {
    /// Language tag handed to the speech capability (fixed-language sessions)
    #[arg(long, default_value = "en-US")]
    pub lang: String,

    /// Write JSON trace events to the hubvoice trace log
    #[arg(long, action = ArgAction::SetTrue)]
    pub logs: bool,

    /// Disable all trace output even when --logs is set
    #[arg(long = "no-logs", action = ArgAction::SetTrue)]
    pub no_logs: bool,
}

impl AppConfig {
    /// Whether trace logging should be active; `--no-logs` wins over `--logs`.
    pub fn tracing_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_fixed_language_tag_and_quiet_logs() {
        let config = AppConfig::parse_from(["config-test"]);
        assert_eq!(config.lang, "en-US");
        assert!(!config.logs);
        assert!(!config.no_logs);
    }

    #[test]
    fn log_flags_parse_independently() {
        let config = AppConfig::parse_from(["config-test", "--logs", "--no-logs"]);
        assert!(config.logs);
        assert!(config.no_logs);
    }

    #[test]
    fn no_logs_mutes_tracing_even_when_logs_is_set() {
        assert!(!AppConfig::parse_from(["config-test"]).tracing_enabled());
        assert!(AppConfig::parse_from(["config-test", "--logs"]).tracing_enabled());
        assert!(
            !AppConfig::parse_from(["config-test", "--logs", "--no-logs"]).tracing_enabled()
        );
    }
}

//! CLI flag schema so demo startup behavior is explicit and discoverable.

use clap::{ArgAction, Parser, ValueEnum};
use hubvoice::config::AppConfig;
use hubvoice::settings::AdaptiveSettings;

/// How UI events are written for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub(crate) enum OutputMode {
    /// Human-readable lines for interactive use (default)
    #[default]
    Plain,
    /// Newline-delimited JSON for frontends
    Json,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OutputMode::Plain => "plain",
            OutputMode::Json => "json",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Parser, Clone)]
#[command(name = "hubvoice", about = "Voice-navigable accessibility hub demo", version)]
pub(crate) struct HubConfig {
    #[command(flatten)]
    pub(crate) app: AppConfig,

    /// Initial font size (clamped to the renderable range)
    #[arg(long = "font-size", default_value_t = 18)]
    pub(crate) font_size: i32,

    /// Start with high contrast enabled
    #[arg(long = "high-contrast", action = ArgAction::SetTrue)]
    pub(crate) high_contrast: bool,

    /// Start with reduced motion enabled
    #[arg(long = "reduced-motion", action = ArgAction::SetTrue)]
    pub(crate) reduced_motion: bool,

    /// Start in sensory-friendly mode
    #[arg(long = "sensory-mode", action = ArgAction::SetTrue)]
    pub(crate) sensory_mode: bool,

    /// Start with an empty schedule instead of the example routine
    #[arg(long = "empty-schedule", action = ArgAction::SetTrue)]
    pub(crate) empty_schedule: bool,

    /// Event output format
    #[arg(long = "output", value_enum, default_value_t = OutputMode::Plain)]
    pub(crate) output: OutputMode,
}

impl HubConfig {
    /// Settings snapshot the session starts from.
    pub(crate) fn initial_settings(&self) -> AdaptiveSettings {
        let mut settings = AdaptiveSettings::default();
        settings.set_font_size(self.font_size);
        if self.high_contrast {
            settings.toggle_high_contrast();
        }
        if self.reduced_motion {
            settings.toggle_reduced_motion();
        }
        if self.sensory_mode {
            settings.toggle_sensory_mode();
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubvoice::settings::{FONT_SIZE_DEFAULT, FONT_SIZE_MAX};

    #[test]
    fn defaults_produce_a_fresh_session() {
        let config = HubConfig::parse_from(["hubvoice"]);
        let settings = config.initial_settings();
        assert_eq!(settings, AdaptiveSettings::default());
        assert!(!config.empty_schedule);
        assert_eq!(config.output, OutputMode::Plain);
        assert_eq!(config.app.lang, "en-US");
    }

    #[test]
    fn initial_font_size_is_clamped_like_any_other_set() {
        let config = HubConfig::parse_from(["hubvoice", "--font-size", "999"]);
        assert_eq!(config.initial_settings().font_size, FONT_SIZE_MAX);
    }

    #[test]
    fn toggle_flags_flip_their_settings() {
        let config = HubConfig::parse_from([
            "hubvoice",
            "--high-contrast",
            "--sensory-mode",
            "--output",
            "json",
        ]);
        let settings = config.initial_settings();
        assert!(settings.high_contrast);
        assert!(settings.sensory_mode);
        assert!(!settings.reduced_motion);
        assert_eq!(settings.font_size, FONT_SIZE_DEFAULT);
        assert_eq!(config.output, OutputMode::Json);
    }
}

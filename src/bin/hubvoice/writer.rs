//! Event rendering so the presentation contract stays in one place.

use hubvoice::events::UiEvent;

use crate::config::OutputMode;

pub(crate) struct EventWriter {
    mode: OutputMode,
}

impl EventWriter {
    pub(crate) fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub(crate) fn emit(&self, event: &UiEvent) {
        match self.mode {
            OutputMode::Json => {
                if let Ok(json) = serde_json::to_string(event) {
                    println!("{json}");
                }
            }
            OutputMode::Plain => println!("{}", render_plain(event)),
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

pub(crate) fn render_plain(event: &UiEvent) -> String {
    match event {
        UiEvent::Listening { active: true } => "Listening...".to_string(),
        UiEvent::Listening { active: false } => "Voice navigation stopped".to_string(),
        UiEvent::Focus { target } => format!("Focus -> {}", target.as_str()),
        UiEvent::Notice { message } => message.clone(),
        UiEvent::Settings { settings } => format!(
            "Settings: font {} | contrast {} | motion {} | sensory {}",
            settings.font_size,
            on_off(settings.high_contrast),
            on_off(settings.reduced_motion),
            on_off(settings.sensory_mode),
        ),
        UiEvent::ScheduleAdded { entry } => format!(
            "Added {} {} {} (id {})",
            entry.icon, entry.time, entry.title, entry.id
        ),
        UiEvent::ScheduleRemoved { id } => format!("Done: entry {id}"),
        UiEvent::Schedule { entries } if entries.is_empty() => "Schedule is empty".to_string(),
        UiEvent::Schedule { entries } => {
            let mut out = String::from("Schedule:");
            for entry in entries {
                out.push_str(&format!(
                    "\n  {} {} {} (id {})",
                    entry.icon, entry.time, entry.title, entry.id
                ));
            }
            out
        }
        UiEvent::VoiceUnavailable { reason } => {
            format!("Voice navigation unavailable: {reason}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubvoice::events::FocusTarget;
    use hubvoice::settings::AdaptiveSettings;

    #[test]
    fn focus_renders_the_logical_target_name() {
        let line = render_plain(&UiEvent::Focus {
            target: FocusTarget::Schedule,
        });
        assert_eq!(line, "Focus -> schedule");
    }

    #[test]
    fn settings_line_reports_all_four_preferences() {
        let mut settings = AdaptiveSettings::default();
        settings.toggle_high_contrast();
        let line = render_plain(&UiEvent::Settings { settings });
        assert!(line.contains("font 18"));
        assert!(line.contains("contrast on"));
        assert!(line.contains("motion off"));
        assert!(line.contains("sensory off"));
    }

    #[test]
    fn empty_schedule_renders_a_single_line() {
        let line = render_plain(&UiEvent::Schedule {
            entries: Vec::new(),
        });
        assert_eq!(line, "Schedule is empty");
    }
}

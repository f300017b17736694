//! Built-in voice navigation commands matched against finalized transcripts.

use crate::events::FocusTarget;
use crate::settings::{AdaptiveSettings, FONT_SIZE_STEP};

/// Fixed help text listing example commands, shown for "help" requests.
pub const HELP_TEXT: &str =
    "Try commands like: 'Go to resources', 'Open schedule', 'Toggle contrast', 'Increase text'";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceAction {
    FocusResources,
    FocusSchedule,
    ToggleContrast,
    IncreaseText,
    DecreaseText,
    Help,
}

impl VoiceAction {
    /// Logical focus target for navigation actions, `None` otherwise.
    pub fn focus_target(&self) -> Option<FocusTarget> {
        match self {
            VoiceAction::FocusResources => Some(FocusTarget::Resources),
            VoiceAction::FocusSchedule => Some(FocusTarget::Schedule),
            _ => None,
        }
    }
}

/// Outcome of interpreting one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Handled {
        action: VoiceAction,
    },
    /// No rule matched; carries the transcript for display back to the user.
    Unrecognized {
        transcript: String,
    },
}

// Rule order is load-bearing: bare "resources" and "schedule" are substrings
// that can co-occur with longer phrases, and the first matching rule wins.
const RULES: &[(&[&str], VoiceAction)] = &[
    (
        &["go to resources", "resources"],
        VoiceAction::FocusResources,
    ),
    (&["open schedule", "schedule"], VoiceAction::FocusSchedule),
    (&["toggle contrast"], VoiceAction::ToggleContrast),
    (&["increase text", "bigger text"], VoiceAction::IncreaseText),
    (&["decrease text", "smaller text"], VoiceAction::DecreaseText),
    (&["help", "what can i say"], VoiceAction::Help),
];

/// Match a transcript against the ordered rule chain.
///
/// Normalization (trim + ASCII lowercase) happens here, so callers may pass
/// transcripts exactly as the speech capability finalized them. Matching is
/// plain substring containment; no fuzzy matching.
pub fn parse_voice_command(transcript: &str) -> Option<VoiceAction> {
    let normalized = transcript.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }
    for (phrases, action) in RULES {
        if phrases.iter().any(|phrase| normalized.contains(phrase)) {
            return Some(*action);
        }
    }
    None
}

/// Interpret a transcript, applying settings mutations directly.
///
/// Focus and help actions are returned as data for the caller to dispatch;
/// the interpreter never renders UI feedback itself.
pub fn interpret(transcript: &str, settings: &mut AdaptiveSettings) -> CommandResult {
    match parse_voice_command(transcript) {
        Some(action) => {
            match action {
                VoiceAction::ToggleContrast => {
                    settings.toggle_high_contrast();
                }
                VoiceAction::IncreaseText => {
                    settings.adjust_font_size(FONT_SIZE_STEP);
                }
                VoiceAction::DecreaseText => {
                    settings.adjust_font_size(-FONT_SIZE_STEP);
                }
                VoiceAction::FocusResources | VoiceAction::FocusSchedule | VoiceAction::Help => {}
            }
            CommandResult::Handled { action }
        }
        None => CommandResult::Unrecognized {
            transcript: transcript.trim().to_string(),
        },
    }
}

/// Message shown when no rule matched the transcript.
pub fn unrecognized_notice(transcript: &str) -> String {
    format!("Sorry, I didn't understand: \"{transcript}\"")
}

//! Typed UI event contract so the core and presentation layers stay decoupled.
//!
//! The core never touches a display surface; it emits these events and lets
//! the frontend decide how to render them. The demo binary serializes them as
//! newline-delimited JSON.

use serde::Serialize;

use crate::schedule::{EntryId, ScheduleEntry};
use crate::settings::AdaptiveSettings;

/// Logical focus targets resolved by the presentation layer.
///
/// The core emits only the target name; mapping it to a concrete UI element
/// is the frontend's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusTarget {
    Resources,
    Schedule,
}

impl FocusTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusTarget::Resources => "resources",
            FocusTarget::Schedule => "schedule",
        }
    }
}

/// Events emitted by the session core.
///
/// Serialized as JSON with an `"event"` tag field for type discrimination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum UiEvent {
    /// Voice capture started or stopped.
    #[serde(rename = "listening")]
    Listening {
        /// Whether capture is active after the change.
        active: bool,
    },

    /// Request to move input focus to a logical section.
    #[serde(rename = "focus")]
    Focus {
        /// Logical target name for the frontend to resolve.
        target: FocusTarget,
    },

    /// Informational text for the user (help, unrecognized command).
    #[serde(rename = "notice")]
    Notice {
        /// Human-readable message to display.
        message: String,
    },

    /// Settings changed; carries the full resulting snapshot.
    #[serde(rename = "settings")]
    Settings {
        /// Snapshot after the mutation.
        settings: AdaptiveSettings,
    },

    /// A schedule entry was appended.
    #[serde(rename = "schedule_added")]
    ScheduleAdded {
        /// The entry as stored, including its issued id.
        entry: ScheduleEntry,
    },

    /// A schedule entry was removed (marked done).
    #[serde(rename = "schedule_removed")]
    ScheduleRemoved {
        /// Id of the removed entry.
        id: EntryId,
    },

    /// Point-in-time snapshot of the whole schedule in insertion order.
    #[serde(rename = "schedule")]
    Schedule {
        /// Entries as currently stored.
        entries: Vec<ScheduleEntry>,
    },

    /// The speech capability is unavailable or failed to start; voice
    /// navigation degrades while the rest of the session keeps working.
    #[serde(rename = "voice_unavailable")]
    VoiceUnavailable {
        /// Human-readable reason for the degradation.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_event_tag() {
        let json = serde_json::to_string(&UiEvent::Focus {
            target: FocusTarget::Resources,
        })
        .expect("serialize focus event");
        assert_eq!(json, r#"{"event":"focus","target":"resources"}"#);
    }

    #[test]
    fn listening_event_carries_active_flag() {
        let json = serde_json::to_string(&UiEvent::Listening { active: true })
            .expect("serialize listening event");
        assert_eq!(json, r#"{"event":"listening","active":true}"#);
    }

    #[test]
    fn focus_target_names_are_stable() {
        assert_eq!(FocusTarget::Resources.as_str(), "resources");
        assert_eq!(FocusTarget::Schedule.as_str(), "schedule");
    }
}

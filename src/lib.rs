//! Shared hubvoice library exports that keep the demo binary and tests aligned.

pub mod config;
pub mod events;
pub mod schedule;
pub mod settings;
mod telemetry;
pub mod voice;

pub use config::AppConfig;
pub use events::UiEvent;
pub use schedule::{EntryId, ScheduleEntry, ScheduleError, ScheduleRegistry};
pub use settings::AdaptiveSettings;
pub use telemetry::init_tracing;
pub use voice::{
    interpret, CaptureEvent, CommandResult, SpeechCapture, TranscriptFeeder, TypedCapture,
    UnavailableCapture, VoiceAction, VoiceSession,
};

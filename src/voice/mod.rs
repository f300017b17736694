//! Voice navigation subsystem so capture, commands, and session policy stay aligned.

mod capture;
mod commands;
mod session;

pub use capture::{
    CaptureEvent, SpeechCapture, TranscriptFeeder, TypedCapture, UnavailableCapture,
};
pub use commands::{
    interpret, parse_voice_command, unrecognized_notice, CommandResult, VoiceAction, HELP_TEXT,
};
pub use session::VoiceSession;

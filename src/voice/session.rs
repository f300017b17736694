//! Voice session driver so listening state and interpretation stay serialized.
//!
//! The session owns the settings store and the capture handle. All mutation
//! happens on the caller's thread: capture events are drained one at a time
//! in finalization order, and a stop request takes effect before any
//! transcript that finalizes after it.

use tracing::{debug, warn};

use crate::events::UiEvent;
use crate::settings::AdaptiveSettings;
use crate::voice::capture::{CaptureEvent, SpeechCapture};
use crate::voice::commands::{interpret, unrecognized_notice, CommandResult, VoiceAction, HELP_TEXT};

pub struct VoiceSession<C: SpeechCapture> {
    capture: C,
    settings: AdaptiveSettings,
}

impl<C: SpeechCapture> VoiceSession<C> {
    pub fn new(capture: C) -> Self {
        Self::with_settings(capture, AdaptiveSettings::default())
    }

    pub fn with_settings(capture: C, settings: AdaptiveSettings) -> Self {
        Self { capture, settings }
    }

    pub fn settings(&self) -> AdaptiveSettings {
        self.settings
    }

    /// Direct access for user-initiated settings actions (toolbar toggles,
    /// font slider). Voice-driven mutations go through the drain path.
    pub fn settings_mut(&mut self) -> &mut AdaptiveSettings {
        &mut self.settings
    }

    /// Request voice capture. Idempotent while already listening; a start
    /// failure degrades voice navigation without touching the rest of the
    /// session.
    pub fn start_listening(&mut self, events: &mut Vec<UiEvent>) {
        if self.settings.listening {
            debug!("voice start ignored; already listening");
            return;
        }
        match self.capture.start() {
            Ok(()) => {
                self.settings.set_listening(true);
                events.push(UiEvent::Listening { active: true });
            }
            Err(err) => {
                warn!("voice capture unavailable: {err:#}");
                events.push(UiEvent::VoiceUnavailable {
                    reason: format!("{err:#}"),
                });
            }
        }
    }

    /// Stop voice capture, effective immediately: the listening flag clears
    /// before the capability is told to stop, so transcripts finalized after
    /// this call are discarded by the next drain. Stopping while idle is a
    /// no-op.
    pub fn stop_listening(&mut self, events: &mut Vec<UiEvent>) {
        if !self.settings.listening {
            return;
        }
        self.settings.set_listening(false);
        self.capture.stop();
        events.push(UiEvent::Listening { active: false });
    }

    /// Drain pending capture events, one at a time, in finalization order.
    pub fn drain_capture(&mut self, events: &mut Vec<UiEvent>) {
        while let Ok(event) = self.capture.events().try_recv() {
            match event {
                CaptureEvent::Transcript(text) => self.handle_transcript(&text, events),
                CaptureEvent::Ended => {
                    // Capture ended on the capability side (timeout, error, or
                    // the echo of an explicit stop).
                    if self.settings.listening {
                        self.settings.set_listening(false);
                        events.push(UiEvent::Listening { active: false });
                    }
                }
            }
        }
    }

    fn handle_transcript(&mut self, text: &str, events: &mut Vec<UiEvent>) {
        if !self.settings.listening {
            debug!("transcript discarded after stop: {text:?}");
            return;
        }
        match interpret(text, &mut self.settings) {
            CommandResult::Handled { action } => {
                if let Some(target) = action.focus_target() {
                    events.push(UiEvent::Focus { target });
                } else if action == VoiceAction::Help {
                    events.push(UiEvent::Notice {
                        message: HELP_TEXT.to_string(),
                    });
                } else {
                    events.push(UiEvent::Settings {
                        settings: self.settings,
                    });
                }
            }
            CommandResult::Unrecognized { transcript } => {
                events.push(UiEvent::Notice {
                    message: unrecognized_notice(&transcript),
                });
            }
        }
    }
}

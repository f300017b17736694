//! Speech-capture abstraction so the core never binds to a platform speech API.
//!
//! The capability delivers events serially through a channel; the session
//! drains them on its own thread, so no concurrent delivery is possible.

use anyhow::{anyhow, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Notifications a speech capability delivers to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// A finalized transcript, ready for interpretation.
    Transcript(String),
    /// Capture stopped, whether by timeout, error, or explicit stop.
    Ended,
}

/// Minimal start/stop/notify surface of a speech capability.
pub trait SpeechCapture {
    /// Begin capture. Starting while already capturing must be benign.
    ///
    /// # Errors
    ///
    /// Returns an error when the capability is unavailable or cannot start;
    /// the session degrades voice navigation instead of crashing.
    fn start(&mut self) -> Result<()>;

    /// Stop capture. Stopping when idle is a no-op.
    fn stop(&mut self);

    /// Channel the capability delivers its events on.
    fn events(&self) -> &Receiver<CaptureEvent>;
}

/// Deterministic capture fed by typed text instead of a microphone.
///
/// Stands in for the platform speech capability in the demo binary and in
/// tests: the paired [`TranscriptFeeder`] plays the role of the external
/// recognizer finalizing results.
#[derive(Debug)]
pub struct TypedCapture {
    tx: Sender<CaptureEvent>,
    rx: Receiver<CaptureEvent>,
    active: bool,
}

/// External-side handle that finalizes transcripts into a [`TypedCapture`].
#[derive(Debug, Clone)]
pub struct TranscriptFeeder {
    tx: Sender<CaptureEvent>,
}

impl TranscriptFeeder {
    /// Deliver a finalized transcript.
    pub fn finalize(&self, transcript: impl Into<String>) {
        let _ = self.tx.send(CaptureEvent::Transcript(transcript.into()));
    }

    /// Signal that capture ended on the capability side (e.g. a timeout).
    pub fn end(&self) {
        let _ = self.tx.send(CaptureEvent::Ended);
    }
}

impl TypedCapture {
    pub fn new() -> (Self, TranscriptFeeder) {
        let (tx, rx) = unbounded();
        let feeder = TranscriptFeeder { tx: tx.clone() };
        (
            Self {
                tx,
                rx,
                active: false,
            },
            feeder,
        )
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl SpeechCapture for TypedCapture {
    fn start(&mut self) -> Result<()> {
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        if self.active {
            self.active = false;
            let _ = self.tx.send(CaptureEvent::Ended);
        }
    }

    fn events(&self) -> &Receiver<CaptureEvent> {
        &self.rx
    }
}

/// Capture whose start always fails, for frontends without a speech capability.
#[derive(Debug)]
pub struct UnavailableCapture {
    reason: String,
    _tx: Sender<CaptureEvent>,
    rx: Receiver<CaptureEvent>,
}

impl UnavailableCapture {
    pub fn new(reason: impl Into<String>) -> Self {
        let (tx, rx) = unbounded();
        Self {
            reason: reason.into(),
            _tx: tx,
            rx,
        }
    }
}

impl SpeechCapture for UnavailableCapture {
    fn start(&mut self) -> Result<()> {
        Err(anyhow!("speech capability unavailable: {}", self.reason))
    }

    fn stop(&mut self) {}

    fn events(&self) -> &Receiver<CaptureEvent> {
        &self.rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_capture_delivers_finalized_transcripts_in_order() {
        let (mut capture, feeder) = TypedCapture::new();
        capture.start().expect("typed capture start");
        feeder.finalize("first");
        feeder.finalize("second");
        assert_eq!(
            capture.events().try_recv(),
            Ok(CaptureEvent::Transcript("first".to_string()))
        );
        assert_eq!(
            capture.events().try_recv(),
            Ok(CaptureEvent::Transcript("second".to_string()))
        );
    }

    #[test]
    fn typed_capture_stop_emits_ended_once() {
        let (mut capture, _feeder) = TypedCapture::new();
        capture.start().expect("typed capture start");
        capture.stop();
        capture.stop();
        assert_eq!(capture.events().try_recv(), Ok(CaptureEvent::Ended));
        assert!(capture.events().try_recv().is_err());
    }

    #[test]
    fn typed_capture_stop_when_idle_sends_nothing() {
        let (mut capture, _feeder) = TypedCapture::new();
        capture.stop();
        assert!(capture.events().try_recv().is_err());
    }

    #[test]
    fn typed_capture_tracks_active_across_start_and_stop() {
        let (mut capture, _feeder) = TypedCapture::new();
        assert!(!capture.is_active());
        capture.start().expect("typed capture start");
        assert!(capture.is_active());
        capture.stop();
        assert!(!capture.is_active());
    }

    #[test]
    fn unavailable_capture_start_reports_the_reason() {
        let mut capture = UnavailableCapture::new("no recognizer on this platform");
        let err = capture.start().expect_err("start must fail");
        assert!(err.to_string().contains("no recognizer on this platform"));
    }
}

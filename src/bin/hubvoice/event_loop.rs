//! Runtime loop that coordinates console input, the voice session, and the schedule.
//!
//! All mutation happens on this thread. The input thread only forwards raw
//! lines; capture events are drained here, serially, after each command.

use std::time::Duration;

use anyhow::Result;
use crossbeam_channel::{unbounded, RecvTimeoutError};
use hubvoice::events::UiEvent;
use hubvoice::schedule::ScheduleRegistry;
use hubvoice::voice::{TranscriptFeeder, TypedCapture, VoiceSession};

use crate::config::HubConfig;
use crate::console::{parse_console_command, ConsoleCommand, USAGE};
use crate::input::spawn_input_thread;
use crate::writer::EventWriter;

const INPUT_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct HubLoop {
    session: VoiceSession<TypedCapture>,
    feeder: TranscriptFeeder,
    registry: ScheduleRegistry,
}

impl HubLoop {
    fn new(config: &HubConfig) -> Self {
        let (capture, feeder) = TypedCapture::new();
        let session = VoiceSession::with_settings(capture, config.initial_settings());
        let registry = if config.empty_schedule {
            ScheduleRegistry::new()
        } else {
            ScheduleRegistry::with_default_routine()
        };
        Self {
            session,
            feeder,
            registry,
        }
    }

    fn handle_command(&mut self, command: ConsoleCommand, events: &mut Vec<UiEvent>) -> Flow {
        match command {
            ConsoleCommand::Say(text) => {
                // The external capability finalizes text regardless of our
                // state; the discard-after-stop policy lives in the session.
                self.feeder.finalize(text);
            }
            ConsoleCommand::StartListening => self.session.start_listening(events),
            ConsoleCommand::StopListening => self.session.stop_listening(events),
            ConsoleCommand::AddEntry { time, title } => {
                match self.registry.add_with_default_icon(time, title) {
                    Ok(id) => {
                        if let Some(entry) =
                            self.registry.entries().iter().find(|entry| entry.id == id)
                        {
                            events.push(UiEvent::ScheduleAdded {
                                entry: entry.clone(),
                            });
                        }
                    }
                    Err(err) => events.push(UiEvent::Notice {
                        message: err.to_string(),
                    }),
                }
            }
            ConsoleCommand::MarkDone(raw_id) => {
                let id = self
                    .registry
                    .entries()
                    .iter()
                    .find(|entry| entry.id.to_string() == raw_id)
                    .map(|entry| entry.id);
                match id {
                    Some(id) if self.registry.remove(id) => {
                        events.push(UiEvent::ScheduleRemoved { id });
                    }
                    _ => events.push(UiEvent::Notice {
                        message: format!("No schedule entry with id {raw_id}"),
                    }),
                }
            }
            ConsoleCommand::ShowSchedule => events.push(UiEvent::Schedule {
                entries: self.registry.entries().to_vec(),
            }),
            ConsoleCommand::SetFontSize(size) => {
                let snapshot = self.session.settings_mut().set_font_size(size);
                events.push(UiEvent::Settings { settings: snapshot });
            }
            ConsoleCommand::ToggleContrast => {
                let snapshot = self.session.settings_mut().toggle_high_contrast();
                events.push(UiEvent::Settings { settings: snapshot });
            }
            ConsoleCommand::ToggleMotion => {
                let snapshot = self.session.settings_mut().toggle_reduced_motion();
                events.push(UiEvent::Settings { settings: snapshot });
            }
            ConsoleCommand::ToggleSensory => {
                let snapshot = self.session.settings_mut().toggle_sensory_mode();
                events.push(UiEvent::Settings { settings: snapshot });
            }
            ConsoleCommand::Help => events.push(UiEvent::Notice {
                message: USAGE.to_string(),
            }),
            ConsoleCommand::Quit => return Flow::Quit,
            ConsoleCommand::Unknown(line) => events.push(UiEvent::Notice {
                message: format!("Unknown command: {line} (type 'help')"),
            }),
        }
        Flow::Continue
    }
}

pub(crate) fn run(config: &HubConfig) -> Result<()> {
    let mut hub = HubLoop::new(config);
    let writer = EventWriter::new(config.output);
    let (input_tx, input_rx) = unbounded();
    let _input_thread = spawn_input_thread(input_tx);
    let poll = Duration::from_millis(INPUT_POLL_INTERVAL_MS);

    let mut events = Vec::new();
    loop {
        let flow = match input_rx.recv_timeout(poll) {
            Ok(line) => match parse_console_command(&line) {
                Some(command) => hub.handle_command(command, &mut events),
                None => Flow::Continue,
            },
            Err(RecvTimeoutError::Timeout) => Flow::Continue,
            Err(RecvTimeoutError::Disconnected) => Flow::Quit,
        };
        hub.session.drain_capture(&mut events);
        for event in events.drain(..) {
            writer.emit(&event);
        }
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

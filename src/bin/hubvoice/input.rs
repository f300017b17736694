//! Input-thread bootstrap so stdin reading stays isolated from session logic.

use crossbeam_channel::Sender;
use std::io::{self, BufRead};
use std::thread;
use tracing::debug;

pub(crate) fn spawn_input_thread(tx: Sender<String>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    debug!("stdin read error: {err}");
                    break;
                }
            };
            if tx.send(line).is_err() {
                return;
            }
        }
        // EOF: dropping the sender lets the event loop shut down.
    })
}

//! Host input read from stdin, one JSON document per line.

use std::io::BufRead;
use std::sync::mpsc;

use nova_ui::{UiController, UiEvent};
use tracing::{debug, info, warn};

/// A non-blank stdin line, decoded as far as the mode allows.
#[derive(Debug, PartialEq)]
pub enum StdinLine {
    Event(UiEvent),
    Message(String),
}

/// Classify `line`. With `accept_events`, `UiEvent` envelopes are recognized;
/// everything else is treated as a raw host message.
pub fn classify_line(line: &str, accept_events: bool) -> Option<StdinLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if accept_events {
        if let Some(event) = UiEvent::from_json(line) {
            return Some(StdinLine::Event(event));
        }
    }
    Some(StdinLine::Message(line.to_string()))
}

pub fn dispatch_line(controller: &mut UiController, line: &str, accept_events: bool) {
    match classify_line(line, accept_events) {
        Some(StdinLine::Event(event)) => {
            if let Some(outcome) = controller.handle_event(event) {
                debug!(?outcome, "key event handled");
            }
        }
        Some(StdinLine::Message(raw)) => {
            controller.handle_json(&raw);
        }
        None => {}
    }
}

/// Read stdin on a background thread, forwarding each line.
/// The thread ends at EOF or when the receiver is dropped.
pub fn spawn_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    let spawned = std::thread::Builder::new()
        .name("nova-stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "stdin read failed");
                        return;
                    }
                }
            }
            info!("stdin closed");
        });
    if let Err(e) = spawned {
        warn!(error = %e, "failed to spawn stdin reader");
    }
    rx
}

//! Per-frame polling: stdin messages, IPC events, queued scripts.

use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use crate::stdin::dispatch_line;

use super::core::NovaApp;

/// How often the event loop wakes to pump the controller.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl NovaApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_stdin();
            self.poll_webview_events();
            self.flush_scripts();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_stdin(&mut self) {
        let (Some(rx), Some(controller)) = (&self.stdin_rx, self.controller.as_mut()) else {
            return;
        };
        let mut closed = false;
        loop {
            match rx.try_recv() {
                Ok(line) => dispatch_line(controller, &line, false),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    closed = true;
                    break;
                }
            }
        }
        if closed {
            tracing::debug!("stdin reader finished");
            self.stdin_rx = None;
        }
    }

    fn poll_webview_events(&mut self) {
        let (Some(host), Some(controller)) = (&self.webview, self.controller.as_mut()) else {
            return;
        };
        for event in host.drain_events() {
            if let Some(outcome) = controller.handle_event(event) {
                tracing::trace!(?outcome, "key event handled");
            }
        }
    }

    fn flush_scripts(&mut self) {
        if let Some(host) = &self.webview {
            let count = host.flush_scripts();
            if count > 0 {
                tracing::trace!(count, "scripts flushed");
            }
        }
    }
}

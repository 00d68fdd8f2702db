//! The UI controller: owns every piece of mutable UI state.

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use nova_config::NovaConfig;
use serde::Serialize;
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::callback::{CallbackName, HostCallback, TpcdsResult};
use crate::clipboard::{ClipboardRelay, ClipboardSink};
use crate::coords::{CoordinatePanel, SubmitOutcome};
use crate::event::{Key, KeyEvent, KeyOutcome, KeyPhase, KeyTarget, UiEvent};
use crate::message::InboundMessage;
use crate::progress::ProgressTimer;
use crate::router::{self, MessageHandler};
use crate::surface::{PanelSurface, ProgressSurface};

/// Everything the controller renders to or talks through.
pub struct UiBindings {
    pub progress: Arc<dyn ProgressSurface>,
    pub panel: Arc<dyn PanelSurface>,
    pub clipboard: Arc<dyn ClipboardSink>,
    pub callbacks: Arc<dyn HostCallback>,
}

/// Routes host messages and key events to the progress bar, the coordinate
/// panel and the clipboard, and sends results back to the host.
///
/// Timers and callbacks run as tasks on `runtime`; the controller itself is
/// driven from a single thread.
pub struct UiController {
    progress: ProgressTimer,
    panel: CoordinatePanel,
    clipboard: ClipboardRelay,
    callbacks: Arc<dyn HostCallback>,
    /// Callbacks spawned by `emit` that may still be in flight.
    pending: Vec<JoinHandle<()>>,
    callback_timeout: Duration,
    runtime: Handle,
}

impl UiController {
    pub fn new(runtime: Handle, config: &NovaConfig, bindings: UiBindings) -> Self {
        Self {
            progress: ProgressTimer::new(bindings.progress, runtime.clone(), &config.progress),
            panel: CoordinatePanel::new(bindings.panel, runtime.clone(), &config.panel),
            clipboard: ClipboardRelay::new(bindings.clipboard),
            callbacks: bindings.callbacks,
            pending: Vec::new(),
            callback_timeout: config.callback.timeout(),
            runtime,
        }
    }

    pub fn progress(&self) -> &ProgressTimer {
        &self.progress
    }

    pub fn panel(&self) -> &CoordinatePanel {
        &self.panel
    }

    /// Dispatch a decoded host message.
    pub fn handle_message(&mut self, message: &InboundMessage) {
        router::route(self, message);
    }

    /// Parse and dispatch a raw JSON host message. Malformed input is ignored.
    pub fn handle_json(&mut self, raw: &str) -> bool {
        router::route_json(self, raw)
    }

    /// Handle an event forwarded from the page. Returns the key verdict for
    /// key events.
    pub fn handle_event(&mut self, event: UiEvent) -> Option<KeyOutcome> {
        match event {
            UiEvent::Nui(value) => {
                match InboundMessage::from_value(value) {
                    Some(message) => self.handle_message(&message),
                    None => debug!("host message ignored: failed to parse"),
                }
                None
            }
            UiEvent::Key(key) => Some(self.handle_key(&key)),
        }
    }

    /// Handle a keyboard event.
    ///
    /// Events from the coordinate input never propagate further, so the
    /// document Escape handler does not see them. Escape on the document
    /// cancels an open panel, or asks the host to close the UI.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        match event.target {
            KeyTarget::Input => self.handle_input_key(event),
            KeyTarget::Document => {
                if event.phase == KeyPhase::Down && event.key == Key::Escape {
                    self.handle_escape();
                }
                KeyOutcome::pass()
            }
        }
    }

    fn handle_input_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        let mut outcome = KeyOutcome::stopped();
        if event.phase != KeyPhase::Down {
            return outcome;
        }

        match event.key {
            Key::Enter => {
                outcome.default_prevented = true;
                let raw = event.value.as_deref().unwrap_or_default();
                if let SubmitOutcome::Submitted(coordinate) = self.panel.submit(raw) {
                    self.emit(CallbackName::TpcdsResult, TpcdsResult::from(coordinate));
                }
            }
            _ => {}
        }
        outcome
    }

    fn handle_escape(&mut self) {
        if self.panel.cancel() {
            self.emit(CallbackName::TpcdsResult, TpcdsResult::cancelled());
        } else {
            self.emit(CallbackName::CloseUi, serde_json::json!({}));
        }
    }

    /// Send a callback in the background. Failures are logged.
    ///
    /// The task is tracked until [`finish_callbacks`](Self::finish_callbacks).
    pub fn emit<T: Serialize>(&mut self, name: CallbackName, payload: T) {
        let payload = serde_json::to_value(payload).unwrap_or_else(|e| {
            warn!(callback = name.as_str(), error = %e, "callback payload not serializable");
            Value::Object(Default::default())
        });
        let callbacks = Arc::clone(&self.callbacks);

        debug!(callback = name.as_str(), "emitting callback");
        self.pending.retain(|task| !task.is_finished());
        self.pending.push(self.runtime.spawn(async move {
            if let Err(e) = callbacks.invoke(name.as_str(), payload).await {
                warn!(callback = name.as_str(), error = %e, "callback failed");
            }
        }));
    }

    /// Number of emitted callbacks that have not completed.
    pub fn pending_callbacks(&self) -> usize {
        self.pending.iter().filter(|task| !task.is_finished()).count()
    }

    /// Wait for every emitted callback, up to the configured callback timeout.
    /// Returns how many were still running when the wait gave up; those are
    /// aborted.
    pub async fn finish_callbacks(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return 0;
        }

        let deadline = tokio::time::Instant::now() + self.callback_timeout;
        let mut abandoned = 0;
        for mut task in pending {
            if tokio::time::timeout_at(deadline, &mut task).await.is_err() {
                task.abort();
                abandoned += 1;
            }
        }
        if abandoned > 0 {
            warn!(abandoned, "callbacks still in flight at shutdown");
        } else {
            info!("all callbacks delivered");
        }
        abandoned
    }
}

impl Drop for UiController {
    fn drop(&mut self) {
        for task in &self.pending {
            task.abort();
        }
    }
}

impl MessageHandler for UiController {
    fn show_progressbar(&mut self, label: &str, duration_ms: f64) {
        self.progress.show(label, duration_ms);
    }

    fn hide_progressbar(&mut self) {
        self.progress.hide();
    }

    fn open_tpcds(&mut self) {
        self.panel.open();
    }

    fn copy_to_clipboard(&mut self, text: Option<&str>) {
        self.clipboard.relay(text);
    }
}

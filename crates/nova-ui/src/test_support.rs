//! Recording doubles for surfaces, clipboard and host callbacks.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use nova_common::{CallbackError, PlatformError};
use serde_json::Value;

use crate::callback::HostCallback;
use crate::clipboard::ClipboardSink;
use crate::surface::{PanelSurface, ProgressSurface};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Label(String),
    Fill(f64),
    Visible(bool),
    ClearInput,
    FocusInput,
}

#[derive(Default)]
pub struct RecordingSurface {
    ops: Mutex<Vec<Op>>,
}

impl RecordingSurface {
    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    pub fn fills(&self) -> Vec<f64> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Fill(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn last_fill(&self) -> Option<f64> {
        self.fills().last().copied()
    }

    pub fn visible(&self) -> Option<bool> {
        self.ops().into_iter().rev().find_map(|op| match op {
            Op::Visible(v) => Some(v),
            _ => None,
        })
    }

    fn push(&self, op: Op) {
        self.ops.lock().unwrap().push(op);
    }
}

impl ProgressSurface for RecordingSurface {
    fn set_label(&self, text: &str) {
        self.push(Op::Label(text.to_string()));
    }

    fn set_fill(&self, percent: f64) {
        self.push(Op::Fill(percent));
    }

    fn set_visible(&self, visible: bool) {
        self.push(Op::Visible(visible));
    }
}

impl PanelSurface for RecordingSurface {
    fn clear_input(&self) {
        self.push(Op::ClearInput);
    }

    fn set_visible(&self, visible: bool) {
        self.push(Op::Visible(visible));
    }

    fn focus_input(&self) {
        self.push(Op::FocusInput);
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub copied: Mutex<Vec<String>>,
    pub fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn copy_text(&self, text: &str) -> Result<(), PlatformError> {
        if self.fail {
            return Err(PlatformError::ClipboardError("no display".into()));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingCallbacks {
    pub calls: Mutex<Vec<(String, Value)>>,
    pub fail: bool,
    /// Simulated round trip; the call is recorded once it elapses.
    pub delay: Option<Duration>,
}

impl RecordingCallbacks {
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostCallback for RecordingCallbacks {
    async fn invoke(&self, name: &str, payload: Value) -> Result<Value, CallbackError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.calls.lock().unwrap().push((name.to_string(), payload));
        if self.fail {
            Err(CallbackError::Transport("connection refused".into()))
        } else {
            Ok(serde_json::json!({"ok": true}))
        }
    }
}

/// Let spawned tasks run. Time is paused in these tests, so this also
/// advances the clock by one millisecond.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

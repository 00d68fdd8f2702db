//! DOM-backed surfaces.
//!
//! The controller runs partly on timer tasks, while a `wry::WebView` may
//! only be touched from the UI thread. Surfaces therefore queue scripts and
//! the host flushes the queue from its event loop.

use std::sync::{Arc, Mutex};

use nova_common::PlatformError;
use nova_ui::{ClipboardSink, PanelSurface, ProgressSurface};

use crate::script::{
    self, PROGRESS_CONTAINER_ID, PROGRESS_FILL_ID, PROGRESS_LABEL_ID, TPCDS_INPUT_ID,
    TPCDS_OVERLAY_ID,
};

/// Scripts waiting to be evaluated on the UI thread, in order.
#[derive(Clone, Default)]
pub struct ScriptQueue {
    scripts: Arc<Mutex<Vec<String>>>,
}

impl ScriptQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, script: String) {
        if let Ok(mut scripts) = self.scripts.lock() {
            scripts.push(script);
        }
    }

    /// Take all pending scripts.
    pub fn drain(&self) -> Vec<String> {
        self.scripts
            .lock()
            .map(|mut scripts| std::mem::take(&mut *scripts))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.scripts.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders the progress bar and coordinate panel into the bundled page.
#[derive(Clone)]
pub struct DomSurface {
    queue: ScriptQueue,
}

impl DomSurface {
    pub fn new(queue: ScriptQueue) -> Self {
        Self { queue }
    }
}

impl ProgressSurface for DomSurface {
    fn set_label(&self, text: &str) {
        self.queue.push(script::set_text(PROGRESS_LABEL_ID, text));
    }

    fn set_fill(&self, percent: f64) {
        self.queue
            .push(script::set_width_percent(PROGRESS_FILL_ID, percent));
    }

    fn set_visible(&self, visible: bool) {
        self.queue
            .push(script::set_hidden(PROGRESS_CONTAINER_ID, !visible));
    }
}

impl PanelSurface for DomSurface {
    fn clear_input(&self) {
        self.queue.push(script::clear_value(TPCDS_INPUT_ID));
    }

    fn set_visible(&self, visible: bool) {
        self.queue.push(script::set_hidden(TPCDS_OVERLAY_ID, !visible));
    }

    fn focus_input(&self) {
        self.queue.push(script::focus(TPCDS_INPUT_ID));
    }
}

/// Copies through the page's staging textarea. Delivery is not confirmed.
impl ClipboardSink for DomSurface {
    fn copy_text(&self, text: &str) -> Result<(), PlatformError> {
        self.queue.push(script::copy_via_staging(text));
        Ok(())
    }
}

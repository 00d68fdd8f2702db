//! Clipboard relay for `copyToClipboard` host messages.

use std::sync::{Arc, Mutex};

use nova_common::PlatformError;
use tracing::{debug, warn};

/// Destination of copied text.
pub trait ClipboardSink: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), PlatformError>;
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: Mutex<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, arboard::Clipboard>, PlatformError> {
        self.inner
            .lock()
            .map_err(|_| PlatformError::ClipboardError("clipboard lock poisoned".into()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), PlatformError> {
        self.lock()?
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}

/// Copies host-supplied text, silently skipping empty requests.
pub struct ClipboardRelay {
    sink: Arc<dyn ClipboardSink>,
}

impl ClipboardRelay {
    pub fn new(sink: Arc<dyn ClipboardSink>) -> Self {
        Self { sink }
    }

    /// Copy `text` if it is present and non-empty. Returns whether a copy
    /// succeeded. Failures are logged only.
    pub fn relay(&self, text: Option<&str>) -> bool {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            debug!("clipboard copy skipped: no text");
            return false;
        };

        match self.sink.copy_text(text) {
            Ok(()) => {
                debug!(len = text.len(), "text copied to clipboard");
                true
            }
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingClipboard;

    #[test]
    fn copies_non_empty_text() {
        let sink = Arc::new(RecordingClipboard::default());
        let relay = ClipboardRelay::new(sink.clone());

        assert!(relay.relay(Some("vector3(1.0, 2.0, 3.0)")));
        assert_eq!(*sink.copied.lock().unwrap(), vec!["vector3(1.0, 2.0, 3.0)"]);
    }

    #[test]
    fn empty_or_missing_text_does_nothing() {
        let sink = Arc::new(RecordingClipboard::default());
        let relay = ClipboardRelay::new(sink.clone());

        assert!(!relay.relay(Some("")));
        assert!(!relay.relay(None));
        assert!(sink.copied.lock().unwrap().is_empty());
    }

    #[test]
    fn sink_failure_is_swallowed() {
        let sink = Arc::new(RecordingClipboard {
            fail: true,
            ..Default::default()
        });
        let relay = ClipboardRelay::new(sink);
        assert!(!relay.relay(Some("text")));
    }
}

//! Graceful shutdown.

use std::time::Duration;

use super::core::NovaApp;

impl NovaApp {
    /// Deliver pending callbacks, stop timers, destroy the WebView, then
    /// stop the runtime.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let (Some(controller), Some(rt)) = (self.controller.as_mut(), &self.tokio_runtime) {
            rt.block_on(controller.finish_callbacks());
        }

        // Aborts the progress and focus tasks
        self.controller = None;
        self.stdin_rx = None;
        self.webview = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }
    }
}

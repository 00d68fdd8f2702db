//! NovaApp struct definition and constructor.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use nova_common::NovaError;
use nova_config::NovaConfig;
use nova_ui::{ClipboardSink, HostCallback, SystemClipboard, UiBindings, UiController};
use nova_webview::{DomSurface, ScriptQueue, WebViewHost};

/// Top-level application state.
pub struct NovaApp {
    pub(super) config: NovaConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webview: Option<WebViewHost>,
    pub(super) scripts: ScriptQueue,

    // UI state; dropped before the runtime
    pub(super) controller: Option<UiController>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Host messages from stdin
    pub(super) stdin_rx: Option<mpsc::Receiver<String>>,

    pub(super) last_poll: Instant,

    // Set when startup fails inside the event loop
    pub(super) fatal_error: Option<NovaError>,
}

impl NovaApp {
    pub fn new(
        config: NovaConfig,
        runtime: tokio::runtime::Runtime,
        callbacks: Arc<dyn HostCallback>,
        stdin_rx: mpsc::Receiver<String>,
    ) -> Self {
        let scripts = ScriptQueue::new();
        let surface = Arc::new(DomSurface::new(scripts.clone()));

        let clipboard: Arc<dyn ClipboardSink> = match SystemClipboard::new() {
            Ok(clipboard) => Arc::new(clipboard),
            Err(e) => {
                tracing::warn!("System clipboard unavailable, copying through the page: {e}");
                surface.clone()
            }
        };

        let bindings = UiBindings {
            progress: surface.clone(),
            panel: surface,
            clipboard,
            callbacks,
        };
        let controller = UiController::new(runtime.handle().clone(), &config, bindings);

        Self {
            config,
            window: None,
            webview: None,
            scripts,
            controller: Some(controller),
            tokio_runtime: Some(runtime),
            stdin_rx: Some(stdin_rx),
            last_poll: Instant::now(),
            fatal_error: None,
        }
    }

    /// The error that ended the event loop, if any.
    pub fn take_fatal_error(&mut self) -> Option<NovaError> {
        self.fatal_error.take()
    }
}

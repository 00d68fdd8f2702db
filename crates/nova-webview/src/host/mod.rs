//! WebView ownership.
//!
//! `WebViewHost` builds the `wry::WebView` for the window, collects the
//! [`UiEvent`]s posted over IPC, and evaluates scripts queued by
//! [`DomSurface`](crate::DomSurface). It must live on the UI thread.

use std::sync::{Arc, Mutex};

use nova_config::WindowConfig;
use nova_ui::UiEvent;
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::dom::ScriptQueue;
use crate::ipc::IPC_INIT_SCRIPT;
use crate::page::render_page;

mod handlers;

pub struct WebViewHost {
    webview: WebView,
    /// Event sink filled by the IPC handler.
    events: Arc<Mutex<Vec<UiEvent>>>,
    scripts: ScriptQueue,
}

impl WebViewHost {
    /// Build the WebView filling `window`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        config: &WindowConfig,
        scripts: ScriptQueue,
    ) -> Result<Self, wry::Error> {
        let events = Arc::new(Mutex::new(Vec::new()));

        let builder = WebViewBuilder::new()
            .with_html(render_page(&config.title))
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(true);
        let builder = handlers::attach_ipc_handler(builder, Arc::clone(&events));

        let webview = builder.build(window)?;
        debug!(title = %config.title, "WebView created");

        Ok(Self {
            webview,
            events,
            scripts,
        })
    }

    /// Drain all pending IPC events.
    pub fn drain_events(&self) -> Vec<UiEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Evaluate every queued script in order. Returns how many ran.
    pub fn flush_scripts(&self) -> usize {
        let scripts = self.scripts.drain();
        let count = scripts.len();
        for script in scripts {
            if let Err(e) = self.webview.evaluate_script(&script) {
                warn!(error = %e, "failed to evaluate script");
            }
        }
        count
    }
}

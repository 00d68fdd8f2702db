//! Window creation and WebView setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use nova_common::NovaError;
use nova_webview::WebViewHost;

use super::core::NovaApp;

impl NovaApp {
    /// Create the window and the WebView inside it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_transparent(window_config.transparent)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fatal_error =
                    Some(NovaError::Other(format!("failed to create window: {e}")));
                return false;
            }
        };

        match WebViewHost::create(window.as_ref(), window_config, self.scripts.clone()) {
            Ok(host) => {
                self.webview = Some(host);
            }
            Err(e) => {
                self.fatal_error = Some(NovaError::WebView(e.to_string()));
                return false;
            }
        }

        tracing::info!(
            width = window_config.width,
            height = window_config.height,
            "Window ready"
        );
        self.window = Some(window);
        true
    }
}

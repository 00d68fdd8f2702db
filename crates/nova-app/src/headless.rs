//! Headless mode: surfaces render to the log, input comes from stdin.
//!
//! Callbacks still in flight when input ends are awaited before exit.

use std::sync::Arc;

use nova_config::NovaConfig;
use nova_ui::{
    ClipboardSink, HostCallback, PanelSurface, ProgressSurface, SystemClipboard, UiBindings,
    UiController,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use crate::stdin::dispatch_line;

/// Renders widget changes as log lines.
pub struct LogSurface;

impl ProgressSurface for LogSurface {
    fn set_label(&self, text: &str) {
        info!(target: "nova::surface", label = %text, "progress label");
    }

    fn set_fill(&self, percent: f64) {
        debug!(target: "nova::surface", percent, "progress fill");
    }

    fn set_visible(&self, visible: bool) {
        info!(target: "nova::surface", visible, "progress visibility");
    }
}

impl PanelSurface for LogSurface {
    fn clear_input(&self) {
        debug!(target: "nova::surface", "panel input cleared");
    }

    fn set_visible(&self, visible: bool) {
        info!(target: "nova::surface", visible, "panel visibility");
    }

    fn focus_input(&self) {
        debug!(target: "nova::surface", "panel input focused");
    }
}

/// Logs copies when no system clipboard is available.
struct LogClipboard;

impl ClipboardSink for LogClipboard {
    fn copy_text(&self, text: &str) -> Result<(), nova_common::PlatformError> {
        info!(target: "nova::surface", len = text.len(), "clipboard copy");
        Ok(())
    }
}

fn clipboard_sink() -> Arc<dyn ClipboardSink> {
    match SystemClipboard::new() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(e) => {
            warn!(error = %e, "system clipboard unavailable, copies will only be logged");
            Arc::new(LogClipboard)
        }
    }
}

/// Run until stdin closes or Ctrl-C.
pub fn run(runtime: Runtime, config: &NovaConfig, callbacks: Arc<dyn HostCallback>) {
    let surface = Arc::new(LogSurface);
    let bindings = UiBindings {
        progress: surface.clone(),
        panel: surface,
        clipboard: clipboard_sink(),
        callbacks,
    };
    let mut controller = UiController::new(runtime.handle().clone(), config, bindings);

    info!("Headless mode, reading host messages from stdin");
    runtime.block_on(async {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                line = lines.next_line() => match line {
                    Ok(Some(line)) => dispatch_line(&mut controller, &line, true),
                    Ok(None) => {
                        info!("stdin closed");
                        break;
                    }
                    Err(e) => {
                        warn!(error = %e, "stdin read failed");
                        break;
                    }
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted");
                    break;
                }
            }
        }
        controller.finish_callbacks().await;
    });

    drop(controller);
    runtime.shutdown_timeout(std::time::Duration::from_secs(2));
}

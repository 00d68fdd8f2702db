use std::sync::Arc;
use std::time::Duration;

use nova_config::PanelConfig;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::surface::PanelSurface;

use super::parse::{parse_coordinates, Coordinate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

/// Result of pressing Enter in the panel input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    /// Input was blank; the panel stays open.
    Empty,
    /// No coordinate could be read; the panel stays open.
    Unparsed,
    /// The panel closed with this coordinate.
    Submitted(Coordinate),
    /// The panel was not open.
    Inactive,
}

/// The modal coordinate entry panel.
pub struct CoordinatePanel {
    surface: Arc<dyn PanelSurface>,
    runtime: Handle,
    focus_delay: Duration,
    state: PanelState,
    focus_task: Option<JoinHandle<()>>,
}

impl CoordinatePanel {
    pub fn new(surface: Arc<dyn PanelSurface>, runtime: Handle, config: &PanelConfig) -> Self {
        Self {
            surface,
            runtime,
            focus_delay: config.focus_delay(),
            state: PanelState::Closed,
            focus_task: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// Clear the input, show the panel and focus the input once it is visible.
    pub fn open(&mut self) {
        self.surface.clear_input();
        self.surface.set_visible(true);
        self.state = PanelState::Open;

        self.abort_focus();
        let surface = Arc::clone(&self.surface);
        let delay = self.focus_delay;
        self.focus_task = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            surface.focus_input();
        }));
        debug!("coordinate panel opened");
    }

    /// Try to read a coordinate from `raw`. Closes the panel on success.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if !self.is_open() {
            return SubmitOutcome::Inactive;
        }

        let raw = raw.trim();
        if raw.is_empty() {
            return SubmitOutcome::Empty;
        }

        match parse_coordinates(raw) {
            Some(coordinate) => {
                self.close();
                debug!(
                    x = coordinate.x,
                    y = coordinate.y,
                    z = coordinate.z,
                    "coordinate submitted"
                );
                SubmitOutcome::Submitted(coordinate)
            }
            None => {
                debug!(input_len = raw.len(), "coordinate input not understood");
                SubmitOutcome::Unparsed
            }
        }
    }

    /// Close without a result. Returns `false` if the panel was not open.
    pub fn cancel(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close();
        debug!("coordinate panel cancelled");
        true
    }

    fn close(&mut self) {
        self.abort_focus();
        self.surface.set_visible(false);
        self.state = PanelState::Closed;
    }

    fn abort_focus(&mut self) {
        if let Some(task) = self.focus_task.take() {
            task.abort();
        }
    }
}

impl Drop for CoordinatePanel {
    fn drop(&mut self) {
        self.abort_focus();
    }
}

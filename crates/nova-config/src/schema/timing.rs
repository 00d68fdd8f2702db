use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Progress bar sampling and completion timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Interval between fill samples, in milliseconds.
    pub tick_ms: u32,
    /// Delay between reaching 100% and hiding the bar, in milliseconds.
    pub grace_ms: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            grace_ms: 200,
        }
    }
}

impl ProgressConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_ms))
    }

    pub fn grace(&self) -> Duration {
        Duration::from_millis(u64::from(self.grace_ms))
    }
}

/// Coordinate panel behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Delay before the input is focused after the panel opens.
    pub focus_delay_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { focus_delay_ms: 50 }
    }
}

impl PanelConfig {
    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.focus_delay_ms))
    }
}

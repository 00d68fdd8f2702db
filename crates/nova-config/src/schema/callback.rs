use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outbound callback channel to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CallbackConfig {
    /// URL scheme of the host callback endpoint.
    pub scheme: String,
    /// Replaces `<scheme>://<resource>` entirely, e.g. `http://127.0.0.1:30120`.
    pub base_url: Option<String>,
    pub connect_timeout_secs: u32,
    pub timeout_secs: u32,
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            scheme: "https".into(),
            base_url: None,
            connect_timeout_secs: 5,
            timeout_secs: 10,
        }
    }
}

impl CallbackConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_secs))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_secs))
    }
}

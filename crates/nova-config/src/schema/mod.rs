//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod callback;
mod timing;
mod window;

pub use callback::*;
pub use timing::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NovaConfig {
    pub resource: ResourceConfig,
    pub progress: ProgressConfig,
    pub panel: PanelConfig,
    pub callback: CallbackConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Identity of the UI resource inside the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Resource identifier used in callback URLs. When unset, the
    /// `NOVA_NUI_RESOURCE` environment variable or the built-in fallback
    /// is used.
    pub name: Option<String>,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for nova crates when neither `RUST_LOG` nor `--log-level` is set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

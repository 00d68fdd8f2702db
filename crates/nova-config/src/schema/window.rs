use serde::{Deserialize, Serialize};

/// Window hosting the web view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub transparent: bool,
    /// Enable web inspector (always on in debug builds).
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Nova UI".into(),
            width: 1280,
            height: 720,
            transparent: true,
            devtools: cfg!(debug_assertions),
        }
    }
}

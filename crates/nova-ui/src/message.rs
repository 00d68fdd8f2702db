//! Inbound messages from the host.
//!
//! The host posts one JSON object per message, tagged by `action`:
//!
//! ```json
//! {"action": "progressbar", "label": "Repairing", "duration": 5000}
//! {"action": "hideProgressbar"}
//! {"action": "openTpcds"}
//! {"action": "copyToClipboard", "text": "vector3(1.0, 2.0, 3.0)"}
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// A single host → UI message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum InboundMessage {
    /// Start (or replace) the progress animation.
    #[serde(rename = "progressbar")]
    Progressbar {
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
        /// Total duration in milliseconds. Missing or `null` completes at once.
        #[serde(default, deserialize_with = "null_as_default")]
        duration: f64,
    },

    /// Cancel any running animation and hide the bar.
    #[serde(rename = "hideProgressbar")]
    HideProgressbar,

    /// Open the coordinate entry panel.
    #[serde(rename = "openTpcds")]
    OpenTpcds,

    /// Copy `text` to the clipboard.
    #[serde(rename = "copyToClipboard")]
    CopyToClipboard {
        #[serde(default)]
        text: Option<String>,
    },

    /// Any action this UI does not know about.
    #[serde(other)]
    Unknown,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl InboundMessage {
    /// Parse a message from raw JSON. Returns `None` for malformed input.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Decode a message from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }

    /// The wire name of the action, or `None` for [`InboundMessage::Unknown`].
    pub fn action(&self) -> Option<&'static str> {
        match self {
            Self::Progressbar { .. } => Some("progressbar"),
            Self::HideProgressbar => Some("hideProgressbar"),
            Self::OpenTpcds => Some("openTpcds"),
            Self::CopyToClipboard { .. } => Some("copyToClipboard"),
            Self::Unknown => None,
        }
    }
}

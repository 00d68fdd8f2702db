//! Keyboard and UI events delivered from the web view.

use serde::{Deserialize, Serialize};

/// A key name, normalized to the handful the UI reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    Enter,
    Escape,
    Other(String),
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other(name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from(name.to_string())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        match key {
            Key::Enter => "Enter".into(),
            Key::Escape => "Escape".into(),
            Key::Other(name) => name,
        }
    }
}

/// Which DOM keyboard event fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPhase {
    #[default]
    Down,
    Up,
    Press,
}

/// Where the key event originated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyTarget {
    /// The coordinate panel's text input.
    Input,
    /// Anywhere else in the document.
    #[default]
    Document,
}

/// A keyboard event as seen by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default)]
    pub phase: KeyPhase,
    #[serde(default)]
    pub target: KeyTarget,
    /// Current text of the coordinate input when the event fired.
    #[serde(default)]
    pub value: Option<String>,
}

impl KeyEvent {
    /// Key-down on the document.
    pub fn document(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            phase: KeyPhase::Down,
            target: KeyTarget::Document,
            value: None,
        }
    }

    /// Key-down in the coordinate input holding `value`.
    pub fn input(key: impl Into<Key>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            phase: KeyPhase::Down,
            target: KeyTarget::Input,
            value: Some(value.into()),
        }
    }

    pub fn with_phase(mut self, phase: KeyPhase) -> Self {
        self.phase = phase;
        self
    }
}

/// Whether an event may continue to outer listeners (e.g. game controls).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// What the page should do with a key event after the controller saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub propagation: Propagation,
    pub default_prevented: bool,
}

impl KeyOutcome {
    pub fn pass() -> Self {
        Self {
            propagation: Propagation::Continue,
            default_prevented: false,
        }
    }

    pub fn stopped() -> Self {
        Self {
            propagation: Propagation::Stop,
            default_prevented: false,
        }
    }
}

/// Envelope for everything the page forwards to Rust.
///
/// ```json
/// {"kind": "nui", "payload": {"action": "openTpcds"}}
/// {"kind": "key", "payload": {"key": "Enter", "target": "input", "value": "1 2 3"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum UiEvent {
    /// A host message, left undecoded so unknown actions survive the envelope.
    Nui(serde_json::Value),
    Key(KeyEvent),
}

impl UiEvent {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

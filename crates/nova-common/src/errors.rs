use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),
}

/// Failure of an outbound callback to the host.
#[derive(Debug, thiserror::Error)]
pub enum CallbackError {
    #[error("callback client error: {0}")]
    Client(String),

    #[error("callback transport error: {0}")]
    Transport(String),

    #[error("callback rejected with status {0}")]
    Status(u16),

    #[error("callback response decode error: {0}")]
    Decode(String),
}

/// Failures that stop the binary.
#[derive(Debug, thiserror::Error)]
pub enum NovaError {
    #[error(transparent)]
    Callback(#[from] CallbackError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}

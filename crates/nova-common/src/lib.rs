pub mod errors;

pub use errors::{CallbackError, ConfigError, NovaError, PlatformError};

pub type Result<T> = std::result::Result<T, NovaError>;

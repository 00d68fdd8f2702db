//! Nova UI configuration.
//!
//! TOML-based configuration for the progress bar timings, the coordinate
//! panel, the host callback channel, the hosting window and logging. All
//! sections use serde defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    CallbackConfig, LoggingConfig, NovaConfig, PanelConfig, ProgressConfig, ResourceConfig,
    WindowConfig,
};

//! Configuration validation.
//!
//! Each section pushes its violations into a shared list; the result is a
//! single `ConfigError` listing all of them.

mod helpers;


use nova_common::ConfigError;

use crate::schema::NovaConfig;

use helpers::{validate_non_empty, validate_range};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &NovaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Some(name) = &config.resource.name {
        validate_resource_name(&mut errors, name);
    }

    validate_range(&mut errors, "progress.tick_ms", config.progress.tick_ms, 10, 1000);
    validate_range(&mut errors, "progress.grace_ms", config.progress.grace_ms, 0, 5000);
    validate_range(
        &mut errors,
        "panel.focus_delay_ms",
        config.panel.focus_delay_ms,
        0,
        1000,
    );

    validate_non_empty(&mut errors, "callback.scheme", &config.callback.scheme);
    validate_range(
        &mut errors,
        "callback.connect_timeout_secs",
        config.callback.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        &mut errors,
        "callback.timeout_secs",
        config.callback.timeout_secs,
        1,
        300,
    );

    validate_range(&mut errors, "window.width", config.window.width, 200, 7680);
    validate_range(&mut errors, "window.height", config.window.height, 150, 4320);

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level = \"{}\" must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Resource names become a URL host, so they are restricted to host-safe
/// characters.
fn validate_resource_name(errors: &mut Vec<String>, name: &str) {
    if name.is_empty() {
        errors.push("resource.name must not be empty".into());
        return;
    }
    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || *c == '.'))
    {
        errors.push(format!("resource.name contains invalid character '{ch}'"));
    }
}

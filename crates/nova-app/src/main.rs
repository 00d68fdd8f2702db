mod app_state;
mod cli;
mod headless;
mod stdin;

use std::process::ExitCode;
use std::sync::Arc;

use nova_common::{ConfigError, NovaError};
use nova_config::NovaConfig;
use nova_ui::callback::resolve_resource_name;
use nova_ui::CallbackChannel;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_DIRECTIVE: &str = "nova=info";

/// Build the log filter directive. A bare level applies to the nova crates;
/// anything containing `=` is used verbatim.
fn log_directive(cli_level: Option<&str>, config_level: &str) -> String {
    let level = cli_level.unwrap_or(config_level).trim();
    if level.is_empty() {
        DEFAULT_DIRECTIVE.to_string()
    } else if level.contains('=') {
        level.to_string()
    } else {
        format!("nova={level}")
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();
}

fn load_config(args: &cli::Args) -> Result<NovaConfig, ConfigError> {
    match &args.config {
        Some(path) => nova_config::toml_loader::load_from_path(path),
        None => nova_config::toml_loader::load_default(),
    }
}

fn build_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("nova-rt")
        .enable_all()
        .build()
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging so it can pick the log level
    let loaded = load_config(&args);
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_default();
    init_logging(&log_directive(args.log_level.as_deref(), &config_level));

    tracing::info!("Nova UI v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = match loaded {
        Ok(config) => {
            if let Err(e) = nova_config::validation::validate(&config) {
                tracing::warn!("{e}; continuing with the values as given");
            }
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            NovaConfig::default()
        }
    };

    match run(&args, config) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args, config: NovaConfig) -> nova_common::Result<()> {
    let resource = resolve_resource_name(
        args.resource
            .as_deref()
            .or(config.resource.name.as_deref()),
    );
    let callbacks = CallbackChannel::new(&resource, &config.callback)?;
    tracing::info!(resource = %resource, base_url = %callbacks.base_url(), "Callback channel ready");

    let runtime = build_runtime()?;

    if args.headless {
        headless::run(runtime, &config, Arc::new(callbacks));
        return Ok(());
    }

    let event_loop = EventLoop::new()
        .map_err(|e| NovaError::Other(format!("failed to create event loop: {e}")))?;
    let stdin_rx = stdin::spawn_reader();
    let mut app = app_state::NovaApp::new(config, runtime, Arc::new(callbacks), stdin_rx);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| NovaError::Other(format!("event loop error: {e}")))?;
    app.take_fatal_error().map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_scopes_to_nova() {
        assert_eq!(log_directive(None, "info"), "nova=info");
        assert_eq!(log_directive(Some("debug"), "info"), "nova=debug");
    }

    #[test]
    fn full_directive_is_kept() {
        assert_eq!(log_directive(Some("nova_ui=trace"), "info"), "nova_ui=trace");
    }

    #[test]
    fn empty_level_falls_back() {
        assert_eq!(log_directive(None, ""), DEFAULT_DIRECTIVE);
        assert_eq!(log_directive(Some("  "), "warn"), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn every_directive_parses() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let directive = log_directive(Some(level), "info");
            assert!(directive.parse::<tracing_subscriber::filter::Directive>().is_ok());
        }
    }
}

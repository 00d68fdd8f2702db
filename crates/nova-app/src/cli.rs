use std::path::PathBuf;

use clap::Parser;

/// Nova UI: progress bar and coordinate panel for the game client's web view.
#[derive(Parser, Debug)]
#[command(name = "nova-ui", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Resource identifier used in callback URLs.
    #[arg(long)]
    pub resource: Option<String>,

    /// Run without a window, rendering to the log.
    #[arg(long)]
    pub headless: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["nova-ui"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.resource.is_none());
        assert!(!args.headless);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "nova-ui",
            "--config",
            "/tmp/nova.toml",
            "--log-level",
            "debug",
            "--resource",
            "nova_hud",
            "--headless",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/nova.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.resource.as_deref(), Some("nova_hud"));
        assert!(args.headless);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Args::try_parse_from(["nova-ui", "--fullscreen"]).is_err());
    }
}

//! devoverlay demo - Entry Point

use clap::Parser;
use devoverlay::config::CliOverrides;
use devoverlay::logging::LogDispatcher;
use devoverlay::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// In-process diagnostic overlay, shown over a simulated host in the terminal
#[derive(Parser, Debug)]
#[command(name = "devoverlay")]
#[command(version)]
#[command(about = "Log console and sprite inspector overlay over a simulated host")]
pub struct Args {
    /// Show the log console on startup
    #[arg(long)]
    pub console: bool,

    /// Show the UI demo window on startup
    #[arg(long)]
    pub demo: bool,

    /// Start with console auto-scroll off
    #[arg(long)]
    pub no_auto_scroll: bool,

    /// Write the log file here instead of the configured path
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Overrides for flags that were explicitly given.
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            show_console: self.console.then_some(true),
            show_demo: self.demo.then_some(true),
            auto_scroll: self.no_auto_scroll.then_some(false),
            log_file_path: self.log_file.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = devoverlay::config::load_config_with_precedence(args.config.clone())?;
        let merged = devoverlay::config::merge_config(config_file);
        let with_env = devoverlay::config::apply_env_overrides(merged);
        devoverlay::config::apply_cli_overrides(with_env, args.cli_overrides())
    };

    // Log file plus live dispatch into the overlay console
    let dispatcher = LogDispatcher::new();
    devoverlay::logging::init(&config.log_file_path, dispatcher.clone())?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let colors = ColorConfig::from_env_and_args(args.no_color);
    devoverlay::view::run_demo(&config, &dispatcher, colors)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["devoverlay", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["devoverlay", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["devoverlay"]);
        assert!(!args.console);
        assert!(!args.demo);
        assert!(!args.no_auto_scroll);
        assert_eq!(args.log_file, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_no_flags_means_no_overrides() {
        let args = Args::parse_from(["devoverlay"]);
        assert_eq!(args.cli_overrides(), CliOverrides::default());
    }

    #[test]
    fn test_window_flags_override_to_shown() {
        let args = Args::parse_from(["devoverlay", "--console", "--demo"]);
        let cli = args.cli_overrides();
        assert_eq!(cli.show_console, Some(true));
        assert_eq!(cli.show_demo, Some(true));
        assert_eq!(cli.auto_scroll, None);
    }

    #[test]
    fn test_no_auto_scroll_overrides_to_false() {
        let args = Args::parse_from(["devoverlay", "--no-auto-scroll"]);
        assert_eq!(args.cli_overrides().auto_scroll, Some(false));
    }

    #[test]
    fn test_log_file_path() {
        let args = Args::parse_from(["devoverlay", "--log-file", "/tmp/overlay.log"]);
        assert_eq!(
            args.cli_overrides().log_file_path,
            Some(PathBuf::from("/tmp/overlay.log"))
        );
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["devoverlay", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Args::try_parse_from(["devoverlay", "--theme", "monokai"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::UnknownArgument
        );
    }
}

//! Command-line argument parsing for the headless driver
//!
//! Supports:
//! - Running a panel script from a file (or stdin)
//! - Overriding configuration values for a single run
//! - JSON status output

use clap::Parser;
use std::path::PathBuf;

use crate::config::PanelConfig;
use crate::panel::{FollowMode, Side};

/// Drive a dockable side panel from a script
#[derive(Parser, Debug)]
#[command(name = "dockside", version, about = "Drive a dockable side panel from a script")]
pub struct CliArgs {
    /// Script to run (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Side to dock the panel at (left, right, top, bottom)
    #[arg(long)]
    pub side: Option<Side>,

    /// Panel width as a fraction of the frame
    #[arg(long)]
    pub width: Option<f32>,

    /// Follow mode (off, select, expand)
    #[arg(long)]
    pub follow: Option<FollowMode>,

    /// Re-root the panel on project switches
    #[arg(long, value_name = "BOOL")]
    pub follow_project_switch: Option<bool>,

    /// Working directory used when no file is active
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Print status lines as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the effective configuration to the user's config file
    #[arg(long)]
    pub save_config: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub panel: PanelConfig,
    /// Script file, `None` for stdin
    pub script: Option<PathBuf>,
    pub cwd: PathBuf,
    pub json: bool,
    pub save_config: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    ///
    /// Loads `--config` if given, otherwise the user's config file.
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let base = match &self.config {
            Some(path) => PanelConfig::load_from(path).map_err(|e| e.to_string())?,
            None => PanelConfig::load(),
        };
        self.into_config_with(base)
    }

    /// Apply command-line overrides on top of `base`
    pub fn into_config_with(self, mut base: PanelConfig) -> Result<StartupConfig, String> {
        if let Some(side) = self.side {
            base.side = side;
        }
        if let Some(width) = self.width {
            base.width = width;
        }
        if let Some(follow) = self.follow {
            base.follow_buffer_file = follow;
        }
        if let Some(enabled) = self.follow_project_switch {
            base.follow_project_switch = enabled;
        }
        base.validate().map_err(|e| e.to_string())?;

        let cwd = match self.cwd {
            Some(dir) => dir,
            None => std::env::current_dir()
                .map_err(|e| format!("Cannot determine working directory: {}", e))?,
        };

        Ok(StartupConfig {
            panel: base,
            script: self.script,
            cwd,
            json: self.json,
            save_config: self.save_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            script: None,
            config: None,
            side: None,
            width: None,
            follow: None,
            follow_project_switch: None,
            cwd: Some(PathBuf::from("/work")),
            json: false,
            save_config: false,
        }
    }

    #[test]
    fn test_no_overrides_keeps_base() {
        let config = args().into_config_with(PanelConfig::default()).unwrap();
        assert_eq!(config.panel.side, Side::Left);
        assert_eq!(config.cwd, PathBuf::from("/work"));
        assert!(config.script.is_none());
    }

    #[test]
    fn test_overrides_apply() {
        let mut a = args();
        a.side = Some(Side::Right);
        a.width = Some(0.3);
        a.follow = Some(FollowMode::Select);
        a.follow_project_switch = Some(false);

        let config = a.into_config_with(PanelConfig::default()).unwrap();
        assert_eq!(config.panel.side, Side::Right);
        assert_eq!(config.panel.width, 0.3);
        assert_eq!(config.panel.follow_buffer_file, FollowMode::Select);
        assert!(!config.panel.follow_project_switch);
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        let mut a = args();
        a.width = Some(2.0);
        let err = a.into_config_with(PanelConfig::default()).unwrap_err();
        assert!(err.contains("width"));
    }

    #[test]
    fn test_parse_from_command_line() {
        let parsed = CliArgs::try_parse_from([
            "dockside",
            "--side",
            "bottom",
            "--follow",
            "off",
            "--json",
            "demo.script",
        ])
        .unwrap();
        assert_eq!(parsed.side, Some(Side::Bottom));
        assert_eq!(parsed.follow, Some(FollowMode::Off));
        assert!(parsed.json);
        assert_eq!(parsed.script, Some(PathBuf::from("demo.script")));
    }
}

//! Side panel configuration persistence
//!
//! Stores panel preferences in `~/.config/dockside/config.yaml`. The
//! configuration is read once at startup and handed to the panel; only the
//! project-switch subscription can change afterwards, through
//! `SidePanel::set_follow_project_switch`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::host::WindowHost;
use crate::model::WindowId;
use crate::panel::{FollowMode, PlacementSpec, Side, WindowOptionValue, WindowOptions};

/// Errors raised while loading or saving the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No config directory available")]
    NoConfigDir,
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write config to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("Panel width must be a fraction in (0, 1], got {0}")]
    InvalidWidth(f32),
}

type SelectorFn = dyn Fn(&dyn WindowHost, Option<WindowId>) -> Option<WindowId>;

/// Chooses the window a file opened from the panel is visited in
///
/// The function receives the window host and the panel's own window.
#[derive(Clone)]
pub struct WindowSelector(Rc<SelectorFn>);

impl WindowSelector {
    pub fn new(
        select: impl Fn(&dyn WindowHost, Option<WindowId>) -> Option<WindowId> + 'static,
    ) -> Self {
        Self(Rc::new(select))
    }

    /// Most recently used window other than the panel
    pub fn most_recently_used() -> Self {
        Self::new(|windows, panel| windows.most_recently_used_window(panel))
    }

    pub fn select(&self, windows: &dyn WindowHost, panel: Option<WindowId>) -> Option<WindowId> {
        (self.0)(windows, panel)
    }
}

impl Default for WindowSelector {
    fn default() -> Self {
        Self::most_recently_used()
    }
}

impl fmt::Debug for WindowSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WindowSelector(..)")
    }
}

/// Side panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Frame edge the panel docks against
    #[serde(default = "default_side")]
    pub side: Side,

    /// Ordering among panels docked at the same side
    #[serde(default = "default_slot")]
    pub slot: i32,

    /// Fraction of the frame the panel occupies along its side's axis
    #[serde(default = "default_width")]
    pub width: f32,

    /// Window options applied to the docked window
    #[serde(default = "default_window_options")]
    pub window_options: WindowOptions,

    /// How the panel follows the file being edited
    #[serde(default)]
    pub follow_buffer_file: FollowMode,

    /// Re-root the panel when the active project changes
    #[serde(default = "default_follow_project_switch")]
    pub follow_project_switch: bool,

    /// Where files opened from the panel are visited
    #[serde(skip)]
    pub open_file_window: WindowSelector,
}

fn default_side() -> Side {
    Side::Left
}

fn default_slot() -> i32 {
    -1
}

fn default_width() -> f32 {
    0.2
}

fn default_window_options() -> WindowOptions {
    let mut options = WindowOptions::new();
    options.insert(
        "no-delete-other-windows".to_string(),
        WindowOptionValue::Bool(true),
    );
    options
}

fn default_follow_project_switch() -> bool {
    true
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            slot: default_slot(),
            width: default_width(),
            window_options: default_window_options(),
            follow_buffer_file: FollowMode::default(),
            follow_project_switch: default_follow_project_switch(),
            open_file_window: WindowSelector::default(),
        }
    }
}

impl PanelConfig {
    /// Load config from disk, or return defaults if not found or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_yaml::to_string(self)?;

        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.width <= 1.0) {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        Ok(())
    }

    /// Placement requested from the host for the docked window
    pub fn placement_spec(&self) -> PlacementSpec {
        PlacementSpec {
            side: self.side,
            slot: self.slot,
            width: self.width,
        }
    }

    pub fn with_open_file_window(mut self, selector: WindowSelector) -> Self {
        self.open_file_window = selector;
        self
    }
}

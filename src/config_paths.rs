//! Centralized configuration paths for dockside
//!
//! Config and logs live under `~/.config/dockside/` (`%APPDATA%\dockside\`
//! on Windows).

use std::{env, fs, path::PathBuf};

use crate::config::ConfigError;

const APP_DIR: &str = "dockside";

/// Base config directory, honoring `XDG_CONFIG_HOME` outside Windows
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/dockside/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/dockside/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs dir if needed, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, ConfigError> {
    let logs = logs_dir().ok_or(ConfigError::NoConfigDir)?;
    fs::create_dir_all(&logs).map_err(|source| ConfigError::Write {
        path: logs.clone(),
        source,
    })?;
    Ok(logs)
}

#[cfg(all(test, not(target_os = "windows")))]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_logs_dir_creates_under_config_home() {
        let home = tempfile::tempdir().unwrap();
        env::set_var("XDG_CONFIG_HOME", home.path());

        let logs = ensure_logs_dir().unwrap();

        assert_eq!(logs, home.path().join("dockside").join("logs"));
        assert!(logs.is_dir());
        env::remove_var("XDG_CONFIG_HOME");
    }
}

//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging panel
//! state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=panel=debug` - panel state diffs only
//! - `RUST_LOG=dockside::panel=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockside/logs/dockside.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::host::{TreeBrowser, WindowHost};
use crate::model::{PlacementKind, SessionId, WindowId};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging always
/// records debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dockside.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of window/session state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub selected: Option<WindowId>,
    pub windows: Vec<WindowInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub window: WindowId,
    pub session: Option<SessionId>,
    pub placement: Option<PlacementKind>,
    pub root: Option<String>,
    pub entry: Option<String>,
}

impl PanelSnapshot {
    pub fn capture(windows: &dyn WindowHost, browser: &dyn TreeBrowser) -> Self {
        Self {
            selected: windows.selected_window(),
            windows: windows
                .list_visible_windows()
                .into_iter()
                .map(|window| {
                    let session = windows.window_session(window);
                    let state = session.and_then(|id| browser.session(id));
                    WindowInfo {
                        window,
                        session,
                        placement: state.map(|s| s.placement),
                        root: state.map(|s| s.root.display().to_string()),
                        entry: state
                            .and_then(|s| s.current_entry.as_ref())
                            .map(|e| e.display().to_string()),
                    }
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.selected != other.selected {
            changes.push(format!("selected: {:?} → {:?}", self.selected, other.selected));
        }

        for before in &self.windows {
            match other.windows.iter().find(|w| w.window == before.window) {
                None => changes.push(format!("{} closed", before.window)),
                Some(after) if after != before => {
                    if before.root != after.root {
                        changes.push(format!(
                            "{}: root {:?} → {:?}",
                            after.window, before.root, after.root
                        ));
                    }
                    if before.entry != after.entry {
                        changes.push(format!(
                            "{}: entry {:?} → {:?}",
                            after.window, before.entry, after.entry
                        ));
                    }
                    if before.session != after.session || before.placement != after.placement {
                        changes.push(format!(
                            "{}: session {:?}/{:?} → {:?}/{:?}",
                            after.window,
                            before.session,
                            before.placement,
                            after.session,
                            after.placement
                        ));
                    }
                }
                Some(_) => {}
            }
        }

        for after in &other.windows {
            if !self.windows.iter().any(|w| w.window == after.window) {
                changes.push(format!("{} opened ({:?})", after.window, after.placement));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the embedding host should perform after
//! an update.

use std::path::PathBuf;

use crate::model::WindowId;

/// Side effects requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Panel visibility or content changed, redraw
    Redraw,
    /// Show a message to the user (echo area / status bar)
    ShowMessage(String),
    /// Visit `path` in `window`
    OpenFileIn { window: WindowId, path: PathBuf },
    /// Multiple commands to run in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Whether this command (or any in a batch) requests a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw | Cmd::OpenFileIn { .. } => true,
            Cmd::ShowMessage(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
        }
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user by panel commands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("Cannot toggle the side panel here: a full-frame session on {} is active", root.display())]
    FullframeActive { root: PathBuf },
}

//! dockside - a persistent, dockable directory-tree side panel
//!
//! This crate provides the visibility state machine and follow-the-editor
//! synchronization for a docked tree-browser panel, implementing the Elm
//! Architecture pattern against host collaborators expressed as traits.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod messages;
pub mod model;
pub mod panel;
pub mod script;
pub mod tracing;
pub mod update;
pub mod workbench;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PanelConfig;
pub use host::{EditorContext, PanelHost};
pub use messages::{HostEvent, Msg, PanelMsg};
pub use panel::{PanelError, SidePanel};

//! Message types for the Elm-style architecture
//!
//! All panel state changes flow through these message types.

use std::path::PathBuf;

use crate::host::EventKind;
use crate::model::WindowId;

/// Commands issued by the user (keybindings, command palette, the tree itself)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMsg {
    /// Show or hide the side panel, optionally rooted at an explicit directory
    Toggle { path: Option<PathBuf> },
    /// A file was chosen inside the panel and should open in an editor window
    OpenFile(PathBuf),
    /// Turn following of project switches on or off
    SetFollowProjectSwitch(bool),
}

/// Notifications fired by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The active project changed to `root`
    ProjectSwitched { root: PathBuf },
    /// The window layout changed; `resizing` is the window the user is dragging, if any
    LayoutChanged { resizing: Option<WindowId> },
    /// Focus moved to another buffer (the active file is in the context)
    BufferFocused,
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::ProjectSwitched { .. } => EventKind::ProjectSwitched,
            HostEvent::LayoutChanged { .. } => EventKind::LayoutChanged,
            HostEvent::BufferFocused => EventKind::BufferFocused,
        }
    }
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Panel(PanelMsg),
    Host(HostEvent),
}

impl From<PanelMsg> for Msg {
    fn from(msg: PanelMsg) -> Self {
        Msg::Panel(msg)
    }
}

impl From<HostEvent> for Msg {
    fn from(event: HostEvent) -> Self {
        Msg::Host(event)
    }
}

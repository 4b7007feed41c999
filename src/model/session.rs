//! Tree-browser sessions as seen by the side panel

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{SessionId, WindowId};

/// How a session was placed when it was created
///
/// The tag is stored on the session at creation time. The side panel only
/// ever treats `Docked` sessions as its own, regardless of where a window
/// happens to sit or how wide it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    /// Created through the side panel's docked placement
    Docked,
    /// Promoted to occupy the whole frame
    Fullframe,
    /// Any other session (plain window browsing)
    Other,
}

/// One instance of the tree-browser bound to a root directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    /// Absolute directory the session is rooted at
    pub root: PathBuf,
    /// Window currently displaying the session, if shown
    pub window: Option<WindowId>,
    pub placement: PlacementKind,
    /// Entry currently selected (owned by the tree-browser)
    pub current_entry: Option<PathBuf>,
}

impl Session {
    pub fn new(id: SessionId, root: PathBuf, placement: PlacementKind) -> Self {
        Self {
            id,
            root,
            window: None,
            placement,
            current_entry: None,
        }
    }

    pub fn is_docked(&self) -> bool {
        self.placement == PlacementKind::Docked
    }

    pub fn is_fullframe(&self) -> bool {
        self.placement == PlacementKind::Fullframe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_detached() {
        let session = Session::new(SessionId(1), PathBuf::from("/proj"), PlacementKind::Docked);
        assert!(session.window.is_none());
        assert!(session.current_entry.is_none());
        assert!(session.is_docked());
        assert!(!session.is_fullframe());
    }

    #[test]
    fn test_placement_kind_serializes_lowercase() {
        let yaml = serde_yaml::to_string(&PlacementKind::Fullframe).unwrap();
        assert_eq!(yaml.trim(), "fullframe");
    }
}

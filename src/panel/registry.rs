//! Discovery of the side panel's session
//!
//! Nothing is stored here: every lookup scans the host's live windows and
//! the tree-browser's sessions, so results are never stale.

use crate::host::{TreeBrowser, WindowHost};
use crate::model::{Session, SessionId, WindowId};

/// A docked session together with the window showing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockedSession {
    pub window: WindowId,
    pub session: SessionId,
}

/// Session bound to `window`, if the browser still knows it
pub fn window_session<'b>(
    windows: &dyn WindowHost,
    browser: &'b dyn TreeBrowser,
    window: WindowId,
) -> Option<&'b Session> {
    windows
        .window_session(window)
        .and_then(|id| browser.session(id))
}

/// First visible window whose session was created through docked placement
pub fn find_visible_docked_session(
    windows: &dyn WindowHost,
    browser: &dyn TreeBrowser,
) -> Option<DockedSession> {
    windows.list_visible_windows().into_iter().find_map(|window| {
        window_session(windows, browser, window)
            .filter(|session| session.is_docked())
            .map(|session| DockedSession {
                window,
                session: session.id,
            })
    })
}

/// A docked session that is not displayed in any visible window
pub fn find_detached_docked_session(
    windows: &dyn WindowHost,
    browser: &dyn TreeBrowser,
) -> Option<SessionId> {
    let visible = windows.list_visible_windows();
    docked_sessions(browser).into_iter().find(|id| {
        !visible
            .iter()
            .any(|window| windows.window_session(*window) == Some(*id))
    })
}

/// Every docked session the browser knows, in creation order
pub fn docked_sessions(browser: &dyn TreeBrowser) -> Vec<SessionId> {
    browser
        .sessions()
        .into_iter()
        .filter(|id| browser.session(*id).is_some_and(Session::is_docked))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::{MemoryBrowser, MemoryWindows};
    use crate::model::PlacementKind;
    use crate::panel::{PlacementSpec, Side};
    use std::path::Path;

    fn spec() -> PlacementSpec {
        PlacementSpec {
            side: Side::Left,
            slot: 0,
            width: 0.2,
        }
    }

    #[test]
    fn test_no_sessions_finds_nothing() {
        let windows = MemoryWindows::new(200, 50);
        let browser = MemoryBrowser::new();
        assert_eq!(find_visible_docked_session(&windows, &browser), None);
        assert_eq!(find_detached_docked_session(&windows, &browser), None);
    }

    #[test]
    fn test_other_placements_are_ignored() {
        let mut windows = MemoryWindows::new(200, 50);
        let mut browser = MemoryBrowser::new();
        let main = windows.selected_window().unwrap();

        let plain = browser.create_session(Path::new("/proj"), PlacementKind::Other);
        windows.set_window_session(main, Some(plain));

        // A docked-looking window showing a non-docked session is not the panel
        let lookalike = windows.create_docked_window(&spec());
        let full = browser.create_session(Path::new("/proj"), PlacementKind::Fullframe);
        windows.set_window_session(lookalike, Some(full));

        assert_eq!(find_visible_docked_session(&windows, &browser), None);
    }

    #[test]
    fn test_detached_session_is_found() {
        let mut windows = MemoryWindows::new(200, 50);
        let mut browser = MemoryBrowser::new();

        let window = windows.create_docked_window(&spec());
        let id = browser.create_session(Path::new("/proj"), PlacementKind::Docked);
        windows.set_window_session(window, Some(id));
        assert_eq!(
            find_visible_docked_session(&windows, &browser),
            Some(DockedSession {
                window,
                session: id
            })
        );
        assert_eq!(find_detached_docked_session(&windows, &browser), None);

        windows.close_window(window);
        assert_eq!(find_visible_docked_session(&windows, &browser), None);
        assert_eq!(find_detached_docked_session(&windows, &browser), Some(id));
    }

    #[test]
    fn test_docked_sessions_in_creation_order() {
        let mut browser = MemoryBrowser::new();
        let a = browser.create_session(Path::new("/a"), PlacementKind::Docked);
        browser.create_session(Path::new("/b"), PlacementKind::Other);
        let c = browser.create_session(Path::new("/c"), PlacementKind::Docked);
        assert_eq!(docked_sessions(&browser), vec![a, c]);
    }
}

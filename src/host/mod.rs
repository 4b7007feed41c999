//! Host collaborators - the window manager, tree-browser engine, project
//! detection and event source the side panel is driven against
//!
//! ## Architecture
//!
//! - `WindowHost`: window placement primitives (create, options, enumerate, select, resize)
//! - `TreeBrowser`: the generic session engine the panel configures
//! - `ProjectDetector`: maps a path to its project root
//! - `EventSource`: subscribable host notifications
//! - `PanelHost`: the collaborators bundled for a single call
//!
//! `memory` provides in-memory implementations used by the demo binary and
//! the tests; `project` provides a filesystem-backed project detector.

pub mod memory;
pub mod project;

use std::path::{Path, PathBuf};

use crate::model::{PlacementKind, Session, SessionId, WindowId};
use crate::panel::{Axis, PlacementSpec, WindowOptionValue};

/// Window placement primitives provided by the host
pub trait WindowHost {
    /// Create a window docked at the frame edge described by `spec`
    fn create_docked_window(&mut self, spec: &PlacementSpec) -> WindowId;

    /// Close a window. No-op if it is already gone.
    fn close_window(&mut self, window: WindowId);

    fn set_window_option(&mut self, window: WindowId, key: &str, value: &WindowOptionValue);

    /// Currently visible windows, in the host's canonical order
    fn list_visible_windows(&self) -> Vec<WindowId>;

    /// Session displayed by a window, if any
    fn window_session(&self, window: WindowId) -> Option<SessionId>;

    /// Bind (or unbind) the session displayed by a window
    fn set_window_session(&mut self, window: WindowId, session: Option<SessionId>);

    fn select_window(&mut self, window: WindowId);

    fn selected_window(&self) -> Option<WindowId>;

    /// Most recently used visible window, skipping `exclude`
    fn most_recently_used_window(&self, exclude: Option<WindowId>) -> Option<WindowId>;

    /// Size of the whole frame along `axis`, in cells
    fn frame_extent(&self, axis: Axis) -> u32;

    /// Size of a window along `axis`, or `None` if the window is gone
    fn window_extent(&self, window: WindowId, axis: Axis) -> Option<u32>;

    fn set_window_extent(&mut self, window: WindowId, axis: Axis, extent: u32);
}

/// The tree-browser engine that owns sessions and their entry state
pub trait TreeBrowser {
    /// Create a session rooted at `root`, tagged with its placement
    fn create_session(&mut self, root: &Path, placement: PlacementKind) -> SessionId;

    fn session(&self, id: SessionId) -> Option<&Session>;

    /// All live sessions in creation order
    fn sessions(&self) -> Vec<SessionId>;

    /// Session the user is currently interacting with
    fn current_session(&self) -> Option<SessionId>;

    /// Record which window displays the session
    fn attach_window(&mut self, id: SessionId, window: Option<WindowId>);

    /// Re-root the session at `dir`. Expansion state of other entries is kept.
    fn navigate_to(&mut self, id: SessionId, dir: &Path);

    /// Expand a directory entry in place (no-op if already expanded)
    fn expand_entry(&mut self, id: SessionId, dir: &Path);

    fn select_entry(&mut self, id: SessionId, entry: &Path);

    fn destroy_session(&mut self, id: SessionId);
}

/// Maps a path to the root of the project containing it
pub trait ProjectDetector {
    fn detect_project_root(&self, path: &Path) -> Option<PathBuf>;
}

/// Kinds of host notifications the panel can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Active project changed (payload: new root)
    ProjectSwitched,
    /// Window layout changed (no payload, handlers re-query state)
    LayoutChanged,
    /// Focus moved to another buffer
    BufferFocused,
}

/// Token identifying a single subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Explicit observer registration for host notifications
pub trait EventSource {
    fn subscribe(&mut self, kind: EventKind) -> SubscriptionId;

    /// Drop a subscription. No-op if it was already removed.
    fn unsubscribe(&mut self, id: SubscriptionId);

    fn is_subscribed(&self, kind: EventKind) -> bool;
}

/// All collaborators needed by a single panel operation
pub struct PanelHost<'a> {
    pub windows: &'a mut dyn WindowHost,
    pub browser: &'a mut dyn TreeBrowser,
    pub projects: &'a dyn ProjectDetector,
    pub events: &'a mut dyn EventSource,
}

impl<'a> PanelHost<'a> {
    pub fn new(
        windows: &'a mut dyn WindowHost,
        browser: &'a mut dyn TreeBrowser,
        projects: &'a dyn ProjectDetector,
        events: &'a mut dyn EventSource,
    ) -> Self {
        Self {
            windows,
            browser,
            projects,
            events,
        }
    }
}

/// Caller-supplied editing context
///
/// Operations never infer this from ambient state: the caller says which
/// file is active and which window holds focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorContext {
    /// File visited by the focused buffer, if any
    pub active_file: Option<PathBuf>,
    /// Window holding focus when the command was issued
    pub selected_window: Option<WindowId>,
    /// Working directory used when no file is active
    pub cwd: PathBuf,
}

impl EditorContext {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            active_file: None,
            selected_window: None,
            cwd: cwd.into(),
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.active_file = Some(file.into());
        self
    }

    pub fn with_window(mut self, window: WindowId) -> Self {
        self.selected_window = Some(window);
        self
    }
}

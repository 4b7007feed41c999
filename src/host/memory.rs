//! In-memory host collaborators
//!
//! A small window manager, tree-browser engine, project table and event bus
//! that keep their whole state in memory. The demo binary drives the panel
//! against these, and the integration tests inspect them directly.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::messages::HostEvent;
use crate::model::{PlacementKind, Session, SessionId, WindowId};
use crate::panel::{Axis, PlacementSpec, WindowOptionValue, WindowOptions};

use super::{EventKind, EventSource, ProjectDetector, SubscriptionId, TreeBrowser, WindowHost};

// ============================================================================
// Windows
// ============================================================================

/// State of a single window in [`MemoryWindows`]
#[derive(Debug, Clone)]
pub struct WindowState {
    /// Session displayed in the window
    pub session: Option<SessionId>,
    /// Placement the window was docked with, `None` for editor windows
    pub docked: Option<PlacementSpec>,
    pub options: WindowOptions,
    /// Width in columns
    pub width: u32,
    /// Height in rows
    pub height: u32,
    /// File visited in the window, for editor windows
    pub file: Option<PathBuf>,
    last_used: u64,
}

impl WindowState {
    fn editor(width: u32, height: u32) -> Self {
        Self {
            session: None,
            docked: None,
            options: WindowOptions::new(),
            width,
            height,
            file: None,
            last_used: 0,
        }
    }

    pub fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// A window manager for a single frame, kept entirely in memory
///
/// Every structural change (create, close, resize) records a pending layout
/// change, drained with [`MemoryWindows::take_layout_changes`].
#[derive(Debug, Clone)]
pub struct MemoryWindows {
    windows: BTreeMap<WindowId, WindowState>,
    /// Visible windows in canonical order: docked windows first, by slot
    order: Vec<WindowId>,
    selected: Option<WindowId>,
    frame: (u32, u32),
    next_id: u64,
    clock: u64,
    pending_layout_changes: usize,
}

impl MemoryWindows {
    /// Create a frame of `columns` x `rows` holding one editor window
    pub fn new(columns: u32, rows: u32) -> Self {
        let mut windows = Self {
            windows: BTreeMap::new(),
            order: Vec::new(),
            selected: None,
            frame: (columns, rows),
            next_id: 1,
            clock: 0,
            pending_layout_changes: 0,
        };
        let main = windows.insert(WindowState::editor(columns, rows), false);
        windows.select_window(main);
        windows.pending_layout_changes = 0;
        windows
    }

    fn insert(&mut self, state: WindowState, docked_slot: bool) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;

        if docked_slot {
            let slot = state.docked.map(|spec| spec.slot).unwrap_or_default();
            let position = self
                .order
                .iter()
                .take_while(|w| {
                    self.windows
                        .get(w)
                        .and_then(|s| s.docked)
                        .is_some_and(|spec| spec.slot <= slot)
                })
                .count();
            self.order.insert(position, id);
        } else {
            self.order.push(id);
        }

        self.windows.insert(id, state);
        self.pending_layout_changes += 1;
        id
    }

    /// Split `from`, giving the new editor window half of its width
    pub fn split_window(&mut self, from: WindowId) -> Option<WindowId> {
        let state = self.windows.get_mut(&from)?;
        let half = state.width / 2;
        state.width -= half;
        let height = state.height;
        Some(self.insert(WindowState::editor(half, height), false))
    }

    /// Visit `path` in an editor window
    pub fn visit_file(&mut self, window: WindowId, path: impl Into<PathBuf>) {
        if let Some(state) = self.windows.get_mut(&window) {
            state.file = Some(path.into());
        }
    }

    pub fn window(&self, window: WindowId) -> Option<&WindowState> {
        self.windows.get(&window)
    }

    pub fn window_count(&self) -> usize {
        self.order.len()
    }

    /// Returns and clears the number of layout changes since the last call
    pub fn take_layout_changes(&mut self) -> usize {
        std::mem::take(&mut self.pending_layout_changes)
    }
}

impl WindowHost for MemoryWindows {
    fn create_docked_window(&mut self, spec: &PlacementSpec) -> WindowId {
        let (columns, rows) = self.frame;
        let mut state = WindowState::editor(columns / 2, rows);
        if spec.side.axis() == Axis::Vertical {
            state.width = columns;
            state.height = rows / 2;
        }
        state.docked = Some(*spec);
        self.insert(state, true)
    }

    fn close_window(&mut self, window: WindowId) {
        if self.windows.remove(&window).is_none() {
            return;
        }
        self.order.retain(|w| *w != window);
        self.pending_layout_changes += 1;

        if self.selected == Some(window) {
            self.selected = None;
            if let Some(next) = self.most_recently_used_window(None) {
                self.select_window(next);
            }
        }
    }

    fn set_window_option(&mut self, window: WindowId, key: &str, value: &WindowOptionValue) {
        if let Some(state) = self.windows.get_mut(&window) {
            state.options.insert(key.to_string(), value.clone());
        }
    }

    fn list_visible_windows(&self) -> Vec<WindowId> {
        self.order.clone()
    }

    fn window_session(&self, window: WindowId) -> Option<SessionId> {
        self.windows.get(&window).and_then(|state| state.session)
    }

    fn set_window_session(&mut self, window: WindowId, session: Option<SessionId>) {
        if let Some(state) = self.windows.get_mut(&window) {
            state.session = session;
        }
    }

    fn select_window(&mut self, window: WindowId) {
        self.clock += 1;
        if let Some(state) = self.windows.get_mut(&window) {
            state.last_used = self.clock;
            self.selected = Some(window);
        }
    }

    fn selected_window(&self) -> Option<WindowId> {
        self.selected
    }

    fn most_recently_used_window(&self, exclude: Option<WindowId>) -> Option<WindowId> {
        self.order
            .iter()
            .filter(|w| Some(**w) != exclude)
            .filter_map(|w| self.windows.get(w).map(|state| (*w, state.last_used)))
            .max_by_key(|(_, last_used)| *last_used)
            .map(|(w, _)| w)
    }

    fn frame_extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.frame.0,
            Axis::Vertical => self.frame.1,
        }
    }

    fn window_extent(&self, window: WindowId, axis: Axis) -> Option<u32> {
        self.windows.get(&window).map(|state| state.extent(axis))
    }

    fn set_window_extent(&mut self, window: WindowId, axis: Axis, extent: u32) {
        if let Some(state) = self.windows.get_mut(&window) {
            match axis {
                Axis::Horizontal => state.width = extent,
                Axis::Vertical => state.height = extent,
            }
            self.pending_layout_changes += 1;
        }
    }
}

// ============================================================================
// Tree browser
// ============================================================================

#[derive(Debug, Clone)]
struct BrowserSession {
    session: Session,
    /// Expanded directory entries (absolute paths)
    expanded: BTreeSet<PathBuf>,
}

/// Tree-browser engine keeping sessions and their expansion state in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryBrowser {
    sessions: BTreeMap<SessionId, BrowserSession>,
    current: Option<SessionId>,
    next_id: u64,
}

impl MemoryBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expanded entries of a session, sorted
    pub fn expanded_entries(&self, id: SessionId) -> Vec<PathBuf> {
        self.sessions
            .get(&id)
            .map(|s| s.expanded.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_expanded(&self, id: SessionId, dir: &Path) -> bool {
        self.sessions
            .get(&id)
            .is_some_and(|s| s.expanded.contains(dir))
    }

    /// Collapse a directory entry (no-op if already collapsed)
    pub fn collapse_entry(&mut self, id: SessionId, dir: &Path) {
        if let Some(s) = self.sessions.get_mut(&id) {
            s.expanded.remove(dir);
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl TreeBrowser for MemoryBrowser {
    fn create_session(&mut self, root: &Path, placement: PlacementKind) -> SessionId {
        self.next_id += 1;
        let id = SessionId(self.next_id);
        self.sessions.insert(
            id,
            BrowserSession {
                session: Session::new(id, root.to_path_buf(), placement),
                expanded: BTreeSet::new(),
            },
        );
        self.current = Some(id);
        id
    }

    fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id).map(|s| &s.session)
    }

    fn sessions(&self) -> Vec<SessionId> {
        self.sessions.keys().copied().collect()
    }

    fn current_session(&self) -> Option<SessionId> {
        self.current
    }

    fn attach_window(&mut self, id: SessionId, window: Option<WindowId>) {
        if let Some(s) = self.sessions.get_mut(&id) {
            s.session.window = window;
        }
    }

    fn navigate_to(&mut self, id: SessionId, dir: &Path) {
        if let Some(s) = self.sessions.get_mut(&id) {
            if s.session.root != dir {
                s.session.root = dir.to_path_buf();
                s.session.current_entry = None;
            }
        }
    }

    fn expand_entry(&mut self, id: SessionId, dir: &Path) {
        if let Some(s) = self.sessions.get_mut(&id) {
            s.expanded.insert(dir.to_path_buf());
        }
    }

    fn select_entry(&mut self, id: SessionId, entry: &Path) {
        if let Some(s) = self.sessions.get_mut(&id) {
            s.session.current_entry = Some(entry.to_path_buf());
        }
    }

    fn destroy_session(&mut self, id: SessionId) {
        self.sessions.remove(&id);
        if self.current == Some(id) {
            self.current = None;
        }
    }
}

// ============================================================================
// Project detection
// ============================================================================

/// Project detector backed by a fixed list of known roots
///
/// The deepest root containing the path wins.
#[derive(Debug, Clone, Default)]
pub struct KnownRoots {
    roots: Vec<PathBuf>,
}

impl KnownRoots {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProjectDetector for KnownRoots {
    fn detect_project_root(&self, path: &Path) -> Option<PathBuf> {
        self.roots
            .iter()
            .filter(|root| path.starts_with(root))
            .max_by_key(|root| root.components().count())
            .cloned()
    }
}

// ============================================================================
// Events
// ============================================================================

/// Event source keeping subscriptions in a table
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    subscriptions: HashMap<SubscriptionId, EventKind>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an event would reach any subscriber
    pub fn delivers(&self, event: &HostEvent) -> bool {
        self.is_subscribed(event.kind())
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl EventSource for EventBus {
    fn subscribe(&mut self, kind: EventKind) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscriptions.insert(id, kind);
        tracing::trace!("Subscribed {:?} as {:?}", kind, id);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        if let Some(kind) = self.subscriptions.remove(&id) {
            tracing::trace!("Unsubscribed {:?} ({:?})", kind, id);
        }
    }

    fn is_subscribed(&self, kind: EventKind) -> bool {
        self.subscriptions.values().any(|k| *k == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Side;

    fn left_spec() -> PlacementSpec {
        PlacementSpec {
            side: Side::Left,
            slot: 0,
            width: 0.2,
        }
    }

    #[test]
    fn test_new_frame_has_one_selected_window() {
        let windows = MemoryWindows::new(200, 50);
        assert_eq!(windows.window_count(), 1);
        assert!(windows.selected_window().is_some());
    }

    #[test]
    fn test_docked_windows_come_first() {
        let mut windows = MemoryWindows::new(200, 50);
        let main = windows.selected_window().unwrap();
        let docked = windows.create_docked_window(&left_spec());
        assert_eq!(windows.list_visible_windows(), vec![docked, main]);
    }

    #[test]
    fn test_close_selected_falls_back_to_mru() {
        let mut windows = MemoryWindows::new(200, 50);
        let main = windows.selected_window().unwrap();
        let other = windows.split_window(main).unwrap();
        windows.select_window(other);
        windows.select_window(main);
        let docked = windows.create_docked_window(&left_spec());
        windows.select_window(docked);

        windows.close_window(docked);
        assert_eq!(windows.selected_window(), Some(main));
        assert_eq!(windows.window_count(), 2);
    }

    #[test]
    fn test_mru_excludes_window() {
        let mut windows = MemoryWindows::new(200, 50);
        let main = windows.selected_window().unwrap();
        let other = windows.split_window(main).unwrap();
        windows.select_window(other);

        assert_eq!(windows.most_recently_used_window(None), Some(other));
        assert_eq!(windows.most_recently_used_window(Some(other)), Some(main));
    }

    #[test]
    fn test_layout_changes_are_counted() {
        let mut windows = MemoryWindows::new(200, 50);
        assert_eq!(windows.take_layout_changes(), 0);

        let docked = windows.create_docked_window(&left_spec());
        windows.set_window_extent(docked, Axis::Horizontal, 40);
        assert_eq!(windows.take_layout_changes(), 2);
        assert_eq!(windows.take_layout_changes(), 0);
    }

    #[test]
    fn test_browser_expand_is_idempotent() {
        let mut browser = MemoryBrowser::new();
        let id = browser.create_session(Path::new("/proj"), PlacementKind::Docked);
        browser.expand_entry(id, Path::new("/proj/src"));
        browser.expand_entry(id, Path::new("/proj/src"));
        assert_eq!(browser.expanded_entries(id), vec![PathBuf::from("/proj/src")]);
    }

    #[test]
    fn test_browser_destroy_clears_current() {
        let mut browser = MemoryBrowser::new();
        let id = browser.create_session(Path::new("/proj"), PlacementKind::Other);
        assert_eq!(browser.current_session(), Some(id));
        browser.destroy_session(id);
        assert_eq!(browser.current_session(), None);
        assert!(browser.session(id).is_none());
    }

    #[test]
    fn test_known_roots_prefers_deepest() {
        let roots = KnownRoots::new(["/work", "/work/proj"]);
        assert_eq!(
            roots.detect_project_root(Path::new("/work/proj/src/a.rs")),
            Some(PathBuf::from("/work/proj"))
        );
        assert_eq!(
            roots.detect_project_root(Path::new("/work/other.rs")),
            Some(PathBuf::from("/work"))
        );
        assert_eq!(roots.detect_project_root(Path::new("/tmp/x")), None);
    }

    #[test]
    fn test_event_bus_subscribe_unsubscribe() {
        let mut bus = EventBus::new();
        assert!(!bus.is_subscribed(EventKind::ProjectSwitched));

        let id = bus.subscribe(EventKind::ProjectSwitched);
        assert!(bus.is_subscribed(EventKind::ProjectSwitched));
        assert!(bus.delivers(&HostEvent::ProjectSwitched {
            root: PathBuf::from("/proj")
        }));

        bus.unsubscribe(id);
        bus.unsubscribe(id);
        assert!(!bus.is_subscribed(EventKind::ProjectSwitched));
        assert_eq!(bus.subscription_count(), 0);
    }
}

//! Side panel visibility controller
//!
//! Owns the toggle protocol (hide / reuse / create), keeps exactly one docked
//! session alive and routes host notifications to the follow engine and the
//! placement strategy.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::PanelConfig;
use crate::host::{
    EditorContext, EventKind, EventSource, PanelHost, SubscriptionId, TreeBrowser, WindowHost,
};
use crate::model::{PlacementKind, SessionId, WindowId};

use super::errors::PanelError;
use super::follow::{normalize_path, FollowEngine, FollowMode, SyncOutcome};
use super::placement::{Reassert, WindowPlacement};
use super::registry::{self, DockedSession};

/// What a successful toggle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The visible panel was closed and its session torn down
    Hidden(DockedSession),
    /// An existing docked session was shown again and re-synced
    Reused(DockedSession),
    /// A new docked session was created rooted at `root`
    Created { panel: DockedSession, root: PathBuf },
}

/// Current state of the side panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PanelStatus {
    /// No docked session exists
    Hidden,
    /// A docked session is displayed
    Visible {
        window: u64,
        session: u64,
        root: PathBuf,
        entry: Option<PathBuf>,
    },
    /// A docked session exists but no visible window shows it
    Detached { session: u64, root: PathBuf },
}

/// The side panel: one docked tree-browser session per workspace
#[derive(Debug)]
pub struct SidePanel {
    config: PanelConfig,
    placement: WindowPlacement,
    follow: FollowEngine,
    layout_subscription: Option<SubscriptionId>,
    buffer_subscription: Option<SubscriptionId>,
    project_subscription: Option<SubscriptionId>,
}

impl SidePanel {
    /// Create the panel and register for the host notifications it needs
    pub fn new(config: PanelConfig, events: &mut dyn EventSource) -> Self {
        let placement =
            WindowPlacement::new(config.placement_spec(), config.window_options.clone());
        let follow = FollowEngine::new(config.follow_buffer_file);

        let mut panel = Self {
            config,
            placement,
            follow,
            layout_subscription: Some(events.subscribe(EventKind::LayoutChanged)),
            buffer_subscription: None,
            project_subscription: None,
        };

        if panel.follow.mode() != FollowMode::Off {
            panel.buffer_subscription = Some(events.subscribe(EventKind::BufferFocused));
        }
        let follow_project = panel.config.follow_project_switch;
        panel.set_follow_project_switch(events, follow_project);

        panel
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn placement(&self) -> &WindowPlacement {
        &self.placement
    }

    pub fn follow_mode(&self) -> FollowMode {
        self.follow.mode()
    }

    pub fn follows_project_switch(&self) -> bool {
        self.project_subscription.is_some()
    }

    /// Turn project-switch following on or off
    ///
    /// The subscription and the config flag always change together.
    pub fn set_follow_project_switch(&mut self, events: &mut dyn EventSource, enabled: bool) {
        match (enabled, self.project_subscription) {
            (true, None) => {
                self.project_subscription = Some(events.subscribe(EventKind::ProjectSwitched));
            }
            (false, Some(id)) => {
                events.unsubscribe(id);
                self.project_subscription = None;
            }
            _ => {}
        }
        self.config.follow_project_switch = enabled;
        tracing::debug!("Follow project switch: {}", enabled);
    }

    /// Drop every host subscription held by the panel
    pub fn detach_events(&mut self, events: &mut dyn EventSource) {
        for id in [
            self.layout_subscription.take(),
            self.buffer_subscription.take(),
            self.project_subscription.take(),
        ]
        .into_iter()
        .flatten()
        {
            events.unsubscribe(id);
        }
        self.config.follow_project_switch = false;
    }

    pub fn status(&self, windows: &dyn WindowHost, browser: &dyn TreeBrowser) -> PanelStatus {
        if let Some(docked) = registry::find_visible_docked_session(windows, browser) {
            if let Some(session) = browser.session(docked.session) {
                return PanelStatus::Visible {
                    window: docked.window.0,
                    session: docked.session.0,
                    root: session.root.clone(),
                    entry: session.current_entry.clone(),
                };
            }
        }

        registry::find_detached_docked_session(windows, browser)
            .and_then(|id| browser.session(id))
            .map(|session| PanelStatus::Detached {
                session: session.id.0,
                root: session.root.clone(),
            })
            .unwrap_or(PanelStatus::Hidden)
    }

    /// Show the panel if hidden, hide it if visible
    ///
    /// `explicit_root` overrides the directory a new panel is rooted at (and
    /// re-roots a reused one). Fails without touching anything when a
    /// full-frame session occupies the selected window.
    pub fn toggle(
        &self,
        host: &mut PanelHost<'_>,
        ctx: &EditorContext,
        explicit_root: Option<&Path>,
    ) -> Result<ToggleOutcome, PanelError> {
        self.ensure_not_fullframe(host, ctx)?;

        if let Some(docked) = registry::find_visible_docked_session(&*host.windows, &*host.browser) {
            host.windows.close_window(docked.window);
            host.browser.destroy_session(docked.session);
            tracing::debug!("Side panel hidden ({}, {})", docked.window, docked.session);
            return Ok(ToggleOutcome::Hidden(docked));
        }

        let explicit_root = explicit_root.map(normalize_path);
        let explicit_root = explicit_root.as_deref();

        // A file outside an explicitly requested root must not pull the panel away from it
        let active_file = ctx.active_file.as_deref().map(normalize_path);
        let follow_file = active_file
            .as_deref()
            .filter(|file| explicit_root.map_or(true, |root| file.starts_with(root)));

        if let Some(session) = registry::find_detached_docked_session(&*host.windows, &*host.browser) {
            self.retire_other_docked(host, session);
            if let Some(root) = explicit_root {
                host.browser.navigate_to(session, root);
            }
            let window = self.show(host, session);
            self.follow.sync_to_file(host, session, follow_file, explicit_root);
            tracing::debug!("Side panel reused ({}, {})", window, session);
            return Ok(ToggleOutcome::Reused(DockedSession { window, session }));
        }

        let root = self.resolve_root(host, ctx, active_file.as_deref(), explicit_root);
        let session = host.browser.create_session(&root, PlacementKind::Docked);
        let window = self.show(host, session);
        self.follow.sync_to_file(host, session, follow_file, explicit_root);
        tracing::debug!(
            "Side panel created ({}, {}) at {}",
            window,
            session,
            root.display()
        );

        Ok(ToggleOutcome::Created {
            panel: DockedSession { window, session },
            root,
        })
    }

    /// Pick and focus the window a file chosen in the panel should open in
    pub fn open_file(&self, host: &mut PanelHost<'_>, path: &Path) -> Option<WindowId> {
        let panel = registry::find_visible_docked_session(&*host.windows, &*host.browser)
            .map(|docked| docked.window);

        let target = self.config.open_file_window.select(host.windows, panel)?;
        if Some(target) == panel {
            tracing::warn!("Window selector chose the side panel itself, ignoring");
            return None;
        }

        host.windows.select_window(target);
        tracing::debug!("Opening {} in {}", path.display(), target);
        Some(target)
    }

    /// Follow focus moving to another buffer
    pub fn on_buffer_focused(&self, host: &mut PanelHost<'_>, ctx: &EditorContext) -> SyncOutcome {
        if self.buffer_subscription.is_none() {
            return SyncOutcome::Skipped;
        }
        let Some(docked) = registry::find_visible_docked_session(&*host.windows, &*host.browser) else {
            return SyncOutcome::Skipped;
        };
        if ctx.selected_window == Some(docked.window) {
            return SyncOutcome::Skipped;
        }

        self.follow
            .sync_to_file(host, docked.session, ctx.active_file.as_deref(), None)
    }

    /// Re-root the visible panel at a newly switched-to project
    pub fn on_project_switched(
        &self,
        host: &mut PanelHost<'_>,
        ctx: &EditorContext,
        root: &Path,
    ) -> SyncOutcome {
        if self.project_subscription.is_none() {
            tracing::trace!("Project switch ignored: not following");
            return SyncOutcome::Skipped;
        }
        let Some(docked) = registry::find_visible_docked_session(&*host.windows, &*host.browser) else {
            return SyncOutcome::Skipped;
        };

        self.follow
            .sync_to_project(host, docked.session, root, ctx.active_file.as_deref())
    }

    /// Keep the panel at its configured width after a layout change
    pub fn on_layout_changed(
        &self,
        host: &mut PanelHost<'_>,
        resizing: Option<WindowId>,
    ) -> Reassert {
        if self.layout_subscription.is_none() {
            return Reassert::NoPanel;
        }
        if self.placement.is_adjusting() {
            return Reassert::Suppressed;
        }
        let panel = registry::find_visible_docked_session(&*host.windows, &*host.browser)
            .map(|docked| docked.window);
        self.placement.reassert_width(host.windows, panel, resizing)
    }

    fn ensure_not_fullframe(
        &self,
        host: &PanelHost<'_>,
        ctx: &EditorContext,
    ) -> Result<(), PanelError> {
        // With no window to inspect, the browser's current session decides
        let session = match ctx.selected_window.or_else(|| host.windows.selected_window()) {
            Some(window) => registry::window_session(&*host.windows, &*host.browser, window),
            None => host
                .browser
                .current_session()
                .and_then(|id| host.browser.session(id)),
        };

        match session {
            Some(session) if session.is_fullframe() => Err(PanelError::FullframeActive {
                root: session.root.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Root for a new panel: explicit path, project root, file directory, cwd
    fn resolve_root(
        &self,
        host: &PanelHost<'_>,
        ctx: &EditorContext,
        active_file: Option<&Path>,
        explicit_root: Option<&Path>,
    ) -> PathBuf {
        if let Some(root) = explicit_root {
            return root.to_path_buf();
        }

        let Some(file) = active_file else {
            return ctx.cwd.clone();
        };

        host.projects
            .detect_project_root(file)
            .or_else(|| file.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| ctx.cwd.clone())
    }

    fn show(&self, host: &mut PanelHost<'_>, session: SessionId) -> WindowId {
        let window = self.placement.open_docked(host.windows);
        host.windows.set_window_session(window, Some(session));
        host.browser.attach_window(session, Some(window));
        window
    }

    /// Tear down every docked session except `keep`
    fn retire_other_docked(&self, host: &mut PanelHost<'_>, keep: SessionId) {
        for id in registry::docked_sessions(&*host.browser) {
            if id == keep {
                continue;
            }
            if let Some(window) = host.browser.session(id).and_then(|s| s.window) {
                if host.windows.window_session(window) == Some(id) {
                    host.windows.close_window(window);
                }
            }
            host.browser.destroy_session(id);
            tracing::debug!("Retired stale docked {}", id);
        }
    }
}

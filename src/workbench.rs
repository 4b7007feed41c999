//! Headless workbench: the side panel wired to the in-memory host
//!
//! Owns a frame of windows, a tree-browser, an event bus and the panel, and
//! plays [`ScriptCommand`]s against them the way an editor's event loop
//! would: build a message, run `update`, perform the returned command, then
//! deliver any layout notifications the change caused.

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::config::PanelConfig;
use crate::host::memory::{EventBus, MemoryBrowser, MemoryWindows};
use crate::host::{EditorContext, PanelHost, ProjectDetector, TreeBrowser, WindowHost};
use crate::messages::{HostEvent, Msg, PanelMsg};
use crate::model::PlacementKind;
use crate::panel::{registry, PanelStatus, SidePanel};
use crate::script::{FocusTarget, ScriptCommand};
use crate::update::update;

/// Upper bound on layout notifications delivered after a single command
const MAX_LAYOUT_ROUNDS: usize = 4;

pub struct Workbench<P: ProjectDetector> {
    pub windows: MemoryWindows,
    pub browser: MemoryBrowser,
    pub events: EventBus,
    pub projects: P,
    pub panel: SidePanel,
    cwd: PathBuf,
    /// Last file visited in an editor window
    last_file: Option<PathBuf>,
}

impl<P: ProjectDetector> Workbench<P> {
    pub fn new(config: PanelConfig, projects: P, cwd: impl Into<PathBuf>) -> Self {
        let mut events = EventBus::new();
        let panel = SidePanel::new(config, &mut events);
        Self {
            windows: MemoryWindows::new(200, 50),
            browser: MemoryBrowser::new(),
            events,
            projects,
            panel,
            cwd: cwd.into(),
            last_file: None,
        }
    }

    /// Editing context as the focused window sees it
    pub fn context(&self) -> EditorContext {
        let selected = self.windows.selected_window();
        let active_file = selected
            .and_then(|w| self.windows.window(w))
            .and_then(|state| state.file.clone())
            .or_else(|| self.last_file.clone());

        EditorContext {
            active_file,
            selected_window: selected,
            cwd: self.cwd.clone(),
        }
    }

    pub fn status(&self) -> PanelStatus {
        self.panel.status(&self.windows, &self.browser)
    }

    /// Run a message through `update`, then settle layout notifications
    ///
    /// Host events nobody subscribed to are dropped, as a real host would.
    /// Returns any user-facing messages produced along the way.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<String> {
        let mut messages = Vec::new();

        if let Msg::Host(event) = &msg {
            if !self.events.delivers(event) {
                tracing::trace!("Dropping undelivered {:?}", event);
                return messages;
            }
        }

        let cmd = self.update(msg);
        self.perform(cmd, &mut messages);
        self.settle_layout(&mut messages);
        messages
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let ctx = self.context();
        let mut host = PanelHost::new(
            &mut self.windows,
            &mut self.browser,
            &self.projects,
            &mut self.events,
        );
        update(&mut self.panel, &mut host, &ctx, msg)
    }

    fn perform(&mut self, cmd: Option<Cmd>, messages: &mut Vec<String>) {
        if cmd.as_ref().is_some_and(Cmd::needs_redraw) {
            tracing::trace!("Redraw requested");
        }
        match cmd {
            None | Some(Cmd::Redraw) => {}
            Some(Cmd::ShowMessage(text)) => messages.push(text),
            Some(Cmd::OpenFileIn { window, path }) => {
                self.windows.visit_file(window, path.clone());
                self.last_file = Some(path);
            }
            Some(Cmd::Batch(cmds)) => {
                for cmd in cmds {
                    self.perform(Some(cmd), messages);
                }
            }
        }
    }

    fn settle_layout(&mut self, messages: &mut Vec<String>) {
        for _ in 0..MAX_LAYOUT_ROUNDS {
            if self.windows.take_layout_changes() == 0 {
                return;
            }
            let event = HostEvent::LayoutChanged { resizing: None };
            if !self.events.delivers(&event) {
                return;
            }
            let cmd = self.update(event.into());
            self.perform(cmd, messages);
        }
        tracing::warn!("Layout did not settle after {} rounds", MAX_LAYOUT_ROUNDS);
    }

    /// Play one script command, returning lines to print
    pub fn run(&mut self, command: ScriptCommand) -> Vec<String> {
        match command {
            ScriptCommand::Open(path) => {
                let window = self.editor_window();
                if let Some(window) = window {
                    self.windows.select_window(window);
                    self.windows.visit_file(window, path.clone());
                }
                self.last_file = Some(path);
                self.dispatch(HostEvent::BufferFocused.into())
            }

            ScriptCommand::Toggle(path) => self.dispatch(PanelMsg::Toggle { path }.into()),

            ScriptCommand::SwitchProject(root) => {
                self.dispatch(HostEvent::ProjectSwitched { root }.into())
            }

            ScriptCommand::Drift(extent) => self.resize_panel(extent, false),

            ScriptCommand::Resize(extent) => self.resize_panel(extent, true),

            ScriptCommand::Split => {
                if let Some(window) = self.editor_window() {
                    self.windows.split_window(window);
                }
                let mut messages = Vec::new();
                self.settle_layout(&mut messages);
                messages
            }

            ScriptCommand::Focus(target) => {
                let window = match target {
                    FocusTarget::Panel => self.panel_window(),
                    FocusTarget::Editor => self.editor_window(),
                };
                match window {
                    Some(window) => {
                        self.windows.select_window(window);
                        self.dispatch(HostEvent::BufferFocused.into())
                    }
                    None => vec![format!("No {:?} window to focus", target)],
                }
            }

            ScriptCommand::Pick(path) => self.dispatch(PanelMsg::OpenFile(path).into()),

            ScriptCommand::Promote => {
                let ctx = self.context();
                let Some(window) = ctx.selected_window else {
                    return vec!["No window to promote".to_string()];
                };
                let root = ctx
                    .active_file
                    .as_deref()
                    .and_then(|f| f.parent())
                    .map(PathBuf::from)
                    .unwrap_or(ctx.cwd);
                let session = self.browser.create_session(&root, PlacementKind::Fullframe);
                self.browser.attach_window(session, Some(window));
                self.windows.set_window_session(window, Some(session));
                vec![format!("Full-frame session on {}", root.display())]
            }

            ScriptCommand::Unpromote => {
                let Some(window) = self.windows.selected_window() else {
                    return Vec::new();
                };
                let fullframe = registry::window_session(&self.windows, &self.browser, window)
                    .filter(|s| s.is_fullframe())
                    .map(|s| s.id);
                match fullframe {
                    Some(id) => {
                        self.windows.set_window_session(window, None);
                        self.browser.destroy_session(id);
                        vec!["Left full-frame session".to_string()]
                    }
                    None => vec!["No full-frame session here".to_string()],
                }
            }

            ScriptCommand::FollowProject(enabled) => {
                self.dispatch(PanelMsg::SetFollowProjectSwitch(enabled).into())
            }

            ScriptCommand::Status => vec![describe_status(&self.status())],
        }
    }

    fn resize_panel(&mut self, extent: u32, by_user: bool) -> Vec<String> {
        let Some(window) = self.panel_window() else {
            return vec!["Side panel is not visible".to_string()];
        };
        let axis = self.panel.placement().spec().side.axis();
        self.windows.set_window_extent(window, axis, extent);
        self.windows.take_layout_changes();

        let resizing = by_user.then_some(window);
        self.dispatch(HostEvent::LayoutChanged { resizing }.into())
    }

    fn panel_window(&self) -> Option<crate::model::WindowId> {
        registry::find_visible_docked_session(&self.windows, &self.browser).map(|d| d.window)
    }

    /// Most recently used window that isn't the panel
    fn editor_window(&self) -> Option<crate::model::WindowId> {
        let panel = self.panel_window();
        match self.windows.selected_window() {
            Some(selected) if Some(selected) != panel => Some(selected),
            _ => self.windows.most_recently_used_window(panel),
        }
    }
}

/// One-line human description of a panel status
pub fn describe_status(status: &PanelStatus) -> String {
    match status {
        PanelStatus::Hidden => "panel: hidden".to_string(),
        PanelStatus::Visible {
            window,
            session,
            root,
            entry,
        } => format!(
            "panel: visible (window#{}, session#{}) root={} entry={}",
            window,
            session,
            root.display(),
            entry
                .as_ref()
                .map(|e| e.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        ),
        PanelStatus::Detached { session, root } => {
            format!("panel: detached (session#{}) root={}", session, root.display())
        }
    }
}

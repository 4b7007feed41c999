//! Panel command handlers (toggle, open file, follow settings)

use crate::commands::Cmd;
use crate::host::{EditorContext, PanelHost};
use crate::messages::PanelMsg;
use crate::panel::{SidePanel, ToggleOutcome};

/// Handle user commands aimed at the side panel
pub fn update_panel(
    panel: &mut SidePanel,
    host: &mut PanelHost<'_>,
    ctx: &EditorContext,
    msg: PanelMsg,
) -> Option<Cmd> {
    match msg {
        PanelMsg::Toggle { path } => match panel.toggle(host, ctx, path.as_deref()) {
            Ok(outcome) => {
                match &outcome {
                    ToggleOutcome::Hidden(_) => tracing::trace!("Toggle: hidden"),
                    ToggleOutcome::Reused(p) => tracing::trace!("Toggle: reused {}", p.session),
                    ToggleOutcome::Created { root, .. } => {
                        tracing::trace!("Toggle: created at {}", root.display())
                    }
                }
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::debug!("Toggle refused: {}", e);
                Some(Cmd::ShowMessage(e.to_string()))
            }
        },

        PanelMsg::OpenFile(path) => match panel.open_file(host, &path) {
            Some(window) => Some(Cmd::Batch(vec![
                Cmd::OpenFileIn { window, path },
                Cmd::Redraw,
            ])),
            None => Some(Cmd::ShowMessage(format!(
                "No window available to open {}",
                path.display()
            ))),
        },

        PanelMsg::SetFollowProjectSwitch(enabled) => {
            if panel.follows_project_switch() == enabled {
                return None;
            }
            panel.set_follow_project_switch(host.events, enabled);
            let state = if enabled { "enabled" } else { "disabled" };
            Some(Cmd::ShowMessage(format!("Follow project switch {}", state)))
        }
    }
}

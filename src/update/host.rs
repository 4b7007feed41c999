//! Host notification handlers (project switch, layout change, buffer focus)

use crate::commands::Cmd;
use crate::host::{EditorContext, PanelHost};
use crate::messages::HostEvent;
use crate::panel::{Reassert, SidePanel, SyncOutcome};

/// Handle a notification fired by the host
pub fn update_host(
    panel: &mut SidePanel,
    host: &mut PanelHost<'_>,
    ctx: &EditorContext,
    event: HostEvent,
) -> Option<Cmd> {
    match event {
        HostEvent::ProjectSwitched { root } => {
            sync_result(panel.on_project_switched(host, ctx, &root))
        }

        HostEvent::BufferFocused => sync_result(panel.on_buffer_focused(host, ctx)),

        HostEvent::LayoutChanged { resizing } => match panel.on_layout_changed(host, resizing) {
            Reassert::Resized { .. } => Some(Cmd::Redraw),
            _ => None,
        },
    }
}

fn sync_result(outcome: SyncOutcome) -> Option<Cmd> {
    match outcome {
        SyncOutcome::Skipped => None,
        SyncOutcome::Navigated { .. } | SyncOutcome::Synced(_) => Some(Cmd::Redraw),
    }
}

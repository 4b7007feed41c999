//! Update functions for the Elm-style architecture
//!
//! All panel state transformations flow through these functions.

mod host;
mod panel;

use crate::commands::Cmd;
use crate::host::{EditorContext, PanelHost};
use crate::messages::Msg;
use crate::panel::SidePanel;

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use host::update_host;
pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(
    panel: &mut SidePanel,
    host: &mut PanelHost<'_>,
    ctx: &EditorContext,
    msg: Msg,
) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(panel, host, ctx, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(panel, host, ctx, msg)
    }
}

fn update_inner(
    panel: &mut SidePanel,
    host: &mut PanelHost<'_>,
    ctx: &EditorContext,
    msg: Msg,
) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => update_panel(panel, host, ctx, m),
        Msg::Host(e) => update_host(panel, host, ctx, e),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after window and session state and logs the diff.
#[cfg(debug_assertions)]
fn update_traced(
    panel: &mut SidePanel,
    host: &mut PanelHost<'_>,
    ctx: &EditorContext,
    msg: Msg,
) -> Option<Cmd> {
    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = PanelSnapshot::capture(&*host.windows, &*host.browser);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(panel, host, ctx, msg);

    let after = PanelSnapshot::capture(&*host.windows, &*host.browser);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "panel", %diff, "state changed");
    }

    result
}

//! Docked window placement and width maintenance

use std::cell::Cell;

use crate::host::WindowHost;
use crate::model::WindowId;

use super::dock::{PlacementSpec, WindowOptions};

/// Result of a width reassertion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reassert {
    /// Raised while the strategy itself was creating or resizing the window
    Suppressed,
    /// No panel window exists
    NoPanel,
    /// The user is resizing the panel window itself
    UserResizing,
    /// Already at the configured extent
    Unchanged,
    /// Extent was restored
    Resized { from: u32, to: u32 },
}

/// Resets the in-progress flag when the strategy's own host call returns
struct LayoutGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> LayoutGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for LayoutGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

/// Opens the docked window and keeps it at its configured width
#[derive(Debug)]
pub struct WindowPlacement {
    spec: PlacementSpec,
    options: WindowOptions,
    /// Set only while this strategy is inside a host create/resize call
    adjusting: Cell<bool>,
}

impl WindowPlacement {
    pub fn new(spec: PlacementSpec, options: WindowOptions) -> Self {
        Self {
            spec,
            options,
            adjusting: Cell::new(false),
        }
    }

    pub fn spec(&self) -> &PlacementSpec {
        &self.spec
    }

    /// Whether the strategy is currently inside its own layout change
    pub fn is_adjusting(&self) -> bool {
        self.adjusting.get()
    }

    /// Target extent of the panel window for the current frame
    pub fn target_extent(&self, windows: &dyn WindowHost) -> u32 {
        self.spec
            .target_extent(windows.frame_extent(self.spec.side.axis()))
    }

    /// Create the docked window, configure it and focus it
    pub fn open_docked(&self, windows: &mut dyn WindowHost) -> WindowId {
        let _guard = LayoutGuard::enter(&self.adjusting);

        let window = windows.create_docked_window(&self.spec);
        for (key, value) in &self.options {
            windows.set_window_option(window, key, value);
        }

        let axis = self.spec.side.axis();
        let target = self.target_extent(windows);
        windows.set_window_extent(window, axis, target);
        windows.select_window(window);

        tracing::debug!(
            "Opened docked {} at {} (slot {}, extent {})",
            window,
            self.spec.side,
            self.spec.slot,
            target
        );
        window
    }

    /// Restore the panel window's configured extent after a layout change
    ///
    /// `resizing` is the window the user is dragging, if any.
    pub fn reassert_width(
        &self,
        windows: &mut dyn WindowHost,
        panel: Option<WindowId>,
        resizing: Option<WindowId>,
    ) -> Reassert {
        if self.adjusting.get() {
            tracing::trace!("Width reassertion suppressed during own layout change");
            return Reassert::Suppressed;
        }

        let Some(window) = panel else {
            return Reassert::NoPanel;
        };
        if resizing == Some(window) {
            return Reassert::UserResizing;
        }

        let axis = self.spec.side.axis();
        let Some(current) = windows.window_extent(window, axis) else {
            return Reassert::NoPanel;
        };
        let target = self.target_extent(windows);
        if current == target {
            return Reassert::Unchanged;
        }

        {
            let _guard = LayoutGuard::enter(&self.adjusting);
            windows.set_window_extent(window, axis, target);
        }

        tracing::debug!("Reasserted {} extent {} → {}", window, current, target);
        Reassert::Resized {
            from: current,
            to: target,
        }
    }
}

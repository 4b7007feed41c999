//! Side panel - a single docked tree-browser session per workspace
//!
//! ## Architecture
//!
//! - `dock`: placement types (`Side`, `Axis`, `PlacementSpec`, window options)
//! - `placement`: `WindowPlacement`, opens the docked window and reasserts its width
//! - `registry`: live discovery of the docked session from the host's windows
//! - `follow`: `FollowEngine`, keeps the panel on the file being edited
//! - `controller`: `SidePanel`, the toggle protocol and notification handlers
//!
//! ## Integration
//!
//! Messages reach the panel through `update::update`, which hands it a
//! `PanelHost` (window manager, tree-browser, project detector) and the
//! caller's `EditorContext`.

mod controller;
mod dock;
mod errors;
mod follow;
mod placement;
pub mod registry;

pub use controller::{PanelStatus, SidePanel, ToggleOutcome};
pub use dock::{Axis, PlacementSpec, Side, WindowOptionValue, WindowOptions, MIN_PANEL_EXTENT};
pub use errors::PanelError;
pub use follow::{ancestors_between, normalize_path, FollowEngine, FollowMode, FollowTarget, SyncOutcome};
pub use placement::{Reassert, WindowPlacement};
pub use registry::DockedSession;

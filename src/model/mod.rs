//! Panel model - identifiers and session state shared with the host
//!
//! The tree-browser engine owns sessions and the host owns windows. This
//! module only defines the shapes both sides agree on.

pub mod session;

pub use session::{PlacementKind, Session};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to a host window
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Opaque handle to a tree-browser session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

//! Dock placement types
//!
//! This module defines where the side panel is docked and how its window is
//! described to the host.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Frame edge the panel is docked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Returns the axis the configured width is measured along
    pub fn axis(&self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::Horizontal,
            Side::Top | Side::Bottom => Axis::Vertical,
        }
    }

    /// All sides for iteration
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::ALL
            .into_iter()
            .find(|side| side.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown side '{}' (expected left, right, top or bottom)", s))
    }
}

/// Axis for panel sizing
///
/// `Horizontal` extents are columns (window width), `Vertical` extents are
/// rows (window height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Value of a window-level option applied to the docked window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindowOptionValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for WindowOptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowOptionValue::Bool(b) => write!(f, "{}", b),
            WindowOptionValue::Int(i) => write!(f, "{}", i),
            WindowOptionValue::Text(s) => f.write_str(s),
        }
    }
}

/// Window option name -> value, applied in key order
pub type WindowOptions = BTreeMap<String, WindowOptionValue>;

/// Placement request handed to the host when creating the docked window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSpec {
    pub side: Side,
    /// Ordering among panels docked at the same side (lower is closer to the edge)
    pub slot: i32,
    /// Fraction of the frame along `side.axis()`
    pub width: f32,
}

impl PlacementSpec {
    /// Target extent in cells for a frame of `frame_extent` cells along the axis
    ///
    /// Never smaller than [`MIN_PANEL_EXTENT`] and never larger than the frame.
    pub fn target_extent(&self, frame_extent: u32) -> u32 {
        let raw = (frame_extent as f32 * self.width).round() as u32;
        raw.max(MIN_PANEL_EXTENT).min(frame_extent.max(1))
    }
}

/// Smallest extent the panel window is ever sized to, in cells
pub const MIN_PANEL_EXTENT: u32 = 10;

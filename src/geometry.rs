//! Panel geometry: host/child rectangles and resting-position targets
//!
//! All functions here are pure and recompute from live geometry on each
//! call. Target offsets are never cached, so a host resize is picked up
//! by the very next computation.

use serde::{Deserialize, Serialize};

/// Vertical margin between the host's top edge and the expanded panel.
pub const EXPANDED_TOP_MARGIN: f32 = 40.0;

/// A rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns this rect shifted by (dx, dy), keeping its size.
    pub fn offset_by(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Vertical midpoint in the parent coordinate space.
    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// A rect is degenerate when it cannot host a panel (no area to
    /// compute a meaningful offset against).
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// The two named resting positions of the slide panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelState {
    /// Panel sits at half the host's height.
    Collapsed,
    /// Panel sits near the host's top edge.
    Expanded,
}

impl PanelState {
    /// Target vertical offset for this state, relative to the host's
    /// coordinate space.
    pub fn target_y(&self, host: &Rect) -> f32 {
        match self {
            PanelState::Collapsed => host.height / 2.0,
            PanelState::Expanded => host.y + EXPANDED_TOP_MARGIN,
        }
    }

    /// The opposite resting position.
    pub fn toggled(&self) -> PanelState {
        match self {
            PanelState::Collapsed => PanelState::Expanded,
            PanelState::Expanded => PanelState::Collapsed,
        }
    }
}

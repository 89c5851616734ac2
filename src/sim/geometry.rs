//! Circle geometry
//!
//! Everything spatial is answered by one signed distance: negative inside a
//! circle, positive outside. Hit testing and packing acceptance both use it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Signed distance from `p` to the boundary of a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Distance from `p` to the nearest edge of a `width x height` rectangle at the origin
#[inline]
pub fn edge_distance(p: Vec2, width: f32, height: f32) -> f32 {
    p.x.min(width - p.x).min(p.y.min(height - p.y))
}

/// A placed circle, optionally carrying a gameplay label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    label: Option<u32>,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            label: None,
        }
    }

    /// Sequence number the player must tap, if any
    #[inline]
    pub fn label(&self) -> Option<u32> {
        self.label
    }

    #[inline]
    pub fn is_numbered(&self) -> bool {
        self.label.is_some()
    }

    /// Labels are assigned once, during round setup
    pub(crate) fn assign_label(&mut self, label: u32) {
        debug_assert!(self.label.is_none(), "circle labeled twice");
        self.label = Some(label);
    }

    /// Distance from `p` to this circle's edge; negative inside
    #[inline]
    pub fn signed_gap(&self, p: Vec2) -> f32 {
        sd_circle(p, self.center, self.radius)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.signed_gap(p) < 0.0
    }

    /// True if the two circles share interior area (touching is allowed)
    pub fn overlaps(&self, other: &Circle, tolerance: f32) -> bool {
        self.center.distance(other.center) + tolerance < self.radius + other.radius
    }
}

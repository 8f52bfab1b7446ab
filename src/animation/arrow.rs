//! Arrow geometry: endpoints in, midpoint, length and orientation out.

use glam::{EulerRot, Quat, Vec3};
use serde::Serialize;

use crate::scene::Color;

/// Squared lengths below this are treated as a zero-length arrow.
const MIN_LENGTH_SQ: f32 = 1e-12;

/// A directed connector between two points.
///
/// Direction, length and angles are always derived from the endpoints; see
/// [`ArrowSpec::orientation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArrowSpec {
    /// Tail.
    pub start: Vec3,
    /// Head.
    pub end: Vec3,
    /// Segment, head and particle color.
    pub color: Color,
}

/// Orientation of an arrow derived from its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowOrientation {
    /// `end - start`.
    pub direction: Vec3,
    /// `|end - start|`.
    pub length: f32,
    /// `atan2(dx, dz)`.
    pub yaw: f32,
    /// `asin(dy / length)`.
    pub elevation: f32,
}

impl ArrowOrientation {
    /// Derive the orientation, or `None` for zero-length or non-finite
    /// arrows.
    #[must_use]
    pub fn between(start: Vec3, end: Vec3) -> Option<Self> {
        let direction = end - start;
        let length_sq = direction.length_squared();
        if !direction.is_finite() || length_sq < MIN_LENGTH_SQ {
            return None;
        }
        let length = length_sq.sqrt();
        let norm = direction / length;
        Some(Self {
            direction,
            length,
            yaw: norm.x.atan2(norm.z),
            elevation: norm.y.clamp(-1.0, 1.0).asin(),
        })
    }

    /// Rotation applied to the Y-aligned segment and head: XYZ Euler
    /// `(elevation, 0, yaw)`.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.elevation, 0.0, self.yaw)
    }
}

impl ArrowSpec {
    /// Arrow from `start` to `end`.
    #[must_use]
    pub const fn new(start: Vec3, end: Vec3, color: Color) -> Self {
        Self { start, end, color }
    }

    /// Derived orientation; `None` means the arrow is skipped.
    #[must_use]
    pub fn orientation(&self) -> Option<ArrowOrientation> {
        ArrowOrientation::between(self.start, self.end)
    }

    /// Centre of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Vec3 {
        self.start.lerp(self.end, 0.5)
    }

    /// Point at normalized `progress` from tail to head.
    #[must_use]
    pub fn point_at(&self, progress: f32) -> Vec3 {
        self.start + (self.end - self.start) * progress
    }
}

//! World positions for everything in a reaction scene.
//!
//! The per-step plan depends only on whether the step is early or late in
//! the pathway; the summary plan is a fixed table ([`summary`]).

pub mod summary;

use glam::Vec3;
use serde::Serialize;

pub use summary::{SummaryLayout, SummaryStage};

use crate::pathway::ReactionStep;

/// First step id that uses the wide separation.
pub const LATER_STEP_THRESHOLD: u32 = 5;
/// Radius subtracted at each end of the connector so it meets the molecule
/// bodies.
pub const EFFECTIVE_RADIUS: f32 = 0.5;
/// Substrate-to-centre distance for early steps.
pub const EARLY_HALF_SEPARATION: f32 = 2.5;
/// Substrate-to-centre distance for late steps.
pub const LATE_HALF_SEPARATION: f32 = 3.0;

/// Connector rod radius.
pub const CONNECTOR_RADIUS: f32 = 0.05;
/// Radius of the spheres capping each connector end.
pub const CAP_RADIUS: f32 = 0.06;

/// Positions for a single reaction step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepLayout {
    /// Substrate anchor, left of the origin.
    pub substrate: Vec3,
    /// Product anchor, right of the origin.
    pub product: Vec3,
    /// Length of the connector rod centred at the origin along X.
    pub connector_length: f32,
    /// Enzyme indicator anchor.
    pub enzyme: Vec3,
    /// Enzyme name caption.
    pub enzyme_label: Vec3,
    /// Anchor the energy captions hang from.
    pub energy: Vec3,
}

impl StepLayout {
    /// Plan a step.
    #[must_use]
    pub fn for_step(step: &ReactionStep) -> Self {
        Self::with_half_separation(if step.is_later_step() {
            LATE_HALF_SEPARATION
        } else {
            EARLY_HALF_SEPARATION
        })
    }

    fn with_half_separation(half: f32) -> Self {
        Self {
            substrate: Vec3::new(-half, 0.0, 0.0),
            product: Vec3::new(half, 0.0, 0.0),
            connector_length: 2.0 * half - 2.0 * EFFECTIVE_RADIUS,
            enzyme: Vec3::new(0.0, 0.3, 0.0),
            enzyme_label: Vec3::new(0.0, -1.0, 0.0),
            energy: Vec3::new(0.0, -1.5, 0.0),
        }
    }

    /// Distance between the substrate and product anchors.
    #[must_use]
    pub fn separation(&self) -> f32 {
        self.product.x - self.substrate.x
    }

    /// Connector end points `(left, right)`, where the caps sit.
    #[must_use]
    pub fn connector_ends(&self) -> (Vec3, Vec3) {
        let half = self.connector_length / 2.0;
        (Vec3::new(-half, 0.0, 0.0), Vec3::new(half, 0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathway;

    fn layout(id: u32) -> StepLayout {
        StepLayout::for_step(pathway::step(id).unwrap())
    }

    #[test]
    fn early_and_late_separations() {
        assert_eq!(layout(4).separation(), 5.0);
        assert_eq!(layout(6).separation(), 6.0);
        assert_eq!(layout(5).separation(), 6.0);
    }

    #[test]
    fn connector_leaves_room_for_molecules() {
        assert_eq!(layout(1).connector_length, 4.0);
        assert_eq!(layout(10).connector_length, 5.0);
        let (l, r) = layout(10).connector_ends();
        assert_eq!(l.x, -2.5);
        assert_eq!(r.x, 2.5);
    }

    #[test]
    fn anchors_are_step_independent() {
        let early = layout(1);
        let late = layout(9);
        assert_eq!(early.enzyme, late.enzyme);
        assert_eq!(early.enzyme_label, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(early.energy, Vec3::new(0.0, -1.5, 0.0));
    }
}

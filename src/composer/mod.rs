//! Scene assembly: turns a reaction step, the summary plan or the glucose
//! model into a [`SceneGraph`].
//!
//! Composition is pure and runs once per mounted visualization. Everything
//! that moves afterwards carries a
//! [`MotionDriver`](crate::animation::MotionDriver) and is updated by the
//! engine's frame loop.

mod step;
mod summary;
mod viewer;

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
pub use step::compose_step;
pub use summary::compose_summary;
pub use viewer::compose_glucose_viewer;

use crate::animation::{ArrowSpec, MotionDriver};
use crate::molecule::TokenKind;
use crate::scene::{palette, Fragment, Material, NodeId, SceneGraph, Shape};

/// Node handles for one summary token, used to apply hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenHandle {
    /// What the token represents.
    pub kind: TokenKind,
    /// Token group (the hover pick target).
    pub root: NodeId,
    /// Mesh whose color darkens while hovered.
    pub body: NodeId,
    /// Caption shown while hovered.
    pub caption: NodeId,
}

/// A composed scene plus the handles the engine needs to drive it.
#[derive(Debug, Clone, Default)]
pub struct Composition {
    /// The scene.
    pub graph: SceneGraph,
    /// Hoverable tokens, empty outside the summary.
    pub tokens: Vec<TokenHandle>,
}

impl Composition {
    fn from_graph(graph: SceneGraph) -> Self {
        Self {
            graph,
            tokens: Vec::new(),
        }
    }
}

const SPIKE_COUNT: usize = 8;

/// Star-shaped enzyme with a pulsing halo, shown only while animating.
pub(crate) fn enzyme_indicator(anchor: Vec3) -> Fragment {
    let spikes = (0..SPIKE_COUNT).map(|i| {
        let angle = i as f32 / SPIKE_COUNT as f32 * TAU;
        Fragment::mesh(
            format!("spike_{i}"),
            Shape::Cone {
                radius: 0.15,
                height: 0.5,
                sides: 4,
            },
            Material::solid(palette::ENZYME),
        )
        .at(Vec3::new(angle.cos(), angle.sin(), 0.0) * 0.3)
        .rotated_xyz(0.0, 0.0, angle + FRAC_PI_2)
    });

    let star = Fragment::group("star")
        .driven_by(MotionDriver::EnzymeSpin)
        .with_children(spikes)
        .with_child(Fragment::mesh(
            "core",
            Shape::Sphere { radius: 0.3 },
            Material::solid(palette::ENZYME_CORE)
                .with_emissive(palette::ENZYME_CORE, 0.3),
        ));

    let halo = Fragment::mesh(
        "halo",
        Shape::Torus {
            radius: 0.6,
            tube: 0.05,
            sides: 32,
        },
        Material::solid(palette::HALO)
            .with_emissive(palette::HALO, 0.5)
            .with_opacity(0.6),
    )
    .rotated_xyz(FRAC_PI_2, 0.0, 0.0)
    .driven_by(MotionDriver::HaloPulse);

    Fragment::group("enzyme")
        .at(anchor)
        .driven_by(MotionDriver::ShowWhileAnimating)
        .with_child(star)
        .with_child(halo)
}

/// Segment, head and flow particle for an arrow. `None` (with a warning)
/// for degenerate arrows.
pub(crate) fn arrow(name: &str, spec: &ArrowSpec) -> Option<Fragment> {
    let Some(orient) = spec.orientation() else {
        log::warn!(
            "skipping degenerate arrow '{name}' ({} -> {})",
            spec.start,
            spec.end
        );
        return None;
    };
    let rotation = orient.rotation();

    let mut segment = Fragment::mesh(
        "segment",
        Shape::Cylinder {
            radius: 0.03,
            height: orient.length,
            sides: 8,
        },
        Material::solid(spec.color).with_opacity(0.5),
    )
    .at(spec.midpoint());
    segment.transform.rotation = rotation;

    let mut head = Fragment::mesh(
        "head",
        Shape::Cone {
            radius: 0.1,
            height: 0.3,
            sides: 8,
        },
        Material::solid(spec.color),
    )
    .at(spec.end);
    head.transform.rotation = rotation;

    let particle = Fragment::mesh(
        "particle",
        Shape::Sphere { radius: 0.1 },
        Material::solid(spec.color).with_emissive(spec.color, 0.5),
    )
    .at(spec.start)
    .driven_by(MotionDriver::FlowParticle {
        start: spec.start,
        end: spec.end,
    });

    Some(
        Fragment::group(name)
            .with_child(segment)
            .with_child(particle)
            .with_child(head),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enzyme_has_eight_spikes_core_and_halo() {
        let enzyme = enzyme_indicator(Vec3::new(0.0, 0.3, 0.0));
        assert_eq!(enzyme.motion, Some(MotionDriver::ShowWhileAnimating));
        let star = enzyme.find("star").unwrap();
        assert_eq!(star.children.len(), SPIKE_COUNT + 1);
        let halo = enzyme.find("halo").unwrap();
        assert_eq!(halo.motion, Some(MotionDriver::HaloPulse));
    }

    #[test]
    fn arrow_parts_sit_at_midpoint_and_head() {
        let spec = ArrowSpec::new(
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            palette::CARBOXYL,
        );
        let frag = arrow("flow", &spec).unwrap();
        assert_eq!(
            frag.find("segment").unwrap().transform.translation,
            Vec3::new(1.0, 0.0, 0.0)
        );
        assert_eq!(
            frag.find("head").unwrap().transform.translation,
            Vec3::new(2.0, 0.0, 0.0)
        );
        assert!(frag.find("particle").unwrap().motion.is_some());
    }

    #[test]
    fn degenerate_arrow_is_skipped() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert!(arrow("none", &ArrowSpec::new(p, p, palette::OXYGEN)).is_none());
    }
}

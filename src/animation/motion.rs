use glam::{Quat, Vec3};
use serde::Serialize;

use super::effects::{float_offset, halo_pulse, spin_angle};
use crate::options::AnimationOptions;
use crate::scene::{NodeContent, SceneGraph, SceneNode};

/// Per-frame animation attached to a scene node.
///
/// Drivers read the frame's elapsed time, delta, run state and particle
/// progress and write the node's transform, visibility or material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "driver", rename_all = "snake_case")]
pub enum MotionDriver {
    /// Vertical bob around a resting height. Paused nodes keep their last
    /// offset.
    Float {
        /// Resting local Y.
        base_y: f32,
    },
    /// Absolute spin about Y at the enzyme rate while animating.
    EnzymeSpin,
    /// Spin about Y accumulated from frame deltas at the viewer rate while
    /// animating; pausing freezes the current angle.
    Turntable,
    /// Pulsing scale and opacity.
    HaloPulse,
    /// Particle riding an arrow at the current particle progress; shown
    /// only while animating.
    FlowParticle {
        /// Arrow tail.
        start: Vec3,
        /// Arrow head.
        end: Vec3,
    },
    /// Shown while animating, hidden while paused.
    ShowWhileAnimating,
}

/// Everything a driver needs to evaluate one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    /// Seconds since mount.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Whether the visualization is playing.
    pub animating: bool,
    /// Flow particle progress in `[0, 1]`.
    pub particle_progress: f32,
}

impl MotionDriver {
    /// Write this frame's transform/visibility/material into `node`.
    pub fn apply(
        &self,
        node: &mut SceneNode,
        frame: &MotionFrame,
        opts: &AnimationOptions,
    ) {
        match *self {
            Self::Float { base_y } => {
                if frame.animating {
                    node.transform.translation.y =
                        base_y + float_offset(frame.elapsed, opts);
                }
            }
            Self::EnzymeSpin => {
                if frame.animating {
                    node.transform.rotation = Quat::from_rotation_y(
                        spin_angle(frame.elapsed, opts.enzyme_spin_rate),
                    );
                }
            }
            Self::Turntable => {
                if frame.animating {
                    let step = frame.delta * opts.viewer_spin_rate;
                    node.transform.rotation =
                        Quat::from_rotation_y(step) * node.transform.rotation;
                }
            }
            Self::HaloPulse => {
                if frame.animating {
                    let pulse = halo_pulse(frame.elapsed, opts);
                    node.transform.scale = Vec3::splat(pulse.scale);
                    if let NodeContent::Mesh { material, .. } =
                        &mut node.content
                    {
                        material.opacity = pulse.opacity;
                    }
                }
            }
            Self::FlowParticle { start, end } => {
                node.visible = frame.animating;
                node.transform.translation =
                    start + (end - start) * frame.particle_progress;
            }
            Self::ShowWhileAnimating => {
                node.visible = frame.animating;
            }
        }
    }
}

/// Apply every node's driver for one frame. Returns the number of driven
/// nodes.
pub fn drive(
    graph: &mut SceneGraph,
    frame: &MotionFrame,
    opts: &AnimationOptions,
) -> usize {
    let mut driven = 0;
    for (_, node) in graph.nodes_mut() {
        if let Some(motion) = node.motion {
            motion.apply(node, frame, opts);
            driven += 1;
        }
    }
    driven
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::scene::{palette, Fragment, Material, Shape};

    fn frame(elapsed: f32, animating: bool) -> MotionFrame {
        MotionFrame {
            elapsed,
            delta: 1.0 / 60.0,
            animating,
            particle_progress: 0.5,
        }
    }

    fn single(fragment: Fragment) -> SceneGraph {
        let mut graph = SceneGraph::new();
        let _ = graph.insert(None, fragment);
        graph
    }

    #[test]
    fn float_freezes_when_paused() {
        let opts = AnimationOptions::default();
        let mut graph =
            single(Fragment::group("atp").driven_by(MotionDriver::Float {
                base_y: 1.0,
            }));
        let _ = drive(&mut graph, &frame(PI / 4.0, true), &opts);
        let y = graph.nodes()[0].transform.translation.y;
        assert!((y - 1.1).abs() < 1e-6);

        let _ = drive(&mut graph, &frame(0.0, false), &opts);
        assert_eq!(graph.nodes()[0].transform.translation.y, y);
    }

    #[test]
    fn particle_tracks_progress_and_run_state() {
        let opts = AnimationOptions::default();
        let mut graph = single(
            Fragment::mesh(
                "particle",
                Shape::Sphere { radius: 0.1 },
                Material::solid(palette::CARBOXYL),
            )
            .driven_by(MotionDriver::FlowParticle {
                start: Vec3::ZERO,
                end: Vec3::new(4.0, 0.0, 0.0),
            }),
        );
        let _ = drive(&mut graph, &frame(1.0, true), &opts);
        let node = &graph.nodes()[0];
        assert!(node.visible);
        assert_eq!(node.transform.translation, Vec3::new(2.0, 0.0, 0.0));

        let _ = drive(&mut graph, &frame(1.0, false), &opts);
        assert!(!graph.nodes()[0].visible);
    }

    #[test]
    fn halo_writes_scale_and_opacity() {
        let opts = AnimationOptions::default();
        let mut graph = single(
            Fragment::mesh(
                "halo",
                Shape::Torus {
                    radius: 0.6,
                    tube: 0.05,
                    sides: 32,
                },
                Material::solid(palette::HALO).with_opacity(0.6),
            )
            .driven_by(MotionDriver::HaloPulse),
        );
        let t = PI / 3.0;
        let _ = drive(&mut graph, &frame(t, true), &opts);
        let node = &graph.nodes()[0];
        let expected = halo_pulse(t, &opts);
        assert!((node.transform.scale.x - expected.scale).abs() < 1e-6);
        let NodeContent::Mesh { material, .. } = &node.content else {
            unreachable!("halo is a mesh");
        };
        assert!((material.opacity - expected.opacity).abs() < 1e-6);
    }

    #[test]
    fn turntable_accumulates_only_while_animating() {
        let opts = AnimationOptions::default();
        let mut graph =
            single(Fragment::group("model").driven_by(MotionDriver::Turntable));
        let step = MotionFrame {
            elapsed: 0.0,
            delta: 1.0,
            animating: true,
            particle_progress: 0.0,
        };
        let _ = drive(&mut graph, &step, &opts);
        let _ = drive(&mut graph, &step, &opts);
        let paused = MotionFrame {
            animating: false,
            ..step
        };
        let _ = drive(&mut graph, &paused, &opts);
        let (axis, angle) = graph.nodes()[0].transform.rotation.to_axis_angle();
        assert!((angle - 1.0).abs() < 1e-5);
        assert!((axis.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn undriven_nodes_are_untouched() {
        let opts = AnimationOptions::default();
        let mut graph = single(Fragment::group("static"));
        assert_eq!(drive(&mut graph, &frame(1.0, true), &opts), 0);
    }
}

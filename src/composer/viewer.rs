use glam::Vec3;

use super::Composition;
use crate::animation::MotionDriver;
use crate::scene::{palette, Billboard, Fragment, Material, SceneGraph, Shape};

/// Ring carbons, relative to the ring centre.
const CARBONS: [Vec3; 5] = [
    Vec3::new(0.5, 0.0, -0.8),
    Vec3::new(-0.5, 0.0, -0.8),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(-0.5, 0.0, 0.8),
    Vec3::new(0.0, 1.0, 0.0),
];

/// Where the hydroxyl sits relative to its carbon.
fn hydroxyl_offset(carbon: Vec3) -> Vec3 {
    carbon * 0.5 + Vec3::new(0.0, 0.4, 0.0)
}

/// Compose the standalone, slowly turning glucose model.
#[must_use]
pub fn compose_glucose_viewer() -> Composition {
    let carbons = CARBONS.iter().enumerate().map(|(i, &pos)| {
        Fragment::group(format!("carbon_{i}"))
            .at(pos)
            .with_child(Fragment::mesh(
                "atom",
                Shape::Sphere { radius: 0.25 },
                Material::solid(palette::CARBON),
            ))
            .with_child(
                Fragment::mesh(
                    "hydroxyl",
                    Shape::Sphere { radius: 0.2 },
                    Material::solid(palette::HYDROXYL),
                )
                .at(hydroxyl_offset(pos)),
            )
    });

    let model = Fragment::group("glucose")
        .at(Vec3::new(0.0, -1.0, 0.0))
        .scaled(1.5)
        .driven_by(MotionDriver::Turntable)
        .with_child(Fragment::mesh(
            "ring",
            Shape::Torus {
                radius: 1.0,
                tube: 0.3,
                sides: 6,
            },
            Material::solid(palette::SUBSTRATE),
        ))
        .with_child(
            Fragment::mesh(
                "ring_oxygen",
                Shape::Sphere { radius: 0.35 },
                Material::solid(palette::OXYGEN),
            )
            .at(Vec3::new(0.8, 0.0, 0.5)),
        )
        .with_children(carbons)
        .with_child(
            Fragment::label(
                "label",
                Billboard::new("Glucose", 0.5, palette::GLYCOLYSIS),
            )
            .at(Vec3::new(0.0, 2.4, 0.0)),
        );

    let mut graph = SceneGraph::new();
    let _ = graph.insert(None, model);
    log::debug!("composed glucose viewer: {} nodes", graph.len());
    Composition::from_graph(graph)
}

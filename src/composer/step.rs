use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::{enzyme_indicator, Composition};
use crate::annotation;
use crate::layout::{StepLayout, CAP_RADIUS, CONNECTOR_RADIUS};
use crate::molecule::{catalog, molecule_for_label};
use crate::pathway::ReactionStep;
use crate::scene::{palette, Billboard, Fragment, Material, SceneGraph, Shape};

fn connector(layout: &StepLayout) -> Fragment {
    let (left, right) = layout.connector_ends();
    let cap = |name: &str, at: Vec3| {
        Fragment::mesh(
            name,
            Shape::Sphere { radius: CAP_RADIUS },
            Material::solid(palette::CONNECTOR),
        )
        .at(at)
    };
    Fragment::group("connector")
        .with_child(
            Fragment::mesh(
                "rod",
                Shape::Cylinder {
                    radius: CONNECTOR_RADIUS,
                    height: layout.connector_length,
                    sides: 8,
                },
                Material::solid(palette::CONNECTOR),
            )
            .rotated_xyz(0.0, 0.0, FRAC_PI_2),
        )
        .with_child(cap("cap_left", left))
        .with_child(cap("cap_right", right))
}

fn energy_captions(step: &ReactionStep, anchor: Vec3) -> Fragment {
    let captions = annotation::select(step.energy_change);
    Fragment::group("energy")
        .at(anchor)
        .with_children(
            captions
                .iter()
                .enumerate()
                .map(|(i, c)| c.fragment(&format!("caption_{i}"))),
        )
}

/// Compose the scene for one reaction step: substrate and product
/// molecules, the connector rod, the enzyme indicator and caption, and the
/// energy captions.
#[must_use]
pub fn compose_step(step: &ReactionStep) -> Composition {
    let layout = StepLayout::for_step(step);
    log::debug!(
        "composing step {} '{}' (separation {})",
        step.id,
        step.name,
        layout.separation()
    );

    let root = Fragment::group(format!("step_{}", step.id))
        .with_child(
            molecule_for_label("substrate", step.substrate, palette::SUBSTRATE)
                .at(layout.substrate),
        )
        .with_child(connector(&layout))
        .with_child(
            molecule_for_label("product", step.product, palette::PRODUCT)
                .at(layout.product),
        )
        .with_child(enzyme_indicator(layout.enzyme))
        .with_child(
            Fragment::label(
                "enzyme_label",
                Billboard::new(
                    step.enzyme,
                    catalog::LABEL_FONT_SIZE,
                    palette::ENZYME,
                ),
            )
            .at(layout.enzyme_label),
        )
        .with_child(energy_captions(step, layout.energy));

    let mut graph = SceneGraph::new();
    let _ = graph.insert(None, root);
    Composition::from_graph(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathway;
    use crate::scene::NodeContent;

    fn composed(id: u32) -> SceneGraph {
        compose_step(pathway::step(id).unwrap()).graph
    }

    fn translation(graph: &SceneGraph, path: &str) -> Vec3 {
        let id = graph.find(path).unwrap();
        graph.node(id).unwrap().transform.translation
    }

    #[test]
    fn molecules_follow_step_separation() {
        let early = composed(4);
        assert_eq!(translation(&early, "step_4/substrate").x, -2.5);
        assert_eq!(translation(&early, "step_4/product").x, 2.5);
        let late = composed(6);
        assert_eq!(translation(&late, "step_6/substrate").x, -3.0);
        assert_eq!(translation(&late, "step_6/product").x, 3.0);
    }

    #[test]
    fn enzyme_label_names_the_enzyme() {
        let graph = composed(1);
        let id = graph.find("step_1/enzyme_label").unwrap();
        let NodeContent::Label(b) = &graph.node(id).unwrap().content else {
            unreachable!("enzyme label is a label");
        };
        assert_eq!(b.text, "Hexokinase");
        assert_eq!(b.color, palette::ENZYME);
    }

    #[test]
    fn energy_captions_only_where_present() {
        let with = composed(1);
        assert!(with.find("step_1/energy/caption_0").is_some());
        let without = composed(2);
        assert!(without.find("step_2/energy").is_some());
        assert!(without.find("step_2/energy/caption_0").is_none());
    }

    #[test]
    fn molecule_tints_follow_role() {
        let graph = composed(3);
        let body = |path: &str| {
            let id = graph.find(path).unwrap();
            match graph.node(id).unwrap().content {
                NodeContent::Mesh { material, .. } => material.color,
                _ => unreachable!("body is a mesh"),
            }
        };
        assert_eq!(body("step_3/substrate/structure/body"), palette::SUBSTRATE);
        assert_eq!(body("step_3/product/structure/body"), palette::PRODUCT);
    }

    #[test]
    fn every_step_composes() {
        for step in pathway::steps() {
            let c = compose_step(step);
            assert!(c.graph.len() > 20, "step {}", step.id);
            assert!(c.tokens.is_empty());
        }
    }
}

//! Static geometry for every molecule variant and decoration set.
//!
//! Shapes are chosen for rough visual resemblance, not chemical fidelity.
//! The base body takes the caller's tint (substrate purple, product blue);
//! functional groups and phosphates use fixed accent colors.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use super::{DecorationSet, MoleculeVariant};
use crate::scene::{palette, Billboard, Color, Fragment, Material, Shape};

/// Height of the name caption above a molecule's anchor.
pub const LABEL_HEIGHT: f32 = 1.5;
/// Font size of the name caption.
pub const LABEL_FONT_SIZE: f32 = 0.3;

const OXYGEN_RADIUS: f32 = 0.2;
const CARBOXYL_RADIUS: f32 = 0.25;
const PHOSPHATE_OXYGEN_RADIUS: f32 = 0.1;

fn sphere(name: &str, radius: f32, color: Color, at: Vec3) -> Fragment {
    Fragment::mesh(name, Shape::Sphere { radius }, Material::solid(color)).at(at)
}

fn ring(tint: Color, sides: u32) -> Fragment {
    Fragment::mesh(
        "body",
        Shape::Torus {
            radius: 0.7,
            tube: 0.15,
            sides,
        },
        Material::solid(tint),
    )
}

fn chain(tint: Color, height: f32) -> Fragment {
    Fragment::mesh(
        "body",
        Shape::Cylinder {
            radius: 0.15,
            height,
            sides: 16,
        },
        Material::solid(tint),
    )
}

fn phosphate(name: &str, radius: f32, at: Vec3) -> Fragment {
    Fragment::mesh(
        name,
        Shape::Tetrahedron { radius },
        Material::solid(palette::PHOSPHATE),
    )
    .at(at)
}

/// Base body plus the variant's functional groups.
#[must_use]
pub fn base_parts(variant: MoleculeVariant, tint: Color) -> Vec<Fragment> {
    match variant {
        MoleculeVariant::Glucose => vec![
            ring(tint, 6),
            sphere("ring_oxygen", 0.18, palette::OXYGEN, Vec3::new(0.35, 0.6, 0.0)),
        ],
        MoleculeVariant::Fructose => vec![
            ring(tint, 5),
            sphere("ring_oxygen", 0.18, palette::OXYGEN, Vec3::new(0.0, 0.7, 0.0)),
        ],
        MoleculeVariant::Pyruvate => vec![
            Fragment::mesh(
                "body",
                Shape::Tetrahedron { radius: 0.6 },
                Material::solid(tint),
            ),
            sphere("carbonyl", OXYGEN_RADIUS, palette::OXYGEN, Vec3::new(0.0, 0.7, 0.0)),
            sphere(
                "carboxyl",
                CARBOXYL_RADIUS,
                palette::CARBOXYL,
                Vec3::new(0.6, -0.2, 0.0),
            ),
        ],
        MoleculeVariant::TrioseAldehyde => vec![
            chain(tint, 1.2),
            sphere("aldehyde", OXYGEN_RADIUS, palette::OXYGEN, Vec3::new(0.0, 0.7, 0.0)),
        ],
        MoleculeVariant::Phosphoglycerate => vec![
            chain(tint, 1.2),
            sphere(
                "carboxyl",
                CARBOXYL_RADIUS,
                palette::CARBOXYL,
                Vec3::new(0.4, 0.5, 0.0),
            ),
        ],
        MoleculeVariant::Phosphoenolpyruvate => vec![
            chain(tint, 1.0),
            Fragment::mesh(
                "double_bond",
                Shape::Cylinder {
                    radius: 0.08,
                    height: 0.6,
                    sides: 16,
                },
                Material::solid(palette::BOND),
            )
            .at(Vec3::new(0.3, 0.0, 0.0))
            .rotated_xyz(0.0, 0.0, FRAC_PI_2),
            sphere(
                "carboxyl",
                CARBOXYL_RADIUS,
                palette::CARBOXYL,
                Vec3::new(0.0, 0.6, 0.0),
            ),
        ],
        MoleculeVariant::DihydroxyacetonePhosphate => vec![
            chain(tint, 1.0),
            sphere("ketone", OXYGEN_RADIUS, palette::OXYGEN, Vec3::new(0.0, 0.2, 0.4)),
        ],
        MoleculeVariant::BisphosphoglycerateSpecial => vec![
            chain(tint, 1.2),
            sphere(
                "carboxyl",
                CARBOXYL_RADIUS,
                palette::CARBOXYL,
                Vec3::new(0.0, 0.7, 0.0),
            ),
        ],
        MoleculeVariant::Generic => vec![ring(tint, 6)],
    }
}

/// Phosphate groups for a decoration set, positioned relative to the
/// molecule anchor.
#[must_use]
pub fn decoration_parts(decorations: DecorationSet) -> Vec<Fragment> {
    match decorations {
        DecorationSet::None => Vec::new(),
        DecorationSet::SinglePhosphate => {
            let oxygens = (0..4).map(|i| {
                let angle = i as f32 / 4.0 * TAU;
                let offset = Vec3::new(angle.cos(), angle.sin(), 0.0) * 0.25;
                sphere(
                    &format!("oxygen_{i}"),
                    PHOSPHATE_OXYGEN_RADIUS,
                    palette::OXYGEN,
                    offset,
                )
            });
            vec![phosphate("phosphate", 0.3, Vec3::new(0.7, -0.5, 0.0))
                .with_children(oxygens)]
        }
        DecorationSet::DoublePhosphate => vec![
            phosphate("phosphate_right", 0.3, Vec3::new(0.7, -0.5, 0.0)),
            phosphate("phosphate_left", 0.3, Vec3::new(-0.7, -0.5, 0.0)),
        ],
        // Hand-placed: one phosphate on the C1 carboxyl, one on C3.
        DecorationSet::BisphosphoglycerateDual => vec![
            phosphate("phosphate_c1", 0.25, Vec3::new(0.4, 1.0, 0.0)),
            phosphate("phosphate_c3", 0.25, Vec3::new(0.0, -0.7, 0.0)),
            sphere(
                "oxygen_c1",
                PHOSPHATE_OXYGEN_RADIUS,
                palette::OXYGEN,
                Vec3::new(0.6, 1.0, 0.0),
            ),
            sphere(
                "oxygen_c3",
                PHOSPHATE_OXYGEN_RADIUS,
                palette::OXYGEN,
                Vec3::new(0.0, -0.9, 0.0),
            ),
        ],
    }
}

/// Complete molecule: body, functional groups, decorations and a name
/// caption, grouped under `name` at the local origin.
#[must_use]
pub fn molecule(
    name: &str,
    label: &str,
    variant: MoleculeVariant,
    decorations: DecorationSet,
    tint: Color,
) -> Fragment {
    Fragment::group(name)
        .with_child(
            Fragment::group("structure")
                .with_children(base_parts(variant, tint))
                .with_children(decoration_parts(decorations)),
        )
        .with_child(
            Fragment::label(
                "caption",
                Billboard::new(label, LABEL_FONT_SIZE, tint),
            )
            .at(Vec3::new(0.0, LABEL_HEIGHT, 0.0)),
        )
}

/// Classify `label`, resolve its decorations and build the molecule.
#[must_use]
pub fn molecule_for_label(name: &str, label: &str, tint: Color) -> Fragment {
    let variant = MoleculeVariant::classify(label);
    let decorations = DecorationSet::resolve(label);
    log::debug!(
        "molecule '{label}' -> {} with {decorations:?}",
        variant.display_name()
    );
    molecule(name, label, variant, decorations, tint)
}

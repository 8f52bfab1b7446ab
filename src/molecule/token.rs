//! Summary-diagram tokens: one small solid per molecule or energy carrier.

use glam::Vec3;
use serde::Serialize;

use crate::animation::MotionDriver;
use crate::scene::{palette, Billboard, Color, Fragment, Material, Shape};

/// Font size of the hover caption.
const CAPTION_FONT_SIZE: f32 = 0.25;
/// Translucent white plate behind hover captions.
const CAPTION_BACKDROP: [f32; 4] = [1.0, 1.0, 1.0, 0.7];

/// What a summary token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Adenosine triphosphate.
    Atp,
    /// Adenosine diphosphate.
    Adp,
    /// Reduced nicotinamide adenine dinucleotide.
    Nadh,
    /// Pathway input.
    Glucose,
    /// Pathway output.
    Pyruvate,
    /// The central process node.
    GlycolysisProcess,
}

impl TokenKind {
    /// Token geometry.
    #[must_use]
    pub fn shape(self) -> Shape {
        match self {
            Self::Atp | Self::Adp => Shape::Cylinder {
                radius: 0.4,
                height: 0.2,
                sides: 32,
            },
            Self::Nadh => Shape::Torus {
                radius: 0.3,
                tube: 0.1,
                sides: 32,
            },
            Self::Glucose => Shape::Torus {
                radius: 0.6,
                tube: 0.2,
                sides: 6,
            },
            Self::Pyruvate => Shape::Cylinder {
                radius: 0.4,
                height: 0.6,
                sides: 16,
            },
            Self::GlycolysisProcess => Shape::Sphere { radius: 0.8 },
        }
    }

    /// Resting color.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Atp => palette::CARBOXYL,
            Self::Adp => palette::OXYGEN,
            Self::Nadh => palette::BOND,
            Self::Glucose => palette::SUBSTRATE,
            Self::Pyruvate => palette::PYRUVATE,
            Self::GlycolysisProcess => palette::GLYCOLYSIS,
        }
    }

    /// Darker color shown while hovered.
    #[must_use]
    pub fn hover_color(self) -> Color {
        match self {
            Self::Atp => Color::hex(0x15803d),
            Self::Adp => Color::hex(0xb91c1c),
            Self::Nadh | Self::Pyruvate => Color::hex(0x1e40af),
            Self::Glucose => palette::ENZYME_CORE,
            Self::GlycolysisProcess => Color::hex(0x4c1d95),
        }
    }

    /// Hover caption text.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Atp => "ATP",
            Self::Adp => "ADP",
            Self::Nadh => "NADH",
            Self::Glucose => "Glucose",
            Self::Pyruvate => "Pyruvate",
            Self::GlycolysisProcess => "Glycolysis",
        }
    }

    /// Height of the hover caption above the token.
    #[must_use]
    pub fn caption_height(self) -> f32 {
        match self {
            Self::GlycolysisProcess => 1.2,
            _ => 0.8,
        }
    }

    /// Energy carriers bob up and down while animating.
    #[must_use]
    pub fn floats(self) -> bool {
        matches!(self, Self::Atp | Self::Nadh)
    }
}

/// A placed summary token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenInstance {
    /// Position relative to the owning stage.
    pub position: Vec3,
    /// What the token represents.
    pub kind: TokenKind,
    /// Whether the pointer is over it.
    pub hovered: bool,
}

impl TokenInstance {
    /// Un-hovered token at `position`.
    #[must_use]
    pub fn new(position: Vec3, kind: TokenKind) -> Self {
        Self {
            position,
            kind,
            hovered: false,
        }
    }

    /// Token group with a `body` mesh and a hidden `caption`, floating if
    /// the kind floats.
    #[must_use]
    pub fn fragment(&self, name: &str) -> Fragment {
        let kind = self.kind;
        let color = if self.hovered {
            kind.hover_color()
        } else {
            kind.color()
        };
        let mut caption = Fragment::label(
            "caption",
            Billboard::new(kind.caption(), CAPTION_FONT_SIZE, kind.color())
                .with_backdrop(CAPTION_BACKDROP),
        )
        .at(Vec3::new(0.0, kind.caption_height(), 0.0));
        if !self.hovered {
            caption = caption.hidden();
        }

        let mut group = Fragment::group(name)
            .at(self.position)
            .with_child(Fragment::mesh(
                "body",
                kind.shape(),
                Material::solid(color),
            ))
            .with_child(caption);
        if kind.floats() {
            group = group.driven_by(MotionDriver::Float {
                base_y: self.position.y,
            });
        }
        group
    }
}

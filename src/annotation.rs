//! Energy captions drawn under the reaction, picked from a step's
//! energy-change text.

use glam::Vec3;
use serde::Serialize;

use crate::scene::{palette, Billboard, Color, Fragment};

/// Font size shared by all energy captions.
pub const FONT_SIZE: f32 = 0.25;

/// One caption to draw, positioned relative to the energy anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyCaption {
    /// Caption text.
    pub text: &'static str,
    /// Text color.
    pub color: Color,
    /// Vertical offset from the anchor.
    pub offset_y: f32,
}

impl EnergyCaption {
    /// Billboard node for this caption.
    #[must_use]
    pub fn fragment(&self, name: &str) -> Fragment {
        Fragment::label(name, Billboard::new(self.text, FONT_SIZE, self.color))
            .at(Vec3::new(0.0, self.offset_y, 0.0))
    }
}

/// `(trigger, caption)` table. Every trigger is tested independently.
const CAPTIONS: [(&str, EnergyCaption); 3] = [
    (
        "ATP consumed",
        EnergyCaption {
            text: "ATP → ADP + Pi",
            color: palette::OXYGEN,
            offset_y: 0.0,
        },
    ),
    (
        "ATP produced",
        EnergyCaption {
            text: "ADP + Pi → ATP",
            color: palette::CARBOXYL,
            offset_y: 0.0,
        },
    ),
    (
        "NADH produced",
        EnergyCaption {
            text: "NAD+ → NADH + H+",
            color: palette::BOND,
            offset_y: -0.5,
        },
    ),
];

/// Captions for an energy-change text, in table order. Matching is a
/// case-sensitive substring test; a missing text yields nothing.
#[must_use]
pub fn select(energy_change: Option<&str>) -> Vec<EnergyCaption> {
    let Some(text) = energy_change else {
        return Vec::new();
    };
    CAPTIONS
        .iter()
        .filter(|(trigger, _)| text.contains(trigger))
        .map(|&(_, caption)| caption)
        .collect()
}

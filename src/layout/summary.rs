//! Fixed six-stage plan for the whole-pathway energy diagram.

use glam::Vec3;
use serde::Serialize;

use crate::animation::ArrowSpec;
use crate::molecule::TokenKind;
use crate::scene::{palette, Color};

/// Net caption position.
pub const NET_CAPTION_POSITION: Vec3 = Vec3::new(0.0, -3.0, 0.0);
/// Net caption font size.
pub const NET_CAPTION_FONT_SIZE: f32 = 0.4;
/// Stage caption font size (the central stage uses the net caption size).
pub const STAGE_CAPTION_FONT_SIZE: f32 = 0.3;

/// One cluster of tokens with a caption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStage {
    /// Node name.
    pub name: &'static str,
    /// Stage origin.
    pub anchor: Vec3,
    /// Token offsets from the anchor.
    pub tokens: &'static [(Vec3, TokenKind)],
    /// Caption text.
    pub caption: &'static str,
    /// Caption offset from the anchor.
    pub caption_offset: Vec3,
    /// Caption color.
    pub caption_color: Color,
    /// Caption font size.
    pub caption_font_size: f32,
    /// Bold caption.
    pub caption_bold: bool,
}

const fn stage(
    name: &'static str,
    anchor: Vec3,
    tokens: &'static [(Vec3, TokenKind)],
    caption: &'static str,
    caption_offset: Vec3,
    caption_color: Color,
) -> SummaryStage {
    SummaryStage {
        name,
        anchor,
        tokens,
        caption,
        caption_offset,
        caption_color,
        caption_font_size: STAGE_CAPTION_FONT_SIZE,
        caption_bold: false,
    }
}

const fn up(y: f32) -> Vec3 {
    Vec3::new(0.0, y, 0.0)
}

const GLUCOSE_TOKENS: [(Vec3, TokenKind); 1] = [(Vec3::ZERO, TokenKind::Glucose)];
const INVESTMENT_TOKENS: [(Vec3, TokenKind); 2] =
    [(Vec3::ZERO, TokenKind::Adp), (up(0.5), TokenKind::Adp)];
const PROCESS_TOKENS: [(Vec3, TokenKind); 1] =
    [(Vec3::ZERO, TokenKind::GlycolysisProcess)];
const ATP_TOKENS: [(Vec3, TokenKind); 4] = [
    (Vec3::ZERO, TokenKind::Atp),
    (up(0.5), TokenKind::Atp),
    (up(1.0), TokenKind::Atp),
    (up(1.5), TokenKind::Atp),
];
const NADH_TOKENS: [(Vec3, TokenKind); 2] =
    [(Vec3::ZERO, TokenKind::Nadh), (up(0.5), TokenKind::Nadh)];
const PYRUVATE_TOKENS: [(Vec3, TokenKind); 2] =
    [(Vec3::ZERO, TokenKind::Pyruvate), (up(0.8), TokenKind::Pyruvate)];

static STAGES: [SummaryStage; 6] = [
    stage(
        "glucose_input",
        Vec3::new(-5.0, 2.0, 0.0),
        &GLUCOSE_TOKENS,
        "Glucose",
        up(1.0),
        palette::SUBSTRATE,
    ),
    stage(
        "atp_investment",
        Vec3::new(-3.0, 2.0, 0.0),
        &INVESTMENT_TOKENS,
        "-2 ATP",
        up(1.2),
        palette::OXYGEN,
    ),
    SummaryStage {
        caption_font_size: NET_CAPTION_FONT_SIZE,
        caption_bold: true,
        ..stage(
            "glycolysis",
            Vec3::ZERO,
            &PROCESS_TOKENS,
            "Glycolysis",
            up(1.5),
            palette::GLYCOLYSIS,
        )
    },
    stage(
        "atp_output",
        Vec3::new(3.0, 1.0, 0.0),
        &ATP_TOKENS,
        "+4 ATP",
        up(2.2),
        palette::CARBOXYL,
    ),
    stage(
        "nadh_output",
        Vec3::new(3.0, -1.0, 0.0),
        &NADH_TOKENS,
        "+2 NADH",
        up(1.2),
        palette::BOND,
    ),
    stage(
        "pyruvate_output",
        Vec3::new(5.0, 0.0, 0.0),
        &PYRUVATE_TOKENS,
        "2 Pyruvate",
        up(1.6),
        palette::PYRUVATE,
    ),
];

static ARROWS: [ArrowSpec; 5] = [
    ArrowSpec::new(
        Vec3::new(-5.0, 2.0, 0.0),
        Vec3::new(-3.0, 2.0, 0.0),
        palette::SUBSTRATE,
    ),
    ArrowSpec::new(
        Vec3::new(-3.0, 1.5, 0.0),
        Vec3::new(-1.0, 0.5, 0.0),
        palette::OXYGEN,
    ),
    ArrowSpec::new(
        Vec3::new(1.0, 0.5, 0.0),
        Vec3::new(3.0, 1.0, 0.0),
        palette::CARBOXYL,
    ),
    ArrowSpec::new(
        Vec3::new(1.0, -0.5, 0.0),
        Vec3::new(3.0, -1.0, 0.0),
        palette::BOND,
    ),
    ArrowSpec::new(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(5.0, 0.0, 0.0),
        palette::PYRUVATE,
    ),
];

/// The summary plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryLayout {
    /// Token clusters.
    pub stages: &'static [SummaryStage],
    /// Flow arrows between stages.
    pub arrows: &'static [ArrowSpec],
    /// Net-result caption anchor.
    pub net_caption: Vec3,
}

impl SummaryLayout {
    /// The canonical plan.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            stages: &STAGES,
            arrows: &ARROWS,
            net_caption: NET_CAPTION_POSITION,
        }
    }

    /// Total tokens of `kind` across all stages.
    #[must_use]
    pub fn token_count(&self, kind: TokenKind) -> usize {
        self.stages
            .iter()
            .flat_map(|s| s.tokens.iter())
            .filter(|(_, k)| *k == kind)
            .count()
    }
}

impl Default for SummaryLayout {
    fn default() -> Self {
        Self::canonical()
    }
}

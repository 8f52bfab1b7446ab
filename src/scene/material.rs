use serde::{Serialize, Serializer};

/// Linear-ish sRGB color stored as three floats in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 3]);

impl Color {
    /// Build from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn hex(rgb: u32) -> Self {
        let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
        let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
        let b = (rgb & 0xff) as f32 / 255.0;
        Self([r, g, b])
    }

    /// The color as `[r, g, b, alpha]`.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.0;
        [r, g, b, alpha]
    }

    /// `#rrggbb` string form.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex_string())
    }
}

/// Named palette shared by the catalog and composers.
pub mod palette {
    use super::Color;

    /// Substrate body tint.
    pub const SUBSTRATE: Color = Color::hex(0x9333ea);
    /// Product body tint.
    pub const PRODUCT: Color = Color::hex(0x3b82f6);
    /// Oxygen atoms, ATP-consumed captions, ADP tokens.
    pub const OXYGEN: Color = Color::hex(0xef4444);
    /// Carboxyl groups, ATP-produced captions, ATP tokens.
    pub const CARBOXYL: Color = Color::hex(0x22c55e);
    /// Phosphate groups.
    pub const PHOSPHATE: Color = Color::hex(0xfb923c);
    /// Double bonds and NADH.
    pub const BOND: Color = Color::hex(0x3b82f6);
    /// Connector rod between substrate and product.
    pub const CONNECTOR: Color = Color::hex(0x64748b);
    /// Enzyme spikes and enzyme label.
    pub const ENZYME: Color = Color::hex(0x9333ea);
    /// Enzyme core.
    pub const ENZYME_CORE: Color = Color::hex(0x7e22ce);
    /// Enzyme halo ring.
    pub const HALO: Color = Color::hex(0xd8b4fe);
    /// Pyruvate tokens and the pyruvate arrow.
    pub const PYRUVATE: Color = Color::hex(0x2563eb);
    /// Central glycolysis node.
    pub const GLYCOLYSIS: Color = Color::hex(0x6d28d9);
    /// Carbon atoms in the detailed glucose model.
    pub const CARBON: Color = Color::hex(0x1e293b);
    /// Hydroxyl groups in the detailed glucose model.
    pub const HYDROXYL: Color = Color::hex(0x0ea5e9);
}

/// Self-illumination on top of the base color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Emissive {
    /// Emitted color.
    pub color: Color,
    /// Emission strength.
    pub intensity: f32,
}

/// Surface appearance of a mesh node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    /// Base color.
    pub color: Color,
    /// Optional glow.
    pub emissive: Option<Emissive>,
    /// Opacity; anything below 1 is drawn transparent.
    pub opacity: f32,
}

impl Material {
    /// Opaque, non-emissive material.
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            emissive: None,
            opacity: 1.0,
        }
    }

    /// Add a glow.
    #[must_use]
    pub const fn with_emissive(mut self, color: Color, intensity: f32) -> Self {
        self.emissive = Some(Emissive { color, intensity });
        self
    }

    /// Set opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Whether the host must blend this material.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

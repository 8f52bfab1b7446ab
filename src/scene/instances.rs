use glam::{Mat4, Vec3};
use serde::Serialize;

use super::material::{Color, Material};
use super::shape::Shape;

/// One visible mesh, flattened for instanced drawing.
///
/// Layout matches a WGSL struct of `mat4x4<f32>`, three `vec4<f32>` and a
/// `vec4<u32>` (kind + padding).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeInstance {
    /// World matrix, column-major.
    pub model: [[f32; 4]; 4],
    /// Base RGBA (alpha = material opacity).
    pub color: [f32; 4],
    /// Emissive RGB plus intensity in `w` (all zero when not emissive).
    pub emissive: [f32; 4],
    /// Shape parameters, see [`Shape::params`].
    pub params: [f32; 4],
    /// Shape tag, see [`Shape::kind_index`].
    pub kind: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [u32; 3],
}

impl ShapeInstance {
    pub(crate) fn new(world: Mat4, shape: &Shape, material: &Material) -> Self {
        let emissive = material
            .emissive
            .map_or([0.0; 4], |e| e.color.with_alpha(e.intensity));
        Self {
            model: world.to_cols_array_2d(),
            color: material.color.with_alpha(material.opacity),
            emissive,
            params: shape.params(),
            kind: shape.kind_index(),
            _pad: [0; 3],
        }
    }

    /// World-space origin of the instance.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_slice(&self.model[3][..3])
    }
}

/// One visible caption with its resolved world-space anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelInstance {
    /// Text to draw.
    pub text: String,
    /// World-space anchor (text is centred on it).
    pub position: Vec3,
    /// Glyph height in scene units.
    pub font_size: f32,
    /// Text color.
    pub color: Color,
    /// Bold weight.
    pub bold: bool,
    /// Optional RGBA plate behind the text.
    pub backdrop: Option<[f32; 4]>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::palette;

    #[test]
    fn instance_is_tightly_packed() {
        assert_eq!(size_of::<ShapeInstance>(), 64 + 48 + 16);
        let inst = ShapeInstance::new(
            Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)),
            &Shape::Sphere { radius: 0.1 },
            &Material::solid(palette::CARBOXYL).with_emissive(palette::CARBOXYL, 0.5),
        );
        let bytes: &[u8] = bytemuck::bytes_of(&inst);
        assert_eq!(bytes.len(), size_of::<ShapeInstance>());
        assert_eq!(inst.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(inst.emissive[3], 0.5);
    }
}

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

use super::material::{Color, Material};
use super::shape::Shape;
use crate::animation::MotionDriver;

/// Local transform relative to the parent node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Offset from the parent origin.
    pub translation: Vec3,
    /// Orientation.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    /// No offset, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Local-to-parent matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Camera-facing text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Billboard {
    /// Text to draw.
    pub text: String,
    /// Glyph height in scene units.
    pub font_size: f32,
    /// Text color.
    pub color: Color,
    /// Bold weight.
    pub bold: bool,
    /// Optional RGBA plate drawn behind the text.
    pub backdrop: Option<[f32; 4]>,
}

impl Billboard {
    /// Plain, centred text.
    #[must_use]
    pub fn new(text: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            font_size,
            color,
            bold: false,
            backdrop: None,
        }
    }

    /// Bold weight.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Translucent plate behind the text.
    #[must_use]
    pub fn with_backdrop(mut self, rgba: [f32; 4]) -> Self {
        self.backdrop = Some(rgba);
        self
    }
}

/// What a node draws, if anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeContent {
    /// Pure transform node.
    Group,
    /// A solid.
    Mesh {
        /// Geometry.
        shape: Shape,
        /// Appearance.
        material: Material,
    },
    /// A camera-facing caption.
    Label(Billboard),
}

/// Arena index of a node inside a [`SceneGraph`](super::SceneGraph).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub struct NodeId(pub u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node stored in the scene arena.
#[derive(Debug, Clone, Serialize)]
pub struct SceneNode {
    /// Slash-separated path name, e.g. `substrate/phosphate`.
    pub name: String,
    /// Transform relative to the parent.
    pub transform: Transform,
    /// Drawable content.
    pub content: NodeContent,
    /// Hidden nodes hide their whole subtree.
    pub visible: bool,
    /// Per-frame animation applied to this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<MotionDriver>,
    /// Parent node, `None` for roots.
    pub parent: Option<NodeId>,
    /// Children in insertion order.
    pub children: Vec<NodeId>,
}

/// Owned node tree, built by the catalog and composers and then moved into
/// a [`SceneGraph`](super::SceneGraph) with
/// [`insert`](super::SceneGraph::insert).
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Local name; the graph prefixes it with the parent path.
    pub name: String,
    /// Transform relative to the parent.
    pub transform: Transform,
    /// Drawable content.
    pub content: NodeContent,
    /// Initial visibility.
    pub visible: bool,
    /// Per-frame animation.
    pub motion: Option<MotionDriver>,
    /// Child fragments.
    pub children: Vec<Fragment>,
}

impl Fragment {
    fn with_content(name: impl Into<String>, content: NodeContent) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            content,
            visible: true,
            motion: None,
            children: Vec::new(),
        }
    }

    /// Empty transform node.
    #[must_use]
    pub fn group(name: impl Into<String>) -> Self {
        Self::with_content(name, NodeContent::Group)
    }

    /// Solid node.
    #[must_use]
    pub fn mesh(
        name: impl Into<String>,
        shape: Shape,
        material: Material,
    ) -> Self {
        Self::with_content(name, NodeContent::Mesh { shape, material })
    }

    /// Caption node.
    #[must_use]
    pub fn label(name: impl Into<String>, billboard: Billboard) -> Self {
        Self::with_content(name, NodeContent::Label(billboard))
    }

    /// Place at `translation`.
    #[must_use]
    pub fn at(mut self, translation: Vec3) -> Self {
        self.transform.translation = translation;
        self
    }

    /// Orient with XYZ Euler angles (radians), the order the arrow and
    /// bond geometry is authored in.
    #[must_use]
    pub fn rotated_xyz(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
        self
    }

    /// Uniform scale.
    #[must_use]
    pub fn scaled(mut self, factor: f32) -> Self {
        self.transform.scale = Vec3::splat(factor);
        self
    }

    /// Start hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Attach a per-frame animation.
    #[must_use]
    pub fn driven_by(mut self, motion: MotionDriver) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Append one child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    #[must_use]
    pub fn with_children(
        mut self,
        children: impl IntoIterator<Item = Self>,
    ) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth-first search for a descendant (or self) by local name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Self> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn xyz_euler_turns_y_axis_onto_x() {
        let frag = Fragment::group("rod").rotated_xyz(0.0, 0.0, FRAC_PI_2);
        let axis = frag.transform.rotation * Vec3::Y;
        assert!((axis.x.abs() - 1.0).abs() < 1e-5);
        assert!(axis.y.abs() < 1e-5);
    }

    #[test]
    fn builder_counts_and_finds() {
        let frag = Fragment::group("root")
            .with_child(Fragment::group("a").with_child(Fragment::group("b")))
            .with_child(Fragment::group("c"));
        assert_eq!(frag.node_count(), 4);
        assert!(frag.find("b").is_some());
        assert!(frag.find("z").is_none());
    }
}

//! Renderable scene graph handed to the hosting viewport.
//!
//! Nodes live in a flat arena ([`SceneGraph`]) addressed by [`NodeId`].
//! Parents are always inserted before their children, so world transforms
//! resolve in a single forward pass. Geometry is described with a handful of
//! primitive [`Shape`]s; the host tessellates and draws them, either by
//! walking the graph or from the flat [`ShapeInstance`] list.

mod instances;
mod material;
mod node;
mod shape;

use glam::Mat4;
pub use instances::{LabelInstance, ShapeInstance};
pub use material::{palette, Color, Emissive, Material};
pub use node::{Billboard, Fragment, NodeContent, NodeId, SceneNode, Transform};
use rustc_hash::FxHashMap;
use serde::Serialize;
pub use shape::Shape;

use crate::error::GlycovizError;

/// Arena of scene nodes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
    #[serde(skip)]
    by_name: FxHashMap<String, NodeId>,
    /// Monotonically increasing generation; bumped on any mutation.
    #[serde(skip)]
    generation: u64,
    /// Generation that was last consumed by the renderer.
    #[serde(skip)]
    rendered_generation: u64,
}

impl SceneGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutation helpers --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether the graph changed since the last
    /// [`mark_rendered`](Self::mark_rendered).
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark current generation as rendered (call after the host redraws).
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// Move a fragment tree into the arena under `parent` (or as a new
    /// root). Node names become slash-joined paths; the first node to claim
    /// a path owns it for [`find`](Self::find). Returns the id of the
    /// fragment's root node.
    pub fn insert(
        &mut self,
        parent: Option<NodeId>,
        fragment: Fragment,
    ) -> NodeId {
        let Fragment {
            name,
            transform,
            content,
            visible,
            motion,
            children,
        } = fragment;

        let path = match parent.and_then(|p| self.node(p)) {
            Some(p) => format!("{}/{name}", p.name),
            None => name,
        };

        let id = NodeId(self.nodes.len() as u32);
        let _ = self.by_name.entry(path.clone()).or_insert(id);
        self.nodes.push(SceneNode {
            name: path,
            transform,
            content,
            visible,
            motion,
            parent,
            children: Vec::with_capacity(children.len()),
        });

        match parent {
            Some(p) => {
                if let Some(node) = self.nodes.get_mut(p.index()) {
                    node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }

        for child in children {
            let _ = self.insert(Some(id), child);
        }

        self.invalidate();
        id
    }

    /// Read access to a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    /// Write access (invalidates the rendered generation).
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.invalidate();
        self.nodes.get_mut(id.index())
    }

    /// Look a node up by its full path name.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.by_name.get(path).copied()
    }

    /// All nodes in insertion order (parents before children).
    #[must_use]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Mutable iteration over every node paired with its id.
    pub fn nodes_mut(
        &mut self,
    ) -> impl Iterator<Item = (NodeId, &mut SceneNode)> {
        self.invalidate();
        self.nodes
            .iter_mut()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Top-level nodes.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Toggle a node's visibility.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(n) = self.nodes.get_mut(id.index()) {
            if n.visible != visible {
                n.visible = visible;
                self.invalidate();
            }
        }
    }

    /// World matrix of every node, indexed like [`nodes`](Self::nodes).
    #[must_use]
    pub fn world_matrices(&self) -> Vec<Mat4> {
        let mut world: Vec<Mat4> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let local = node.transform.matrix();
            let m = node
                .parent
                .and_then(|p| world.get(p.index()))
                .map_or(local, |parent| *parent * local);
            world.push(m);
        }
        world
    }

    /// Effective visibility of every node (a hidden ancestor hides the
    /// subtree), indexed like [`nodes`](Self::nodes).
    #[must_use]
    pub fn effective_visibility(&self) -> Vec<bool> {
        let mut out: Vec<bool> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let parent_visible = node
                .parent
                .and_then(|p| out.get(p.index()).copied())
                .unwrap_or(true);
            out.push(parent_visible && node.visible);
        }
        out
    }

    /// Flatten visible meshes into GPU-ready instances.
    #[must_use]
    pub fn shape_instances(&self) -> Vec<ShapeInstance> {
        let world = self.world_matrices();
        let visible = self.effective_visibility();
        self.nodes
            .iter()
            .zip(world.iter().zip(&visible))
            .filter_map(|(node, (m, &vis))| match &node.content {
                NodeContent::Mesh { shape, material } if vis => {
                    Some(ShapeInstance::new(*m, shape, material))
                }
                _ => None,
            })
            .collect()
    }

    /// Visible captions with their world-space anchors.
    #[must_use]
    pub fn label_instances(&self) -> Vec<LabelInstance> {
        let world = self.world_matrices();
        let visible = self.effective_visibility();
        self.nodes
            .iter()
            .zip(world.iter().zip(&visible))
            .filter_map(|(node, (m, &vis))| match &node.content {
                NodeContent::Label(b) if vis => Some(LabelInstance {
                    text: b.text.clone(),
                    position: m.w_axis.truncate(),
                    font_size: b.font_size,
                    color: b.color,
                    bold: b.bold,
                    backdrop: b.backdrop,
                }),
                _ => None,
            })
            .collect()
    }

    /// Serialize the graph as pretty JSON.
    ///
    /// # Errors
    ///
    /// [`GlycovizError::Export`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GlycovizError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GlycovizError::Export(e.to_string()))
    }

    /// Serialize the graph as TOML.
    ///
    /// # Errors
    ///
    /// [`GlycovizError::Export`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, GlycovizError> {
        toml::to_string_pretty(self)
            .map_err(|e| GlycovizError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn sample() -> (SceneGraph, NodeId) {
        let mut graph = SceneGraph::new();
        let frag = Fragment::group("molecule")
            .at(Vec3::new(2.0, 0.0, 0.0))
            .with_child(
                Fragment::mesh(
                    "body",
                    Shape::Sphere { radius: 0.5 },
                    Material::solid(palette::PRODUCT),
                )
                .at(Vec3::new(0.0, 1.0, 0.0)),
            )
            .with_child(Fragment::label(
                "caption",
                Billboard::new("Pyruvate", 0.3, palette::PRODUCT),
            ));
        let root = graph.insert(None, frag);
        (graph, root)
    }

    #[test]
    fn insert_builds_paths_and_links() {
        let (graph, root) = sample();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.roots(), &[root]);
        let body = graph.find("molecule/body").unwrap();
        assert_eq!(graph.node(body).unwrap().parent, Some(root));
        assert_eq!(graph.node(root).unwrap().children.len(), 2);
    }

    #[test]
    fn world_matrices_compose_parent_offsets() {
        let (graph, _) = sample();
        let body = graph.find("molecule/body").unwrap();
        let world = graph.world_matrices();
        let pos = world[body.index()].w_axis.truncate();
        assert!((pos - Vec3::new(2.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn hidden_parent_hides_subtree() {
        let (mut graph, root) = sample();
        assert_eq!(graph.shape_instances().len(), 1);
        assert_eq!(graph.label_instances().len(), 1);
        graph.set_visible(root, false);
        assert!(graph.shape_instances().is_empty());
        assert!(graph.label_instances().is_empty());
    }

    #[test]
    fn dirty_tracking() {
        let (mut graph, root) = sample();
        assert!(graph.is_dirty());
        graph.mark_rendered();
        assert!(!graph.is_dirty());
        graph.set_visible(root, true);
        assert!(!graph.is_dirty(), "no-op visibility change stays clean");
        graph.set_visible(root, false);
        assert!(graph.is_dirty());
    }

    #[test]
    fn exports_json() {
        let (graph, _) = sample();
        let json = graph.to_json().unwrap();
        assert!(json.contains("molecule/body"));
        assert!(json.contains("\"#3b82f6\""));
    }
}

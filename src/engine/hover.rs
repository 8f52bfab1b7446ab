use glam::Vec2;

use super::Visualization;
use crate::composer::TokenHandle;
use crate::scene::NodeContent;

impl Visualization {
    /// Pick the token under a cursor position and make it the hovered one.
    /// Returns the token index, or `None` when the cursor is over empty
    /// space (which also clears any previous hover).
    pub fn hover_at(&mut self, pixel: Vec2) -> Option<usize> {
        let hit = self.pick_token(pixel);
        self.set_hovered(hit);
        hit
    }

    /// Drop the hover highlight.
    pub fn clear_hover(&mut self) {
        self.set_hovered(None);
    }

    /// Index of the hovered token, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Hoverable tokens in composition order.
    #[must_use]
    pub fn tokens(&self) -> &[TokenHandle] {
        &self.tokens
    }

    /// Move the hover highlight. The previous token gets its base color
    /// back and hides its caption; the new one darkens and shows it.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.tokens.len());
        if index == self.hovered {
            return;
        }
        let prev = self.hovered.and_then(|i| self.tokens.get(i).copied());
        let next = index.and_then(|i| self.tokens.get(i).copied());
        if let Some(prev) = prev {
            self.paint_token(&prev, false);
        }
        if let Some(next) = next {
            self.paint_token(&next, true);
            log::debug!("hovering {:?}", next.kind);
        }
        self.hovered = index;
    }

    fn paint_token(&mut self, token: &TokenHandle, hovered: bool) {
        let color = if hovered {
            token.kind.hover_color()
        } else {
            token.kind.color()
        };
        if let Some(node) = self.graph.node_mut(token.body) {
            if let NodeContent::Mesh { material, .. } = &mut node.content {
                material.color = color;
            }
        }
        self.graph.set_visible(token.caption, hovered);
    }

    /// Nearest token whose bounding sphere the cursor ray hits.
    fn pick_token(&self, pixel: Vec2) -> Option<usize> {
        if self.tokens.is_empty() {
            return None;
        }
        let ray = self.controller.camera().screen_ray(pixel, self.viewport);
        let world = self.graph.world_matrices();
        let visible = self.graph.effective_visibility();

        let mut best: Option<(usize, f32)> = None;
        for (i, token) in self.tokens.iter().enumerate() {
            let idx = token.body.0 as usize;
            if !visible.get(idx).copied().unwrap_or(false) {
                continue;
            }
            let (Some(node), Some(matrix)) =
                (self.graph.node(token.body), world.get(idx))
            else {
                continue;
            };
            let NodeContent::Mesh { shape, .. } = &node.content else {
                continue;
            };
            let (scale, _, center) = matrix.to_scale_rotation_translation();
            let radius = shape.bounding_radius() * scale.max_element();
            if let Some(t) = ray.intersect_sphere(center, radius) {
                match best {
                    Some((_, best_t)) if best_t <= t => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best.map(|(i, _)| i)
    }
}

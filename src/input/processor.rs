//! Converts raw platform events into visualization commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! button and modifier state) and the key-binding map. It is the only thing
//! that sits between raw window events and
//! [`Visualization::execute`](crate::engine::Visualization::execute).

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::engine::VisualizationCommand;

/// Maps physical key strings to [`VisualizationCommand`] variants.
///
/// Key strings use the `KeyCode` debug format common to windowing crates:
/// `"Space"`, `"KeyR"`, `"Escape"`, etc.
///
/// Only *discrete* commands make sense as key bindings; parameterized
/// commands like `RotateCamera` come from mouse gestures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the key-bindable subset of
/// [`VisualizationCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Play / pause all motion.
    ToggleAnimation,
    /// Return the camera to its home pose.
    ResetView,
    /// Drop any hover highlight.
    ClearHover,
}

impl KeyCommandTag {
    fn to_command(self) -> VisualizationCommand {
        match self {
            Self::ToggleAnimation => VisualizationCommand::ToggleAnimation,
            Self::ResetView => VisualizationCommand::ResetView,
            Self::ClearHover => VisualizationCommand::ClearHover,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Space".into(), KeyCommandTag::ToggleAnimation),
            ("KeyR".into(), KeyCommandTag::ResetView),
            ("Escape".into(), KeyCommandTag::ClearHover),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<VisualizationCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`VisualizationCommand`]s.
///
/// Dragging with the primary button orbits (pans with shift held), the
/// wheel zooms, and plain cursor motion requests a hover pick.
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    mouse_pos: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeyBindings::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            mouse_pos: None,
            mouse_pressed: false,
            shift_pressed: false,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels, if inside the viewport.
    #[must_use]
    pub fn mouse_pos(&self) -> Option<Vec2> {
        self.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<VisualizationCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<VisualizationCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y))
            }
            InputEvent::CursorLeft => {
                self.mouse_pos = None;
                self.mouse_pressed = false;
                Some(VisualizationCommand::ClearHover)
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => {
                Some(VisualizationCommand::Zoom { delta })
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Cursor moved: drag the camera while pressed, otherwise hover.
    fn handle_cursor_moved(
        &mut self,
        pos: Vec2,
    ) -> Option<VisualizationCommand> {
        let last = self.mouse_pos.replace(pos);

        if self.mouse_pressed {
            let delta = pos - last?;
            if delta == Vec2::ZERO {
                return None;
            }
            if self.shift_pressed {
                return Some(VisualizationCommand::PanCamera { delta });
            }
            return Some(VisualizationCommand::RotateCamera { delta });
        }

        Some(VisualizationCommand::HoverAt { position: pos })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(p: &mut InputProcessor, pressed: bool) {
        let _ = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }

    #[test]
    fn default_bindings() {
        let p = InputProcessor::new();
        assert_eq!(
            p.handle_key_press("Space"),
            Some(VisualizationCommand::ToggleAnimation)
        );
        assert_eq!(
            p.handle_key_press("KeyR"),
            Some(VisualizationCommand::ResetView)
        );
        assert_eq!(p.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn rebinding_replaces_key() {
        let mut bindings = KeyBindings::default();
        bindings.bind("KeyP", KeyCommandTag::ToggleAnimation);
        assert_eq!(
            bindings.lookup("KeyP"),
            Some(VisualizationCommand::ToggleAnimation)
        );
    }

    #[test]
    fn free_motion_hovers() {
        let mut p = InputProcessor::new();
        let cmd = p.handle_event(InputEvent::CursorMoved { x: 10.0, y: 20.0 });
        assert_eq!(
            cmd,
            Some(VisualizationCommand::HoverAt {
                position: Vec2::new(10.0, 20.0)
            })
        );
    }

    #[test]
    fn drag_rotates_and_shift_drag_pans() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        press(&mut p, true);
        let cmd = p.handle_event(InputEvent::CursorMoved { x: 5.0, y: 0.0 });
        assert_eq!(
            cmd,
            Some(VisualizationCommand::RotateCamera {
                delta: Vec2::new(5.0, 0.0)
            })
        );

        let _ = p.handle_event(InputEvent::ModifiersChanged { shift: true });
        let cmd = p.handle_event(InputEvent::CursorMoved { x: 5.0, y: 3.0 });
        assert_eq!(
            cmd,
            Some(VisualizationCommand::PanCamera {
                delta: Vec2::new(0.0, 3.0)
            })
        );

        press(&mut p, false);
        assert!(!p.mouse_pressed());
    }

    #[test]
    fn scroll_zooms_and_leaving_clears_hover() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::Scroll { delta: 1.5 }),
            Some(VisualizationCommand::Zoom { delta: 1.5 })
        );
        assert_eq!(
            p.handle_event(InputEvent::CursorLeft),
            Some(VisualizationCommand::ClearHover)
        );
        assert!(p.mouse_pos().is_none());
    }
}

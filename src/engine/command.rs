//! The visualization's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture, an overlay button or a programmatic call, is represented as a
//! `VisualizationCommand`. Consumers construct commands and pass them to
//! [`Visualization::execute`](super::Visualization::execute).

use glam::Vec2;
use serde::Serialize;

/// Hint shown in the corner of every visualization.
pub const NAVIGATION_HINT: &str = "Rotate, zoom, and pan to explore";

/// A discrete or parameterized operation a visualization can perform.
///
/// ```ignore
/// visualization.execute(&VisualizationCommand::ToggleAnimation);
/// visualization.execute(&VisualizationCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum VisualizationCommand {
    // ── Playback ────────────────────────────────────────────────────
    /// Play or pause all continuous motion.
    ToggleAnimation,

    // ── Camera ──────────────────────────────────────────────────────
    /// Return the camera to the visualization's home pose.
    ResetView,

    /// Orbit the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    // ── Hover ───────────────────────────────────────────────────────
    /// Pick whatever token lies under a screen position.
    HoverAt {
        /// Cursor position in physical pixels.
        position: Vec2,
    },

    /// Drop the hover highlight.
    ClearHover,
}

/// Which overlay button an affordance describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// Play / pause toggle.
    AnimateToggle,
    /// Camera reset.
    ResetView,
}

/// Icon the host should draw on an overlay button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    /// Shown while animating.
    Pause,
    /// Shown while paused.
    Play,
    /// Counter-clockwise arrow for the reset button.
    RotateCcw,
}

/// One overlay button: what it looks like and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlAffordance {
    /// Which button.
    pub kind: ControlKind,
    /// Current icon.
    pub icon: Icon,
    /// Command to execute when pressed.
    pub command: VisualizationCommand,
}

impl ControlAffordance {
    /// The animate toggle for the given run state.
    #[must_use]
    pub fn animate_toggle(animating: bool) -> Self {
        Self {
            kind: ControlKind::AnimateToggle,
            icon: if animating { Icon::Pause } else { Icon::Play },
            command: VisualizationCommand::ToggleAnimation,
        }
    }

    /// The reset-view button.
    #[must_use]
    pub fn reset_view() -> Self {
        Self {
            kind: ControlKind::ResetView,
            icon: Icon::RotateCcw,
            command: VisualizationCommand::ResetView,
        }
    }
}

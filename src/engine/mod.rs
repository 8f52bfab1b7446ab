//! Mounted visualizations: a composed scene plus its clock, particle timer,
//! run state, camera and hover state.

pub mod command;
mod controller;
mod hover;
mod options;

use glam::Vec2;
use serde::Serialize;
use web_time::Instant;

pub use self::command::{
    ControlAffordance, ControlKind, Icon, VisualizationCommand,
    NAVIGATION_HINT,
};
pub use self::controller::InteractionController;
use crate::animation::{
    drive, AnimationClock, FrameTime, MotionFrame, ParticleTimer,
};
use crate::camera::controller::CameraController;
use crate::camera::core::CameraUniform;
use crate::composer::{self, TokenHandle};
use crate::error::GlycovizError;
use crate::layout::SummaryLayout;
use crate::options::{CameraOptions, Options};
use crate::pathway::{self, ReactionStep};
use crate::scene::{LabelInstance, SceneGraph, ShapeInstance};

/// Which diagram a [`Visualization`] shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "step", rename_all = "snake_case")]
pub enum VisualizationKind {
    /// One reaction, by step id.
    Step(u32),
    /// The whole-pathway energy diagram.
    Summary,
    /// The standalone glucose model.
    GlucoseViewer,
}

impl VisualizationKind {
    /// Orbit camera at this diagram's home pose. Step and summary views
    /// keep the configured distance range; the glucose viewer zooms
    /// freely.
    fn camera(self, opts: &CameraOptions) -> CameraController {
        match self {
            Self::Step(_) => CameraController::new(opts, opts.step_distance),
            Self::Summary => CameraController::new(opts, opts.summary_distance),
            Self::GlucoseViewer => {
                CameraController::new(opts, opts.step_distance)
                    .without_distance_limits()
            }
        }
    }
}

/// One mounted, independently animated visualization.
///
/// # Frame loop
///
/// Call [`frame`](Self::frame) with the frame delta (or
/// [`tick`](Self::tick) with a timestamp) once per display refresh, then
/// draw [`shape_instances`](Self::shape_instances) and
/// [`label_instances`](Self::label_instances) with
/// [`camera_uniform`](Self::camera_uniform). Time only advances when frames
/// are delivered; dropping the visualization stops everything.
///
/// # Interaction
///
/// Every interaction goes through [`execute`](Self::execute) with a
/// [`VisualizationCommand`], typically produced by an
/// [`InputProcessor`](crate::input::InputProcessor) or one of the
/// [`controls`](Self::controls).
#[derive(Debug, Clone)]
pub struct Visualization {
    kind: VisualizationKind,
    graph: SceneGraph,
    tokens: Vec<TokenHandle>,
    hovered: Option<usize>,
    clock: AnimationClock,
    controller: InteractionController,
    options: Options,
    active_preset: Option<String>,
    viewport: Vec2,
}

impl Visualization {
    fn mount(
        kind: VisualizationKind,
        composition: composer::Composition,
        options: Options,
    ) -> Self {
        let animating = options.animation.start_animating;
        let controller = InteractionController::new(
            animating,
            ParticleTimer::from_options(&options.animation, animating),
            kind.camera(&options.camera),
        );
        log::info!(
            "mounted {kind:?}: {} nodes, {} tokens",
            composition.graph.len(),
            composition.tokens.len()
        );
        Self {
            kind,
            graph: composition.graph,
            tokens: composition.tokens,
            hovered: None,
            clock: AnimationClock::new(),
            controller,
            options,
            active_preset: None,
            viewport: Vec2::new(1280.0, 720.0),
        }
    }

    /// Visualization of one reaction step.
    #[must_use]
    pub fn for_step(step: &ReactionStep, options: Options) -> Self {
        Self::mount(
            VisualizationKind::Step(step.id),
            composer::compose_step(step),
            options,
        )
    }

    /// Visualization of a step by id.
    ///
    /// # Errors
    ///
    /// Returns [`GlycovizError::UnknownStep`] outside `1..=10`.
    pub fn for_step_id(id: u32, options: Options) -> Result<Self, GlycovizError> {
        let step = pathway::step(id).ok_or(GlycovizError::UnknownStep(id))?;
        Ok(Self::for_step(step, options))
    }

    /// The whole-pathway energy diagram.
    #[must_use]
    pub fn summary(options: Options) -> Self {
        Self::mount(
            VisualizationKind::Summary,
            composer::compose_summary(&SummaryLayout::canonical()),
            options,
        )
    }

    /// The standalone glucose model.
    #[must_use]
    pub fn glucose_viewer(options: Options) -> Self {
        Self::mount(
            VisualizationKind::GlucoseViewer,
            composer::compose_glucose_viewer(),
            options,
        )
    }

    // -- Frame loop --

    /// Advance by an explicit frame delta in seconds and update every
    /// animated node.
    pub fn frame(&mut self, delta: f32) -> FrameTime {
        let time = self.clock.advance(delta);
        self.apply_frame(time);
        time
    }

    /// Advance from a frame timestamp and update every animated node.
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let time = self.clock.tick(now);
        self.apply_frame(time);
        time
    }

    fn apply_frame(&mut self, time: FrameTime) {
        let _ = self.controller.particles_mut().advance(time.delta);
        let frame = MotionFrame {
            elapsed: time.elapsed,
            delta: time.delta,
            animating: self.controller.is_animating(),
            particle_progress: self.controller.particles().progress(),
        };
        let driven = drive(&mut self.graph, &frame, &self.options.animation);
        log::trace!(
            "frame {} at t={:.3}: {driven} nodes driven",
            self.clock.frame_count(),
            time.elapsed
        );
    }

    // -- Commands --

    /// Perform one interactive operation.
    pub fn execute(&mut self, command: &VisualizationCommand) {
        match *command {
            VisualizationCommand::ToggleAnimation => {
                let _ = self.toggle_animation();
            }
            VisualizationCommand::ResetView => self.reset_view(),
            VisualizationCommand::RotateCamera { delta } => {
                self.controller.camera_mut().rotate(delta);
            }
            VisualizationCommand::PanCamera { delta } => {
                self.controller.camera_mut().pan(delta);
            }
            VisualizationCommand::Zoom { delta } => {
                self.controller.camera_mut().zoom(delta);
            }
            VisualizationCommand::HoverAt { position } => {
                let _ = self.hover_at(position);
            }
            VisualizationCommand::ClearHover => self.set_hovered(None),
        }
    }

    /// Flip play/pause. Returns the new state.
    pub fn toggle_animation(&mut self) -> bool {
        self.controller.toggle_animating()
    }

    /// Return the camera to the home pose.
    pub fn reset_view(&mut self) {
        self.controller.reset_view();
    }

    /// Update the viewport size used for camera aspect and hover picks.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width as f32, height as f32);
        self.controller.camera_mut().resize(width, height);
    }

    /// The overlay buttons in display order: animate toggle, reset view.
    #[must_use]
    pub fn controls(&self) -> [ControlAffordance; 2] {
        [
            ControlAffordance::animate_toggle(self.is_animating()),
            ControlAffordance::reset_view(),
        ]
    }

    // -- Accessors --

    /// Which diagram this is.
    #[must_use]
    pub fn kind(&self) -> VisualizationKind {
        self.kind
    }

    /// The scene graph.
    #[must_use]
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Mutable scene graph (e.g. to [`mark_rendered`](SceneGraph::mark_rendered)).
    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    /// Whether motion is playing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Current flow-particle progress.
    #[must_use]
    pub fn particle_progress(&self) -> f32 {
        self.controller.particles().progress()
    }

    /// Seconds of animation time so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Play/pause and camera state.
    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Orbit camera.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        self.controller.camera()
    }

    /// Uniform block for the current camera.
    #[must_use]
    pub fn camera_uniform(&self) -> CameraUniform {
        self.controller.camera().uniform
    }

    /// Visible meshes, flattened for upload.
    #[must_use]
    pub fn shape_instances(&self) -> Vec<ShapeInstance> {
        self.graph.shape_instances()
    }

    /// Visible captions with world anchors.
    #[must_use]
    pub fn label_instances(&self) -> Vec<LabelInstance> {
        self.graph.label_instances()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::NodeContent;

    const DT: f32 = 1.0 / 60.0;

    fn node_y(vis: &Visualization, path: &str) -> f32 {
        let id = vis.graph().find(path).unwrap();
        vis.graph().node(id).unwrap().transform.translation.y
    }

    fn visible(vis: &Visualization, path: &str) -> bool {
        let id = vis.graph().find(path).unwrap();
        vis.graph().effective_visibility()[id.0 as usize]
    }

    #[test]
    fn unknown_step_is_an_error() {
        assert!(matches!(
            Visualization::for_step_id(0, Options::default()),
            Err(GlycovizError::UnknownStep(0))
        ));
        assert!(Visualization::for_step_id(10, Options::default()).is_ok());
    }

    #[test]
    fn enzyme_shows_only_while_animating() {
        let mut vis = Visualization::for_step_id(1, Options::default()).unwrap();
        let _ = vis.frame(DT);
        assert!(visible(&vis, "step_1/enzyme"));
        let _ = vis.toggle_animation();
        let _ = vis.frame(DT);
        assert!(!visible(&vis, "step_1/enzyme"));
    }

    #[test]
    fn toggle_resets_particles_and_resumes_from_current_time() {
        let mut vis = Visualization::summary(Options::default());
        for _ in 0..30 {
            let _ = vis.frame(0.05);
        }
        assert!(vis.particle_progress() > 0.0);
        let t = vis.elapsed();

        vis.execute(&VisualizationCommand::ToggleAnimation);
        assert_eq!(vis.particle_progress(), 0.0);
        let _ = vis.frame(0.05);
        assert_eq!(vis.particle_progress(), 0.0);

        vis.execute(&VisualizationCommand::ToggleAnimation);
        let time = vis.frame(0.05);
        assert!((time.elapsed - (t + 0.1)).abs() < 1e-4);
        assert!(vis.particle_progress() > 0.0);
    }

    #[test]
    fn atp_tokens_float_and_freeze_when_paused() {
        let mut vis = Visualization::summary(Options::default());
        let path = "summary/atp_output/token_1";
        let _ = vis.frame(0.2);
        let y = node_y(&vis, path);
        let expected = 0.5 + 0.1 * (2.0 * vis.elapsed()).sin();
        assert!((y - expected).abs() < 1e-5);

        let _ = vis.toggle_animation();
        let _ = vis.frame(0.2);
        assert_eq!(node_y(&vis, path), y);
    }

    #[test]
    fn particles_hidden_while_paused() {
        let mut options = Options::default();
        options.animation.start_animating = false;
        let mut vis = Visualization::summary(options);
        let _ = vis.frame(DT);
        assert!(!visible(&vis, "summary/arrow_0/particle"));
        assert!(visible(&vis, "summary/arrow_0/segment"));
        assert_eq!(vis.controls()[0].icon, Icon::Play);
    }

    #[test]
    fn reset_view_command_restores_camera() {
        let mut vis = Visualization::glucose_viewer(Options::default());
        vis.execute(&VisualizationCommand::RotateCamera {
            delta: Vec2::new(50.0, 10.0),
        });
        vis.execute(&VisualizationCommand::Zoom { delta: 2.0 });
        assert!(!vis.camera().is_home());
        vis.execute(&VisualizationCommand::ResetView);
        assert!(vis.camera().is_home());
    }

    #[test]
    fn summary_camera_sits_further_back() {
        let summary = Visualization::summary(Options::default());
        let step = Visualization::for_step_id(3, Options::default()).unwrap();
        assert_eq!(summary.camera().distance(), 12.0);
        assert_eq!(step.camera().distance(), 10.0);
    }

    #[test]
    fn only_the_glucose_viewer_zooms_past_the_range() {
        let mut viewer = Visualization::glucose_viewer(Options::default());
        let mut step = Visualization::for_step_id(5, Options::default()).unwrap();
        for _ in 0..20 {
            viewer.execute(&VisualizationCommand::Zoom { delta: -5.0 });
            step.execute(&VisualizationCommand::Zoom { delta: -5.0 });
        }
        assert!(viewer.camera().distance() > 20.0);
        assert_eq!(step.camera().distance(), 20.0);
        viewer.execute(&VisualizationCommand::ResetView);
        assert_eq!(viewer.camera().distance(), 10.0);
    }

    #[test]
    fn halo_pulses_with_time() {
        let mut vis = Visualization::for_step_id(2, Options::default()).unwrap();
        let _ = vis.frame(0.25);
        let id = vis.graph().find("step_2/enzyme/halo").unwrap();
        let node = vis.graph().node(id).unwrap();
        let t = vis.elapsed();
        assert!((node.transform.scale.x - (1.0 + 0.1 * (1.5 * t).sin())).abs() < 1e-5);
        let NodeContent::Mesh { material, .. } = node.content else {
            unreachable!("halo is a mesh");
        };
        assert!((material.opacity - (0.4 + 0.2 * (2.0 * t).sin())).abs() < 1e-5);
    }
}

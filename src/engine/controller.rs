use crate::animation::ParticleTimer;
use crate::camera::controller::CameraController;

/// Play/pause state and view reset for one visualization.
///
/// Owns the run flag, the flow-particle timer it gates and the orbit
/// camera it resets. Both operations are synchronous and local.
#[derive(Debug, Clone)]
pub struct InteractionController {
    animating: bool,
    particles: ParticleTimer,
    camera: CameraController,
}

impl InteractionController {
    /// Controller starting in the given run state.
    #[must_use]
    pub fn new(
        animating: bool,
        mut particles: ParticleTimer,
        camera: CameraController,
    ) -> Self {
        particles.set_running(animating);
        Self {
            animating,
            particles,
            camera,
        }
    }

    /// Flip the run state. Pausing resets particle progress; resuming
    /// continues motion from the current clock time. Returns the new
    /// state.
    pub fn toggle_animating(&mut self) -> bool {
        self.animating = !self.animating;
        self.particles.set_running(self.animating);
        log::info!(
            "animation {}",
            if self.animating { "resumed" } else { "paused" }
        );
        self.animating
    }

    /// Return the camera to its home pose.
    pub fn reset_view(&mut self) {
        self.camera.reset();
        log::debug!("view reset");
    }

    /// Whether motion is playing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// The flow-particle timer.
    #[must_use]
    pub fn particles(&self) -> &ParticleTimer {
        &self.particles
    }

    /// Mutable flow-particle timer, for feeding frame deltas.
    pub fn particles_mut(&mut self) -> &mut ParticleTimer {
        &mut self.particles
    }

    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Mutable orbit camera.
    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::options::{AnimationOptions, CameraOptions};

    fn controller() -> InteractionController {
        InteractionController::new(
            true,
            ParticleTimer::from_options(&AnimationOptions::default(), true),
            CameraController::new(&CameraOptions::default(), 10.0),
        )
    }

    #[test]
    fn toggle_pauses_and_resets_particles() {
        let mut c = controller();
        let _ = c.particles_mut().advance(0.5);
        assert!(c.particles().progress() > 0.0);

        assert!(!c.toggle_animating());
        assert_eq!(c.particles().progress(), 0.0);
        assert!(!c.particles().is_running());

        assert!(c.toggle_animating());
        assert!(c.particles().is_running());
    }

    #[test]
    fn reset_view_returns_home() {
        let mut c = controller();
        c.camera_mut().rotate(Vec2::new(30.0, 30.0));
        c.camera_mut().zoom(2.0);
        c.reset_view();
        assert!(c.camera().is_home());
    }

    #[test]
    fn paused_start_stops_particles() {
        let c = InteractionController::new(
            false,
            ParticleTimer::from_options(&AnimationOptions::default(), true),
            CameraController::new(&CameraOptions::default(), 10.0),
        );
        assert!(!c.is_animating());
        assert!(!c.particles().is_running());
    }
}

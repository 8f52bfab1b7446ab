//! Options methods for Visualization

use std::path::Path;

use super::{InteractionController, Visualization};
use crate::animation::ParticleTimer;
use crate::options::Options;

impl Visualization {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the last preset loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Replace options and apply them to the camera and particle timer.
    /// The run state is kept; the camera returns to the new home pose.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    fn apply_options(&mut self) {
        let animating = self.controller.is_animating();
        let mut camera = self.kind.camera(&self.options.camera);
        camera.resize(self.viewport.x as u32, self.viewport.y as u32);
        self.controller = InteractionController::new(
            animating,
            ParticleTimer::from_options(&self.options.animation, animating),
            camera,
        );
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save preset '{name}': {e}");
                false
            }
        }
    }
}

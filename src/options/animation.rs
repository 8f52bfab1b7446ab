use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Rates and amplitudes of the continuous scene motion.
pub struct AnimationOptions {
    /// Whether a freshly mounted visualization starts in the playing state.
    #[schemars(title = "Autoplay")]
    pub start_animating: bool,
    /// Vertical bob amplitude of energy tokens.
    #[schemars(title = "Float Amplitude", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub float_amplitude: f32,
    /// Angular frequency of the token bob (rad/s).
    #[schemars(skip)]
    pub float_frequency: f32,
    /// Enzyme indicator spin rate (rad/s).
    #[schemars(title = "Enzyme Spin", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub enzyme_spin_rate: f32,
    /// Standalone glucose viewer spin rate (rad/s).
    #[schemars(title = "Viewer Spin", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub viewer_spin_rate: f32,
    /// Relative halo scale swing.
    #[schemars(skip)]
    pub halo_scale_amplitude: f32,
    /// Angular frequency of the halo scale pulse (rad/s).
    #[schemars(skip)]
    pub halo_scale_frequency: f32,
    /// Mean halo opacity.
    #[schemars(skip)]
    pub halo_opacity_base: f32,
    /// Halo opacity swing around the mean.
    #[schemars(skip)]
    pub halo_opacity_amplitude: f32,
    /// Angular frequency of the halo opacity pulse (rad/s).
    #[schemars(skip)]
    pub halo_opacity_frequency: f32,
    /// Progress added to flow particles per timer step.
    #[schemars(skip)]
    pub particle_step: f32,
    /// Milliseconds between flow particle steps.
    #[schemars(title = "Particle Interval (ms)", range(min = 10, max = 500))]
    pub particle_interval_ms: u32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            start_animating: true,
            float_amplitude: 0.1,
            float_frequency: 2.0,
            enzyme_spin_rate: 0.3,
            viewer_spin_rate: 0.5,
            halo_scale_amplitude: 0.1,
            halo_scale_frequency: 1.5,
            halo_opacity_base: 0.4,
            halo_opacity_amplitude: 0.2,
            halo_opacity_frequency: 2.0,
            particle_step: 0.02,
            particle_interval_ms: 50,
        }
    }
}

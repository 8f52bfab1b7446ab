//! Closed-form motion curves sampled from elapsed time.
//!
//! Every curve is a pure function of `t`, so pausing and resuming simply
//! picks the curve back up at the current time.

use crate::options::AnimationOptions;

/// Vertical bob applied to floating tokens.
#[must_use]
pub fn float_offset(t: f32, opts: &AnimationOptions) -> f32 {
    opts.float_amplitude * (t * opts.float_frequency).sin()
}

/// Absolute spin angle (radians) for a rate in rad/s.
#[must_use]
pub fn spin_angle(t: f32, rate: f32) -> f32 {
    t * rate
}

/// Scale and opacity of the enzyme halo at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaloPulse {
    /// Uniform scale factor.
    pub scale: f32,
    /// Material opacity.
    pub opacity: f32,
}

/// Halo pulse: scale `1 + 0.1·sin(1.5t)`, opacity `0.4 + 0.2·sin(2t)` with
/// the default options.
#[must_use]
pub fn halo_pulse(t: f32, opts: &AnimationOptions) -> HaloPulse {
    HaloPulse {
        scale: 1.0
            + opts.halo_scale_amplitude * (t * opts.halo_scale_frequency).sin(),
        opacity: opts.halo_opacity_base
            + opts.halo_opacity_amplitude
                * (t * opts.halo_opacity_frequency).sin(),
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn float_peaks_at_amplitude() {
        let opts = AnimationOptions::default();
        // sin(2t) = 1 at t = π/4
        assert!((float_offset(PI / 4.0, &opts) - 0.1).abs() < 1e-6);
        assert_eq!(float_offset(0.0, &opts), 0.0);
    }

    #[test]
    fn spin_is_linear_in_time() {
        assert!((spin_angle(10.0, 0.3) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn halo_stays_within_bounds() {
        let opts = AnimationOptions::default();
        for i in 0..500 {
            let p = halo_pulse(i as f32 * 0.037, &opts);
            assert!((0.9..=1.1).contains(&p.scale));
            assert!((0.2..=0.6).contains(&p.opacity));
        }
        let p = halo_pulse(0.0, &opts);
        assert_eq!(p.scale, 1.0);
        assert!((p.opacity - 0.4).abs() < 1e-6);
    }
}

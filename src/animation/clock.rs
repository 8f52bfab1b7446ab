//! The frame clock that drives every continuous motion.

use web_time::Instant;

/// Longest gap between two frames that still counts as elapsed time.
///
/// A visualization that was not being drawn (hidden tab, suspended window)
/// resumes where it left off instead of jumping ahead.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Timing of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds of animation time since the visualization mounted.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

/// Per-visualization frame clock; the single authority for elapsed time.
///
/// Time advances only when a frame is delivered, either from a wall-clock
/// timestamp ([`tick`](Self::tick)) or an explicit delta
/// ([`advance`](Self::advance)).
#[derive(Debug, Clone)]
pub struct AnimationClock {
    elapsed: f32,
    last_frame: Option<Instant>,
    frame_count: u64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl AnimationClock {
    /// A clock at `t = 0` that has not seen a frame yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            last_frame: None,
            frame_count: 0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance from a frame timestamp. The first frame has a zero delta.
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let delta = self
            .last_frame
            .map_or(0.0, |prev| now.saturating_duration_since(prev).as_secs_f32());
        self.last_frame = Some(now);
        self.advance(delta)
    }

    /// Advance by an explicit delta in seconds. Negative or non-finite
    /// deltas count as zero; long stalls are clamped to
    /// [`MAX_FRAME_DELTA`].
    pub fn advance(&mut self, delta: f32) -> FrameTime {
        let delta = if delta.is_finite() {
            delta.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };

        self.elapsed += delta;
        self.frame_count += 1;

        if delta > 0.0 {
            let instant_fps = 1.0 / delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTime {
            elapsed: self.elapsed,
            delta,
        }
    }

    /// Seconds of animation time so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Frames delivered so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

//! Continuous scene motion: the frame clock, the flow-particle stepper,
//! closed-form motion curves, arrow orientation and the per-node drivers
//! that tie them to the scene graph.

pub mod arrow;
pub mod clock;
pub mod effects;
mod motion;
pub mod particle;

pub use arrow::{ArrowOrientation, ArrowSpec};
pub use clock::{AnimationClock, FrameTime};
pub use motion::{drive, MotionDriver, MotionFrame};
pub use particle::ParticleTimer;

//! Camera system for 3D scene viewing.
//!
//! Provides an orbital camera with rotation, panning, zoom and a resettable
//! home pose, plus screen-space pick rays.

/// Orbital camera controller managing rotation, pan, zoom and reset.
pub mod controller;
/// Core camera struct, uniform block and pick rays.
pub mod core;

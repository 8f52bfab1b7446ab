// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedural 3D reaction scenes for the ten steps of glycolysis.
//!
//! Glycoviz turns static pathway data into scene graphs: molecules built
//! from primitive solids, reaction connectors, enzyme indicators, energy
//! captions and an overall energy-flow diagram. It owns everything up to
//! the draw call and hands the host flat, `Pod` instance data plus
//! billboard captions each frame.
//!
//! # Key entry points
//!
//! - [`engine::Visualization`] - one mounted, animated diagram
//! - [`pathway`] - the ten reaction steps and the net yield
//! - [`composer`] - pure scene assembly for steps, summary and viewer
//! - [`options::Options`] - runtime configuration (camera, animation,
//!   keybindings) with TOML presets
//! - [`input::InputProcessor`] - raw events to
//!   [`engine::VisualizationCommand`]s
//!
//! # Frame loop
//!
//! A visualization advances only when the host delivers frames. Each frame
//! moves the [`animation::AnimationClock`], steps the flow-particle timer
//! while playing, and lets every node's
//! [`animation::MotionDriver`] write its transform, visibility or material.

pub mod animation;
pub mod annotation;
pub mod camera;
pub mod composer;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod molecule;
pub mod options;
pub mod pathway;
pub mod scene;

pub use engine::{Visualization, VisualizationCommand, VisualizationKind};
pub use error::GlycovizError;
pub use options::Options;

//! Label-driven molecule geometry.
//!
//! A free-text species label is classified into a [`MoleculeVariant`]
//! (which base body to draw) and, independently, a [`DecorationSet`] (which
//! phosphate groups to layer on). The [`catalog`] maps both to scene
//! fragments. Summary-diagram [`TokenKind`]s live here too.

pub mod catalog;
mod decoration;
mod token;
mod variant;

pub use catalog::{molecule, molecule_for_label};
pub use decoration::DecorationSet;
pub use token::{TokenInstance, TokenKind};
pub use variant::MoleculeVariant;

//! Spatial data structures and grid transforms
//!
//! This module contains spatial-related functionality including:
//! - Dihedral transforms shared by tiles and pictures
//! - Tile parsing, identity, and edge fingerprints
//! - The assembled picture and its orientations

/// The assembled image and its orientations
pub mod picture;
/// Tile values, edge fingerprints, and parsing
pub mod tiles;
/// Rotation, reflection, and orientation tracking
pub mod transform;

pub use picture::Picture;
pub use tiles::{Edge, Fingerprint, Tile, TileId};
pub use transform::Orientation;

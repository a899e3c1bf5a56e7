//! Jigsaw reconstruction from edge fingerprints
//!
//! Parses a set of square boolean tiles, classifies them by how many of
//! their edges are unmatched, reassembles them into a square grid by
//! matching mirrored edge fingerprints, and searches the cropped picture
//! for a marker shape in all eight orientations.

#![forbid(unsafe_code)]

/// Fingerprint classification, assembly, and marker scanning
pub mod algorithm;
/// Input parsing, command-line handling, reporting, and error handling
pub mod io;
/// Tiles, pictures, and dihedral transforms
pub mod spatial;

pub use io::error::{PuzzleError, Result};

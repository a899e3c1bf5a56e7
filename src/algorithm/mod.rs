/// Row-by-row grid reconstruction from edge fingerprints
pub mod assembly;
/// Compact bitset of covered picture cells
pub mod bitset;
/// Memoized edge fingerprints keyed by tile orientation
pub mod cache;
/// Fingerprint histogram and corner/edge/interior classification
pub mod fingerprints;
/// Owned pools of unplaced tiles
pub mod pool;
/// Marker search and roughness scoring over picture orientations
pub mod scanner;

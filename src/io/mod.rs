/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error taxonomy and result alias
pub mod error;
/// PNG export of the assembled picture
pub mod image;
/// Tile block parsing from puzzle text
pub mod input;
/// Logger setup and verbosity mapping
pub mod logging;
/// Placement progress display
pub mod progress;
/// Standard output report
pub mod report;

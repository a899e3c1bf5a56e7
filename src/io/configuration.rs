//! Puzzle constants and runtime configuration defaults

// Input defaults
/// Input path used when none is given
pub const DEFAULT_INPUT: &str = "input";

/// Marker searched for when no marker file is given
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Report labels
/// Label preceding each orientation's match count
pub const MATCHES_LABEL: &str = "monsters";
/// Label preceding each orientation's roughness score
pub const ROUGHNESS_LABEL: &str = "roughness";

// Progress bar display settings
/// Width of the placement progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// PNG export colours (RGBA)
/// Set cells outside any marker match
pub const SET_COLOUR: [u8; 4] = [20, 60, 120, 255];
/// Unset cells
pub const UNSET_COLOUR: [u8; 4] = [0, 0, 0, 0];
/// Cells covered by a marker match
pub const MARKER_COLOUR: [u8; 4] = [230, 140, 30, 255];
/// Side length in pixels of one picture cell in the exported PNG
pub const EXPORT_CELL_PIXELS: u32 = 4;

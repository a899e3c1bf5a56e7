//! Command-line interface for reconstructing a tile puzzle and scanning it

use crate::algorithm::assembly::reconstruct;
use crate::algorithm::scanner::{Marker, OrientationScan, scan_orientations};
use crate::io::configuration::{DEFAULT_INPUT, EXPORT_CELL_PIXELS, SEA_MONSTER};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::export_picture_as_png;
use crate::io::input::read_tiles;
use crate::io::progress::ProgressManager;
use crate::io::report::Report;
use crate::spatial::picture::Picture;
use crate::spatial::tiles::{MAX_TILE_WIDTH, MIN_TILE_WIDTH};
use clap::{ArgAction, Parser};
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "jigsaw")]
#[command(
    author,
    version,
    about = "Reassemble a square grid of edge-matched tiles and search it for a marker shape"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Puzzle input file
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Expected tile side length (inferred from the first tile if omitted)
    #[arg(short = 'w', long)]
    pub tile_width: Option<usize>,

    /// Marker shape file where '#' marks a required cell
    #[arg(short, long, value_name = "FILE")]
    pub marker: Option<PathBuf>,

    /// Write the assembled picture as a PNG with marker cells highlighted
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Stop scanning at the first orientation with a match
    #[arg(short, long)]
    pub first_match: bool,

    /// Suppress progress output and informational logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging detail (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate values clap cannot check on its own
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the tile width is out of range
    pub fn validate(&self) -> Result<()> {
        if let Some(width) = self.tile_width
            && !(MIN_TILE_WIDTH..=MAX_TILE_WIDTH).contains(&width)
        {
            return Err(invalid_parameter(
                "tile-width",
                &width,
                &format!("must be between {MIN_TILE_WIDTH} and {MAX_TILE_WIDTH}"),
            ));
        }
        Ok(())
    }
}

/// Orchestrates one run: parse, assemble, scan, export
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments this runner was created with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Solve the puzzle named on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, the input or marker file
    /// cannot be read or parsed, assembly fails, or the PNG export fails
    pub fn run(&self) -> Result<Report> {
        self.cli.validate()?;
        let marker = self.load_marker()?;
        let tiles = read_tiles(&self.cli.input, self.cli.tile_width)?;

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(tiles.len())
        } else {
            ProgressManager::hidden(tiles.len())
        };
        let reconstruction = reconstruct(&tiles, |tile| progress.place(tile));
        progress.finish();
        let reconstruction = reconstruction?;

        let picture = reconstruction.arrangement.crop_and_assemble();
        let scans = scan_orientations(&picture, &marker, self.cli.first_match);
        if scans.iter().all(|scan| !scan.has_matches()) {
            warn!("No marker found in any orientation");
        }

        if let Some(path) = &self.cli.export {
            Self::export(&picture, &scans, path)?;
        }

        Ok(Report::new(reconstruction.corner_product, picture, &scans))
    }

    fn load_marker(&self) -> Result<Marker> {
        match &self.cli.marker {
            Some(path) => {
                let text = std::fs::read_to_string(path).with_path(path, "read marker")?;
                let lines: Vec<&str> = text.lines().collect();
                Marker::parse(&lines)
            }
            None => Marker::parse(&SEA_MONSTER),
        }
    }

    // Exports the first orientation with matches, or the picture as assembled
    fn export(picture: &Picture, scans: &[OrientationScan], path: &Path) -> Result<()> {
        match scans.iter().find(|scan| scan.has_matches()) {
            Some(scan) => export_picture_as_png(
                &picture.oriented(scan.orientation),
                Some(&scan.covered),
                EXPORT_CELL_PIXELS,
                path,
            )?,
            None => export_picture_as_png(picture, None, EXPORT_CELL_PIXELS, path)?,
        }
        info!("Exported picture to {}", path.display());
        Ok(())
    }
}

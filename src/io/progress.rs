//! Placement progress display during assembly

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::spatial::tiles::Tile;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Placing: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advanced once per placed tile
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar drawn to stderr for `tile_count` placements
    pub fn new(tile_count: usize) -> Self {
        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(PLACEMENT_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that tracks progress without drawing anything
    pub fn hidden(tile_count: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(tile_count as u64), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Record one placed tile
    pub fn place(&self, tile: &Tile) {
        self.bar.set_message(format!("tile {}", tile.id()));
        self.bar.inc(1);
    }

    /// Number of placements recorded so far
    pub fn placed(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

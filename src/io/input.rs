//! Splitting puzzle text into tile blocks

use log::info;
use std::collections::HashSet;
use std::path::Path;

use crate::algorithm::assembly::layout_side;
use crate::io::error::{Result, WithPath, format_error};
use crate::spatial::tiles::Tile;

/// Parse every tile block in the input text
///
/// Blocks are a `Tile <id>:` header followed by square rows, separated by
/// blank lines. When `width` is `None` it is taken from the first block's
/// row count; every block must then have that width.
///
/// # Errors
///
/// Returns a format error if any block is malformed, tile widths differ,
/// an id repeats, or the tile count is not a perfect square of at least 4
pub fn parse_tiles(text: &str, width: Option<usize>) -> Result<Vec<Tile>> {
    let blocks = split_blocks(text);
    let Some(first) = blocks.first() else {
        return Err(format_error(0, &"input contains no tiles"));
    };
    let width = width.unwrap_or_else(|| first.len().saturating_sub(1));

    let mut seen = HashSet::new();
    let mut tiles = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.iter().enumerate() {
        let tile = Tile::parse(block, width, index + 1)?;
        if !seen.insert(tile.id()) {
            return Err(format_error(
                index + 1,
                &format!("tile id {} appears more than once", tile.id()),
            ));
        }
        tiles.push(tile);
    }

    let side = layout_side(tiles.len())?;
    info!(
        "Parsed {} tiles of width {width} ({side}x{side} layout)",
        tiles.len()
    );
    Ok(tiles)
}

/// Read and parse a puzzle file
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, otherwise the
/// same errors as [`parse_tiles`]
pub fn read_tiles(path: &Path, width: Option<usize>) -> Result<Vec<Tile>> {
    let text = std::fs::read_to_string(path).with_path(path, "read input")?;
    parse_tiles(&text, width)
}

/// Group non-blank lines into blocks separated by blank lines
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

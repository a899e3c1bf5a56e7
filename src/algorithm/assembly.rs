//! Row-by-row reconstruction of the tile grid from edge fingerprints
//!
//! The top-left corner is fixed first, then every other tile is found by
//! the mirror of the edge it must touch. Each row is anchored on the first
//! tile of the row above and filled left to right, so only the first column
//! ever matches vertically. Pools are consumed destructively: a tile that
//! has been placed can never be matched again.

use log::{debug, info, trace};

use crate::algorithm::cache::FingerprintCache;
use crate::algorithm::fingerprints::{FingerprintHistogram, TileClass, id_product};
use crate::algorithm::pool::{TilePool, TilePools};
use crate::io::error::{PuzzleError, Result, consistency_error, format_error};
use crate::spatial::picture::Picture;
use crate::spatial::tiles::{Edge, Fingerprint, Tile, TileId, reverse_bits};
use ndarray::Array2;

/// Unique-edge pattern of a top-left corner, clockwise from the top
const TOP_LEFT_PATTERN: [bool; 4] = [true, false, false, true];

/// Side length of the square layout for a tile count
///
/// # Errors
///
/// Returns a format error if the count is not a perfect square of a side of
/// at least two
pub fn layout_side(tile_count: usize) -> Result<usize> {
    let side = tile_count.isqrt();
    if side * side != tile_count {
        return Err(format_error(
            0,
            &format!("{tile_count} tiles cannot form a square layout"),
        ));
    }
    if side < 2 {
        return Err(format_error(
            0,
            &format!("{tile_count} tiles are too few, a layout needs at least 2x2"),
        ));
    }
    Ok(side)
}

/// Tiles placed in their final grid positions and orientations
#[derive(Debug, Clone)]
pub struct Arrangement {
    rows: Vec<Vec<Tile>>,
    tile_width: usize,
}

impl Arrangement {
    /// Wrap placed rows of equal length
    ///
    /// # Errors
    ///
    /// Returns a consistency error if the rows do not form a square
    pub fn new(rows: Vec<Vec<Tile>>, tile_width: usize) -> Result<Self> {
        let side = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != side) {
            return Err(consistency_error(&format!(
                "row of {} tiles in a layout of {side} rows",
                row.len()
            )));
        }
        Ok(Self { rows, tile_width })
    }

    /// Number of tiles per row and column
    pub const fn side(&self) -> usize {
        self.rows.len()
    }

    /// Side length of every tile
    pub const fn tile_width(&self) -> usize {
        self.tile_width
    }

    /// Placed rows, top to bottom
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Tile at a grid position
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        self.rows.get(row).and_then(|tiles| tiles.get(col))
    }

    /// Ids of the four corner tiles, clockwise from the top left
    pub fn corner_ids(&self) -> Vec<TileId> {
        let last = self.side().saturating_sub(1);
        [(0, 0), (0, last), (last, last), (last, 0)]
            .iter()
            .filter_map(|&(row, col)| self.tile_at(row, col).map(Tile::id))
            .collect()
    }

    /// Check that every pair of neighbours meets along mirrored edges
    ///
    /// # Errors
    ///
    /// Returns a consistency error naming the first mismatched pair
    pub fn verify_adjacency(&self) -> Result<()> {
        let width = self.tile_width;
        for (row_index, row) in self.rows.iter().enumerate() {
            for (col_index, tile) in row.iter().enumerate() {
                if let Some(right) = row.get(col_index + 1) {
                    let expected = reverse_bits(right.fingerprint(Edge::Left), width);
                    if tile.fingerprint(Edge::Right) != expected {
                        return Err(consistency_error(&format!(
                            "tiles {} and {} at row {row_index} do not share an edge",
                            tile.id(),
                            right.id()
                        )));
                    }
                }
                if let Some(below) = self.tile_at(row_index + 1, col_index) {
                    let expected = reverse_bits(below.fingerprint(Edge::Top), width);
                    if tile.fingerprint(Edge::Bottom) != expected {
                        return Err(consistency_error(&format!(
                            "tiles {} and {} at column {col_index} do not share an edge",
                            tile.id(),
                            below.id()
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Strip every tile's border and stitch the interiors into one picture
    ///
    /// The result is `side * (tile_width - 2)` cells square, tiles laid out
    /// in row-major order.
    pub fn crop_and_assemble(&self) -> Picture {
        let inner = self.tile_width.saturating_sub(2);
        let size = self.side() * inner;
        if inner == 0 {
            return Picture::new(Array2::from_elem((0, 0), false));
        }
        let interiors: Vec<Vec<Array2<bool>>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(Tile::interior).collect())
            .collect();
        let cells = Array2::from_shape_fn((size, size), |(row, col)| {
            interiors
                .get(row / inner)
                .and_then(|tiles| tiles.get(col / inner))
                .and_then(|interior| interior.get((row % inner, col % inner)).copied())
                .unwrap_or(false)
        });
        Picture::new(cells)
    }
}

/// Places pool tiles by matching mirrored edge fingerprints
pub struct Assembler<'a> {
    histogram: &'a FingerprintHistogram,
    tile_width: usize,
    side: usize,
    cache: FingerprintCache,
}

impl<'a> Assembler<'a> {
    /// Create an assembler for a `side` x `side` layout of `tile_width` tiles
    pub fn new(histogram: &'a FingerprintHistogram, tile_width: usize, side: usize) -> Self {
        Self {
            histogram,
            tile_width,
            side,
            cache: FingerprintCache::new(),
        }
    }

    /// Fingerprint cache accumulated so far
    pub const fn cache(&self) -> &FingerprintCache {
        &self.cache
    }

    /// Remove the first pool tile that presents the mirror of `target`
    ///
    /// Every rotation is covered by the four edge fingerprints; if only the
    /// reflected tile matches, the reflection is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::NotFound`] if no tile in the pool qualifies
    pub fn remove_matching(
        &mut self,
        pool: &mut TilePool,
        class: TileClass,
        target: Fingerprint,
    ) -> Result<Tile> {
        let wanted = reverse_bits(target, self.tile_width);

        let mut found = None;
        for tile in pool.iter() {
            if self.cache.fingerprints(tile).contains(&wanted) {
                found = Some((tile.id(), false));
                break;
            }
            if self.cache.fingerprints(&tile.flip()).contains(&wanted) {
                found = Some((tile.id(), true));
                break;
            }
        }

        let not_found = || PuzzleError::NotFound {
            fingerprint: target,
            class,
        };
        let (id, flipped) = found.ok_or_else(not_found)?;
        let tile = pool.remove(id).ok_or_else(not_found)?;
        Ok(if flipped { tile.flip() } else { tile })
    }

    /// Turn a tile until `edge` presents the mirror of `target`
    ///
    /// # Errors
    ///
    /// Returns a consistency error if no quarter-turn aligns the edge
    pub fn orient_to_fingerprint(
        &mut self,
        tile: Tile,
        target: Fingerprint,
        edge: Edge,
    ) -> Result<Tile> {
        let wanted = reverse_bits(target, self.tile_width);
        let mut tile = tile;
        for _ in 0..4 {
            if self.cached_edge(&tile, edge) == wanted {
                return Ok(tile);
            }
            tile = tile.rotate_right();
        }
        Err(consistency_error(&format!(
            "tile {} cannot turn its {edge:?} edge to {wanted:#b}",
            tile.id()
        )))
    }

    /// Remove the pool tile matching `target` and align it on `edge`
    ///
    /// # Errors
    ///
    /// Propagates [`Assembler::remove_matching`] and
    /// [`Assembler::orient_to_fingerprint`] failures
    pub fn take_matching(
        &mut self,
        pool: &mut TilePool,
        class: TileClass,
        target: Fingerprint,
        edge: Edge,
    ) -> Result<Tile> {
        let tile = self.remove_matching(pool, class, target)?;
        self.orient_to_fingerprint(tile, target, edge)
    }

    /// Take the pool tile whose left edge mirrors `left`'s right edge
    ///
    /// # Errors
    ///
    /// Returns an error if no pool tile fits
    pub fn place_right_of(
        &mut self,
        left: &Tile,
        pool: &mut TilePool,
        class: TileClass,
    ) -> Result<Tile> {
        let target = self.cached_edge(left, Edge::Right);
        self.take_matching(pool, class, target, Edge::Left)
    }

    /// Take the pool tile whose top edge mirrors `above`'s bottom edge
    ///
    /// # Errors
    ///
    /// Returns an error if no pool tile fits
    pub fn place_below(
        &mut self,
        above: &Tile,
        pool: &mut TilePool,
        class: TileClass,
    ) -> Result<Tile> {
        let target = self.cached_edge(above, Edge::Bottom);
        self.take_matching(pool, class, target, Edge::Top)
    }

    /// Turn a corner tile until its unmatched edges face up and left
    ///
    /// # Errors
    ///
    /// Returns a consistency error if no turn produces that pattern
    pub fn orient_top_left(&mut self, corner: Tile) -> Result<Tile> {
        let mut tile = corner;
        for _ in 0..4 {
            let fingerprints = self.cache.fingerprints(&tile);
            if self.histogram.unique_edges(&fingerprints) == TOP_LEFT_PATTERN {
                return Ok(tile);
            }
            tile = tile.rotate_right();
        }
        Err(consistency_error(&format!(
            "corner tile {} has no orientation with unmatched top and left edges",
            tile.id()
        )))
    }

    /// Assemble the full grid, emptying every pool
    ///
    /// # Errors
    ///
    /// Returns an error if a required tile cannot be found, a pool is
    /// empty when a corner is needed, or tiles remain afterwards
    pub fn assemble(&mut self, pools: &mut TilePools) -> Result<Arrangement> {
        self.assemble_with(pools, |_| {})
    }

    /// Assemble the full grid, reporting every placed tile to `on_place`
    ///
    /// # Errors
    ///
    /// Same as [`Assembler::assemble`]
    pub fn assemble_with<F>(&mut self, pools: &mut TilePools, mut on_place: F) -> Result<Arrangement>
    where
        F: FnMut(&Tile),
    {
        let side = self.side;
        let first_corner = pools
            .corners
            .pop_first()
            .ok_or_else(|| consistency_error(&"no corner tile to start from"))?;
        let top_left = self.orient_top_left(first_corner)?;

        let mut rows: Vec<Vec<Tile>> = Vec::with_capacity(side);
        let first_row = self.fill_row(top_left, TileClass::Edge, TileClass::Corner, pools, &mut on_place)?;
        rows.push(first_row);

        for row_index in 1..side {
            let is_last = row_index + 1 == side;
            let (first_class, middle_class, last_class) = if is_last {
                (TileClass::Corner, TileClass::Edge, TileClass::Corner)
            } else {
                (TileClass::Edge, TileClass::Interior, TileClass::Edge)
            };

            let anchor = rows
                .last()
                .and_then(|row| row.first())
                .ok_or_else(|| consistency_error(&"previous row is empty"))?
                .clone();
            let first = self.place_below(&anchor, pools.pool_mut(first_class), first_class)?;
            let row = self.fill_row(first, middle_class, last_class, pools, &mut on_place)?;
            rows.push(row);
        }

        if !pools.is_empty() {
            return Err(consistency_error(&format!(
                "{} corner, {} edge, {} interior tiles left after assembly",
                pools.corners.len(),
                pools.edges.len(),
                pools.interiors.len()
            )));
        }

        debug!(
            "Fingerprint cache: {} hits, {} misses",
            self.cache.stats.hits, self.cache.stats.misses
        );

        let arrangement = Arrangement::new(rows, self.tile_width)?;
        arrangement.verify_adjacency()?;
        Ok(arrangement)
    }

    fn cached_edge(&mut self, tile: &Tile, edge: Edge) -> Fingerprint {
        let [top, right, bottom, left] = self.cache.fingerprints(tile);
        match edge {
            Edge::Top => top,
            Edge::Right => right,
            Edge::Bottom => bottom,
            Edge::Left => left,
        }
    }

    fn fill_row<F>(
        &mut self,
        first: Tile,
        middle_class: TileClass,
        last_class: TileClass,
        pools: &mut TilePools,
        on_place: &mut F,
    ) -> Result<Vec<Tile>>
    where
        F: FnMut(&Tile),
    {
        let mut row = Vec::with_capacity(self.side);
        trace!("Placed tile {} ({}) at column 0", first.id(), first.orientation());
        on_place(&first);
        let mut previous = first.clone();
        row.push(first);

        for col in 1..self.side {
            let class = if col + 1 == self.side {
                last_class
            } else {
                middle_class
            };
            let tile = self.place_right_of(&previous, pools.pool_mut(class), class)?;
            trace!(
                "Placed tile {} ({}) at column {col}",
                tile.id(),
                tile.orientation()
            );
            on_place(&tile);
            previous = tile.clone();
            row.push(tile);
        }
        Ok(row)
    }
}

/// Result of reconstructing a tile set
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// Product of the ids of the four corner tiles
    pub corner_product: TileId,
    /// Tiles in their final positions
    pub arrangement: Arrangement,
}

/// Classify and assemble a complete tile set
///
/// # Errors
///
/// Returns a format error if the tiles do not form a square layout of equal
/// widths, and propagates classification and assembly failures
pub fn reconstruct<F>(tiles: &[Tile], on_place: F) -> Result<Reconstruction>
where
    F: FnMut(&Tile),
{
    let side = layout_side(tiles.len())?;
    let tile_width = tiles.first().map_or(0, Tile::width);
    if let Some(odd) = tiles.iter().find(|tile| tile.width() != tile_width) {
        return Err(format_error(
            0,
            &format!(
                "tile {} is {} wide, expected {tile_width}",
                odd.id(),
                odd.width()
            ),
        ));
    }

    let histogram = FingerprintHistogram::build(tiles);
    let mut pools = TilePools::classify(tiles, &histogram, side)?;
    let corner_product = id_product(pools.corners.ids())?;
    info!("Assembling {side}x{side} layout of {tile_width}-cell tiles");

    let mut assembler = Assembler::new(&histogram, tile_width, side);
    let arrangement = assembler.assemble_with(&mut pools, on_place)?;
    Ok(Reconstruction {
        corner_product,
        arrangement,
    })
}

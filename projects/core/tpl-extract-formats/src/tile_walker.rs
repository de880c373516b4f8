//! Row-major traversal of an image's tile grid.
//!
//! Tiles along the right and bottom edge may overhang the image. The walker itself
//! does not clip; callers map each tile-local pixel to image coordinates with
//! [`Tile::pixel_position`] and skip positions outside the image.

use crate::pixel_format::TileShape;
use core::iter::FusedIterator;

/// One tile of the grid, identified by its tile row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Row of the tile in the tile grid.
    pub row: u32,
    /// Column of the tile in the tile grid.
    pub col: u32,
    /// Shape of the tile.
    pub shape: TileShape,
}

impl Tile {
    /// Maps a tile-local pixel (`local_x` in `[0, width)`, `local_y` in `[0, height)`)
    /// to image coordinates `(x, y)`.
    #[inline(always)]
    pub fn pixel_position(&self, local_x: u32, local_y: u32) -> (u32, u32) {
        (
            self.col * self.shape.width + local_x,
            self.row * self.shape.height + local_y,
        )
    }
}

/// Iterates the `ceil(height / tile height) x ceil(width / tile width)` tiles covering
/// an image; all tiles of tile-row 0 left to right, then tile-row 1, and so on.
///
/// # Examples
///
/// ```
/// use tpl_extract_formats::pixel_format::TileShape;
/// use tpl_extract_formats::tile_walker::TileWalker;
///
/// // 5x9 image in 4x4 tiles: 2 tile-rows of 3 tiles.
/// let tiles: Vec<_> = TileWalker::new(5, 9, TileShape::new(4, 4))
///     .map(|tile| (tile.row, tile.col))
///     .collect();
/// assert_eq!(tiles, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct TileWalker {
    shape: TileShape,
    tiles_x: u32,
    tiles_y: u32,
    next_row: u32,
    next_col: u32,
}

impl TileWalker {
    /// Creates a walker over an image of `height` x `width` pixels split into `shape` tiles.
    pub fn new(height: u32, width: u32, shape: TileShape) -> Self {
        Self::with_tile_counts(
            width.div_ceil(shape.width),
            height.div_ceil(shape.height),
            shape,
        )
    }

    /// Creates a walker over an explicit `tiles_x` x `tiles_y` grid of `shape` tiles.
    pub fn with_tile_counts(tiles_x: u32, tiles_y: u32, shape: TileShape) -> Self {
        // An empty row count ends the walk immediately, even with tiles_x > 0.
        let next_row = if tiles_x == 0 { tiles_y } else { 0 };
        Self {
            shape,
            tiles_x,
            tiles_y,
            next_row,
            next_col: 0,
        }
    }

    /// Number of tiles per tile-row.
    #[inline]
    pub fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    /// Number of tile-rows.
    #[inline]
    pub fn tiles_y(&self) -> u32 {
        self.tiles_y
    }
}

impl Iterator for TileWalker {
    type Item = Tile;

    #[inline]
    fn next(&mut self) -> Option<Tile> {
        if self.next_row >= self.tiles_y {
            return None;
        }

        let tile = Tile {
            row: self.next_row,
            col: self.next_col,
            shape: self.shape,
        };

        self.next_col += 1;
        if self.next_col == self.tiles_x {
            self.next_col = 0;
            self.next_row += 1;
        }

        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next_row >= self.tiles_y {
            0
        } else {
            let rows_left = (self.tiles_y - self.next_row) as usize;
            rows_left * self.tiles_x as usize - self.next_col as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileWalker {}
impl FusedIterator for TileWalker {}

//! Partitioning of the grid into rectangular render tiles
//!
//! Tiles are laid out row-major with a fixed nominal size in cells. The last
//! tile of each row and column is truncated to the grid edge, so the tile
//! counts are ceiling divisions of the grid dimensions.

use std::ops::Range;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Maze;

/// One tile of a [`TileLayout`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Tile row index within the layout
    pub tile_row: usize,
    /// Tile column index within the layout
    pub tile_col: usize,
    /// Cell rows covered by the tile
    pub rows: Range<usize>,
    /// Cell columns covered by the tile
    pub cols: Range<usize>,
}

impl Tile {
    /// Tile width in cells
    pub const fn width_cells(&self) -> usize {
        self.cols.end - self.cols.start
    }

    /// Tile height in cells
    pub const fn height_cells(&self) -> usize {
        self.rows.end - self.rows.start
    }

    /// Pixel extent (width, height) of the tile
    pub const fn pixel_size(&self, cell_size: u32) -> (u32, u32) {
        (
            self.width_cells() as u32 * cell_size,
            self.height_cells() as u32 * cell_size,
        )
    }

    /// Pixel offset (x, y) of the tile's top-left corner in the full image
    pub const fn pixel_offset(&self, cell_size: u32) -> (u32, u32) {
        (
            self.cols.start as u32 * cell_size,
            self.rows.start as u32 * cell_size,
        )
    }
}

/// Grid partition into tiles of at most `tile_height_cells` x `tile_width_cells`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayout {
    grid_rows: usize,
    grid_cols: usize,
    tile_width_cells: usize,
    tile_height_cells: usize,
}

impl TileLayout {
    /// Create a layout for a grid of `grid_rows` x `grid_cols` cells
    ///
    /// # Errors
    ///
    /// Returns an error if either tile dimension is zero
    pub fn new(
        grid_rows: usize,
        grid_cols: usize,
        tile_width_cells: usize,
        tile_height_cells: usize,
    ) -> Result<Self> {
        if tile_width_cells == 0 {
            return Err(invalid_parameter(
                "tile_width_cells",
                &tile_width_cells,
                &"tiles must span at least one cell",
            ));
        }
        if tile_height_cells == 0 {
            return Err(invalid_parameter(
                "tile_height_cells",
                &tile_height_cells,
                &"tiles must span at least one cell",
            ));
        }

        Ok(Self {
            grid_rows,
            grid_cols,
            tile_width_cells,
            tile_height_cells,
        })
    }

    /// Create a layout covering `maze`
    ///
    /// # Errors
    ///
    /// Returns an error if either tile dimension is zero
    pub fn for_maze(maze: &Maze, tile_width_cells: usize, tile_height_cells: usize) -> Result<Self> {
        let (rows, cols) = maze.dimensions();
        Self::new(rows, cols, tile_width_cells, tile_height_cells)
    }

    /// Nominal tile width in cells
    pub const fn tile_width_cells(&self) -> usize {
        self.tile_width_cells
    }

    /// Nominal tile height in cells
    pub const fn tile_height_cells(&self) -> usize {
        self.tile_height_cells
    }

    /// Number of tile rows
    pub const fn tile_rows(&self) -> usize {
        self.grid_rows.div_ceil(self.tile_height_cells)
    }

    /// Number of tile columns
    pub const fn tile_cols(&self) -> usize {
        self.grid_cols.div_ceil(self.tile_width_cells)
    }

    /// Total number of tiles
    pub const fn len(&self) -> usize {
        self.tile_rows() * self.tile_cols()
    }

    /// Whether the layout has no tiles
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tile at the given layout position, if it exists
    pub fn tile(&self, tile_row: usize, tile_col: usize) -> Option<Tile> {
        if tile_row >= self.tile_rows() || tile_col >= self.tile_cols() {
            return None;
        }

        let row_start = tile_row * self.tile_height_cells;
        let col_start = tile_col * self.tile_width_cells;
        Some(Tile {
            tile_row,
            tile_col,
            rows: row_start..(row_start + self.tile_height_cells).min(self.grid_rows),
            cols: col_start..(col_start + self.tile_width_cells).min(self.grid_cols),
        })
    }

    /// Iterate over all tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.tile_rows()).flat_map(move |tile_row| {
            (0..self.tile_cols()).filter_map(move |tile_col| self.tile(tile_row, tile_col))
        })
    }
}

//! Maze grid ownership, neighbor queries and wall carving
//!
//! The grid is the single owner of every cell. Traversal passes borrow it
//! mutably, rendering borrows it immutably, so the borrow checker rules out
//! generation and solving racing each other.

use ndarray::Array2;
use std::ops::Range;

use crate::algorithm::bitset::CellBitset;
use crate::io::configuration::MAX_GRID_CELLS;
use crate::io::error::{MazeError, Result};
use crate::spatial::cell::{Cell, Direction, Position};

/// A rectangular maze of `grid_height` rows by `grid_width` columns
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Array2<Cell>,
    cell_size: u32,
    path: Vec<Position>,
    path_members: CellBitset,
}

impl Maze {
    /// Create a maze with every wall standing
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if any dimension is zero, the
    /// cell count exceeds [`MAX_GRID_CELLS`], or the pixel extent of the maze
    /// does not fit in `u32`
    pub fn new(grid_width: usize, grid_height: usize, cell_size: u32) -> Result<Self> {
        let reject = |reason| MazeError::InvalidDimensions {
            grid_width,
            grid_height,
            cell_size,
            reason,
        };

        if grid_width == 0 || grid_height == 0 {
            return Err(reject("grid must have at least one row and one column"));
        }
        if cell_size == 0 {
            return Err(reject("cell size must be positive"));
        }
        let within_limit = grid_width
            .checked_mul(grid_height)
            .is_some_and(|cells| cells <= MAX_GRID_CELLS);
        if !within_limit {
            return Err(reject("cell count exceeds the grid size limit"));
        }
        for cells in [grid_width, grid_height] {
            let fits = u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(cell_size))
                .is_some();
            if !fits {
                return Err(reject("pixel extent exceeds u32"));
            }
        }

        Ok(Self {
            cells: Array2::from_shape_fn((grid_height, grid_width), |(row, col)| {
                Cell::new(row, col)
            }),
            cell_size,
            path: Vec::new(),
            path_members: CellBitset::new(grid_height, grid_width),
        })
    }

    /// Number of columns
    pub fn grid_width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn grid_height(&self) -> usize {
        self.cells.nrows()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Pixel length of a cell edge
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Full image width in pixels
    pub fn pixel_width(&self) -> u32 {
        self.grid_width() as u32 * self.cell_size
    }

    /// Full image height in pixels
    pub fn pixel_height(&self) -> u32 {
        self.grid_height() as u32 * self.cell_size
    }

    /// Top-left cell, where solving starts
    pub const fn start(&self) -> Position {
        [0, 0]
    }

    /// Bottom-right cell, where solving ends
    pub fn end(&self) -> Position {
        [self.grid_height() - 1, self.grid_width() - 1]
    }

    /// Look up a cell
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Whether `position` lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position[0] < self.grid_height() && position[1] < self.grid_width()
    }

    /// Neighbor of `position` in `direction`, if it is inside the grid
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        if !self.contains(position) {
            return None;
        }
        direction.step(position, self.grid_height(), self.grid_width())
    }

    /// Unvisited in-bounds neighbors in North, East, South, West order
    pub fn unvisited_neighbors(&self, position: Position) -> Vec<(Direction, Position)> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                self.neighbor(position, direction)
                    .filter(|&next| !self.is_visited(next))
                    .map(|next| (direction, next))
            })
            .collect()
    }

    /// Whether a move from `position` in `direction` is open and in bounds
    pub fn can_move(&self, position: Position, direction: Direction) -> Option<Position> {
        let cell = self.cell(position)?;
        if cell.has_wall(direction) {
            return None;
        }
        self.neighbor(position, direction)
    }

    /// Open the wall pair between `position` and its neighbor in `direction`
    ///
    /// Both flags of the shared edge are cleared together, so walls stay
    /// symmetric. Returns the neighbor's position.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if either cell lies outside the grid
    pub fn carve(&mut self, position: Position, direction: Direction) -> Result<Position> {
        let next = self
            .neighbor(position, direction)
            .ok_or_else(|| self.out_of_bounds(position))?;

        if let Some(cell) = self.cells.get_mut(position) {
            cell.open_wall(direction);
        }
        if let Some(cell) = self.cells.get_mut(next) {
            cell.open_wall(direction.opposite());
        }
        Ok(next)
    }

    /// Count open wall pairs, each shared edge counted once
    pub fn open_passages(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&direction| {
                        !cell.has_wall(direction)
                            && self.neighbor(cell.position(), direction).is_some()
                    })
                    .count()
            })
            .sum()
    }

    /// Whether every shared edge has matching flags on both sides
    pub fn walls_are_symmetric(&self) -> bool {
        self.cells.iter().all(|cell| {
            Direction::ALL.into_iter().all(|direction| {
                self.neighbor(cell.position(), direction)
                    .and_then(|next| self.cell(next))
                    .is_none_or(|other| {
                        other.has_wall(direction.opposite()) == cell.has_wall(direction)
                    })
            })
        })
    }

    /// Clear the visited flag on every cell
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    /// Whether the current traversal pass has reached `position`
    ///
    /// Positions outside the grid count as visited so they are never entered.
    pub fn is_visited(&self, position: Position) -> bool {
        self.cell(position).is_none_or(Cell::is_visited)
    }

    pub(crate) fn mark_visited(&mut self, position: Position) {
        if let Some(cell) = self.cells.get_mut(position) {
            cell.visited = true;
        }
    }

    pub(crate) fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.cells.get_mut(position)
    }

    /// The last computed solution, empty if none
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Whether `position` is on the last computed solution
    pub fn is_on_path(&self, position: Position) -> bool {
        self.path_members.contains(position)
    }

    pub(crate) fn set_path(&mut self, path: Vec<Position>) {
        self.path_members = CellBitset::from_positions(
            self.grid_height(),
            self.grid_width(),
            &path,
        );
        self.path = path;
    }

    pub(crate) fn clear_path(&mut self) {
        self.path.clear();
        self.path_members.clear();
    }

    /// Check that a cell range lies inside the grid
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] for empty, inverted or overhanging ranges
    pub fn check_region(&self, rows: &Range<usize>, cols: &Range<usize>) -> Result<()> {
        let valid = rows.start < rows.end
            && cols.start < cols.end
            && rows.end <= self.grid_height()
            && cols.end <= self.grid_width();

        if valid {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                rows: rows.clone(),
                cols: cols.clone(),
                grid_dimensions: self.dimensions(),
            })
        }
    }

    fn out_of_bounds(&self, position: Position) -> MazeError {
        MazeError::OutOfBounds {
            rows: position[0]..position[0].saturating_add(1),
            cols: position[1]..position[1].saturating_add(1),
            grid_dimensions: self.dimensions(),
        }
    }
}

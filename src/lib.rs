//! Perfect maze generation, solving and tiled PNG rendering
//!
//! Mazes are carved by randomized recursive backtracking, solved by
//! depth-first search, and rasterized tile by tile so that very large grids
//! can be stitched into one image.

#![forbid(unsafe_code)]

/// Maze generation, solving and the cell bitset they share
pub mod algorithm;
/// Rendering, tiling, persistence, CLI and error handling
pub mod io;
/// Cells, the maze grid and tile partitioning
pub mod spatial;

pub use io::error::{MazeError, Result};

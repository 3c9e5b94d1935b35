//! Spatial data structures for the maze grid
//!
//! This module contains spatial-related functionality including:
//! - Cells, directions and wall flags
//! - Maze grid ownership and wall carving
//! - Tile partitioning for rendering

/// Cells, directions and wall flags
pub mod cell;
/// Maze grid ownership, neighbor queries and wall carving
pub mod grid;
/// Tile partitioning for memory-bounded rendering
pub mod tiles;

pub use cell::{Cell, Direction, Position, Walls};
pub use grid::Maze;
pub use tiles::{Tile, TileLayout};

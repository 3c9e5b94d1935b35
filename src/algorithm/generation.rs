//! Randomized recursive backtracking maze generation
//!
//! Walks the grid depth-first from the start cell with an explicit stack,
//! carving into a uniformly chosen unvisited neighbor and backtracking when
//! none remain. Every cell is entered exactly once, so the carved passages
//! form a spanning tree of the grid.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::io::error::Result;
use crate::spatial::{Maze, Position};

/// Summary of a generation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationStats {
    /// Wall pairs opened
    pub passages_carved: usize,
    /// Deepest the backtracking stack grew
    pub max_stack_depth: usize,
}

/// Seeded recursive backtracking generator
pub struct RecursiveBacktracker {
    rng: StdRng,
}

impl RecursiveBacktracker {
    /// Create a deterministic generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Carve a perfect maze into `maze`
    ///
    /// Visited flags are cleared before and after the walk. Running this on a
    /// maze that has already been carved opens further walls and breaks the
    /// spanning-tree property, so each maze should be generated once.
    ///
    /// # Errors
    ///
    /// Returns an error only if a carve leaves the grid, which would indicate
    /// a neighbor computation bug
    pub fn generate(&mut self, maze: &mut Maze) -> Result<GenerationStats> {
        carve_passages(maze, &mut self.rng)
    }
}

/// Carve a perfect maze into `maze` using `rng` for neighbor choice
///
/// # Errors
///
/// Returns an error only if a carve leaves the grid
pub fn carve_passages<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) -> Result<GenerationStats> {
    maze.reset_visited();

    let start = maze.start();
    let mut stats = GenerationStats::default();
    let mut stack: Vec<Position> = vec![start];
    maze.mark_visited(start);

    while let Some(&current) = stack.last() {
        let candidates = maze.unvisited_neighbors(current);

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let choice = rng.random_range(0..candidates.len());
        if let Some(&(direction, _)) = candidates.get(choice) {
            let next = maze.carve(current, direction)?;
            maze.mark_visited(next);
            stack.push(next);
            stats.passages_carved += 1;
            stats.max_stack_depth = stats.max_stack_depth.max(stack.len());
        }
    }

    maze.reset_visited();

    debug!(
        passages = stats.passages_carved,
        max_stack_depth = stats.max_stack_depth,
        "maze carved"
    );
    Ok(stats)
}

//! Depth-first search from the start cell to the end cell
//!
//! Each stack entry carries its path-so-far as a link into a trail arena,
//! so pushing a neighbor costs O(1) instead of copying the whole path.
//! Reconstructing the path from the popped end entry yields exactly the
//! sequence a copying search would have carried.

use tracing::debug;

use crate::io::error::{MazeError, Result};
use crate::spatial::{Direction, Maze, Position};

/// One step of a path-so-far, linked back towards the start
#[derive(Debug, Clone, Copy)]
struct TrailNode {
    position: Position,
    parent: Option<usize>,
}

/// Find the path from the start cell to the end cell and store it on `maze`
///
/// Neighbors are pushed in North, East, South, West order, so the last one
/// pushed is explored first. On success the path is returned and becomes the
/// maze's solution; on failure the stored solution is cleared. Visited flags
/// are cleared before and after the search.
///
/// # Errors
///
/// Returns [`MazeError::NoPathFound`] if the end cell cannot be reached
pub fn solve_depth_first(maze: &mut Maze) -> Result<Vec<Position>> {
    maze.reset_visited();

    let start = maze.start();
    let end = maze.end();
    let mut trail = vec![TrailNode {
        position: start,
        parent: None,
    }];
    let mut stack = vec![0_usize];
    let mut found = None;

    while let Some(node_index) = stack.pop() {
        let Some(&TrailNode { position, .. }) = trail.get(node_index) else {
            continue;
        };

        if position == end {
            found = Some(node_index);
            break;
        }

        maze.mark_visited(position);

        for direction in Direction::ALL {
            if let Some(next) = maze.can_move(position, direction)
                && !maze.is_visited(next)
            {
                trail.push(TrailNode {
                    position: next,
                    parent: Some(node_index),
                });
                stack.push(trail.len() - 1);
            }
        }
    }

    maze.reset_visited();

    let Some(end_index) = found else {
        maze.clear_path();
        debug!(explored = trail.len(), "no path between start and end");
        return Err(MazeError::NoPathFound { start, end });
    };

    let path = unwind_trail(&trail, end_index);
    debug!(length = path.len(), explored = trail.len(), "maze solved");
    maze.set_path(path.clone());
    Ok(path)
}

fn unwind_trail(trail: &[TrailNode], end_index: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut cursor = Some(end_index);
    while let Some(node) = cursor.and_then(|index| trail.get(index)) {
        path.push(node.position);
        cursor = node.parent;
    }
    path.reverse();
    path
}

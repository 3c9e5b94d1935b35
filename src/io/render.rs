//! Maze-to-canvas rendering over cell ranges
//!
//! Every cell paints its own square, then its standing walls along its
//! edges. With strokes of one or two pixels, anything spilling past a cell's
//! square lands on cells further right or further down, which are painted
//! later and cover the spill, or falls off the canvas. A pixel's final color
//! therefore depends only on the cell that owns it, so tiled and single-pass
//! renders are pixel-identical.

use image::Rgb;
use std::ops::Range;

use crate::io::canvas::{Canvas, DrawTarget};
use crate::io::configuration::{
    BACKGROUND_COLOR, END_COLOR, PATH_COLOR, START_COLOR, WALL_COLOR, WALL_STROKE_WIDTH,
};
use crate::io::error::Result;
use crate::spatial::{Cell, Direction, Maze, Tile};

/// Colors used for each part of the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Wall lines
    pub wall: Rgb<u8>,
    /// Canvas background and plain cells
    pub background: Rgb<u8>,
    /// Start cell fill
    pub start: Rgb<u8>,
    /// End cell fill
    pub end: Rgb<u8>,
    /// Solution path fill
    pub path: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: Rgb(WALL_COLOR),
            background: Rgb(BACKGROUND_COLOR),
            start: Rgb(START_COLOR),
            end: Rgb(END_COLOR),
            path: Rgb(PATH_COLOR),
        }
    }
}

/// How a maze is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Colors for walls and cell fills
    pub palette: Palette,
    /// Paint cells on the last computed solution
    pub draw_solution: bool,
    /// Wall stroke width in pixels
    pub wall_width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            draw_solution: false,
            wall_width: WALL_STROKE_WIDTH,
        }
    }
}

impl RenderOptions {
    /// Default options with solution drawing switched on or off
    pub fn with_solution(draw_solution: bool) -> Self {
        Self {
            draw_solution,
            ..Self::default()
        }
    }
}

/// Draw the cells in `rows` x `cols` onto `target`
///
/// The range's top-left cell lands at the canvas origin. Cells are painted
/// row-major.
///
/// # Errors
///
/// Returns [`crate::MazeError::OutOfBounds`] if the range is empty or reaches
/// outside the grid
pub fn draw_region<T: DrawTarget + ?Sized>(
    maze: &Maze,
    target: &mut T,
    rows: Range<usize>,
    cols: Range<usize>,
    options: &RenderOptions,
) -> Result<()> {
    maze.check_region(&rows, &cols)?;

    let cell_size = i64::from(maze.cell_size());
    let offset_x = cols.start as i64 * cell_size;
    let offset_y = rows.start as i64 * cell_size;

    for row in rows {
        for col in cols.clone() {
            if let Some(cell) = maze.cell([row, col]) {
                let x = col as i64 * cell_size - offset_x;
                let y = row as i64 * cell_size - offset_y;
                draw_cell(maze, cell, target, (x, y), options);
            }
        }
    }
    Ok(())
}

/// Draw one tile of a layout onto `target`
///
/// # Errors
///
/// Returns an error if the tile reaches outside the grid
pub fn draw_tile<T: DrawTarget + ?Sized>(
    maze: &Maze,
    target: &mut T,
    tile: &Tile,
    options: &RenderOptions,
) -> Result<()> {
    draw_region(maze, target, tile.rows.clone(), tile.cols.clone(), options)
}

/// Render the whole maze onto a fresh canvas
///
/// # Errors
///
/// Returns an error if the canvas cannot be allocated
pub fn render_full(maze: &Maze, options: &RenderOptions) -> Result<Canvas> {
    let mut canvas = Canvas::with_background(
        maze.pixel_width(),
        maze.pixel_height(),
        options.palette.background,
    )?;
    draw_region(
        maze,
        &mut canvas,
        0..maze.grid_height(),
        0..maze.grid_width(),
        options,
    )?;
    Ok(canvas)
}

/// Render one tile onto a canvas sized to the tile's pixel extent
///
/// # Errors
///
/// Returns an error if the tile is empty or reaches outside the grid
pub fn render_tile(maze: &Maze, tile: &Tile, options: &RenderOptions) -> Result<Canvas> {
    let (width, height) = tile.pixel_size(maze.cell_size());
    let mut canvas = Canvas::with_background(width, height, options.palette.background)?;
    draw_tile(maze, &mut canvas, tile, options)?;
    Ok(canvas)
}

fn cell_fill(maze: &Maze, cell: &Cell, options: &RenderOptions) -> Option<Rgb<u8>> {
    let position = cell.position();
    if position == maze.start() {
        Some(options.palette.start)
    } else if position == maze.end() {
        Some(options.palette.end)
    } else if options.draw_solution && maze.is_on_path(position) {
        Some(options.palette.path)
    } else {
        None
    }
}

fn draw_cell<T: DrawTarget + ?Sized>(
    maze: &Maze,
    cell: &Cell,
    target: &mut T,
    (x, y): (i64, i64),
    options: &RenderOptions,
) {
    let size = maze.cell_size();
    let edge = i64::from(size);

    target.draw_rect(x, y, size, size, options.palette.background);
    if let Some(color) = cell_fill(maze, cell, options) {
        target.draw_rect(x, y, size, size, color);
    }

    for direction in Direction::ALL {
        if !cell.has_wall(direction) {
            continue;
        }
        let (from, to) = match direction {
            Direction::North => ((x, y), (x + edge, y)),
            Direction::East => ((x + edge, y), (x + edge, y + edge)),
            Direction::South => ((x, y + edge), (x + edge, y + edge)),
            Direction::West => ((x, y), (x, y + edge)),
        };
        target.draw_line(from, to, options.palette.wall, options.wall_width);
    }
}

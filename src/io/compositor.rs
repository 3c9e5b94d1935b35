//! Tiled rendering and stitching into one full-resolution image
//!
//! Each tile is rendered onto its own canvas, persisted as
//! `{base}_tile_{row}_{col}.png` and decoded again, so tile production only
//! ever holds one tile canvas. The decoded tiles are pasted into the
//! composite at their pixel offsets, the composite is written as
//! `{base}_combined.png`, and the intermediate tile files are deleted.

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::io::canvas::Canvas;
use crate::io::configuration::{COMBINED_SUFFIX, IMAGE_EXTENSION, TILE_INFIX};
use crate::io::error::{Result, WithPath};
use crate::io::render::{RenderOptions, render_full, render_tile};
use crate::spatial::{Maze, Tile, TileLayout};

/// Where tile images live between rendering and stitching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileStorage {
    /// Persist every tile as a PNG and decode it again before stitching
    #[default]
    Disk,
    /// Paste rendered tile canvases directly, writing no intermediate files
    Memory,
}

/// Tiling parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositorConfig {
    /// Nominal tile width in cells
    pub tile_width_cells: usize,
    /// Nominal tile height in cells
    pub tile_height_cells: usize,
    /// Intermediate tile handling
    pub storage: TileStorage,
    /// Directory receiving every artifact
    pub output_dir: PathBuf,
}

impl CompositorConfig {
    /// Square tiles of `tile_size` cells written to `output_dir`
    pub fn square(tile_size: usize, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            tile_width_cells: tile_size,
            tile_height_cells: tile_size,
            storage: TileStorage::Disk,
            output_dir: output_dir.into(),
        }
    }
}

/// Path of an intermediate tile image
pub fn tile_artifact_path(dir: &Path, base: &str, tile_row: usize, tile_col: usize) -> PathBuf {
    dir.join(format!(
        "{base}{TILE_INFIX}{tile_row}_{tile_col}.{IMAGE_EXTENSION}"
    ))
}

/// Path of the stitched image
pub fn combined_artifact_path(dir: &Path, base: &str) -> PathBuf {
    dir.join(format!("{base}{COMBINED_SUFFIX}.{IMAGE_EXTENSION}"))
}

/// Path of a single-pass image
pub fn single_artifact_path(dir: &Path, base: &str) -> PathBuf {
    dir.join(format!("{base}.{IMAGE_EXTENSION}"))
}

/// Whether `file_name` is an intermediate tile image for `base`
pub fn is_tile_artifact(file_name: &str, base: &str) -> bool {
    let Some(indices) = file_name
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix(TILE_INFIX))
        .and_then(|rest| rest.strip_suffix(IMAGE_EXTENSION))
        .and_then(|rest| rest.strip_suffix('.'))
    else {
        return false;
    };

    let is_index = |text: &str| !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit());
    indices
        .split_once('_')
        .is_some_and(|(row, col)| is_index(row) && is_index(col))
}

/// Delete tile images for `base` left in `dir` by an interrupted run
///
/// Returns the number of files removed.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or a file cannot be removed
pub fn remove_stale_tiles(dir: &Path, base: &str) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in std::fs::read_dir(dir).with_path(dir, "list directory")? {
        let path = entry.with_path(dir, "list directory")?.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| is_tile_artifact(name, base));

        if matches && path.is_file() {
            std::fs::remove_file(&path).with_path(&path, "remove stale tile")?;
            removed += 1;
        }
    }

    if removed > 0 {
        info!(removed, base, "removed stale tile images");
    }
    Ok(removed)
}

/// Intermediate tile files awaiting deletion
///
/// Dropping the set removes whatever is still on disk, so an aborted
/// composite does not leave tiles behind.
#[derive(Debug, Default)]
pub struct TileArtifacts {
    paths: Vec<PathBuf>,
}

impl TileArtifacts {
    /// Start tracking `path`
    pub fn track(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Tracked files
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Delete every tracked file, reporting the first failure
    ///
    /// # Errors
    ///
    /// Returns an error if a tracked file exists but cannot be removed
    pub fn cleanup(mut self) -> Result<()> {
        while let Some(path) = self.paths.pop() {
            match std::fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "removed tile image"),
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
                Err(error) => return Err(error).with_path(&path, "remove tile"),
            }
        }
        Ok(())
    }
}

impl Drop for TileArtifacts {
    fn drop(&mut self) {
        for path in &self.paths {
            if path.exists() && std::fs::remove_file(path).is_err() {
                warn!(path = %path.display(), "could not remove tile image");
            }
        }
    }
}

/// Renders a maze tile by tile and stitches the result
pub struct TileCompositor<'a> {
    maze: &'a Maze,
    options: RenderOptions,
    config: CompositorConfig,
    progress: ProgressBar,
}

impl<'a> TileCompositor<'a> {
    /// Create a compositor drawing `maze` with `options`
    pub fn new(maze: &'a Maze, options: RenderOptions, config: CompositorConfig) -> Self {
        Self {
            maze,
            options,
            config,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report finished tiles on `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Tile partition of the maze
    ///
    /// # Errors
    ///
    /// Returns an error if a tile dimension is zero
    pub fn layout(&self) -> Result<TileLayout> {
        TileLayout::for_maze(
            self.maze,
            self.config.tile_width_cells,
            self.config.tile_height_cells,
        )
    }

    /// Render every tile and stitch them into one canvas
    ///
    /// Tile files written along the way are recorded in `artifacts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid, a canvas cannot be
    /// allocated, or a tile cannot be written or read back
    pub fn compose(&self, base: &str, artifacts: &mut TileArtifacts) -> Result<Canvas> {
        let layout = self.layout()?;
        self.progress.set_length(layout.len() as u64);
        self.progress.set_position(0);

        let mut tiles = Vec::with_capacity(layout.len());
        for tile in layout.tiles() {
            let image = self.produce_tile(&tile, base, artifacts)?;
            tiles.push((tile, image));
            self.progress.inc(1);
        }

        let mut combined = Canvas::with_background(
            self.maze.pixel_width(),
            self.maze.pixel_height(),
            self.options.palette.background,
        )?;
        let cell_size = self.maze.cell_size();
        for (tile, image) in &tiles {
            let (x, y) = tile.pixel_offset(cell_size);
            combined.paste(image, x, y);
        }

        debug!(
            tiles = tiles.len(),
            tile_rows = layout.tile_rows(),
            tile_cols = layout.tile_cols(),
            "tiles stitched"
        );
        Ok(combined)
    }

    /// Render tiled, write `{base}_combined.png`, and delete the tile files
    ///
    /// # Errors
    ///
    /// Returns an error if any tile or the composite cannot be produced or
    /// written, or a tile file cannot be deleted
    pub fn render_tiled(&self, base: &str) -> Result<PathBuf> {
        let mut artifacts = TileArtifacts::default();
        let combined = self.compose(base, &mut artifacts)?;

        let path = combined_artifact_path(&self.config.output_dir, base);
        combined.save(&path)?;
        info!(path = %path.display(), "combined maze image saved");

        artifacts.cleanup()?;
        self.progress.finish();
        Ok(path)
    }

    /// Render in one pass and write `{base}.png`
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be allocated or written
    pub fn render_single(&self, base: &str) -> Result<PathBuf> {
        self.progress.set_length(1);
        let canvas = render_full(self.maze, &self.options)?;

        let path = single_artifact_path(&self.config.output_dir, base);
        canvas.save(&path)?;
        info!(path = %path.display(), "single maze image saved");

        self.progress.inc(1);
        self.progress.finish();
        Ok(path)
    }

    fn produce_tile(&self, tile: &Tile, base: &str, artifacts: &mut TileArtifacts) -> Result<Canvas> {
        let canvas = render_tile(self.maze, tile, &self.options)?;

        match self.config.storage {
            TileStorage::Memory => Ok(canvas),
            TileStorage::Disk => {
                let path =
                    tile_artifact_path(&self.config.output_dir, base, tile.tile_row, tile.tile_col);
                canvas.save(&path)?;
                artifacts.track(path.clone());
                debug!(path = %path.display(), "tile image saved");
                drop(canvas);
                Canvas::load(&path)
            }
        }
    }
}

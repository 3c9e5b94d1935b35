//! Command-line interface for generating, solving and rendering mazes

use crate::algorithm::generation::RecursiveBacktracker;
use crate::algorithm::solver::solve_depth_first;
use crate::io::compositor::{CompositorConfig, TileCompositor, remove_stale_tiles};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_FILENAME_BASE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_TILE_SIZE, JSON_EXTENSION, NORMAL_SUFFIX, SOLVED_SUFFIX,
};
use crate::io::error::{MazeError, Result, WithPath};
use crate::io::progress::ProgressManager;
use crate::io::render::RenderOptions;
use crate::io::serialization::{load_json, save_json};
use crate::spatial::Maze;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "mazetile")]
#[command(
    author,
    version,
    about = "Generate a perfect maze and save it as a PNG image, optionally tiled and solved"
)]
/// Command-line arguments for the maze tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Width of the maze (number of columns)
    #[arg(short = 'W', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Height of the maze (number of rows)
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Size of each cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Tile size in cells (used if tiling is enabled)
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Base filename for output files
    #[arg(short = 'n', long, default_value = DEFAULT_FILENAME_BASE)]
    pub filename_base: String,

    /// Solve the maze and draw the solution path
    #[arg(short, long)]
    pub solve: bool,

    /// Disable tiling and render a single image
    #[arg(long)]
    pub no_tiling: bool,

    /// Random seed for reproducible mazes (drawn at random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory receiving all output files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Also save the maze walls as `<filename-base>.json`
    #[arg(long)]
    pub json: bool,

    /// Render a maze previously saved with --json instead of generating one
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if tiled rendering is requested
    pub const fn tiling_enabled(&self) -> bool {
        !self.no_tiling
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Tiling parameters derived from the arguments
    pub fn compositor_config(&self) -> CompositorConfig {
        CompositorConfig::square(self.tile_size, self.output_dir.clone())
    }

    /// Path of the JSON maze file
    pub fn json_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{JSON_EXTENSION}", self.filename_base))
    }
}

/// Files and facts produced by one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Seed used for generation, `None` when the maze was loaded
    pub seed: Option<u64>,
    /// Images written, in order
    pub images: Vec<PathBuf>,
    /// JSON maze file written, if requested
    pub json: Option<PathBuf>,
    /// Number of cells on the solution, if one was found
    pub solution_length: Option<usize>,
}

/// Orchestrates generation, solving and rendering with progress tracking
pub struct MazeRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl MazeRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the full pipeline described by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the maze cannot be built or loaded, or any output
    /// file cannot be written
    pub fn run(&mut self) -> Result<RunReport> {
        let start_time = Instant::now();
        let mut report = RunReport::default();

        std::fs::create_dir_all(&self.cli.output_dir)
            .with_path(&self.cli.output_dir, "create directory")?;

        let mut maze = self.build_maze(&mut report)?;

        if self.cli.json {
            let path = self.cli.json_path();
            save_json(&maze, &path)?;
            self.announce(&path);
            report.json = Some(path);
        }

        let base = self.cli.filename_base.clone();
        if self.cli.tiling_enabled() {
            let normal_base = format!("{base}{NORMAL_SUFFIX}");
            let solved_base = format!("{base}{SOLVED_SUFFIX}");
            for stale_base in [&normal_base, &solved_base] {
                remove_stale_tiles(&self.cli.output_dir, stale_base)?;
            }

            let image = self.render_pass(&maze, &normal_base, false)?;
            report.images.push(image);

            if self.cli.solve {
                report.solution_length = Self::solve(&mut maze)?;
                let image = self.render_pass(&maze, &solved_base, true)?;
                report.images.push(image);
            }
        } else if self.cli.solve {
            report.solution_length = Self::solve(&mut maze)?;
            let image = self.render_pass(&maze, &format!("{base}{SOLVED_SUFFIX}"), true)?;
            report.images.push(image);
        } else {
            let image = self.render_pass(&maze, &base, false)?;
            report.images.push(image);
        }

        self.progress_manager.finish();
        info!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            images = report.images.len(),
            "run complete"
        );
        Ok(report)
    }

    fn build_maze(&self, report: &mut RunReport) -> Result<Maze> {
        if let Some(input) = &self.cli.input {
            let maze = load_json(input)?;
            info!(
                path = %input.display(),
                width = maze.grid_width(),
                height = maze.grid_height(),
                "maze loaded"
            );
            return Ok(maze);
        }

        let mut maze = Maze::new(self.cli.width, self.cli.height, self.cli.cell_size)?;
        let seed = self.cli.seed.unwrap_or_else(rand::random);
        let stats = RecursiveBacktracker::new(seed).generate(&mut maze)?;
        info!(
            seed,
            width = maze.grid_width(),
            height = maze.grid_height(),
            passages = stats.passages_carved,
            "maze generated"
        );
        report.seed = Some(seed);
        Ok(maze)
    }

    // An unreachable end cell only means there is nothing to highlight
    fn solve(maze: &mut Maze) -> Result<Option<usize>> {
        match solve_depth_first(maze) {
            Ok(path) => {
                info!(length = path.len(), "maze solved");
                Ok(Some(path.len()))
            }
            Err(error @ MazeError::NoPathFound { .. }) => {
                warn!(%error, "rendering without a solution");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    fn render_pass(&mut self, maze: &Maze, base: &str, draw_solution: bool) -> Result<PathBuf> {
        let bar = self.progress_manager.start_pass(base);
        let compositor = TileCompositor::new(
            maze,
            RenderOptions::with_solution(draw_solution),
            self.cli.compositor_config(),
        )
        .with_progress(bar);

        let path = if self.cli.tiling_enabled() {
            compositor.render_tiled(base)?
        } else {
            compositor.render_single(base)?
        };
        self.announce(&path);
        Ok(path)
    }

    // Allow print for user feedback on saved files
    #[allow(clippy::print_stderr)]
    fn announce(&self, path: &Path) {
        if !self.cli.quiet {
            eprintln!("Saved {}", path.display());
        }
    }
}

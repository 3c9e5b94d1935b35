//! Defaults, palette and output naming constants

// Grid defaults for the command line
/// Default maze width in cells
pub const DEFAULT_GRID_WIDTH: usize = 20;
/// Default maze height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 20;
/// Default cell edge length in pixels
pub const DEFAULT_CELL_SIZE: u32 = 10;
/// Default tile edge length in cells
pub const DEFAULT_TILE_SIZE: usize = 200;
/// Default base name for output files
pub const DEFAULT_FILENAME_BASE: &str = "large_maze";
/// Largest number of cells a maze may hold
pub const MAX_GRID_CELLS: usize = 100_000_000;

// Rendering
/// Stroke width of wall lines in pixels
pub const WALL_STROKE_WIDTH: u32 = 2;
/// Wall line color
pub const WALL_COLOR: [u8; 3] = [0, 0, 0];
/// Background and plain cell color
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];
/// Start cell color
pub const START_COLOR: [u8; 3] = [0, 255, 0];
/// End cell color
pub const END_COLOR: [u8; 3] = [255, 0, 0];
/// Solution path color
pub const PATH_COLOR: [u8; 3] = [0, 0, 255];

// Output naming
/// Suffix for the unsolved render pass in tiled mode
pub const NORMAL_SUFFIX: &str = "_normal";
/// Suffix for the solved render pass
pub const SOLVED_SUFFIX: &str = "_solved";
/// Infix between the base name and tile indices
pub const TILE_INFIX: &str = "_tile_";
/// Suffix of the stitched tiled image
pub const COMBINED_SUFFIX: &str = "_combined";
/// Extension of every image artifact
pub const IMAGE_EXTENSION: &str = "png";
/// Extension of serialized maze files
pub const JSON_EXTENSION: &str = "json";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

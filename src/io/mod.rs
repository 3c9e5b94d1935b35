/// Drawing surface and PNG persistence
pub mod canvas;
/// Command-line interface and run orchestration
pub mod cli;
/// Tiled rendering and stitching
pub mod compositor;
/// Defaults, palette and output naming
pub mod configuration;
/// Error types and path context
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars for render passes
pub mod progress;
/// Maze-to-canvas rendering
pub mod render;
/// JSON round trip of maze wall state
pub mod serialization;

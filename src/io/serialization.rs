//! JSON round trip of maze wall state
//!
//! The record stores dimensions and per-cell walls as a list of rows. Start,
//! end and the solution path are derived from the grid and never stored.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::io::error::{MazeError, Result, WithPath, invalid_record};
use crate::spatial::{Maze, Walls};

/// Wall flags keyed by direction letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallsRecord {
    /// North wall present
    #[serde(rename = "N")]
    pub north: bool,
    /// East wall present
    #[serde(rename = "E")]
    pub east: bool,
    /// South wall present
    #[serde(rename = "S")]
    pub south: bool,
    /// West wall present
    #[serde(rename = "W")]
    pub west: bool,
}

impl From<Walls> for WallsRecord {
    fn from(walls: Walls) -> Self {
        let [north, east, south, west] = walls.flags();
        Self {
            north,
            east,
            south,
            west,
        }
    }
}

impl From<WallsRecord> for Walls {
    fn from(record: WallsRecord) -> Self {
        Self::from_flags([record.north, record.east, record.south, record.west])
    }
}

/// One cell of a [`MazeRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Wall flags
    pub walls: WallsRecord,
}

/// Serializable form of a maze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeRecord {
    /// Number of columns
    pub grid_width: usize,
    /// Number of rows
    pub grid_height: usize,
    /// Cell edge length in pixels
    pub cell_size: u32,
    /// Cells, one list per row
    pub cells: Vec<Vec<CellRecord>>,
}

impl MazeRecord {
    /// Capture the wall state of `maze`
    pub fn from_maze(maze: &Maze) -> Self {
        let mut cells: Vec<Vec<CellRecord>> = (0..maze.grid_height())
            .map(|_| Vec::with_capacity(maze.grid_width()))
            .collect();

        for cell in maze.cells() {
            if let Some(row) = cells.get_mut(cell.row()) {
                row.push(CellRecord {
                    row: cell.row(),
                    col: cell.col(),
                    walls: cell.walls().into(),
                });
            }
        }

        Self {
            grid_width: maze.grid_width(),
            grid_height: maze.grid_height(),
            cell_size: maze.cell_size(),
            cells,
        }
    }

    /// Rebuild a maze from the record
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid, the cell list does not
    /// match them, a cell sits at the wrong position, or the walls of two
    /// neighbors disagree
    pub fn into_maze(self) -> Result<Maze> {
        let mut maze = Maze::new(self.grid_width, self.grid_height, self.cell_size)?;

        if self.cells.len() != self.grid_height {
            return Err(invalid_record(&format!(
                "expected {} rows of cells, found {}",
                self.grid_height,
                self.cells.len()
            )));
        }

        for (row_index, row) in self.cells.into_iter().enumerate() {
            if row.len() != self.grid_width {
                return Err(invalid_record(&format!(
                    "row {row_index} has {} cells, expected {}",
                    row.len(),
                    self.grid_width
                )));
            }

            for (col_index, record) in row.into_iter().enumerate() {
                if [record.row, record.col] != [row_index, col_index] {
                    return Err(invalid_record(&format!(
                        "cell ({}, {}) stored at ({row_index}, {col_index})",
                        record.row, record.col
                    )));
                }
                if let Some(cell) = maze.cell_mut([row_index, col_index]) {
                    cell.set_walls(record.walls.into());
                }
            }
        }

        if !maze.walls_are_symmetric() {
            return Err(invalid_record(&"neighboring cells disagree about a shared wall"));
        }
        Ok(maze)
    }
}

/// Encode `maze` as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if encoding fails
pub fn to_json(maze: &Maze) -> Result<String> {
    Ok(serde_json::to_string_pretty(&MazeRecord::from_maze(maze))?)
}

/// Decode a maze from JSON text
///
/// # Errors
///
/// Returns an error if the text is not a valid maze record
pub fn from_json(text: &str) -> Result<Maze> {
    let record: MazeRecord = serde_json::from_str(text)?;
    record.into_maze()
}

/// Write `maze` to `path` as JSON
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written
pub fn save_json(maze: &Maze, path: &Path) -> Result<()> {
    let text = to_json(maze).map_err(|error| with_json_path(error, path))?;
    std::fs::write(path, text).with_path(path, "write maze json")
}

/// Read a maze from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid maze
pub fn load_json(path: &Path) -> Result<Maze> {
    let text = std::fs::read_to_string(path).with_path(path, "read maze json")?;
    from_json(&text).map_err(|error| with_json_path(error, path))
}

fn with_json_path(error: MazeError, path: &Path) -> MazeError {
    match error {
        MazeError::Serialization { source, .. } => MazeError::Serialization {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}

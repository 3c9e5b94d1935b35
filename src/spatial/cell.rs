//! Grid cells with direction-indexed wall flags

use std::fmt;

/// Grid coordinates as `[row, col]`
pub type Position = [usize; 2];

/// The four grid directions in their canonical enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    North,
    /// Towards the last column
    East,
    /// Towards the last row
    South,
    /// Towards column 0
    West,
}

impl Direction {
    /// All directions in North, East, South, West order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Index into a [`Walls`] array
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// The direction pointing back across the same edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Single-letter label used in serialized wall records
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Step from `position` one cell in this direction
    ///
    /// Returns `None` when the step would leave a grid of `rows` x `cols`.
    pub const fn step(self, position: Position, rows: usize, cols: usize) -> Option<Position> {
        let [row, col] = position;
        match self {
            Self::North if row > 0 => Some([row - 1, col]),
            Self::East if col + 1 < cols => Some([row, col + 1]),
            Self::South if row + 1 < rows => Some([row + 1, col]),
            Self::West if col > 0 => Some([row, col - 1]),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Wall presence per direction, indexed by [`Direction::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls([bool; 4]);

impl Walls {
    /// All four walls present
    pub const CLOSED: Self = Self([true; 4]);

    /// Build from flags in North, East, South, West order
    pub const fn from_flags(flags: [bool; 4]) -> Self {
        Self(flags)
    }

    /// Flags in North, East, South, West order
    pub const fn flags(self) -> [bool; 4] {
        self.0
    }

    /// Whether the wall towards `direction` is standing
    pub fn has(self, direction: Direction) -> bool {
        self.0.get(direction.index()).copied().unwrap_or(false)
    }

    /// Remove the wall towards `direction`
    pub fn open(&mut self, direction: Direction) {
        if let Some(flag) = self.0.get_mut(direction.index()) {
            *flag = false;
        }
    }

    /// Number of walls still standing
    pub fn count(self) -> usize {
        self.0.iter().filter(|&&present| present).count()
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::CLOSED
    }
}

/// A single maze cell
///
/// Position is fixed at construction. The visited flag is scratch space for
/// traversal passes and is only written by the grid itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    walls: Walls,
    pub(crate) visited: bool,
}

impl Cell {
    /// Create a fully walled, unvisited cell
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            walls: Walls::CLOSED,
            visited: false,
        }
    }

    /// Row index
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column index
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Position as `[row, col]`
    pub const fn position(&self) -> Position {
        [self.row, self.col]
    }

    /// Current wall flags
    pub const fn walls(&self) -> Walls {
        self.walls
    }

    /// Whether the wall towards `direction` is standing
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }

    /// Whether the current traversal pass has reached this cell
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn open_wall(&mut self, direction: Direction) {
        self.walls.open(direction);
    }

    pub(crate) const fn set_walls(&mut self, walls: Walls) {
        self.walls = walls;
    }
}

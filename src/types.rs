//! Value types shared by the maze core and the terminal editor.

use std::fmt;

/// Grid coordinate.
///
/// This structure addresses a single cell of the maze as a column `x` and a row `y`, both counted
/// from the top-left corner. A coordinate on its own carries no bounds; the grid checks it against
/// its dimensions before accepting it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column index, growing to the right.
    pub x: usize,
    /// Row index, growing downwards.
    pub y: usize,
}

impl Coord {
    /// Builds a coordinate from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate displaced by the given signed offset.
    ///
    /// This function yields [`None`] when the displacement would leave the non-negative quadrant.
    /// The upper bounds are not checked here.
    #[must_use]
    pub const fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };

        Some(Self { x, y })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Classification of a single maze cell.
///
/// This enumeration replaces the numeric cell codes of a flat integer grid with one explicit role
/// per cell. Distances are never stored here; they live in a separate distance field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// Walkable cell without any role.
    #[default]
    Empty,
    /// Blocked cell that no path may cross.
    Obstacle,
    /// Cell holding the start role.
    Start,
    /// Cell holding the end role.
    End,
    /// Walkable cell that belongs to the last solved path.
    ///
    /// This variant is a transient marker. Every edit of the grid turns it back into
    /// [`Cell::Empty`].
    Path,
}

impl Cell {
    /// Returns whether a path may step onto this cell.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// Returns whether the cell holds the start or end role.
    #[must_use]
    pub const fn is_role(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// Editing modes available in the terminal editor.
///
/// This enumeration selects what applying an edit at the cursor does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Flip the cell under the cursor between empty and obstacle.
    #[default]
    Obstacle,
    /// Place the start point under the cursor.
    Start,
    /// Place the end point under the cursor.
    End,
}

impl EditMode {
    /// Returns the string representation of the mode, as shown in the status line.
    #[must_use]
    pub const fn repr(self) -> &'static str {
        match self {
            Self::Obstacle => "toggle obstacle",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Rejections reported by grid editing commands.
///
/// Every variant leaves the grid exactly as it was before the command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridError {
    /// A resize asked for zero rows or columns, or for more cells than distances can count.
    InvalidDimension {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// A coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// An obstacle toggle targeted a cell that holds the start or end role.
    RoleCell(Coord),
    /// A random layout was requested with a probability outside `[0, 1]`.
    InvalidProbability(f64),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols } => {
                write!(f, "invalid dimensions: {rows} rows by {cols} columns")
            }
            Self::OutOfBounds(coord) => write!(f, "coordinate {coord} is outside the grid"),
            Self::RoleCell(coord) => {
                write!(f, "cell {coord} holds the start or end point")
            }
            Self::InvalidProbability(probability) => {
                write!(f, "obstacle probability {probability} is not within [0, 1]")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Outcomes of a solve that did not produce a path.
///
/// None of these is fatal; the grid stays valid and editable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// No start point is set.
    NoOrigin,
    /// No end point is set.
    NoDestination,
    /// The end point cannot be reached from the start point.
    Unreachable,
    /// The distance field does not have the dimensions of the grid it is used with.
    FieldMismatch,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NoOrigin => "start point not set",
            Self::NoDestination => "end point not set",
            Self::Unreachable => "no path to the end point",
            Self::FieldMismatch => "distance field does not match the grid dimensions",
        };

        f.write_str(message)
    }
}

impl std::error::Error for SolveError {}

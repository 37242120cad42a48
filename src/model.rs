//! Maze grid data and editing commands.
//!
//! This module contains the [`MazeGrid`] structure, which owns the layout of the maze: its
//! dimensions, the role of every cell and the start and end coordinates. Every command keeps the
//! role markers and the stored coordinates in agreement.

use rand::Rng;

use crate::types::{Cell, Coord, GridError};

/// Largest accepted number of rows or columns.
pub const MAX_SIDE: usize = 255;

/// Rectangular maze layout.
///
/// This structure is the single source of truth for the maze layout. Cells are stored row-major.
/// At most one cell carries the [`Cell::Start`] role and at most one carries [`Cell::End`]; when
/// start and end coincide, the shared cell is marked as the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    /// Number of rows in the grid.
    rows: usize,
    /// Number of columns in the grid.
    cols: usize,
    /// Row-major cell roles, `rows * cols` long.
    cells: Vec<Cell>,
    /// Coordinate of the start point, if placed.
    start: Option<Coord>,
    /// Coordinate of the end point, if placed.
    end: Option<Coord>,
}

impl MazeGrid {
    /// Builds an empty grid with the given dimensions.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::InvalidDimension`] if either dimension is zero or larger
    /// than [`MAX_SIDE`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::check_dimensions(rows, cols)?;

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            start: None,
            end: None,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the start coordinate, if one is placed.
    #[must_use]
    pub const fn start(&self) -> Option<Coord> {
        self.start
    }

    /// Returns the end coordinate, if one is placed.
    #[must_use]
    pub const fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Returns whether the coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.cols && coord.y < self.rows
    }

    /// Returns the role of the cell at the coordinate, or [`None`] outside the grid.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.index(coord)
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    /// Reinitializes the grid with new dimensions.
    ///
    /// All cells become empty and both start and end are cleared.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::InvalidDimension`] on a zero or oversized dimension; the
    /// grid is left untouched in that case.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        *self = Self::new(rows, cols)?;

        Ok(())
    }

    /// Clears every cell and both role coordinates, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.start = None;
        self.end = None;
    }

    /// Flips the cell at the coordinate between empty and obstacle.
    ///
    /// A path marker on the target cell counts as empty. Any path markers are cleared first.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The coordinate is outside the grid
    /// - The cell holds the start or end role, which an obstacle may not overwrite
    pub fn toggle_obstacle(&mut self, coord: Coord) -> Result<(), GridError> {
        let current = self.cell(coord).ok_or(GridError::OutOfBounds(coord))?;
        if current.is_role() {
            return Err(GridError::RoleCell(coord));
        }

        self.clear_path_markers();
        let next = if current == Cell::Obstacle {
            Cell::Empty
        } else {
            Cell::Obstacle
        };
        self.put(coord, next);

        Ok(())
    }

    /// Places the start point, removing it from its previous cell.
    ///
    /// An obstacle under the new coordinate is silently replaced.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn set_start(&mut self, coord: Coord) -> Result<(), GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds(coord));
        }

        self.clear_path_markers();
        if let Some(previous) = self.start.replace(coord) {
            self.refresh_role(previous);
        }
        self.refresh_role(coord);

        Ok(())
    }

    /// Places the end point, removing it from its previous cell.
    ///
    /// An obstacle under the new coordinate is silently replaced.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn set_end(&mut self, coord: Coord) -> Result<(), GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds(coord));
        }

        self.clear_path_markers();
        if let Some(previous) = self.end.replace(coord) {
            self.refresh_role(previous);
        }
        self.refresh_role(coord);

        Ok(())
    }

    /// Fills the grid with a random layout.
    ///
    /// Every cell independently becomes an obstacle with the given probability, otherwise empty.
    /// Start and end are cleared.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::InvalidProbability`] if the probability is not a number
    /// within `[0, 1]`.
    pub fn generate_random<R: Rng>(
        &mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }

        for cell in &mut self.cells {
            *cell = if rng.random_bool(probability) {
                Cell::Obstacle
            } else {
                Cell::Empty
            };
        }
        self.start = None;
        self.end = None;

        Ok(())
    }

    /// Marks the cells of a solved path.
    ///
    /// Every empty cell of the sequence becomes [`Cell::Path`]; the start and end cells keep their
    /// roles. Markers from an earlier call are cleared first, so the grid holds at most one marked
    /// path at a time.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::OutOfBounds`] for the first coordinate outside the grid,
    /// before any cell is changed.
    pub fn mark_path(&mut self, path: &[Coord]) -> Result<(), GridError> {
        if let Some(outside) = path.iter().find(|coord| !self.contains(**coord)) {
            return Err(GridError::OutOfBounds(*outside));
        }

        self.clear_path_markers();
        for coord in path {
            if self.cell(*coord) == Some(Cell::Empty) {
                self.put(*coord, Cell::Path);
            }
        }

        Ok(())
    }

    /// Turns every path marker back into an empty cell.
    pub fn clear_path_markers(&mut self) {
        for cell in &mut self.cells {
            if *cell == Cell::Path {
                *cell = Cell::Empty;
            }
        }
    }

    /// Returns whether the grid has at least one path marker.
    #[must_use]
    pub fn has_path_markers(&self) -> bool {
        self.cells.contains(&Cell::Path)
    }

    /// Validates a pair of grid dimensions.
    const fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
        if rows > 0 && cols > 0 && rows <= MAX_SIDE && cols <= MAX_SIDE {
            Ok(())
        } else {
            Err(GridError::InvalidDimension { rows, cols })
        }
    }

    /// Maps a coordinate to its row-major index, or [`None`] outside the grid.
    const fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y * self.cols + coord.x)
        } else {
            None
        }
    }

    /// Overwrites the cell at an in-bounds coordinate.
    fn put(&mut self, coord: Coord, cell: Cell) {
        if let Some(slot) = self.index(coord).and_then(|idx| self.cells.get_mut(idx)) {
            *slot = cell;
        }
    }

    /// Rewrites a cell according to the roles that point at it.
    ///
    /// The end role wins over the start role when both share the cell.
    fn refresh_role(&mut self, coord: Coord) {
        let cell = if self.end == Some(coord) {
            Cell::End
        } else if self.start == Some(coord) {
            Cell::Start
        } else {
            Cell::Empty
        };
        self.put(coord, cell);
    }

    /// Builds a grid from a textual pattern, one string per row.
    ///
    /// `#` is an obstacle, `S` the start, `E` the end and any other character an empty cell.
    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &[&str]) -> Self {
        let rows = pattern.len();
        let cols = pattern.first().map_or(0, |row| row.len());
        let mut grid = Self::new(rows, cols).expect("pattern should have valid dimensions");

        for (y, row) in pattern.iter().enumerate() {
            assert_eq!(row.len(), cols, "pattern rows should share a width");
            for (x, byte) in row.bytes().enumerate() {
                let coord = Coord::new(x, y);
                match byte {
                    b'#' => grid
                        .toggle_obstacle(coord)
                        .expect("pattern obstacle should be placeable"),
                    b'S' => grid.set_start(coord).expect("pattern start should be in bounds"),
                    b'E' => grid.set_end(coord).expect("pattern end should be in bounds"),
                    _ => {}
                }
            }
        }

        grid
    }
}

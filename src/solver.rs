//! Shortest-path engine over a maze grid.
//!
//! This module contains the breadth-first distance computation and the greedy path reconstruction
//! that reads a shortest path back out of the resulting distance field. Both functions only read
//! the grid and always return freshly allocated values.

use std::collections::VecDeque;

use crate::{
    model::MazeGrid,
    types::{Cell, Coord, SolveError},
};

/// Distance value of a cell that the traversal never reached.
pub const UNREACHED: i32 = -1;

/// Neighbor enumeration order as `(dx, dy)` offsets.
///
/// This constant fixes the order in which the four edge-sharing neighbors are visited. Distance
/// values do not depend on it, but path reconstruction breaks ties with it.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Per-cell edge count to the end point.
///
/// This structure stores one signed distance per cell in row-major order. A non-negative value is
/// the minimum number of moves from that cell to the end; [`UNREACHED`] marks cells the traversal
/// never visited, obstacles included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    /// Number of rows covered by the field.
    rows: usize,
    /// Number of columns covered by the field.
    cols: usize,
    /// Row-major distances.
    values: Vec<i32>,
}

impl DistanceField {
    /// Builds a field of the given dimensions with every cell unreached.
    #[must_use]
    pub fn unreached(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![UNREACHED; rows.saturating_mul(cols)],
        }
    }

    /// Builds an unreached field matching the dimensions of a grid.
    #[must_use]
    pub fn for_grid(grid: &MazeGrid) -> Self {
        Self::unreached(grid.rows(), grid.cols())
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

    /// Returns the raw value at the coordinate, sentinel included, or [`None`] outside the field.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<i32> {
        self.index(coord)
            .and_then(|idx| self.values.get(idx))
            .copied()
    }

    /// Returns the distance at the coordinate if the cell was reached.
    #[must_use]
    pub fn distance(&self, coord: Coord) -> Option<u32> {
        self.get(coord)
            .and_then(|value| u32::try_from(value).ok())
    }

    /// Returns whether no cell of the field holds a distance.
    #[must_use]
    pub fn is_unsolved(&self) -> bool {
        self.values.iter().all(|value| *value == UNREACHED)
    }

    /// Maps a coordinate to its row-major index, or [`None`] outside the field.
    const fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x < self.cols && coord.y < self.rows {
            Some(coord.y * self.cols + coord.x)
        } else {
            None
        }
    }

    /// Stores a value at an in-bounds coordinate.
    fn set(&mut self, coord: Coord, value: i32) {
        if let Some(slot) = self.index(coord).and_then(|idx| self.values.get_mut(idx)) {
            *slot = value;
        }
    }
}

/// Ordered sequence of cells from the start point to the end point, both included.
///
/// Consecutive cells share an edge and no cell is an obstacle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// Cells in walking order.
    cells: Vec<Coord>,
}

impl Path {
    /// Returns the cells in walking order.
    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Returns the number of cells on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether the path holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of moves along the path.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

/// Computes the distance from every cell to the end point.
///
/// This function runs a breadth-first traversal from the end point over non-obstacle cells, using
/// a FIFO queue. Each cell is assigned a distance and enqueued at most once, so the traversal is
/// linear in the number of cells.
///
/// # Errors
///
/// This function returns [`SolveError::NoDestination`] if the grid has no end point.
pub fn compute_distance_field(grid: &MazeGrid) -> Result<DistanceField, SolveError> {
    let end = grid.end().ok_or(SolveError::NoDestination)?;

    let mut field = DistanceField::for_grid(grid);
    field.set(end, 0);

    let mut queue = VecDeque::from([end]);
    while let Some(current) = queue.pop_front() {
        let Some(distance) = field.get(current) else {
            continue;
        };

        for neighbor in walkable_neighbors(grid, current) {
            if field.get(neighbor) == Some(UNREACHED) {
                field.set(neighbor, distance + 1);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(field)
}

/// Reconstructs a shortest path from the start point by greedy descent over a distance field.
///
/// From the start, the walk repeatedly moves to the reached neighbor with the smallest distance,
/// taking the first one in [`DIRECTIONS`] order on ties, until it stands on the end point. Every
/// step must strictly lower the distance, which bounds the walk by the start's distance.
///
/// # Errors
///
/// This function may return errors if:
/// - The grid has no start point or no end point
/// - The field does not have the grid's dimensions
/// - The start was not reached, or the field offers no strictly descending step (a stale field)
pub fn find_path(grid: &MazeGrid, field: &DistanceField) -> Result<Path, SolveError> {
    let start = grid.start().ok_or(SolveError::NoOrigin)?;
    let end = grid.end().ok_or(SolveError::NoDestination)?;

    if field.rows() != grid.rows() || field.cols() != grid.cols() {
        return Err(SolveError::FieldMismatch);
    }

    let mut remaining = reached(field, start).ok_or(SolveError::Unreachable)?;
    let mut current = start;
    let mut cells = vec![start];

    while current != end {
        let mut best: Option<(Coord, i32)> = None;
        for neighbor in walkable_neighbors(grid, current) {
            let Some(distance) = reached(field, neighbor) else {
                continue;
            };
            if best.is_none_or(|(_, lowest)| distance < lowest) {
                best = Some((neighbor, distance));
            }
        }

        match best {
            Some((next, distance)) if distance < remaining => {
                current = next;
                remaining = distance;
                cells.push(next);
            }
            _ => return Err(SolveError::Unreachable),
        }
    }

    Ok(Path { cells })
}

/// Returns the non-negative distance stored for a coordinate.
fn reached(field: &DistanceField, coord: Coord) -> Option<i32> {
    field.get(coord).filter(|distance| *distance >= 0)
}

/// Iterates over the in-bounds, non-obstacle neighbors of a cell in [`DIRECTIONS`] order.
fn walkable_neighbors(grid: &MazeGrid, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
    DIRECTIONS
        .iter()
        .filter_map(move |&(dx, dy)| coord.offset(dx, dy))
        .filter(move |neighbor| grid.cell(*neighbor).is_some_and(Cell::is_walkable))
}

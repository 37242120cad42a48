//! Command and query surface of the maze core.
//!
//! This module ties the grid and the solver together. The editor drives a [`Maze`] through its
//! commands and reads the layout, the distance field and the last path back for rendering.

use rand::Rng;

use crate::{
    model::MazeGrid,
    solver::{self, DistanceField, Path},
    types::{Coord, GridError, SolveError},
};

/// Progress of the most recent solve request.
///
/// Any edit of the grid returns the maze to [`Phase::Idle`]. [`Maze::solve`] computes distances
/// and the path in one call, so a phase with distances but no path verdict is never observable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing solved since the last edit.
    #[default]
    Idle,
    /// Distances were computed and a shortest path was found and marked.
    PathFound,
    /// Distances were computed but the end point cannot be reached from the start point.
    PathAbsent,
}

/// Maze layout together with the results of its last solve.
#[derive(Clone, Debug)]
pub struct Maze {
    /// Layout being edited.
    grid: MazeGrid,
    /// Distances of the last solve, all unreached while idle.
    distances: DistanceField,
    /// Path of the last successful solve.
    path: Option<Path>,
    /// Progress of the last solve.
    phase: Phase,
}

impl Maze {
    /// Builds an empty, unsolved maze.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::InvalidDimension`] for unusable dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let grid = MazeGrid::new(rows, cols)?;
        let distances = DistanceField::for_grid(&grid);

        Ok(Self {
            grid,
            distances,
            path: None,
            phase: Phase::Idle,
        })
    }

    /// Returns the current layout.
    #[must_use]
    pub const fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Returns the distance field of the last solve.
    #[must_use]
    pub const fn distances(&self) -> &DistanceField {
        &self.distances
    }

    /// Returns the path of the last solve, if one was found.
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Returns the progress of the last solve.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Reinitializes the maze with new dimensions.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::InvalidDimension`]; the maze is left unchanged.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        self.grid.resize(rows, cols)?;
        self.invalidate();

        Ok(())
    }

    /// Flips an obstacle at the coordinate.
    ///
    /// # Errors
    ///
    /// This function forwards the rejections of [`MazeGrid::toggle_obstacle`].
    pub fn toggle_obstacle(&mut self, coord: Coord) -> Result<(), GridError> {
        self.grid.toggle_obstacle(coord)?;
        self.invalidate();

        Ok(())
    }

    /// Places the start point.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::OutOfBounds`] for a coordinate outside the grid.
    pub fn set_start(&mut self, coord: Coord) -> Result<(), GridError> {
        self.grid.set_start(coord)?;
        self.invalidate();

        Ok(())
    }

    /// Places the end point.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::OutOfBounds`] for a coordinate outside the grid.
    pub fn set_end(&mut self, coord: Coord) -> Result<(), GridError> {
        self.grid.set_end(coord)?;
        self.invalidate();

        Ok(())
    }

    /// Replaces the layout with random obstacles.
    ///
    /// # Errors
    ///
    /// This function returns [`GridError::InvalidProbability`] for a probability outside `[0, 1]`.
    pub fn generate_random<R: Rng>(
        &mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<(), GridError> {
        self.grid.generate_random(probability, rng)?;
        self.invalidate();

        Ok(())
    }

    /// Clears the layout at the current dimensions.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.invalidate();
    }

    /// Computes distances, reconstructs the shortest path and marks it on the grid.
    ///
    /// An unreachable end point is an expected outcome and is reported as
    /// [`Phase::PathAbsent`], with the computed distances kept for display.
    ///
    /// # Errors
    ///
    /// This function returns [`SolveError::NoOrigin`] or [`SolveError::NoDestination`] when a role
    /// is missing. Nothing is computed then and the previous results stay cleared.
    pub fn solve(&mut self) -> Result<Phase, SolveError> {
        self.invalidate();

        if self.grid.start().is_none() {
            return Err(SolveError::NoOrigin);
        }
        self.distances = solver::compute_distance_field(&self.grid)?;

        match solver::find_path(&self.grid, &self.distances) {
            Ok(path) => {
                if self.grid.mark_path(path.cells()).is_err() {
                    return Err(SolveError::FieldMismatch);
                }
                self.path = Some(path);
                self.phase = Phase::PathFound;
            }
            Err(SolveError::Unreachable) => self.phase = Phase::PathAbsent,
            Err(err) => return Err(err),
        }

        Ok(self.phase)
    }

    /// Drops every result derived from the previous layout.
    fn invalidate(&mut self) {
        self.grid.clear_path_markers();
        self.distances = DistanceField::for_grid(&self.grid);
        self.path = None;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::types::Cell;

    /// Builds a maze with the start at the top-left and the end at the top-right corner.
    fn corridor_maze() -> Maze {
        let mut maze = Maze::new(3, 3).expect("maze should be created");
        maze.set_start(Coord::new(0, 0)).expect("start should be placed");
        maze.set_end(Coord::new(2, 0)).expect("end should be placed");
        maze
    }

    #[test]
    fn test_new_maze_is_idle() {
        let maze = Maze::new(4, 5).expect("maze should be created");

        assert_eq!(maze.phase(), Phase::Idle);
        assert!(maze.path().is_none());
        assert!(maze.distances().is_unsolved());
        assert_eq!(maze.distances().rows(), 4);
        assert_eq!(maze.distances().cols(), 5);
    }

    #[test]
    fn test_solve_marks_path() {
        let mut maze = corridor_maze();
        maze.toggle_obstacle(Coord::new(1, 0))
            .expect("toggle should succeed");

        assert_eq!(maze.solve(), Ok(Phase::PathFound));

        let path = maze.path().expect("path should be stored");
        assert_eq!(path.len(), 5);
        for coord in &path.cells()[1..4] {
            assert_eq!(maze.grid().cell(*coord), Some(Cell::Path));
        }
        assert_eq!(maze.grid().cell(Coord::new(0, 0)), Some(Cell::Start));
        assert_eq!(maze.grid().cell(Coord::new(2, 0)), Some(Cell::End));
        assert_eq!(maze.distances().distance(Coord::new(0, 0)), Some(4));
    }

    #[test]
    fn test_solve_without_start() {
        let mut maze = corridor_maze();
        assert_eq!(maze.solve(), Ok(Phase::PathFound));

        maze.resize(3, 3).expect("resize should succeed");
        maze.set_end(Coord::new(1, 1)).expect("end should be placed");

        assert_eq!(maze.solve(), Err(SolveError::NoOrigin));
        assert!(maze.distances().is_unsolved());
        assert!(maze.path().is_none());
        assert_eq!(maze.phase(), Phase::Idle);
    }

    #[test]
    fn test_solve_without_end() {
        let mut maze = Maze::new(2, 2).expect("maze should be created");
        maze.set_start(Coord::new(0, 0)).expect("start should be placed");

        assert_eq!(maze.solve(), Err(SolveError::NoDestination));
        assert!(maze.distances().is_unsolved());
    }

    #[test]
    fn test_solve_unreachable_is_not_an_error() {
        let mut maze = corridor_maze();
        for coord in [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)] {
            maze.toggle_obstacle(coord).expect("toggle should succeed");
        }

        assert_eq!(maze.solve(), Ok(Phase::PathAbsent));
        assert!(maze.path().is_none());
        assert!(!maze.grid().has_path_markers());
        assert_eq!(maze.distances().distance(Coord::new(2, 2)), Some(2));
        assert_eq!(maze.distances().distance(Coord::new(0, 0)), None);
    }

    #[test]
    fn test_edits_invalidate_results() {
        let mut maze = corridor_maze();

        assert_eq!(maze.solve(), Ok(Phase::PathFound));
        maze.toggle_obstacle(Coord::new(0, 2))
            .expect("toggle should succeed");
        assert_eq!(maze.phase(), Phase::Idle);
        assert!(maze.distances().is_unsolved());
        assert!(!maze.grid().has_path_markers());

        assert_eq!(maze.solve(), Ok(Phase::PathFound));
        maze.reset();
        assert!(maze.distances().is_unsolved());
        assert!(maze.path().is_none());

        maze.set_start(Coord::new(0, 0)).expect("start should be placed");
        maze.set_end(Coord::new(2, 2)).expect("end should be placed");
        assert_eq!(maze.solve(), Ok(Phase::PathFound));
        maze.resize(4, 2).expect("resize should succeed");
        assert!(maze.distances().is_unsolved());
        assert_eq!(maze.distances().rows(), 4);
        assert_eq!(maze.distances().cols(), 2);
    }

    #[test]
    fn test_failed_command_keeps_results() {
        let mut maze = corridor_maze();
        assert_eq!(maze.solve(), Ok(Phase::PathFound));

        assert!(maze.resize(0, 0).is_err());
        assert!(maze.toggle_obstacle(Coord::new(0, 0)).is_err());

        assert_eq!(maze.phase(), Phase::PathFound);
        assert!(maze.path().is_some());
    }

    #[test]
    fn test_generate_random_clears_roles() {
        let mut maze = corridor_maze();
        assert_eq!(maze.solve(), Ok(Phase::PathFound));

        maze.generate_random(0.5, &mut StdRng::seed_from_u64(3))
            .expect("generation should succeed");

        assert_eq!(maze.grid().start(), None);
        assert_eq!(maze.grid().end(), None);
        assert!(maze.distances().is_unsolved());
        assert_eq!(maze.solve(), Err(SolveError::NoOrigin));
    }

    #[test]
    fn test_resolve_is_stable() {
        let mut maze = corridor_maze();
        maze.toggle_obstacle(Coord::new(1, 0))
            .expect("toggle should succeed");

        assert_eq!(maze.solve(), Ok(Phase::PathFound));
        let first = maze.path().cloned();
        let distances = maze.distances().clone();
        assert_eq!(maze.solve(), Ok(Phase::PathFound));

        assert_eq!(maze.path().cloned(), first);
        assert_eq!(maze.distances(), &distances);
    }
}

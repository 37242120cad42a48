//! Timed reveal of a solved path.
//!
//! The core hands out a complete path at once. This module only decides how much of it the
//! renderer shows, one cell per frame delay.

use std::time::{Duration, Instant};

use crate::{solver::Path, types::Coord};

/// Default delay between two revealed path cells in milliseconds.
pub(crate) const DEFAULT_FRAME_DELAY_MS: u64 = 100;

/// Playback state for the path reveal.
///
/// This structure keeps a copy of the path being revealed, how many of its cells are visible and
/// when the last one appeared.
#[derive(Clone, Debug)]
pub(crate) struct Playback {
    /// Path cells in walking order.
    cells: Vec<Coord>,
    /// Number of leading cells already revealed.
    revealed: usize,
    /// Delay between two reveals.
    frame_delay: Duration,
    /// Timestamp of the last reveal.
    last_update_time: Instant,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_FRAME_DELAY_MS))
    }
}

impl Playback {
    /// Creates an idle playback with the given delay between reveals.
    pub(crate) fn new(frame_delay: Duration) -> Self {
        Self {
            cells: Vec::new(),
            revealed: 0,
            frame_delay,
            last_update_time: Instant::now(),
        }
    }

    /// Starts revealing a new path from its first cell.
    pub(crate) fn start(&mut self, path: &Path, now: Instant) {
        self.cells = path.cells().to_vec();
        self.revealed = 0;
        self.last_update_time = now;
    }

    /// Drops the current path.
    pub(crate) fn clear(&mut self) {
        self.cells.clear();
        self.revealed = 0;
    }

    /// Reveals the next cells whose delay has elapsed at `now`.
    ///
    /// Several cells are revealed at once when more than one delay passed since the last call.
    pub(crate) fn advance(&mut self, now: Instant) {
        while !self.is_finished()
            && now.saturating_duration_since(self.last_update_time) >= self.frame_delay
        {
            self.revealed += 1;
            self.last_update_time += self.frame_delay;
        }
    }

    /// Returns whether the coordinate belongs to the revealed part of the path.
    pub(crate) fn is_revealed(&self, coord: Coord) -> bool {
        self.cells
            .get(..self.revealed)
            .is_some_and(|shown| shown.contains(&coord))
    }

    /// Returns whether every cell of the path is visible.
    pub(crate) fn is_finished(&self) -> bool {
        self.revealed >= self.cells.len()
    }

    /// Returns the number of revealed cells.
    pub(crate) const fn revealed(&self) -> usize {
        self.revealed
    }
}

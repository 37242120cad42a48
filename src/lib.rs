//! Maze editor and shortest-path solver.
//!
//! The core of this crate is the grid model in [`model`], the breadth-first distance computation and
//! path reconstruction in [`solver`], and the command surface tying both together in [`state`]. The
//! terminal editor built on top of it is exposed through [`App`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "The crate is not published, so it carries no repository or readme."
)]

mod animation;
mod app;
mod cli;
mod events;
pub mod model;
pub mod solver;
pub mod state;
pub mod types;
mod ui;

pub use app::App;
pub use cli::Args;

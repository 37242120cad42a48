//! Core application state and loop for the maze editor.

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    animation::Playback,
    cli::Args,
    events,
    state::Maze,
    types::{Coord, EditMode},
    ui,
};

/// Application state container for the maze editor.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui renders the editor and into which Crossterm events are translated as maze commands.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Maze being edited and solved.
    pub(crate) maze: Maze,
    /// Cell under the editing cursor.
    ///
    /// This field always addresses a cell inside the grid; resizing clamps it back in.
    pub(crate) cursor: Coord,
    /// What applying an edit at the cursor does.
    pub(crate) mode: EditMode,
    /// Obstacle percentage for random generation, between 10 and 90.
    pub(crate) randomness: u8,
    /// Random source for maze generation.
    pub(crate) rng: StdRng,
    /// Timed reveal of the last solved path.
    pub(crate) playback: Playback,
    /// Last message shown in the status line.
    pub(crate) status: String,
}

impl App {
    /// Creates the application state from the startup options.
    ///
    /// # Errors
    ///
    /// This function may return errors if the configured dimensions cannot form a grid.
    pub fn new(args: &Args) -> Result<Self> {
        let maze = Maze::new(usize::from(args.rows), usize::from(args.cols))?;
        let rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mode = EditMode::default();

        Ok(Self {
            exit: false,
            maze,
            cursor: Coord::default(),
            mode,
            randomness: args.randomness,
            rng,
            playback: Playback::new(args.frame_delay()),
            status: format!("Mode set to: {}", mode.repr()),
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;

    #[test]
    fn test_app_from_default_args() {
        let app = App::new(&Args::default()).expect("app should be created");

        assert!(!app.exit);
        assert_eq!(app.maze.grid().rows(), 10);
        assert_eq!(app.maze.grid().cols(), 10);
        assert_eq!(app.maze.phase(), Phase::Idle);
        assert_eq!(app.cursor, Coord::new(0, 0));
        assert_eq!(app.mode, EditMode::Obstacle);
        assert_eq!(app.randomness, 30);
        assert_eq!(app.status, "Mode set to: toggle obstacle");
    }

    #[test]
    fn test_app_from_custom_args() {
        let args = Args {
            rows: 4,
            cols: 7,
            randomness: 60,
            frame_delay_ms: 5,
            seed: Some(11),
        };
        let app = App::new(&args).expect("app should be created");

        assert_eq!(app.maze.grid().rows(), 4);
        assert_eq!(app.maze.grid().cols(), 7);
        assert_eq!(app.randomness, 60);
    }
}

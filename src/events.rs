//! Event handling functions for user input and maze commands.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    state::Phase,
    types::{EditMode, SolveError},
    App,
};

/// Step by which the randomness percentage changes.
const RANDOMNESS_STEP: i8 = 10;

/// Lowest randomness percentage offered by the editor.
const RANDOMNESS_MIN: u8 = 10;

/// Highest randomness percentage offered by the editor.
const RANDOMNESS_MAX: u8 = 90;

/// Handles input events and advances the path playback.
///
/// This function polls for keyboard events and dispatches them to [`handle_key`]. It uses a
/// timeout to avoid blocking the UI, so the playback keeps moving while no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    app.playback.advance(Instant::now());

    Ok(())
}

/// Translates a key press into an editor action.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('h') | KeyCode::Left => move_cursor(app, -1, 0),
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 0, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, 0, -1),
        KeyCode::Char('l') | KeyCode::Right => move_cursor(app, 1, 0),
        KeyCode::Char('H') => resize_by(app, 0, -1),
        KeyCode::Char('J') => resize_by(app, 1, 0),
        KeyCode::Char('K') => resize_by(app, -1, 0),
        KeyCode::Char('L') => resize_by(app, 0, 1),
        KeyCode::Char('o') => set_mode(app, EditMode::Obstacle),
        KeyCode::Char('s') => set_mode(app, EditMode::Start),
        KeyCode::Char('e') => set_mode(app, EditMode::End),
        KeyCode::Char(' ') | KeyCode::Enter => apply_edit(app),
        KeyCode::Char('g') => generate(app),
        KeyCode::Char('+' | '=') => adjust_randomness(app, RANDOMNESS_STEP),
        KeyCode::Char('-') => adjust_randomness(app, -RANDOMNESS_STEP),
        KeyCode::Char('x') => solve(app),
        KeyCode::Char('c') => reset(app),
        _ => {}
    }
}

/// Moves the cursor by one cell, staying inside the grid.
fn move_cursor(app: &mut App, dx: isize, dy: isize) {
    if let Some(next) = app
        .cursor
        .offset(dx, dy)
        .filter(|coord| app.maze.grid().contains(*coord))
    {
        app.cursor = next;
    }
}

/// Selects what applying an edit does.
fn set_mode(app: &mut App, mode: EditMode) {
    app.mode = mode;
    app.status = format!("Mode set to: {}", mode.repr());
}

/// Applies the current mode at the cursor.
fn apply_edit(app: &mut App) {
    let cursor = app.cursor;
    let result = match app.mode {
        EditMode::Obstacle => app.maze.toggle_obstacle(cursor),
        EditMode::Start => app.maze.set_start(cursor),
        EditMode::End => app.maze.set_end(cursor),
    };

    match result {
        Ok(()) => {
            app.playback.clear();
            app.status = match app.mode {
                EditMode::Obstacle => format!("Obstacle toggled at {cursor}"),
                EditMode::Start => format!("Start point set at {cursor}"),
                EditMode::End => format!("End point set at {cursor}"),
            };
        }
        Err(err) => app.status = format!("Error: {err}"),
    }
}

/// Grows or shrinks the grid by the given number of rows and columns.
///
/// Resizing reinitializes the whole grid, so the cursor is clamped back into it.
fn resize_by(app: &mut App, drows: isize, dcols: isize) {
    let grid = app.maze.grid();
    let rows = grid.rows().checked_add_signed(drows).unwrap_or(0);
    let cols = grid.cols().checked_add_signed(dcols).unwrap_or(0);

    match app.maze.resize(rows, cols) {
        Ok(()) => {
            app.playback.clear();
            app.cursor.x = app.cursor.x.min(cols.saturating_sub(1));
            app.cursor.y = app.cursor.y.min(rows.saturating_sub(1));
            app.status = format!("Grid resized to {rows} rows by {cols} columns");
        }
        Err(err) => app.status = format!("Error: {err}"),
    }
}

/// Replaces the layout with a random maze at the current randomness.
fn generate(app: &mut App) {
    let probability = f64::from(app.randomness) / 100.0;

    match app.maze.generate_random(probability, &mut app.rng) {
        Ok(()) => {
            app.playback.clear();
            app.status = format!("Random maze generated with {}% obstacles", app.randomness);
        }
        Err(err) => app.status = format!("Error: {err}"),
    }
}

/// Changes the randomness percentage within the editor's range.
fn adjust_randomness(app: &mut App, delta: i8) {
    app.randomness = app
        .randomness
        .saturating_add_signed(delta)
        .clamp(RANDOMNESS_MIN, RANDOMNESS_MAX);
    app.status = format!("Randomness set to {}%", app.randomness);
}

/// Solves the maze and starts revealing the path.
fn solve(app: &mut App) {
    app.playback.clear();

    app.status = match app.maze.solve() {
        Ok(Phase::PathFound) => match app.maze.path() {
            Some(path) => {
                app.playback.start(path, Instant::now());
                format!("Path found in {} moves", path.moves())
            }
            None => "Path found".to_owned(),
        },
        Ok(Phase::PathAbsent) => "No path to the end point!".to_owned(),
        Ok(Phase::Idle) => "Maze not solved".to_owned(),
        Err(SolveError::NoOrigin | SolveError::NoDestination) => {
            "Start or End point not set!".to_owned()
        }
        Err(err) => format!("Error: {err}"),
    };
}

/// Clears the layout at the current dimensions.
fn reset(app: &mut App) {
    app.maze.reset();
    app.playback.clear();
    app.status = "Grid reset".to_owned();
}

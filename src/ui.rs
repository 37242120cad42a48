//! User interface rendering for the maze editor.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    types::{Cell, Coord},
    App,
};

/// Width of a rendered cell in terminal columns.
const CELL_WIDTH: usize = 3;

/// Title of the grid block.
const TITLE: &str = "MazeRunner";

/// Key bindings shown under the grid.
const HELP: &str =
    "(hjkl) move / (s|e|o) mode / (space) apply / (x) solve / (g) random / (+|-) randomness / \
     (HJKL) resize / (c) reset / (q) quit";

/// Updates the application UI based on the persistent state.
///
/// This function renders the grid centered in the frame with the status block below it.
///
/// # Errors
///
/// This function may return errors from layout lookups.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(4), // Status block
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let status_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get status area from layout")?;

    maze(app, frame, maze_content_area)?;
    status(app, frame, status_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the grid inside a bordered block centered in the given area.
///
/// # Errors
///
/// This function may return errors from layout lookups.
pub(crate) fn maze(app: &App, frame: &mut Frame, area: Rect) -> Result<()> {
    let grid = app.maze.grid();
    // The block never gets narrower than its title; larger grids are clipped by the layout.
    let width = grid
        .cols()
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2)
        .max(TITLE.len() + 2);
    let width = u16::try_from(width).unwrap_or(u16::MAX);
    let height = u16::try_from(grid.rows().saturating_add(2)).unwrap_or(u16::MAX);

    let space = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;
    let space = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(space)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    let lines: Vec<Line> = (0..grid.rows())
        .map(|y| {
            Line::from(
                (0..grid.cols())
                    .map(|x| cell_span(app, Coord::new(x, y)))
                    .collect::<Vec<Span>>(),
            )
        })
        .collect();

    let block = Block::bordered()
        .title(TITLE)
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        space,
    );

    Ok(())
}

/// Builds the styled text of one grid cell.
///
/// Empty and path cells show their distance to the end point once it has been computed. Path
/// cells only take the path colour after the playback revealed them.
pub(crate) fn cell_span(app: &App, coord: Coord) -> Span<'static> {
    let cell = app.maze.grid().cell(coord).unwrap_or_default();
    let shown = match cell {
        Cell::Path if !app.playback.is_revealed(coord) => Cell::Empty,
        other => other,
    };

    let label = match cell {
        Cell::Empty | Cell::Path => app
            .maze
            .distances()
            .distance(coord)
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        Cell::Start => "S".to_owned(),
        Cell::End => "E".to_owned(),
        Cell::Obstacle => String::new(),
    };

    let mut style = cell_style(shown);
    if coord == app.cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Span::styled(format!("{label:^width$}", width = CELL_WIDTH), style)
}

/// Returns the colours of a cell role.
pub(crate) fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty => Style::default().fg(Color::Black).bg(Color::White),
        Cell::Obstacle => Style::default().fg(Color::White).bg(Color::Black),
        Cell::Start => Style::default().fg(Color::Black).bg(Color::Green),
        Cell::End => Style::default().fg(Color::White).bg(Color::Red),
        Cell::Path => Style::default().fg(Color::White).bg(Color::Blue),
    }
}

/// Renders the status block with the editor settings, the last message and the key bindings.
pub(crate) fn status(app: &App, frame: &mut Frame, area: Rect) {
    let grid = app.maze.grid();
    let progress = app.maze.path().map_or_else(String::new, |path| {
        format!(" | Path: {}/{}", app.playback.revealed(), path.len())
    });
    let settings = format!(
        "Mode: {} | Randomness: {}% | Grid: {}x{}{progress}",
        app.mode.repr(),
        app.randomness,
        grid.rows(),
        grid.cols()
    );

    let block = Block::default()
        .title_bottom(HELP)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP | Borders::BOTTOM);

    let text = vec![
        Line::raw(settings).centered(),
        Line::raw(app.status.clone()).centered(),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}

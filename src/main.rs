//! This crate contains the source code for the binary for the maze editor mazerunner.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The crate is not published, so it carries no repository or readme."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazerunner::{App, Args};

fn main() -> Result<()> {
    install()?;

    let args = Args::parse();
    let mut app = App::new(&args)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}

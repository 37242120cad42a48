//! Command line configuration.

use std::time::Duration;

use clap::Parser;

use crate::animation::DEFAULT_FRAME_DELAY_MS;

/// Startup options of the maze editor.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Args {
    /// Number of rows of the initial grid, up to [`MAX_SIDE`](crate::model::MAX_SIDE).
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..))]
    pub rows: u8,
    /// Number of columns of the initial grid, up to [`MAX_SIDE`](crate::model::MAX_SIDE).
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..))]
    pub cols: u8,
    /// Obstacle percentage used when generating a random maze.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(10..=90))]
    pub randomness: u8,
    /// Delay between two revealed path cells, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay_ms: u64,
    /// Seed for the random maze generator.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            randomness: 30,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            seed: None,
        }
    }
}

impl Args {
    /// Returns the configured delay between revealed path cells.
    #[must_use]
    pub const fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parser() {
        let parsed = Args::try_parse_from(["mazerunner"]).expect("defaults should parse");

        assert_eq!(parsed, Args::default());
        assert_eq!(parsed.frame_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_explicit_values() {
        let parsed = Args::try_parse_from([
            "mazerunner",
            "--rows",
            "12",
            "--cols",
            "20",
            "--randomness",
            "50",
            "--frame-delay-ms",
            "0",
            "--seed",
            "99",
        ])
        .expect("arguments should parse");

        assert_eq!(parsed.rows, 12);
        assert_eq!(parsed.cols, 20);
        assert_eq!(parsed.randomness, 50);
        assert_eq!(parsed.frame_delay(), Duration::ZERO);
        assert_eq!(parsed.seed, Some(99));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(Args::try_parse_from(["mazerunner", "--rows", "0"]).is_err());
        assert!(Args::try_parse_from(["mazerunner", "--cols", "0"]).is_err());
        assert!(Args::try_parse_from(["mazerunner", "--rows", "abc"]).is_err());
    }

    #[test]
    fn test_dimensions_capped_at_max_side() {
        let parsed = Args::try_parse_from(["mazerunner", "--rows", "255", "--cols", "255"])
            .expect("largest grid should parse");
        assert_eq!(usize::from(parsed.rows), crate::model::MAX_SIDE);
        assert_eq!(usize::from(parsed.cols), crate::model::MAX_SIDE);

        assert!(Args::try_parse_from(["mazerunner", "--cols", "256"]).is_err());
        assert!(Args::try_parse_from(["mazerunner", "--rows", "1", "--cols", "30000"]).is_err());
    }

    #[test]
    fn test_rejects_randomness_outside_slider() {
        assert!(Args::try_parse_from(["mazerunner", "--randomness", "5"]).is_err());
        assert!(Args::try_parse_from(["mazerunner", "--randomness", "95"]).is_err());
    }
}

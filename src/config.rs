use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::Result;
use crate::grid::GridBounds;
use crate::TermInt;

#[derive(Parser, Debug, Clone)]
#[command(name = "stepsnake")]
#[command(about = "A snake that only moves when you tell it to", long_about = None)]
pub struct Args {
    /// Total rows of the board, frame included
    #[arg(long, default_value_t = 24)]
    pub height: TermInt,

    /// Total columns of the board, frame included
    #[arg(long, default_value_t = 80)]
    pub width: TermInt,

    /// Seed for cherry placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Start playing right away without the controls screen
    #[arg(long, default_value_t = false)]
    pub no_intro: bool,
}

impl Args {
    pub fn bounds(&self) -> Result<GridBounds> {
        GridBounds::new(self.height, self.width)
    }

    /// The session RNG together with the seed it was built from.
    pub fn rng(&self) -> (StdRng, u64) {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        (StdRng::seed_from_u64(seed), seed)
    }

    /// Installs a file logger when `--log-file` was given. The terminal is
    /// busy drawing the game, so logs never go to stdout.
    pub fn init_logging(&self) -> Result<()> {
        if let Some(path) = &self.log_file {
            WriteLogger::init(self.log_level, Config::default(), File::create(path)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn defaults_match_the_classic_board() {
        let args = Args::try_parse_from(["stepsnake"]).unwrap();

        assert_eq!(args.bounds().unwrap(), GridBounds::default());
        assert_eq!(args.log_level, LevelFilter::Info);
        assert!(args.log_file.is_none());
        assert!(!args.no_intro);
    }

    #[test]
    fn parses_all_options() {
        let args = Args::try_parse_from([
            "stepsnake",
            "--height",
            "12",
            "--width",
            "30",
            "--seed",
            "99",
            "--log-file",
            "snake.log",
            "--log-level",
            "debug",
            "--no-intro",
        ])
        .unwrap();

        let bounds = args.bounds().unwrap();
        assert_eq!((bounds.height(), bounds.width()), (12, 30));
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.log_file, Some(PathBuf::from("snake.log")));
        assert_eq!(args.log_level, LevelFilter::Debug);
        assert!(args.no_intro);
    }

    #[test]
    fn seed_makes_the_rng_reproducible() {
        let args = Args::try_parse_from(["stepsnake", "--seed", "5"]).unwrap();

        let (mut a, seed) = args.rng();
        let (mut b, _) = args.rng();
        assert_eq!(seed, 5);
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }

    #[test]
    fn tiny_board_is_rejected() {
        let args = Args::try_parse_from(["stepsnake", "--height", "2"]).unwrap();

        assert!(matches!(args.bounds(), Err(GameError::GridTooSmall { .. })));
    }
}

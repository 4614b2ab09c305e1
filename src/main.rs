mod cherry;
mod config;
mod error;
mod game;
mod grid;
mod input;
mod movement;
mod session;
mod snake;
mod term;

use std::process::exit;

use clap::Parser;
use log::{error, info};
use rand::Rng;

use crate::config::Args;
use crate::error::Result;
use crate::game::SnakeGame;
use crate::session::GameSession;
use crate::term::TermManager;

pub type TermInt = u16;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    args.init_logging()?;

    let bounds = args.bounds()?;
    let (rng, seed) = args.rng();
    info!("Starting on a {}x{} board with seed {}", bounds.height(), bounds.width(), seed);

    let session = GameSession::new(bounds, rng)?;
    let mut game = SnakeGame::new(TermManager::new()?, session);

    // The terminal has to be handed back even when the game fails
    let res = play(&mut game, args.no_intro);
    let restored = game.restore();

    res.and(restored)
}

fn play<R: Rng>(game: &mut SnakeGame<R>, skip_intro: bool) -> Result<()> {
    game.initialize()?;
    if skip_intro || game.show_intro()? {
        game.play()?;
    }
    Ok(())
}

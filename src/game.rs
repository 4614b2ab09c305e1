use log::info;
use rand::Rng;

use crate::error::{GameError, Result};
use crate::grid::Direction::*;
use crate::grid::GridBounds;
use crate::input::Input;
use crate::session::{DrawOp, GameSession, Glyph, Outcome};
use crate::term::TermManager;
use crate::TermInt;

const SNAKE_BODY_CHAR: char = 'o';
const CHERRY_CHAR: char = '@';

/// Binds a session to the terminal: reads one key at a time, feeds it to the
/// session and draws whatever the session reports back.
pub struct SnakeGame<R: Rng> {
    term: TermManager,
    session: GameSession<R>,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(term: TermManager, session: GameSession<R>) -> Self {
        SnakeGame { term, session }
    }

    /// Checks the board fits, then takes over the terminal.
    pub fn initialize(&mut self) -> Result<()> {
        let (width, height) = required_terminal_size(self.session.bounds());
        let (w, h) = self.term.get_terminal_size();

        if w < width || h < height {
            return Err(GameError::TerminalTooSmall {
                width,
                height,
                actual_width: w,
                actual_height: h,
            });
        }

        self.term.setup()
    }

    /// Returns `false` if the player quit from the intro screen.
    pub fn show_intro(&mut self) -> Result<bool> {
        let lines = &[
            "Arrow keys or WASD to move",
            "R to restart",
            "Q or Esc to quit",
            "",
            "Press any key to begin"
        ];

        self.draw_board()?;
        self.term.show_message(lines)?;

        let key = self.term.read_key_blocking()?;
        if Input::from(&key) == Input::Quit {
            info!("Quit from the intro screen");
            return Ok(false);
        }

        self.term.hide_message()?;
        Ok(true)
    }

    pub fn play(&mut self) -> Result<()> {
        self.draw_board()?;

        while self.session.is_active() {
            let key = self.term.read_key_blocking()?;

            match self.session.handle(Input::from(&key))? {
                Outcome::Moved(ops) => {
                    self.render(&ops)?;
                    self.print_status()?;
                }
                Outcome::Restarted => self.draw_board()?,
                Outcome::Quit | Outcome::Ignored => {}
            }
        }

        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_board(&mut self) -> Result<()> {
        let bounds = *self.session.bounds();

        self.term.clear()?;
        self.term.draw_borders(bounds.width(), bounds.height())?;
        let ops = self.session.initial_frame();
        self.render(&ops)?;
        self.print_status()?;
        info!("Board drawn, cherry at {:?}", self.session.cherry());
        Ok(())
    }

    fn render(&mut self, ops: &[DrawOp]) -> Result<()> {
        for op in ops {
            match *op {
                DrawOp::Draw(cell, glyph) => self.term.print_at(cell, glyph_char(glyph))?,
                DrawOp::Erase(cell) => self.term.print_at(cell, ' ')?,
            }
        }

        self.term.flush()
    }

    fn print_status(&mut self) -> Result<()> {
        let row = self.session.bounds().height();
        let status = format!(" Length: {}   R: restart   Q: quit", self.session.snake().len());
        self.term.print_line(row, &status)
    }
}

/// (columns, rows) the terminal needs: the board plus one status row below it.
fn required_terminal_size(bounds: &GridBounds) -> (TermInt, TermInt) {
    (bounds.width(), bounds.height().saturating_add(1))
}

fn glyph_char(glyph: Glyph) -> char {
    match glyph {
        Glyph::Head(Up) => '^',
        Glyph::Head(Down) => 'v',
        Glyph::Head(Left) => '<',
        Glyph::Head(Right) => '>',
        Glyph::Body => SNAKE_BODY_CHAR,
        Glyph::Cherry => CHERRY_CHAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_glyph_points_where_the_snake_goes() {
        assert_eq!(glyph_char(Glyph::Head(Up)), '^');
        assert_eq!(glyph_char(Glyph::Head(Right)), '>');
        assert_ne!(glyph_char(Glyph::Body), glyph_char(Glyph::Cherry));
    }

    #[test]
    fn terminal_needs_a_status_row() {
        assert_eq!(required_terminal_size(&GridBounds::default()), (80, 25));

        let tallest = GridBounds::new(TermInt::MAX, 80).unwrap();
        assert_eq!(required_terminal_size(&tallest), (80, TermInt::MAX));
    }
}

use log::{debug, error, info};
use rand::Rng;

use crate::cherry;
use crate::error::Result;
use crate::grid::{Cell, Direction, GridBounds};
use crate::input::Input;
use crate::movement::{self, StepOutcome};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Head(Direction),
    Body,
    Cherry,
}

/// A single screen update for the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawOp {
    Draw(Cell, Glyph),
    Erase(Cell),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed: a refused move, an unknown key, or input after quitting.
    Ignored,
    Moved(Vec<DrawOp>),
    /// The whole board was replaced and has to be drawn from scratch.
    Restarted,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Terminated,
}

/// Owns the snake and the cherry and applies one input at a time to them.
pub struct GameSession<R: Rng> {
    bounds: GridBounds,
    snake: Snake,
    cherry: Cell,
    state: SessionState,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    pub fn new(bounds: GridBounds, mut rng: R) -> Result<Self> {
        let snake = Snake::new(&bounds);
        let cherry = cherry::spawn(&snake, &bounds, &mut rng)?;

        Ok(GameSession { bounds, snake, cherry, state: SessionState::Active, rng })
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn cherry(&self) -> Cell {
        self.cherry
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn handle(&mut self, input: Input) -> Result<Outcome> {
        if !self.is_active() {
            return Ok(Outcome::Ignored);
        }

        match input {
            Input::Move(direction) => self.try_move(direction),
            Input::Restart => {
                self.restart()?;
                Ok(Outcome::Restarted)
            }
            Input::Quit => {
                info!("Quitting with snake length {}", self.snake.len());
                self.state = SessionState::Terminated;
                Ok(Outcome::Quit)
            }
            Input::Other => Ok(Outcome::Ignored),
        }
    }

    /// Everything inside the frame: the whole snake and the cherry.
    pub fn initial_frame(&self) -> Vec<DrawOp> {
        let mut ops: Vec<DrawOp> = self
            .snake
            .segments()
            .skip(1)
            .map(|cell| DrawOp::Draw(cell, Glyph::Body))
            .collect();
        ops.push(DrawOp::Draw(self.snake.head(), self.head_glyph()));
        ops.push(DrawOp::Draw(self.cherry, Glyph::Cherry));
        ops
    }

    ///////////////////////////////////////////////////////////////////////////

    fn try_move(&mut self, direction: Direction) -> Result<Outcome> {
        if !movement::validate(&self.snake, direction, &self.bounds, self.cherry) {
            debug!("Refused move {:?} from {:?}", direction, self.snake.head());
            return Ok(Outcome::Ignored);
        }

        let outcome = movement::step(&mut self.snake, self.cherry, direction, &self.bounds)?;
        let mut ops = self.render_step(&outcome);

        if outcome.ate_cherry {
            self.cherry = self.spawn_or_terminate()?;
            info!(
                "Cherry eaten at {:?}, snake length {}, next cherry at {:?}",
                outcome.new_head,
                self.snake.len(),
                self.cherry
            );
            ops.push(DrawOp::Draw(self.cherry, Glyph::Cherry));
        }

        Ok(Outcome::Moved(ops))
    }

    fn render_step(&self, outcome: &StepOutcome) -> Vec<DrawOp> {
        let mut ops = Vec::with_capacity(4);

        // Erase first: the new head may have moved onto the old tail
        if let Some(vacated) = outcome.vacated {
            ops.push(DrawOp::Erase(vacated));
        }
        ops.push(DrawOp::Draw(outcome.old_head, Glyph::Body));
        ops.push(DrawOp::Draw(outcome.new_head, self.head_glyph()));
        ops
    }

    fn restart(&mut self) -> Result<()> {
        self.snake = Snake::new(&self.bounds);
        self.cherry = self.spawn_or_terminate()?;
        info!("Restarted, next cherry at {:?}", self.cherry);
        Ok(())
    }

    /// A failed spawn leaves the cherry under the snake, so the session is
    /// closed for good before the error goes back to the caller.
    fn spawn_or_terminate(&mut self) -> Result<Cell> {
        cherry::spawn(&self.snake, &self.bounds, &mut self.rng).map_err(|e| {
            error!("Cannot place a cherry with snake length {}: {}", self.snake.len(), e);
            self.state = SessionState::Terminated;
            e
        })
    }

    fn head_glyph(&self) -> Glyph {
        Glyph::Head(self.snake.heading().unwrap_or(Direction::Right))
    }
}

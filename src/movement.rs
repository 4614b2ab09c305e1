use crate::error::{GameError, Result};
use crate::grid::{Cell, Direction, GridBounds};
use crate::snake::Snake;

/// What changed on the board after an accepted step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub new_head: Cell,
    pub old_head: Cell,
    pub ate_cherry: bool,
    /// The tail cell that was given up, `None` when the snake grew.
    pub vacated: Option<Cell>,
}

/// Decides whether the head may move one cell in `direction`.
///
/// The move is refused when the new head would land on the frame or on any
/// body segment. The one segment that may be entered is the tail, since it
/// moves away on the same step, but not when it is also the neck and not
/// when the step eats the cherry and keeps the tail where it is.
pub fn validate(snake: &Snake, direction: Direction, bounds: &GridBounds, cherry: Cell) -> bool {
    let new_head = match snake.head().neighbor(direction) {
        Some(cell) if bounds.contains(cell) => cell,
        _ => return false,
    };

    let tail = snake.tail();
    let tail_moves_away = new_head != cherry && snake.neck() != Some(tail);

    // Walk every segment: near a border the head can touch its body in
    // several places at once.
    !snake
        .segments()
        .any(|segment| segment == new_head && !(tail_moves_away && segment == tail))
}

/// Advances the snake one cell. The head is always pushed; the tail is only
/// dropped when the new head didn't land on the cherry.
///
/// Calling this with a move `validate` would refuse is a bug in the caller
/// and yields `GameError::InvalidMove` without touching the snake.
pub fn step(
    snake: &mut Snake,
    cherry: Cell,
    direction: Direction,
    bounds: &GridBounds,
) -> Result<StepOutcome> {
    if !validate(snake, direction, bounds, cherry) {
        return Err(GameError::InvalidMove { direction });
    }

    let old_head = snake.head();
    let new_head = old_head
        .neighbor(direction)
        .ok_or(GameError::InvalidMove { direction })?;

    snake.push_head(new_head);

    let ate_cherry = new_head == cherry;
    let vacated = if ate_cherry { None } else { snake.pop_tail() };

    Ok(StepOutcome { new_head, old_head, ate_cherry, vacated })
}

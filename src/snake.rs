use std::collections::{HashSet, VecDeque};

use crate::grid::{Cell, Direction, GridBounds};
use crate::TermInt;

pub const INITIAL_SNAKE_LENGTH: usize = 5;

/// The snake's body, head first. `occupied` mirrors `body` exactly so that
/// membership tests don't have to walk the whole sequence.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    occupied: HashSet<Cell>,
}

impl Snake {
    /// Lays the snake out along the middle row with the head on the center
    /// cell and the tail trailing off to the left.
    pub fn new(bounds: &GridBounds) -> Self {
        let head = bounds.center();
        let cells = (0..INITIAL_SNAKE_LENGTH as TermInt).map(|i| Cell::new(head.row, head.col - i));
        Snake::from_cells(cells)
    }

    /// Builds a snake from an explicit head-first layout. The cells must form
    /// a connected, non self-intersecting path.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        let occupied = body.iter().copied().collect();
        let snake = Snake { body, occupied };
        debug_assert!(!snake.body.is_empty(), "snake needs at least one segment");
        debug_assert_eq!(snake.body.len(), snake.occupied.len(), "snake overlaps itself");
        debug_assert!(
            snake.body.iter().zip(snake.body.iter().skip(1)).all(|(a, b)| a.is_adjacent_to(*b)),
            "snake body is not connected"
        );
        snake
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Segment right behind the head, if the snake is longer than one cell.
    pub fn neck(&self) -> Option<Cell> {
        self.body.get(1).copied()
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Where the head is pointing, taken from the neck-to-head step.
    pub fn heading(&self) -> Option<Direction> {
        self.neck().and_then(|neck| Direction::between(neck, self.head()))
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
        self.occupied.insert(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() <= 1 {
            return None;
        }

        let tail = self.body.pop_back()?;
        // The new head may sit on the old tail when chasing it
        if self.body.front() != Some(&tail) {
            self.occupied.remove(&tail);
        }
        Some(tail)
    }
}

impl PartialEq for Snake {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
    }
}

impl Eq for Snake {}

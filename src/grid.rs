use crate::error::{GameError, Result};
use crate::TermInt;
use Direction::*;

/// Smallest board whose interior leaves room to grow well past the
/// starting snake before it runs out of cells for the cherry.
pub const MIN_HEIGHT: TermInt = 5;
pub const MIN_WIDTH: TermInt = 12;

/// One grid square, addressed as (row, column) with the origin at the top left
/// corner of the frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: TermInt,
    pub col: TermInt,
}

impl Cell {
    pub const fn new(row: TermInt, col: TermInt) -> Self {
        Cell { row, col }
    }

    /// The cell one step away in `direction`, or `None` if that would leave
    /// the coordinate space altogether.
    pub fn neighbor(self, direction: Direction) -> Option<Cell> {
        let (d_row, d_col) = direction.delta();
        let row = offset(self.row, d_row)?;
        let col = offset(self.col, d_col)?;
        Some(Cell { row, col })
    }

    pub fn is_adjacent_to(self, other: Cell) -> bool {
        let rows = (self.row as i32 - other.row as i32).abs();
        let cols = (self.col as i32 - other.col as i32).abs();
        rows + cols == 1
    }
}

fn offset(value: TermInt, delta: i8) -> Option<TermInt> {
    if delta < 0 {
        value.checked_sub(delta.unsigned_abs() as TermInt)
    } else {
        value.checked_add(delta as TermInt)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit (row, column) offset.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    /// The direction that leads from `from` to the orthogonally adjacent `to`.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|dir| from.neighbor(*dir) == Some(to))
    }
}

/// The full rectangle including its one cell frame. Only the interior,
/// rows `1..=height - 2` and columns `1..=width - 2`, is playable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridBounds {
    height: TermInt,
    width: TermInt,
}

impl GridBounds {
    pub fn new(height: TermInt, width: TermInt) -> Result<Self> {
        if height < MIN_HEIGHT || width < MIN_WIDTH {
            return Err(GameError::GridTooSmall { height, width });
        }

        Ok(GridBounds { height, width })
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn min_row(&self) -> TermInt {
        1
    }

    pub fn max_row(&self) -> TermInt {
        self.height - 2
    }

    pub fn min_col(&self) -> TermInt {
        1
    }

    pub fn max_col(&self) -> TermInt {
        self.width - 2
    }

    pub fn interior_size(&self) -> usize {
        (self.height as usize - 2) * (self.width as usize - 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.min_row()..=self.max_row()).contains(&cell.row)
            && (self.min_col()..=self.max_col()).contains(&cell.col)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.height / 2, self.width / 2)
    }

    /// Every playable cell, row by row.
    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> {
        let (min_col, max_col) = (self.min_col(), self.max_col());
        (self.min_row()..=self.max_row())
            .flat_map(move |row| (min_col..=max_col).map(move |col| Cell::new(row, col)))
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        GridBounds { height: 24, width: 80 }
    }
}

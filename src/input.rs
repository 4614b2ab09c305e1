use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::grid::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Move(Direction),
    Quit,
    Restart,
    Other,
}

impl From<&KeyEvent> for Input {
    fn from(ev: &KeyEvent) -> Self {
        if is_ctrl_c(ev) {
            return Input::Quit;
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Input::Move(Up),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Input::Move(Left),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Input::Move(Down),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Input::Move(Right),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Input::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => Input::Restart,
            _ => Input::Other,
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

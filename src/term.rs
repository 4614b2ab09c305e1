use crate::error::Result;
use crate::grid::Cell;
use crate::TermInt;
use std::io::{Stdout, Write, stdout};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read};

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    board: (TermInt, TermInt),
    stdout: Stdout,
    screen: Vec<char>,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Cell,
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        let stdout = stdout();
        let screen = vec![' '; width as usize * height as usize];
        Ok(TermManager { width, height, board: (width, height), stdout, screen, current_msg: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Blocks until a key is pressed; mouse and resize events are skipped.
    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    /// (columns, rows)
    pub fn get_terminal_size(&self) -> (TermInt, TermInt) {
        (self.width, self.height)
    }

    /// Frames a `width` x `height` board anchored at the top left corner.
    /// Messages are centered on the last board drawn.
    pub fn draw_borders(&mut self, width: TermInt, height: TermInt) -> Result<()> {
        self.board = (width, height);
        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at(Cell::new(0, x), ch)?;
            self.print_at(Cell::new(end_y, x), ch)?;
        }

        for y in 1..end_y {
            self.print_at(Cell::new(y, 0), '|')?;
            self.print_at(Cell::new(y, end_x), '|')?;
        }

        self.flush()
    }

    /// Writes `text` on `row`, cut or padded with blanks to the board width.
    pub fn print_line(&mut self, row: TermInt, text: &str) -> Result<()> {
        let line = fit_to_width(text, self.board.0 as usize);
        for (x, ch) in line.chars().enumerate() {
            self.print_at(Cell::new(row, x as TermInt), ch)?;
        }
        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.len()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.board.0 / 2, self.board.1 / 2);
        let top_left = Cell::new(
            center.1.saturating_sub(msg_height / 2),
            center.0.saturating_sub(msg_width / 2),
        );

        // Print the top and bottom empty lines
        for y in [top_left.row, top_left.row + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_at_no_save(Cell::new(*y, top_left.col + x_diff), ' ')?;
            }
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.row + i as TermInt + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_at_no_save(Cell::new(y, top_left.col + x_diff as TermInt), ch)?;
            }
        }

        self.current_msg = Some(Message::new(msg_width, msg_height, top_left));
        self.flush()
    }

    pub fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };
        let top_left = msg.top_left();

        // Restore the content from the screen buffer
        for y_diff in 0..msg.height() {
            for x_diff in 0..msg.width() {
                let pos = Cell::new(top_left.row + y_diff, top_left.col + x_diff);
                if let Some(i) = self.screen_index(pos) {
                    let ch = self.screen[i];
                    self.print_at_no_save(pos, ch)?;
                }
            }
        }

        self.flush()
    }

    pub fn print_at(&mut self, pos: Cell, ch: char) -> Result<()> {
        if let Some(i) = self.screen_index(pos) {
            queue!(self.stdout, cursor::MoveTo(pos.col, pos.row), style::Print(ch))?;
            self.screen[i] = ch;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.screen = vec![' '; self.width as usize * self.height as usize];
        self.current_msg = None;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at_no_save(&mut self, pos: Cell, ch: char) -> Result<()> {
        // To be used for printing messages, where we don't wanna overwrite our
        // local buffer to restore it when the message is hidden
        if self.screen_index(pos).is_some() {
            queue!(self.stdout, cursor::MoveTo(pos.col, pos.row), style::Print(ch))?;
        }
        Ok(())
    }

    fn screen_index(&self, pos: Cell) -> Option<usize> {
        if pos.col < self.width && pos.row < self.height {
            Some(self.width as usize * pos.row as usize + pos.col as usize)
        } else {
            None
        }
    }
}

fn fit_to_width(text: &str, width: usize) -> String {
    let cut: String = text.chars().take(width).collect();
    format!("{:<width$}", cut, width = width)
}

impl Message {
    pub fn new(width: TermInt, height: TermInt, top_left: Cell) -> Self {
        Message { width, height, top_left }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn top_left(&self) -> Cell {
        self.top_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_stays_inside_the_board() {
        let status = " Length: 5   R: restart   Q: quit";

        assert_eq!(fit_to_width(status, 12), " Length: 5  ");
        assert_eq!(fit_to_width(" Length: 5", 12), " Length: 5  ");
        assert_eq!(fit_to_width(status, 80).chars().count(), 80);
    }
}

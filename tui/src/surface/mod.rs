//! Output Surfaces
//!
//! The presenter writes through a [`Surface`]: a real terminal in
//! production, a recorder in tests. Surfaces deal in already-encoded
//! strings; styling happens before a line gets here.

mod recording;

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, MoveToColumn, Show};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};

use voidkeeper_core::Section;

pub use recording::{Record, RecordingSurface};

/// Width assumed when the terminal will not say
pub const DEFAULT_COLUMNS: usize = 80;

/// Somewhere the sequence can be written
pub trait Surface {
    /// Width available for centring, in columns
    fn columns(&self) -> usize;

    /// Called as each structural section starts
    fn begin(&mut self, section: &Section) -> io::Result<()> {
        let _ = section;
        Ok(())
    }

    /// Clear the screen and home the cursor
    fn clear(&mut self) -> io::Result<()>;

    /// Write a full line
    fn print_line(&mut self, line: &str) -> io::Result<()>;

    /// Replace the contents of the current line in place
    fn redraw_line(&mut self, line: &str) -> io::Result<()>;

    /// Keep the current line and move below it
    fn commit_line(&mut self) -> io::Result<()>;
}

/// A surface backed by a terminal (or anything writable)
pub struct TerminalSurface<W: Write> {
    out: W,
    columns: usize,
    cursor_hidden: bool,
    /// A redrawn line has not been committed yet
    line_open: bool,
}

impl<W: Write> TerminalSurface<W> {
    /// Wrap `out`, asking the terminal for its width
    pub fn new(out: W) -> Self {
        let columns = terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .unwrap_or(DEFAULT_COLUMNS);
        Self::with_columns(out, columns)
    }

    /// Wrap `out` with a fixed width
    pub fn with_columns(out: W, columns: usize) -> Self {
        Self {
            out,
            columns,
            cursor_hidden: false,
            line_open: false,
        }
    }

    /// End any half-drawn line and show the cursor again
    fn restore(&mut self) {
        if self.line_open {
            let _ = queue!(self.out, Print("\n"));
            self.line_open = false;
        }
        if self.cursor_hidden {
            let _ = execute!(self.out, Show);
            self.cursor_hidden = false;
        }
        let _ = self.out.flush();
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn columns(&self) -> usize {
        self.columns
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    fn print_line(&mut self, line: &str) -> io::Result<()> {
        queue!(self.out, Print(line), Print("\n"))?;
        self.out.flush()
    }

    fn redraw_line(&mut self, line: &str) -> io::Result<()> {
        if !self.cursor_hidden {
            queue!(self.out, Hide)?;
            self.cursor_hidden = true;
        }
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(line)
        )?;
        self.line_open = true;
        self.out.flush()
    }

    fn commit_line(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\n"))?;
        self.line_open = false;
        if self.cursor_hidden {
            queue!(self.out, Show)?;
            self.cursor_hidden = false;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(run: impl FnOnce(&mut TerminalSurface<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        {
            let mut surface = TerminalSurface::with_columns(&mut buf, 80);
            run(&mut surface);
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_print_line_appends_newline() {
        let out = written(|s| s.print_line("hello").unwrap());
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_redraw_hides_cursor_until_commit() {
        let out = written(|s| {
            s.redraw_line("a").unwrap();
            s.redraw_line("b").unwrap();
            s.commit_line().unwrap();
        });
        assert_eq!(out.matches("\x1b[?25l").count(), 1);
        assert_eq!(out.matches("\x1b[?25h").count(), 1);
        assert!(out.ends_with("b\n\x1b[?25h"));
    }

    #[test]
    fn test_cursor_restored_on_drop() {
        let out = written(|s| s.redraw_line("spinning").unwrap());
        assert!(out.ends_with("\x1b[?25h"));
    }

    #[test]
    fn test_drop_ends_half_drawn_line() {
        let out = written(|s| s.redraw_line("⠙ Synchronizing timelines").unwrap());
        assert!(out.ends_with("⠙ Synchronizing timelines\n\x1b[?25h"));
    }

    #[test]
    fn test_drop_after_commit_adds_nothing() {
        let out = written(|s| {
            s.redraw_line("done").unwrap();
            s.commit_line().unwrap();
        });
        assert!(out.ends_with("done\n\x1b[?25h"));
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn test_clear_homes_cursor() {
        let out = written(|s| s.clear().unwrap());
        assert_eq!(out, "\x1b[2J\x1b[1;1H");
    }

    #[test]
    fn test_fixed_columns() {
        let mut buf = Vec::new();
        let surface = TerminalSurface::with_columns(&mut buf, 132);
        assert_eq!(surface.columns(), 132);
    }
}

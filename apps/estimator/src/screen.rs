//! Terminal clearing.
//!
//! Issued through `crossterm` on the session's own writer, so it works on
//! Windows consoles and ANSI terminals alike without spawning `cls`/`clear`.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Erases the whole display and moves the cursor to the top-left corner.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn test_clear_erases_display_and_homes_cursor() {
        let mut out = Vec::new();
        clear_screen(&mut out).unwrap();
        assert_eq!(out, b"\x1B[2J\x1B[1;1H");
    }
}

//! # Prompter
//!
//! Line-oriented question/answer over any `BufRead` + `Write` pair.
//!
//! ## Retry Loop
//! ```text
//! ask_until_valid("Select a price tier (1-3): ", parse_price_tier)
//!      │
//!      ▼
//! ┌──► write prompt, flush, read one line
//! │        │
//! │        ├── EOF ───────────────► Err(CliError::InputClosed)
//! │        │
//! │        ▼
//! │    parse(line)
//! │        │
//! │        ├── Ok(value) ─────────► return value
//! │        │
//! │        └── Err(ValidationError) ── print message
//! └─────────────────────────────────────┘
//! ```
//!
//! Generic over the streams so sessions can be driven from a `Cursor` in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use spray_core::validation::ValidationResult;
use tracing::debug;

use crate::error::CliError;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes text to the terminal as-is and flushes.
    pub fn say(&mut self, text: impl Display) -> Result<(), CliError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes text followed by a newline.
    pub fn say_line(&mut self, text: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Shows `prompt` and returns the answer without its line ending.
    pub fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        self.say(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(answer.to_string())
    }

    /// Asks until `parse` accepts the answer, printing each rejection.
    pub fn ask_until_valid<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, CliError>
    where
        F: Fn(&str) -> ValidationResult<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(field = err.field(), input = %answer, "Rejected input");
                    self.say_line(&err)?;
                }
            }
        }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spray_core::validation::{parse_price_tier, parse_square_footage};
    use spray_core::PriceTier;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn written(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_ask_strips_line_ending() {
        let mut p = prompter("Jane Doe\r\n");
        assert_eq!(p.ask("Name: ").unwrap(), "Jane Doe");
        assert_eq!(written(p), "Name: ");
    }

    #[test]
    fn test_ask_accepts_last_line_without_newline() {
        let mut p = prompter("y");
        assert_eq!(p.ask("Save? ").unwrap(), "y");
    }

    #[test]
    fn test_ask_at_eof_is_input_closed() {
        let mut p = prompter("");
        assert!(matches!(p.ask("Name: "), Err(CliError::InputClosed)));
    }

    #[test]
    fn test_ask_until_valid_retries_and_reports() {
        let mut p = prompter("abc\n-5\n0\n1200\n");
        let sq_ft = p.ask_until_valid("Sq ft: ", parse_square_footage).unwrap();
        assert_eq!(sq_ft, 1200.0);

        assert_eq!(
            written(p),
            "Sq ft: Please enter a valid number.\n\
             Sq ft: Square footage must be greater than zero.\n\
             Sq ft: Square footage must be greater than zero.\n\
             Sq ft: "
        );
    }

    #[test]
    fn test_ask_until_valid_never_advances_on_bad_input() {
        let mut p = prompter("4\n0\n");
        let result = p.ask_until_valid("Tier: ", parse_price_tier);
        assert!(matches!(result, Err(CliError::InputClosed)));

        let mut p = prompter("4\n2\n");
        assert_eq!(
            p.ask_until_valid("Tier: ", parse_price_tier).unwrap(),
            PriceTier::Medium
        );
    }
}

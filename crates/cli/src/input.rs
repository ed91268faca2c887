//! Interactive console input.
//!
//! The line reader and writer are injected into every handler rather
//! than read from process globals, so flows can be driven from byte
//! buffers in tests.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::CliError;
use domain::dates;

/// A line-oriented console over any reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// The output side, for table rendering.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Writes a full line.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    /// Writes `prompt` as-is (no newline) and reads one line, with the
    /// trailing line break removed.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompts and parses the reply.
    pub fn prompt_parse<T>(&mut self, prompt: &str) -> Result<T, CliError>
    where
        T: FromStr,
        CliError: From<T::Err>,
    {
        Ok(self.prompt(prompt)?.trim().parse()?)
    }

    /// Prompts for a date entered as `YYYY-MM-DD`.
    pub fn prompt_iso_date(&mut self, prompt: &str) -> Result<NaiveDate, CliError> {
        Ok(dates::parse_iso(&self.prompt(prompt)?)?)
    }

    /// Prompts for a date entered as `mm-dd-yyyy`.
    pub fn prompt_us_date(&mut self, prompt: &str) -> Result<NaiveDate, CliError> {
        Ok(dates::parse_mdy(&self.prompt(prompt)?)?)
    }

    /// Reads the menu selection, re-prompting until a number is entered.
    pub fn read_choice(&mut self) -> Result<u32, CliError> {
        loop {
            match self.prompt("Please make your choice: ")?.trim().parse() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Your input is invalid!")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_writes_then_reads() {
        let mut console = console("Ann\n");
        let reply = console.prompt("Enter your First Name: ").unwrap();
        assert_eq!(reply, "Ann");

        let (_, out) = console.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Enter your First Name: ");
    }

    #[test]
    fn test_prompt_strips_crlf() {
        let mut console = console("Ann\r\n");
        assert_eq!(console.prompt("? ").unwrap(), "Ann");
    }

    #[test]
    fn test_prompt_eof_is_an_error() {
        let mut console = console("");
        let err = console.prompt("? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompt_parse_number() {
        let mut console = console(" 42 \n");
        let n: i32 = console.prompt_parse("k: ").unwrap();
        assert_eq!(n, 42);
    }

    #[test]
    fn test_prompt_parse_rejects_garbage() {
        let mut console = console("forty-two\n");
        let result: Result<i32, _> = console.prompt_parse("k: ");
        assert!(matches!(result, Err(CliError::InvalidInt(_))));
    }

    #[test]
    fn test_read_choice_reprompts_on_invalid_input() {
        let mut console = console("abc\n\n7\n");
        assert_eq!(console.read_choice().unwrap(), 7);

        let (_, out) = console.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Please make your choice: ").count(), 3);
        assert_eq!(out.matches("Your input is invalid!").count(), 2);
    }

    #[test]
    fn test_prompt_dates_use_their_own_formats() {
        let mut console = console("2020-03-04\n03-04-2020\n");
        let iso = console.prompt_iso_date("a: ").unwrap();
        let mdy = console.prompt_us_date("b: ").unwrap();
        assert_eq!(iso, mdy);
    }
}

//! Console IO abstraction for the quiz dialog.
//!
//! Production code wraps stdin/stdout; tests drive the same code paths
//! through in-memory readers and writers.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-oriented console IO.
pub trait Io {
    /// Print a line followed by a newline.
    fn print_line(&mut self, line: &str) -> io::Result<()>;

    /// Print a prompt (without newline), flush, and read one trimmed line.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// [`Io`] over arbitrary read/write streams.
pub struct StreamIo<R, W> {
    input: R,
    output: W,
}

impl StreamIo<BufReader<Stdin>, Stdout> {
    /// Interactive IO over stdin/stdout.
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> StreamIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for inspecting captured test output.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Io for StreamIo<R, W> {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Read an integer in `min..=max`, re-prompting on invalid input.
pub fn read_int_for_range(
    io: &mut impl Io,
    min: u32,
    max: u32,
    prompt: &str,
    error_message: &str,
) -> io::Result<u32> {
    loop {
        let line = io.read_line(&format!("{prompt}: "))?;
        match line.parse::<u32>() {
            Ok(n) if (min..=max).contains(&n) => return Ok(n),
            _ => io.print_line(error_message)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_int_retries_until_value_is_in_range() {
        let input = Cursor::new("nope\n9\n2\n");
        let mut io = StreamIo::new(input, Vec::new());

        let n = read_int_for_range(&mut io, 1, 3, "Pick", "Incorrect input number!").unwrap();
        assert_eq!(n, 2);

        let output = String::from_utf8(io.output().clone()).unwrap();
        assert_eq!(output.matches("Incorrect input number!").count(), 2);
    }

    #[test]
    fn read_line_trims_whitespace() {
        let input = Cursor::new("  John  \n");
        let mut io = StreamIo::new(input, Vec::new());
        assert_eq!(io.read_line("Name: ").unwrap(), "John");
    }

    #[test]
    fn read_line_fails_on_closed_input() {
        let input = Cursor::new("");
        let mut io = StreamIo::new(input, Vec::new());
        assert!(io.read_line("? ").is_err());
    }
}

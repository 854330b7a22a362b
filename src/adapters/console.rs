use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::domain::ports::Prompt;
use crate::utils::error::{ClinicError, Result};

/// Prompt over a line reader and a writer; stdin/stdout by default.
pub struct ConsoleIo<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl ConsoleIo<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompt for ConsoleIo<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ClinicError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, "{}", message) {
            tracing::warn!("Could not write to console: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_until_eof() {
        let mut console = ConsoleIo::new(Cursor::new("Rex\r\nDog\n"), Vec::new());

        assert_eq!(console.ask("Name: ").unwrap(), "Rex");
        assert_eq!(console.ask("Species: ").unwrap(), "Dog");
        assert!(matches!(console.ask("Breed: "), Err(ClinicError::InputClosed)));

        console.say("done");
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "Name: Species: Breed: done\n");
    }
}

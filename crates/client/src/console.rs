//! Line-oriented terminal I/O.
use std::io::{self, BufRead, Write};

/// Reads player input line by line and writes game text.
///
/// Generic over the streams so tests can drive the client with in-memory
/// buffers.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    prompt: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, prompt: impl Into<String>) -> Self {
        Self {
            reader,
            writer,
            prompt: prompt.into(),
        }
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.writer, "{}", line.as_ref())
    }

    pub fn say_all<I>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// Prompts for one line. `None` once the input is exhausted.
    pub fn ask(&mut self) -> io::Result<Option<String>> {
        write!(self.writer, "{}", self.prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_trims_and_reports_end_of_input() {
        let mut out = Vec::new();
        let mut console = Console::new(" 2 \n".as_bytes(), &mut out, "> ");

        assert_eq!(console.ask().unwrap().as_deref(), Some("2"));
        assert_eq!(console.ask().unwrap(), None);
        drop(console);
        assert_eq!(String::from_utf8(out).unwrap(), "> > ");
    }

    #[test]
    fn say_all_writes_one_line_each() {
        let mut out = Vec::new();
        let mut console = Console::new(io::empty(), &mut out, "> ");
        console.say_all(["a", "b"]).unwrap();
        drop(console);
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n");
    }
}

use std::io;

use crate::{error::ShellError, reader::LineReader};

/// The shell's view of the terminal: one input stream, one output stream and
/// one diagnostics stream.
pub trait Prompter {
    fn read(&mut self) -> Result<String, ShellError>;
    fn at_eof(&self) -> bool;
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<()>;
    fn report(&mut self, message: &str) -> anyhow::Result<()>;
}

pub struct ConsolePrompter<R: io::BufRead, W: io::Write, E: io::Write> {
    reader: LineReader<R>,
    writer: W,
    error_writer: E,
}

impl<R: io::BufRead, W: io::Write, E: io::Write> Prompter for ConsolePrompter<R, W, E> {
    fn read(&mut self) -> Result<String, ShellError> {
        return self.reader.read_line();
    }

    fn at_eof(&self) -> bool {
        return self.reader.at_eof();
    }

    fn prompt(&mut self, prompt: &str) -> anyhow::Result<()> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        return Ok(());
    }

    fn report(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.error_writer, "{}", message)?;
        self.error_writer.flush()?;

        return Ok(());
    }
}

impl<R: io::BufRead, W: io::Write, E: io::Write> ConsolePrompter<R, W, E> {
    pub fn new(reader: R, writer: W, error_writer: E) -> Self {
        return ConsolePrompter {
            reader: LineReader::new(reader),
            writer,
            error_writer,
        };
    }
}

use std::io;

use crate::{buffer, error::ShellError};

/// Initial line capacity, and the step it grows by.
pub const LINE_BUFSIZE: usize = 1024;

/// Pulls one line at a time out of a buffered byte stream.
///
/// An empty line is returned both for a blank input line and once the stream is
/// exhausted; [`LineReader::at_eof`] tells the two apart.
pub struct LineReader<R: io::BufRead> {
    reader: R,
    eof: bool,
}

impl<R: io::BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        return LineReader { reader, eof: false };
    }

    pub fn at_eof(&self) -> bool {
        return self.eof;
    }

    /// Reads up to the next `\n` (excluded) or end of input.
    pub fn read_line(&mut self) -> Result<String, ShellError> {
        let mut line: Vec<u8> = Vec::new();
        buffer::grow(&mut line, LINE_BUFSIZE, LINE_BUFSIZE)?;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ShellError::Io(e)),
            };

            if available.is_empty() {
                self.eof = true;
                break;
            }

            let (chunk, terminated) = match available.iter().position(|&b| return b == b'\n') {
                Some(end) => (&available[..end], true),
                None => (available, false),
            };

            let needed = line.len() + chunk.len();
            buffer::grow(&mut line, needed, LINE_BUFSIZE)?;
            line.extend_from_slice(chunk);

            let consumed = chunk.len() + usize::from(terminated);
            self.reader.consume(consumed);

            if terminated {
                break;
            }
        }

        let line = match String::from_utf8(line) {
            Ok(line) => line,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };

        return Ok(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_without_terminator() {
        let input = b"ls -la\nhelp\n";
        let mut reader = LineReader::new(input.as_slice());

        assert_eq!("ls -la", reader.read_line().unwrap());
        assert_eq!("help", reader.read_line().unwrap());
        assert!(!reader.at_eof());
    }

    #[test]
    fn blank_line_is_not_eof() {
        let input = b"\nexit\n";
        let mut reader = LineReader::new(input.as_slice());

        assert_eq!("", reader.read_line().unwrap());
        assert!(!reader.at_eof());
        assert_eq!("exit", reader.read_line().unwrap());
    }

    #[test]
    fn empty_input_yields_empty_line_and_eof() {
        let input = b"";
        let mut reader = LineReader::new(input.as_slice());

        assert_eq!("", reader.read_line().unwrap());
        assert!(reader.at_eof());
    }

    #[test]
    fn unterminated_last_line_is_kept() {
        let input = b"echo hi";
        let mut reader = LineReader::new(input.as_slice());

        assert_eq!("echo hi", reader.read_line().unwrap());
        assert!(reader.at_eof());
    }

    #[test]
    fn line_longer_than_initial_capacity() {
        let long: String = (0..LINE_BUFSIZE * 3 + 17)
            .map(|i| return (b'a' + (i % 26) as u8) as char)
            .collect();
        let input = format!("{}\nnext\n", long);
        let mut reader = LineReader::new(input.as_bytes());

        assert_eq!(long, reader.read_line().unwrap());
        assert_eq!("next", reader.read_line().unwrap());
    }

    #[test]
    fn line_split_across_small_buffer_reads() {
        let input = b"first second third\n";
        let inner = io::BufReader::with_capacity(4, input.as_slice());
        let mut reader = LineReader::new(inner);

        assert_eq!("first second third", reader.read_line().unwrap());
    }

    #[test]
    fn carriage_return_is_preserved() {
        let input = b"help\r\n";
        let mut reader = LineReader::new(input.as_slice());

        assert_eq!("help\r", reader.read_line().unwrap());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let input = b"a\xffb\n";
        let mut reader = LineReader::new(input.as_slice());

        assert_eq!("a\u{fffd}b", reader.read_line().unwrap());
    }
}

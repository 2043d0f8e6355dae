use std::io::{self, BufRead, Write};

/// Line-oriented input/output consumed by the session orchestrator.
pub trait SessionIo {
    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write a prompt with no trailing newline.
    fn write(&mut self, text: &str) -> io::Result<()>;

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// [`SessionIo`] over any buffered reader and writer.
#[derive(Debug)]
pub struct LineIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> SessionIo for LineIo<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_terminators_but_keeps_inner_whitespace() {
        let input = Cursor::new(b" Down town \r\nlast".to_vec());
        let mut io = LineIo::new(input, Vec::new());
        assert_eq!(io.read_line().unwrap().as_deref(), Some(" Down town "));
        assert_eq!(io.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(io.read_line().unwrap(), None);
    }

    #[test]
    fn write_line_appends_newline() {
        let mut io = LineIo::new(Cursor::new(Vec::new()), Vec::new());
        io.write("a: ").unwrap();
        io.write_line("b").unwrap();
        assert_eq!(io.into_writer(), b"a: b\n");
    }
}

use std::fmt::Display;
use std::io::{self, BufRead, BufReader, ErrorKind, Lines, Read, Write};
use tracing::instrument;

/// A line oriented io interface.
#[derive(Debug)]
pub struct Io<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Io<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Io {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Receive a line, failing with [`ErrorKind::UnexpectedEof`] once the input is exhausted.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn recv(&mut self) -> io::Result<String> {
        self.reader.next().ok_or(ErrorKind::UnexpectedEof)?
    }

    /// Send a message followed by a line break.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", msg)
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::VecDeque, io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn recv_waits_for_line_break(#[strategy("[^\r\n]*")] s: String) {
        let mut buf = VecDeque::new();
        writeln!(&mut buf, "{}", s)?;
        let mut io = Io::new(empty(), &mut buf);
        assert_eq!(io.recv()?, s);
    }

    #[test]
    fn recv_fails_once_input_is_exhausted() {
        let mut io = Io::new(empty(), empty());
        assert_eq!(io.recv().map_err(|e| e.kind()), Err(ErrorKind::UnexpectedEof));
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf, empty());
        io.send(&s)?;
        io.flush()?;
        drop(io);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }
}

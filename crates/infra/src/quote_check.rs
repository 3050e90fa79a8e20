// crates/infra/src/quote_check.rs
use std::{
    fmt,
    io::{self, Read},
};

/// Quoting violation found while scanning raw CSV bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteError {
    /// 1-based line the offending field starts on.
    pub line: u64,
    pub reason: &'static str,
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}", self.reason, self.line)
    }
}

impl std::error::Error for QuoteError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    /// Just saw `"` inside a quoted field: either an escape or the closing quote.
    QuoteInQuoted,
}

/// `Read` adapter enforcing strict RFC 4180 quoting on the bytes passing through.
///
/// The `csv` crate accepts a bare `"` inside an unquoted field and an
/// unterminated quoted field at EOF. Those, and text after a closing quote, are
/// rejected here with an `io::ErrorKind::InvalidData` error wrapping a [`QuoteError`].
pub struct QuoteChecked<R> {
    inner: R,
    delimiter: u8,
    state: State,
    line: u64,
    field_line: u64,
}

impl<R: Read> QuoteChecked<R> {
    pub fn new(inner: R, delimiter: u8) -> Self {
        Self { inner, delimiter, state: State::FieldStart, line: 1, field_line: 1 }
    }

    fn violation(&self, reason: &'static str) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, QuoteError { line: self.field_line, reason })
    }

    fn step(&mut self, byte: u8) -> io::Result<()> {
        let boundary = byte == self.delimiter || byte == b'\n' || byte == b'\r';
        self.state = match self.state {
            State::FieldStart | State::Unquoted if boundary => State::FieldStart,
            State::FieldStart if byte == b'"' => State::Quoted,
            State::FieldStart => State::Unquoted,
            State::Unquoted if byte == b'"' => return Err(self.violation("bare quote in unquoted field")),
            State::Unquoted => State::Unquoted,
            State::Quoted if byte == b'"' => State::QuoteInQuoted,
            State::Quoted => State::Quoted,
            State::QuoteInQuoted if byte == b'"' => State::Quoted,
            State::QuoteInQuoted if boundary => State::FieldStart,
            State::QuoteInQuoted => return Err(self.violation("extraneous quote after quoted field")),
        };
        if byte == b'\n' {
            self.line += 1;
        }
        if self.state == State::FieldStart {
            self.field_line = self.line;
        }
        Ok(())
    }

    fn finish(&self) -> io::Result<()> {
        if self.state == State::Quoted {
            return Err(self.violation("unterminated quoted field"));
        }
        Ok(())
    }
}

impl<R: Read> Read for QuoteChecked<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 {
            self.finish()?;
            return Ok(0);
        }
        for &byte in &buf[..n] {
            self.step(byte)?;
        }
        Ok(n)
    }
}

/// The quoting violation behind an I/O error, if that is what it carries.
pub fn quote_error(err: &io::Error) -> Option<&QuoteError> {
    err.get_ref().and_then(|inner| inner.downcast_ref::<QuoteError>())
}

//! Character sources for the lexer.
//!
//! The lexer does not care where its characters come from. This module
//! defines the [`CharSource`] trait - one code point per call, with end of
//! input and I/O failure as distinct outcomes - plus the two sources used in
//! practice: in-memory `str::Chars` and a UTF-8 decoding adapter over any
//! [`std::io::Read`].

use std::io::{self, Read};

/// A sequential source of Unicode code points.
///
/// Each call to [`next_char`](CharSource::next_char) yields exactly one of:
/// a code point, end of input (`Ok(None)`), or an I/O fault. Sources are
/// strictly forward-only; the lexer never asks to rewind.
///
/// Implementations must be cheap to call once per character - the lexer
/// performs no read-ahead buffering of its own.
///
/// # Example
///
/// ```
/// use slxc_lex::source::CharSource;
///
/// let mut source = "ab".chars();
/// assert_eq!(source.next_char().unwrap(), Some('a'));
/// assert_eq!(source.next_char().unwrap(), Some('b'));
/// assert_eq!(source.next_char().unwrap(), None);
/// ```
pub trait CharSource {
    /// Reads the next code point.
    ///
    /// # Returns
    ///
    /// `Ok(Some(c))` on success, `Ok(None)` at end of input, or `Err` if the
    /// underlying source failed.
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

impl CharSource for std::str::Chars<'_> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.next())
    }
}

/// A [`CharSource`] that decodes UTF-8 from an arbitrary reader.
///
/// Reads one code point at a time, so a fault from the reader surfaces
/// exactly at the character where it happened. Invalid UTF-8 is reported as
/// an [`io::ErrorKind::InvalidData`] error; a sequence cut off by end of
/// input as [`io::ErrorKind::UnexpectedEof`].
///
/// The reader is borrowed for the lifetime of the lexer run; opening and
/// closing it is the caller's business.
///
/// # Example
///
/// ```
/// use slxc_lex::source::{CharSource, Utf8Reader};
///
/// let data: &[u8] = "(def)".as_bytes();
/// let mut source = Utf8Reader::new(data);
/// assert_eq!(source.next_char().unwrap(), Some('('));
/// ```
pub struct Utf8Reader<R> {
    inner: R,
}

impl<R: Read> Utf8Reader<R> {
    /// Wraps a reader in a UTF-8 decoding source.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consumes the adapter, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> CharSource for Utf8Reader<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        let first = match self.read_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };

        // ASCII fast path.
        if first < 0x80 {
            return Ok(Some(first as char));
        }

        // Decode the leading byte: sequence length and minimum value
        // (anything below the minimum is an overlong encoding).
        let (len, min, mut value) = match first {
            0xC0..=0xDF => (2, 0x80u32, u32::from(first & 0x1F)),
            0xE0..=0xEF => (3, 0x800, u32::from(first & 0x0F)),
            0xF0..=0xF7 => (4, 0x10000, u32::from(first & 0x07)),
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid UTF-8 leading byte 0x{first:02X}"),
                ));
            },
        };

        for _ in 1..len {
            let b = self.read_byte()?.ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended inside a UTF-8 sequence",
                )
            })?;
            if b & 0xC0 != 0x80 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid UTF-8 continuation byte 0x{b:02X}"),
                ));
            }
            value = (value << 6) | u32::from(b & 0x3F);
        }

        if value < min {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "overlong UTF-8 encoding",
            ));
        }

        char::from_u32(value).map(Some).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid code point U+{value:04X} in UTF-8 input"),
            )
        })
    }
}

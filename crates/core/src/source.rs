//! Sequential byte sources.
//!
//! The converter needs three primitives from its input: read one byte, peek
//! one byte without consuming it, and discard a counted run of bytes. Any
//! [`BufRead`] provides all three without extra buffering, so the trait has a
//! blanket implementation for it; slices, `Cursor`s, `BufReader<File>` and a
//! locked stdin all work directly.

use std::io::{self, BufRead, ErrorKind, Read};

/// A sequential byte source with one byte of lookahead.
///
/// End of input is `Ok(None)` (or a short count from [`skip_bytes`]),
/// never an error.
///
/// [`skip_bytes`]: ByteSource::skip_bytes
pub trait ByteSource {
    /// Read and consume the next byte.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Return the next byte without consuming it.
    fn peek_byte(&mut self) -> io::Result<Option<u8>>;

    /// Discard up to `n` bytes and return how many were discarded.
    ///
    /// A result smaller than `n` means the input ended first.
    fn skip_bytes(&mut self, n: u64) -> io::Result<u64>;
}

impl<R: BufRead> ByteSource for R {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let next = self.peek_byte()?;
        if next.is_some() {
            self.consume(1);
        }
        Ok(next)
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn skip_bytes(&mut self, n: u64) -> io::Result<u64> {
        io::copy(&mut self.by_ref().take(n), &mut io::sink())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    #[test]
    fn read_and_peek_on_slice() {
        let mut src: &[u8] = b"ab";
        assert_eq!(src.peek_byte().unwrap(), Some(b'a'));
        assert_eq!(src.peek_byte().unwrap(), Some(b'a'));
        assert_eq!(src.read_byte().unwrap(), Some(b'a'));
        assert_eq!(src.read_byte().unwrap(), Some(b'b'));
        assert_eq!(src.read_byte().unwrap(), None);
        assert_eq!(src.peek_byte().unwrap(), None);
    }

    #[test]
    fn skip_reports_short_count_at_end() {
        let mut src = Cursor::new(b"0123456789".to_vec());
        assert_eq!(src.skip_bytes(4).unwrap(), 4);
        assert_eq!(src.read_byte().unwrap(), Some(b'4'));
        assert_eq!(src.skip_bytes(100).unwrap(), 5);
        assert_eq!(src.read_byte().unwrap(), None);
    }

    #[test]
    fn skip_crosses_buffer_boundaries() {
        let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        let mut src = BufReader::with_capacity(7, Cursor::new(data));
        assert_eq!(src.skip_bytes(9_999).unwrap(), 9_999);
        assert_eq!(src.read_byte().unwrap(), Some((9_999 % 256) as u8));
    }

    /// Fails with `Interrupted` on the first read, then serves `data`.
    struct InterruptedOnce {
        interrupted: bool,
        data: Cursor<Vec<u8>>,
    }

    impl Read for InterruptedOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let mut src = BufReader::new(InterruptedOnce {
            interrupted: false,
            data: Cursor::new(b"xy".to_vec()),
        });
        assert_eq!(src.peek_byte().unwrap(), Some(b'x'));
        assert!(src.get_ref().interrupted);
        assert_eq!(src.read_byte().unwrap(), Some(b'x'));
        assert_eq!(src.read_byte().unwrap(), Some(b'y'));
        assert_eq!(src.read_byte().unwrap(), None);
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn read_faults_surface() {
        let mut src = BufReader::new(Failing);
        let err = src.read_byte().unwrap_err();
        assert_eq!(err.to_string(), "device gone");
    }
}

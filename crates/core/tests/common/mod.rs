//! Shared test helpers for `rtf2txt_core` integration tests.

#![allow(unreachable_pub)]

use std::io::{self, BufRead, Read};

use rtf2txt_core::{Conversion, ConvertConfig, Converter};

/// Convert with default settings, asserting success and UTF-8 output.
#[allow(dead_code)]
pub fn text_of(input: &str) -> String {
    let conv = run(input.as_bytes());
    String::from_utf8(conv.text).expect("output is UTF-8")
}

/// Convert with default settings (diagnostics collected), asserting success.
#[allow(dead_code)]
pub fn run(input: &[u8]) -> Conversion {
    Converter::with_config(ConvertConfig::default())
        .convert(input)
        .unwrap_or_else(|e| panic!("conversion failed: {e}"))
}

/// Diagnostic ids in emission order.
#[allow(dead_code)]
pub fn diag_ids(conv: &Conversion) -> Vec<&str> {
    conv.diagnostics.iter().map(|d| &*d.id).collect()
}

/// A reader that yields `data` and then fails with `kind`.
#[allow(dead_code)]
pub struct FailingReader {
    data: Vec<u8>,
    pos: usize,
    kind: io::ErrorKind,
}

impl FailingReader {
    #[allow(dead_code)]
    pub fn new(data: &[u8], kind: io::ErrorKind) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
            kind,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = {
            let avail = self.fill_buf()?;
            let n = avail.len().min(buf.len());
            buf[..n].copy_from_slice(&avail[..n]);
            n
        };
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.data.len() {
            return Err(io::Error::new(self.kind, "injected failure"));
        }
        Ok(&self.data[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos += amt;
    }
}

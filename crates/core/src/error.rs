//! Typed conversion errors.
//!
//! Only failures of the input itself are errors. Vocabulary and structure
//! irregularities are recovered from and reported as diagnostics instead.

use std::fmt;
use std::io;

/// A conversion failure. No partial output accompanies it.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The byte source failed for a reason other than end of input.
    #[error("failed to read input at byte {offset}")]
    SourceRead {
        /// Number of bytes successfully consumed before the fault.
        offset: usize,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Input ended in the middle of a construct that needs more bytes.
    #[error("unexpected end of input at byte {offset} while reading {expecting}")]
    UnexpectedEof {
        /// Total number of bytes consumed.
        offset: usize,
        /// The construct that was left incomplete.
        expecting: Expecting,
    },
}

impl ConvertError {
    /// Byte offset at which the conversion stopped.
    pub fn offset(&self) -> usize {
        match self {
            ConvertError::SourceRead { offset, .. }
            | ConvertError::UnexpectedEof { offset, .. } => *offset,
        }
    }

    /// Returns `true` for truncated input, `false` for I/O faults.
    pub fn is_truncation(&self) -> bool {
        matches!(self, ConvertError::UnexpectedEof { .. })
    }
}

/// The construct left incomplete by a truncated input.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expecting {
    /// A control word with no terminator after it.
    ControlWord,
    /// The payload of `\binN`.
    BinaryPayload {
        /// Bytes still owed by the payload.
        remaining: u64,
    },
    /// The closing brace of a `\*` group.
    ExtendedGroup,
}

impl fmt::Display for Expecting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expecting::ControlWord => write!(f, "a control word"),
            Expecting::BinaryPayload { remaining } => {
                write!(f, "binary data ({remaining} bytes missing)")
            }
            Expecting::ExtendedGroup => write!(f, "an extended control group"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        let e = ConvertError::UnexpectedEof {
            offset: 12,
            expecting: Expecting::BinaryPayload { remaining: 390 },
        };
        assert_eq!(
            e.to_string(),
            "unexpected end of input at byte 12 while reading binary data (390 bytes missing)"
        );
        assert_eq!(e.offset(), 12);
        assert!(e.is_truncation());
    }

    #[test]
    fn source_read_keeps_cause() {
        let e = ConvertError::SourceRead {
            offset: 3,
            source: io::Error::other("disk on fire"),
        };
        assert!(!e.is_truncation());
        assert_eq!(e.source().unwrap().to_string(), "disk on fire");
    }
}

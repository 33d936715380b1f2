//! RTF to plain text conversion.
//!
//! Reads a Rich Text Format byte stream once, front to back, and keeps only
//! the human-visible text. Formatting, font and color tables, embedded
//! pictures, metadata groups and other destinations are dropped. The main
//! entry points are [`convert`] for a one-shot conversion and [`Converter`]
//! when diagnostics, settings or a custom [`Clock`] are needed.
//!
//! ```
//! let text = rtf2txt_core::convert_bytes(br"{\rtf1\ansi{\fonttbl{\f0 Arial;}}Hello\par World}")?;
//! assert_eq!(text, b"Hello\nWorld");
//! # Ok::<(), rtf2txt_core::ConvertError>(())
//! ```

#![warn(missing_docs)]

/// Clock capability used by date/time control words.
pub mod clock;
/// Conversion settings.
pub mod config;
/// Group context stack.
pub mod context;
mod engine;
/// Conversion errors.
pub mod error;
/// `\'XX` hex escape decoding.
pub mod escape;
/// Byte source abstraction over buffered readers.
pub mod source;

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ConvertConfig;
pub use engine::{Conversion, Converter};
pub use error::{ConvertError, Expecting};
pub use source::ByteSource;

// Diagnostics (re-exported from the diagnostics crate)
pub use rtf2txt_diagnostics::{Diagnostic, Severity, Span, codes};

// Tables
pub use rtf2txt_tables::{ControlWordTables, Policy, tables};

/// Convert `source` to plain text with default settings, discarding
/// diagnostics.
pub fn convert<S: ByteSource>(source: S) -> Result<Vec<u8>, ConvertError> {
    Converter::with_config(ConvertConfig::quiet())
        .convert(source)
        .map(Conversion::into_text)
}

/// Convert an in-memory RTF document to plain text.
pub fn convert_bytes(input: &[u8]) -> Result<Vec<u8>, ConvertError> {
    convert(input)
}

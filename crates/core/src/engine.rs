//! Single-pass RTF to plain text conversion.
//!
//! The engine reads its source exactly once. Literal bytes go straight to the
//! output buffer; each backslash hands control to the control-word scanner,
//! which classifies the word through [`rtf2txt_tables`] and decides whether to
//! emit a substitution, discard a parameter or binary payload, skip a `\*`
//! group, or start discarding a destination group.

use std::borrow::Cow;

use rtf2txt_diagnostics::{Diagnostic, Span, codes};
use rtf2txt_tables::{ControlWordTables, Policy, Substitution, canonicalize, tables};
use tracing::{debug, trace};

use crate::clock::{self, Clock, SystemClock};
use crate::config::ConvertConfig;
use crate::context::ContextStack;
use crate::error::{ConvertError, Expecting};
use crate::escape::decode_hex_escape;
use crate::source::ByteSource;

/// Shorthand for building a `BTreeMap<String, String>` context from key-value pairs.
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        std::collections::BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Conversion {
    /// The extracted text. Source bytes pass through unchanged; decoded
    /// `\'XX` escapes are UTF-8 encoded.
    pub text: Vec<u8>,
    /// Irregularities recovered from during conversion.
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// The text as UTF-8, replacing invalid sequences with `U+FFFD`.
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    /// Discard diagnostics and return the text buffer.
    pub fn into_text(self) -> Vec<u8> {
        self.text
    }
}

/// Converts RTF byte streams to plain text.
///
/// A `Converter` holds only settings and a clock; each call to
/// [`convert`](Converter::convert) builds its own buffers, so one converter
/// can serve many conversions, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct Converter<C = SystemClock> {
    config: ConvertConfig,
    clock: C,
}

impl Converter<SystemClock> {
    /// A converter with default settings and the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// A converter with the given settings and the system clock.
    pub fn with_config(config: ConvertConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Converter<C> {
    /// A converter with the given settings and clock.
    pub fn with_clock(config: ConvertConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// The converter's settings.
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert the whole of `source`.
    ///
    /// Fails only when the source faults or ends inside a construct that
    /// needs more bytes; everything else degrades to best-effort text.
    pub fn convert<S: ByteSource>(&self, source: S) -> Result<Conversion, ConvertError> {
        Engine::new(source, &self.config, &self.clock).run()
    }
}

// ─── Engine State Machine ───────────────────────────────────────────────────

/// Tokenizer state between bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Copying literal text.
    Text,
    /// A backslash was consumed; the control word follows.
    ControlWord,
    /// A parameterized word was read; a `;` separator may follow.
    ParameterSkip,
    /// Discarding the payload of `\binN`.
    BinarySkip(u64),
    /// Discarding a `\*` group up to its closing brace.
    ExtendedGroupSkip,
}

/// Bytes that end a control word. None of them is consumed by the scan.
fn is_terminator(b: u8) -> bool {
    matches!(
        b,
        b'\\' | b'{' | b'}' | b'\0' | b'\t' | b' ' | b'\x0c' | b'\n' | b'\r'
    )
}

/// Payload length of a `\binN` word, when N is a plain non-negative integer.
fn binary_length(word: &str) -> Option<u64> {
    let digits = word.strip_prefix("bin")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

struct Engine<'c, S, C> {
    input: S,
    /// Bytes consumed so far.
    offset: usize,
    config: &'c ConvertConfig,
    clock: &'c C,
    tables: &'static ControlWordTables,
    stack: ContextStack,
    /// Depth of the destination group whose content is being discarded.
    discard_depth: Option<usize>,
    out: Vec<u8>,
    diags: Vec<Diagnostic>,
}

impl<'c, S: ByteSource, C: Clock> Engine<'c, S, C> {
    fn new(input: S, config: &'c ConvertConfig, clock: &'c C) -> Self {
        Self {
            input,
            offset: 0,
            config,
            clock,
            tables: tables(),
            stack: ContextStack::new(),
            discard_depth: None,
            out: Vec::new(),
            diags: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Conversion, ConvertError> {
        let mut state = State::Text;
        loop {
            state = match state {
                State::Text => match self.read()? {
                    None => break,
                    Some(b'\\') => State::ControlWord,
                    Some(b'{') => {
                        self.stack.push("");
                        State::Text
                    }
                    Some(b'}') => {
                        self.close_group();
                        State::Text
                    }
                    Some(b'\n' | b'\r') => State::Text,
                    Some(b) => {
                        self.emit(&[b]);
                        State::Text
                    }
                },
                State::ControlWord => self.control_word()?,
                State::ParameterSkip => {
                    self.skip_parameter()?;
                    State::Text
                }
                State::BinarySkip(len) => {
                    self.skip_binary(len)?;
                    State::Text
                }
                State::ExtendedGroupSkip => {
                    self.skip_extended_group()?;
                    State::Text
                }
            };
        }
        Ok(self.finish())
    }

    fn finish(mut self) -> Conversion {
        if !self.stack.is_empty() {
            let depth = self.stack.len();
            let scope = self.stack.top().unwrap_or_default().to_string();
            self.report(
                Diagnostic::info(
                    codes::UNCLOSED_GROUP,
                    format!("input ended with {depth} group(s) still open"),
                    Some(Span::empty(self.offset)),
                )
                .with_context(ctx!("depth" => depth.to_string(), "scope" => scope)),
            );
        }
        Conversion {
            text: self.out,
            diagnostics: self.diags,
        }
    }

    // ── Input ───────────────────────────────────────────────────────────

    fn read(&mut self) -> Result<Option<u8>, ConvertError> {
        let next = self
            .input
            .read_byte()
            .map_err(|source| ConvertError::SourceRead {
                offset: self.offset,
                source,
            })?;
        if next.is_some() {
            self.offset += 1;
        }
        Ok(next)
    }

    fn peek(&mut self) -> Result<Option<u8>, ConvertError> {
        self.input
            .peek_byte()
            .map_err(|source| ConvertError::SourceRead {
                offset: self.offset,
                source,
            })
    }

    fn eof(&self, expecting: Expecting) -> ConvertError {
        ConvertError::UnexpectedEof {
            offset: self.offset,
            expecting,
        }
    }

    // ── Output ──────────────────────────────────────────────────────────

    fn emit(&mut self, bytes: &[u8]) {
        if self.discard_depth.is_none() {
            self.out.extend_from_slice(bytes);
        }
    }

    fn substitute(&mut self, sub: Substitution) {
        match sub {
            Substitution::Text(text) => self.emit(text.as_bytes()),
            Substitution::Date(style) => {
                let text = clock::format_date(self.clock.now(), style);
                self.emit(text.as_bytes());
            }
            Substitution::Time => {
                let text = clock::format_time(self.clock.now());
                self.emit(text.as_bytes());
            }
        }
    }

    fn report(&mut self, diag: Diagnostic) {
        if self.config.collect_diagnostics {
            self.diags.push(diag);
        }
    }

    // ── Groups ──────────────────────────────────────────────────────────

    fn close_group(&mut self) {
        if self.stack.is_empty() {
            self.report(Diagnostic::warn(
                codes::UNBALANCED_CLOSE_BRACE,
                "closing brace without a matching open group",
                Some(Span::new(self.offset - 1, self.offset)),
            ));
        }
        self.pop_group();
    }

    fn pop_group(&mut self) {
        let scope = self.stack.pop();
        if self
            .discard_depth
            .is_some_and(|depth| self.stack.len() < depth)
        {
            self.discard_depth = None;
            debug!(scope = %scope, offset = self.offset, "destination group closed");
        }
    }

    fn open_destination(&mut self, word: &str, span: Span) {
        let depth = self.stack.len();
        if depth == 0 {
            self.report(
                Diagnostic::warn(
                    codes::DESTINATION_OUTSIDE_GROUP,
                    format!("destination \\{word} outside of any group"),
                    Some(span),
                )
                .with_context(ctx!("word" => word)),
            );
            return;
        }
        if self.discard_depth.is_none() {
            debug!(destination = word, depth, "discarding destination group");
            self.discard_depth = Some(depth);
        }
    }

    // ── Control words ───────────────────────────────────────────────────

    /// Read the word following a backslash, stopping before its terminator.
    fn scan_word(&mut self) -> Result<(Vec<u8>, u8), ConvertError> {
        let mut word = Vec::new();
        loop {
            match self.peek()? {
                None => return Err(self.eof(Expecting::ControlWord)),
                Some(b) if is_terminator(b) => return Ok((word, b)),
                Some(b) => {
                    word.push(b);
                    self.read()?;
                }
            }
        }
    }

    fn control_word(&mut self) -> Result<State, ConvertError> {
        let start = self.offset - 1;
        let (raw, terminator) = self.scan_word()?;
        let span = Span::new(start, self.offset);

        if raw == b"*" {
            return Ok(State::ExtendedGroupSkip);
        }

        if let Some(esc) = decode_hex_escape(&raw) {
            let mut buf = [0u8; 4];
            self.emit(esc.ch.encode_utf8(&mut buf).as_bytes());
            self.emit(esc.trailing);
            return Ok(State::Text);
        }

        if raw.is_empty() {
            match terminator {
                b'\\' | b'{' | b'}' => {
                    self.read()?;
                    self.emit(&[terminator]);
                }
                _ => self.emit(b"\n"),
            }
            return Ok(State::Text);
        }

        let word = String::from_utf8_lossy(&raw);
        if terminator == b' ' && word.starts_with(|c: char| c.is_ascii_alphabetic()) {
            // The space delimiter belongs to the control word.
            self.read()?;
        }

        if let Some(len) = binary_length(&word) {
            return Ok(State::BinarySkip(len));
        }

        if let Some(sub) = self.tables.symbol(&word) {
            self.substitute(sub);
            return Ok(State::Text);
        }

        let canonical = canonicalize(&word);
        if canonical.malformed {
            self.report(
                Diagnostic::warn(
                    codes::MALFORMED_PARAMETER,
                    format!("parameter of \\{word} is not a valid integer"),
                    Some(span),
                )
                .with_context(ctx!("word" => word.to_string())),
            );
        }

        match self.tables.policy_of_key(&canonical.key) {
            Policy::Destination => {
                self.open_destination(&word, span);
                self.stack.name_scope(&word);
                Ok(State::ParameterSkip)
            }
            Policy::Value | Policy::Toggle => {
                self.stack.name_scope(&word);
                Ok(State::ParameterSkip)
            }
            Policy::Unrecognized | Policy::Symbol | Policy::UnicodeEscape => {
                trace!(word = %word, offset = start, "unrecognized control word");
                if self.config.report_unknown_words {
                    self.report(
                        Diagnostic::info(
                            codes::UNKNOWN_CONTROL_WORD,
                            format!("unknown control word \\{word}"),
                            Some(span),
                        )
                        .with_context(ctx!("word" => word.to_string())),
                    );
                }
                self.stack.name_scope(&word);
                Ok(State::Text)
            }
        }
    }

    fn skip_parameter(&mut self) -> Result<(), ConvertError> {
        if self.peek()? == Some(b';') {
            self.read()?;
        }
        Ok(())
    }

    fn skip_binary(&mut self, len: u64) -> Result<(), ConvertError> {
        let skipped = self
            .input
            .skip_bytes(len)
            .map_err(|source| ConvertError::SourceRead {
                offset: self.offset,
                source,
            })?;
        self.offset += skipped as usize;
        if skipped < len {
            return Err(self.eof(Expecting::BinaryPayload {
                remaining: len - skipped,
            }));
        }
        debug!(bytes = len, offset = self.offset, "skipped binary payload");
        Ok(())
    }

    fn skip_extended_group(&mut self) -> Result<(), ConvertError> {
        let start = self.offset;
        let mut depth = 1usize;
        while depth > 0 {
            match self.read()? {
                None => return Err(self.eof(Expecting::ExtendedGroup)),
                Some(b'\\') => {
                    if self.read()?.is_none() {
                        return Err(self.eof(Expecting::ExtendedGroup));
                    }
                }
                Some(b'{') => depth += 1,
                Some(b'}') => depth -= 1,
                Some(_) => {}
            }
        }
        debug!(bytes = self.offset - start, "skipped extended group");
        // The closing brace just consumed belonged to the enclosing group.
        self.pop_group();
        Ok(())
    }
}

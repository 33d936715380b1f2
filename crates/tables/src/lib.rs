//! RTF control-word classification tables.
//!
//! Maps the canonical shape of a control word (`\f463` → `fN`) to the policy
//! the converter applies to it: emit a substitution, skip a destination
//! group, discard a parameter, or ignore the word. The vocabulary is compiled
//! in and indexed once on first use; every lookup is a hash probe.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

mod vocabulary;

// ─── Policy ─────────────────────────────────────────────────────────────────

/// How the converter treats a control word.
///
/// Variants are listed in lookup priority order: a word that qualifies for
/// more than one policy takes the first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// `\'XX` hex escape, decoded to a single character.
    UnicodeEscape,
    /// Replaced by literal text (possibly empty).
    Symbol,
    /// Opens a group of non-text metadata that is discarded wholesale.
    Destination,
    /// Carries a numeric parameter that is discarded.
    Value,
    /// Formatting toggle or document/paragraph flag with no payload.
    Toggle,
    /// Not in the vocabulary. Consumed and otherwise ignored.
    Unrecognized,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::UnicodeEscape => write!(f, "unicodeescape"),
            Policy::Symbol => write!(f, "symbol"),
            Policy::Destination => write!(f, "destination"),
            Policy::Value => write!(f, "value"),
            Policy::Toggle => write!(f, "toggle"),
            Policy::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

// ─── Substitutions ──────────────────────────────────────────────────────────

/// Rendering of a date substitution (`\chdate`, `\chdpa`, `\chdpl`).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `2026-10-16`
    Numeric,
    /// `Fri, Oct 16, 2026`
    Abbreviated,
    /// `Friday, October 16, 2026`
    Long,
}

/// Text emitted in place of a symbol control word.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Substitution {
    /// Fixed literal text.
    Text(&'static str),
    /// Current date, rendered by the converter's clock.
    Date(DateStyle),
    /// Current time, rendered by the converter's clock.
    Time,
}

// ─── Canonicalization ───────────────────────────────────────────────────────

/// A control word reduced to its table key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical<'a> {
    /// Lookup key: the alphabetic name with `N` in place of a numeric
    /// parameter, or the word unchanged when it has no parameter.
    pub key: Cow<'a, str>,
    /// The parsed parameter, when present and representable.
    pub param: Option<i32>,
    /// `true` when the word had a trailing number that does not fit an `i32`.
    pub malformed: bool,
}

/// Reduce a raw control word to its canonical key and parameter.
///
/// Only a *trailing* run of decimal digits (optionally signed with `-`) is
/// treated as a parameter, and only when the remaining prefix is a non-empty
/// ASCII-alphabetic name. A single trailing `;` table separator is ignored.
///
/// ```
/// use rtf2txt_tables::canonicalize;
///
/// let c = canonicalize("f463");
/// assert_eq!(c.key, "fN");
/// assert_eq!(c.param, Some(463));
///
/// let c = canonicalize("li-360");
/// assert_eq!(c.key, "liN");
/// assert_eq!(c.param, Some(-360));
///
/// assert_eq!(canonicalize("par").key, "par");
/// assert_eq!(canonicalize("123").key, "123");
/// ```
pub fn canonicalize(word: &str) -> Canonical<'_> {
    let word = word.strip_suffix(';').unwrap_or(word);
    let bytes = word.as_bytes();

    let mut digits_start = bytes.len();
    while digits_start > 0 && bytes[digits_start - 1].is_ascii_digit() {
        digits_start -= 1;
    }
    let unchanged = Canonical {
        key: Cow::Borrowed(word),
        param: None,
        malformed: false,
    };
    if digits_start == bytes.len() {
        return unchanged;
    }

    let number_start = if digits_start > 0 && bytes[digits_start - 1] == b'-' {
        digits_start - 1
    } else {
        digits_start
    };
    let name = &word[..number_start];
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return unchanged;
    }

    let param = word[number_start..].parse::<i32>().ok();
    Canonical {
        key: Cow::Owned(format!("{name}N")),
        param,
        malformed: param.is_none(),
    }
}

/// Whether `word` has the `'XX` hex-escape shape (apostrophe followed by at
/// least one hex digit).
pub fn is_unicode_escape(word: &str) -> bool {
    let mut bytes = word.bytes();
    bytes.next() == Some(b'\'') && bytes.next().is_some_and(|b| b.is_ascii_hexdigit())
}

// ─── Tables ─────────────────────────────────────────────────────────────────

/// Indexed control-word vocabulary.
///
/// Obtain the shared instance with [`tables()`]. The tables are immutable
/// after construction and safe to read from any number of threads.
#[derive(Debug)]
pub struct ControlWordTables {
    destinations: HashSet<&'static str>,
    values: HashSet<&'static str>,
    toggles: HashSet<&'static str>,
    symbols: HashMap<&'static str, Substitution>,
}

static TABLES: LazyLock<ControlWordTables> = LazyLock::new(ControlWordTables::build);

/// The shared, lazily indexed control-word tables.
pub fn tables() -> &'static ControlWordTables {
    &TABLES
}

impl ControlWordTables {
    fn build() -> Self {
        Self {
            destinations: vocabulary::DESTINATIONS.iter().copied().collect(),
            values: vocabulary::VALUES.iter().copied().collect(),
            toggles: vocabulary::TOGGLES.iter().copied().collect(),
            symbols: vocabulary::SYMBOLS.iter().copied().collect(),
        }
    }

    /// Substitution for a symbol word, looked up by raw word and then by
    /// canonical key.
    pub fn symbol(&self, word: &str) -> Option<Substitution> {
        if let Some(sub) = self.symbols.get(word) {
            return Some(*sub);
        }
        let canonical = canonicalize(word);
        self.symbols.get(canonical.key.as_ref()).copied()
    }

    /// Whether `key` names a destination group.
    pub fn is_destination(&self, key: &str) -> bool {
        self.destinations.contains(key)
    }

    /// Whether `key` carries a discardable numeric parameter.
    pub fn is_value(&self, key: &str) -> bool {
        self.values.contains(key)
    }

    /// Whether `key` is a formatting toggle or document flag.
    pub fn is_toggle(&self, key: &str) -> bool {
        self.toggles.contains(key)
    }

    /// Policy of an already canonicalized key, ignoring escapes and symbols.
    pub fn policy_of_key(&self, key: &str) -> Policy {
        if self.is_destination(key) {
            Policy::Destination
        } else if self.is_value(key) {
            Policy::Value
        } else if self.is_toggle(key) {
            Policy::Toggle
        } else {
            Policy::Unrecognized
        }
    }

    /// Classify a raw control word using the full priority chain.
    pub fn classify(&self, word: &str) -> Policy {
        if is_unicode_escape(word) {
            return Policy::UnicodeEscape;
        }
        if self.symbol(word).is_some() {
            return Policy::Symbol;
        }
        self.policy_of_key(&canonicalize(word).key)
    }
}

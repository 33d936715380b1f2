//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. Every code has an entry in [`crate::explain`].

/// A `}` arrived with no open group.
pub const UNBALANCED_CLOSE_BRACE: &str = "RTF1001";

/// Input ended while one or more groups were still open.
pub const UNCLOSED_GROUP: &str = "RTF1002";

/// A control word's numeric parameter could not be parsed.
pub const MALFORMED_PARAMETER: &str = "RTF1101";

/// A control word is not in the vocabulary.
pub const UNKNOWN_CONTROL_WORD: &str = "RTF1102";

/// A destination control word appeared outside of any group.
pub const DESTINATION_OUTSIDE_GROUP: &str = "RTF1201";

/// Every known code, in numeric order.
pub const ALL: &[&str] = &[
    UNBALANCED_CLOSE_BRACE,
    UNCLOSED_GROUP,
    MALFORMED_PARAMETER,
    UNKNOWN_CONTROL_WORD,
    DESTINATION_OUTSIDE_GROUP,
];

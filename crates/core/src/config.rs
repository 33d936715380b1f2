//! Conversion settings.

/// Settings for a [`Converter`](crate::Converter).
///
/// Defaults collect diagnostics for structural irregularities but stay quiet
/// about control words missing from the vocabulary, which are frequent in
/// documents from newer word processors.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Record diagnostics for recovered irregularities.
    ///
    /// When `false`, [`Conversion::diagnostics`](crate::Conversion) is always empty.
    pub collect_diagnostics: bool,
    /// Report every control word that is not in the vocabulary.
    ///
    /// Has no effect unless `collect_diagnostics` is also set.
    pub report_unknown_words: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            collect_diagnostics: true,
            report_unknown_words: false,
        }
    }
}

impl ConvertConfig {
    /// A configuration that records nothing beyond the text.
    pub fn quiet() -> Self {
        Self {
            collect_diagnostics: false,
            report_unknown_words: false,
        }
    }
}

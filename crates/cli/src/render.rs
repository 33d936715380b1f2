//! Diagnostic rendering for the `rtf2txt` CLI.
//!
//! Pretty mode turns each [`Diagnostic`] into an ariadne [`Report`] on
//! stderr, pointing into the RTF source. JSON mode leaves rendering to the
//! caller, which embeds the diagnostics in its own output object.

use std::borrow::Cow;

use ariadne::{Color, Config, Fmt, IndexType, Label, Report, ReportKind, Source};
use rtf2txt_diagnostics::{Diagnostic, Severity};

// ── Output format ───────────────────────────────────────────────────────

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub(crate) enum Format {
    /// Plain text on stdout, coloured diagnostics on stderr.
    #[default]
    Pretty,
    /// A single JSON object on stdout.
    Json,
}

// ── Severity mapping ────────────────────────────────────────────────────

fn report_kind(severity: Severity) -> ReportKind<'static> {
    match severity {
        Severity::Warn => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
        _ => ReportKind::Warning,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Warn => Color::Yellow,
        Severity::Info => Color::Blue,
        _ => Color::White,
    }
}

// ── Pretty rendering ────────────────────────────────────────────────────

/// A displayable copy of the input whose byte offsets match the original.
///
/// Valid UTF-8 is borrowed as is. Otherwise every non-ASCII byte becomes `?`
/// so that diagnostic spans still land on the right columns.
pub(crate) fn display_source(input: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(input) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(
            input
                .iter()
                .map(|&b| if b.is_ascii() { b as char } else { '?' })
                .collect(),
        ),
    }
}

/// Clamp a span to the source and widen empty spans to one byte, so that
/// end-of-input diagnostics still underline the last byte.
fn label_range(start: usize, end: usize, len: usize) -> (usize, usize) {
    let end = end.min(len);
    let start = start.min(end);
    if start < end || len == 0 {
        (start, end)
    } else if start < len {
        (start, start + 1)
    } else {
        (len - 1, len)
    }
}

fn context_note(diag: &Diagnostic) -> Option<String> {
    let ctx = diag.context.as_ref().filter(|ctx| !ctx.is_empty())?;
    Some(
        ctx.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Render diagnostics with source excerpts to stderr.
pub(crate) fn render_diagnostics(source: &str, filename: &str, diagnostics: &[Diagnostic]) {
    let config = Config::default()
        .with_compact(false)
        .with_index_type(IndexType::Byte);
    let mut cache = (filename, Source::from(source));

    for diag in diagnostics {
        let note = context_note(diag);
        if let Some(span) = &diag.span {
            let (start, end) = label_range(span.start, span.end, source.len());

            let mut builder = Report::build(report_kind(diag.severity), (filename, start..end))
                .with_code(diag.id.as_ref())
                .with_message(&diag.message)
                .with_config(config);
            builder = builder.with_label(
                Label::new((filename, start..end))
                    .with_message(note.as_deref().unwrap_or(&diag.message))
                    .with_color(severity_color(diag.severity)),
            );
            if let Some(explanation) = diag.explain() {
                builder = builder.with_help(explanation);
            }
            builder.finish().eprint(&mut cache).ok();
        } else {
            eprintln!("{diag}");
            if let Some(note) = note {
                eprintln!("  = note: {note}");
            }
            if let Some(explanation) = diag.explain() {
                eprintln!("  = help: {explanation}");
            }
        }
    }
}

// ── Summary line ────────────────────────────────────────────────────────

/// Print a coloured count of warnings and notes, e.g. `1 warning, 2 info`.
pub(crate) fn print_summary(diagnostics: &[Diagnostic]) {
    let (mut warnings, mut infos) = (0usize, 0usize);
    for d in diagnostics {
        match d.severity {
            Severity::Info => infos += 1,
            _ => warnings += 1,
        }
    }

    let mut parts = Vec::new();
    if warnings > 0 {
        let s = if warnings == 1 { "" } else { "s" };
        parts.push(format!(
            "{}",
            format!("{warnings} warning{s}").fg(Color::Yellow)
        ));
    }
    if infos > 0 {
        parts.push(format!("{}", format!("{infos} info").fg(Color::Blue)));
    }
    if !parts.is_empty() {
        eprintln!("{}", parts.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_source_keeps_offsets() {
        assert_eq!(display_source(b"{abc}"), "{abc}");
        assert_eq!(display_source("é}".as_bytes()), "é}");
        let lossy = display_source(b"a\xe9}");
        assert_eq!(lossy, "a?}");
        assert_eq!(lossy.len(), 3);
    }

    #[test]
    fn label_range_widens_empty_spans() {
        assert_eq!(label_range(2, 5, 10), (2, 5));
        assert_eq!(label_range(4, 4, 10), (4, 5));
        assert_eq!(label_range(10, 10, 10), (9, 10));
        assert_eq!(label_range(3, 40, 10), (3, 10));
        assert_eq!(label_range(0, 0, 0), (0, 0));
    }

    #[test]
    fn context_note_formats_pairs() {
        let d = Diagnostic::warn("RTF1101", "bad", None).with_context(
            [("word".to_string(), "fs9".to_string())]
                .into_iter()
                .collect(),
        );
        assert_eq!(context_note(&d).as_deref(), Some("word=fs9"));
        assert_eq!(context_note(&Diagnostic::info("RTF1002", "x", None)), None);
    }
}

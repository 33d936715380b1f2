//! End-to-end conversion behaviour.
//!
//! Covers literal pass-through, group handling, escapes, destinations,
//! binary payloads, recovery diagnostics, and the fatal truncation cases.

mod common;

use std::io::{self, BufReader};

use chrono::NaiveDate;
use common::{FailingReader, diag_ids, run, text_of};
use rtf2txt_core::{
    ConvertConfig, ConvertError, Converter, Expecting, FixedClock, Severity, Span, codes,
    convert, convert_bytes,
};

// ─── Text and groups ────────────────────────────────────────────────────────

#[test]
fn plain_text_passes_through() {
    assert_eq!(text_of("Hello, world! 123"), "Hello, world! 123");
}

#[test]
fn raw_line_breaks_are_dropped() {
    assert_eq!(text_of("one\r\ntwo\nthree\rfour"), "onetwothreefour");
}

#[test]
fn braces_are_invisible() {
    assert_eq!(text_of("{a{b}{}c}"), "abc");
}

#[test]
fn non_ascii_bytes_pass_through() {
    let conv = run("{naïve – ok}".as_bytes());
    assert_eq!(conv.text, "naïve – ok".as_bytes());
}

// ─── Escapes ────────────────────────────────────────────────────────────────

#[test]
fn structural_characters_are_escaped() {
    assert_eq!(
        text_of(r"\\hello\\there\{\}friends"),
        r"\hello\there{}friends"
    );
}

#[test]
fn backslash_newline_is_paragraph_break() {
    assert_eq!(text_of("{first\\\nsecond}"), "first\nsecond");
}

#[test]
fn hex_escape_decodes_latin1() {
    assert_eq!(text_of(r"{\'a9 2024 caf\'e9}"), "© 2024 café");
}

#[test]
fn hex_escape_keeps_attached_text() {
    assert_eq!(text_of(r"{caf\'e9t}"), "caf\u{e9}t");
}

#[test]
fn hex_escape_trailing_bytes_are_literal() {
    // Only the first escape in a word is decoded.
    assert_eq!(text_of(r"{\'41'42BC}"), "A'42BC");
}

// ─── Control words ──────────────────────────────────────────────────────────

#[test]
fn formatting_words_produce_nothing() {
    assert_eq!(
        text_of(r"{\pard\plain\f0\fs24\b bold\b0  normal\i italic\i0}"),
        "bold normalitalic"
    );
}

#[test]
fn break_symbols() {
    assert_eq!(
        text_of(r"{a\par b\line c\lbr2 d\tab e\cell f\row}"),
        "a\nb\nc\nd\te\tf\n"
    );
}

#[test]
fn unknown_words_are_ignored() {
    assert_eq!(text_of(r"{\frobnicate42 text}"), "text");
}

#[test]
fn parameter_does_not_swallow_following_text() {
    assert_eq!(text_of(r"{\f463 hi}"), "hi");
    assert_eq!(text_of(r"{\fs24\cf1 red text}"), "red text");
}

#[test]
fn table_separator_after_parameter_is_consumed() {
    assert_eq!(text_of(r"{\f0 ;Name}"), "Name");
}

#[test]
fn field_result_is_kept() {
    assert_eq!(
        text_of(r#"{\field{\*\fldinst HYPERLINK "https://example.com"}{\fldrslt link}} after"#),
        "link after"
    );
}

#[test]
fn date_and_time_words_use_clock() {
    let at = NaiveDate::from_ymd_opt(2026, 3, 7)
        .unwrap()
        .and_hms_opt(16, 5, 0)
        .unwrap();
    let conv = Converter::with_clock(ConvertConfig::default(), FixedClock(at))
        .convert(&br"{Printed \chdpa  at \chtime}"[..])
        .unwrap();
    assert_eq!(conv.text_lossy(), "Printed Sat, Mar 7, 2026 at 4:05 pm");
}

// ─── Destinations and skipped groups ────────────────────────────────────────

#[test]
fn destination_groups_are_dropped() {
    assert_eq!(
        text_of(r"{\rtf1{\fonttbl{\f0 Arial;}{\f1 Courier;}}{\colortbl;\red0\green0\blue0;}Body}"),
        "Body"
    );
}

#[test]
fn text_after_destination_group_resumes() {
    assert_eq!(
        text_of(r"{\rtf1 a{\info{\title t}{\doccomm c}}b{\header h}c}"),
        "abc"
    );
}

#[test]
fn extended_group_is_skipped() {
    assert_eq!(text_of(r"{a{\*\generator Riched20 10.0;}b}"), "ab");
}

#[test]
fn extended_group_honours_escapes_and_nesting() {
    let conv = run(br"{a{\*\x \} \{ \\ {nested}}b}");
    assert_eq!(conv.text, b"ab");
    assert!(conv.diagnostics.is_empty(), "{:?}", conv.diagnostics);
}

#[test]
fn destination_at_top_level_is_reported() {
    let conv = run(br"\info kept");
    assert_eq!(conv.text, b"kept");
    assert_eq!(diag_ids(&conv), [codes::DESTINATION_OUTSIDE_GROUP]);
    assert_eq!(conv.diagnostics[0].severity, Severity::Warn);
}

// ─── Binary payloads ────────────────────────────────────────────────────────

#[test]
fn binary_payload_is_skipped_exactly() {
    let conv = run(br"{a\bin5 {}\x}b}");
    assert_eq!(conv.text, b"ab");
    assert!(conv.diagnostics.is_empty(), "{:?}", conv.diagnostics);
}

#[test]
fn binary_payload_with_zero_length() {
    assert_eq!(text_of(r"{a\bin0 b}"), "ab");
}

#[test]
fn binary_payload_through_small_buffer() {
    let input: &[u8] = b"{x\\bin13 \\{\\}{{{}}}}}}y}";
    let reader = BufReader::with_capacity(3, input);
    assert_eq!(convert(reader).unwrap(), b"xy");
}

// ─── Recovery diagnostics ───────────────────────────────────────────────────

#[test]
fn unbalanced_close_brace_is_recovered() {
    let conv = run(b"a}b");
    assert_eq!(conv.text, b"ab");
    assert_eq!(diag_ids(&conv), [codes::UNBALANCED_CLOSE_BRACE]);
    assert_eq!(conv.diagnostics[0].span, Some(Span::new(1, 2)));
}

#[test]
fn unclosed_group_is_noted() {
    let conv = run(br"{\rtf1 a{b");
    assert_eq!(conv.text, b"ab");
    assert_eq!(diag_ids(&conv), [codes::UNCLOSED_GROUP]);
    let diag = &conv.diagnostics[0];
    assert_eq!(diag.severity, Severity::Info);
    let ctx = diag.context.as_ref().unwrap();
    assert_eq!(ctx["depth"], "2");
}

#[test]
fn overflowing_parameter_is_reported() {
    let conv = run(br"{\fs4294967296 x}");
    assert_eq!(conv.text, b"x");
    assert_eq!(diag_ids(&conv), [codes::MALFORMED_PARAMETER]);
}

#[test]
fn diagnostics_serialize_to_json() {
    let conv = run(b"}");
    let json = serde_json::to_value(&conv.diagnostics).unwrap();
    assert_eq!(json[0]["id"], codes::UNBALANCED_CLOSE_BRACE);
    assert_eq!(json[0]["severity"], "warn");
}

// ─── Fatal errors ───────────────────────────────────────────────────────────

#[test]
fn trailing_backslash_is_truncation() {
    let err = convert_bytes(br"abc\").unwrap_err();
    assert!(matches!(
        err,
        ConvertError::UnexpectedEof {
            offset: 4,
            expecting: Expecting::ControlWord,
        }
    ));
}

#[test]
fn control_word_at_end_of_input_is_truncation() {
    let err = convert_bytes(br"{\par").unwrap_err();
    assert!(err.is_truncation());
}

#[test]
fn short_binary_payload_is_truncation() {
    let err = convert_bytes(br"{\bin10 abc").unwrap_err();
    assert!(matches!(
        err,
        ConvertError::UnexpectedEof {
            offset: 11,
            expecting: Expecting::BinaryPayload { remaining: 7 },
        }
    ));
}

#[test]
fn unterminated_extended_group_is_truncation() {
    let err = convert_bytes(br"{\*\rsidtbl \rsid1").unwrap_err();
    assert!(matches!(
        err,
        ConvertError::UnexpectedEof {
            expecting: Expecting::ExtendedGroup,
            ..
        }
    ));
}

#[test]
fn source_failure_is_reported_with_offset() {
    let err = convert(FailingReader::new(b"abc", io::ErrorKind::BrokenPipe)).unwrap_err();
    match err {
        ConvertError::SourceRead { offset, source } => {
            assert_eq!(offset, 3);
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ─── Whole documents ────────────────────────────────────────────────────────

#[test]
fn wordpad_document() {
    let doc = concat!(
        r"{\rtf1\ansi\ansicpg1252\deff0{\fonttbl{\f0\fnil\fcharset0 Calibri;}}",
        r"{\colortbl ;\red255\green0\blue0;}",
        r"{\*\generator Riched20 10.0;}\viewkind4\uc1\pard\sa200\sl276\slmult1\f0\fs22\lang9 ",
        "First.\\par\nSecond.\\par\n}",
    );
    let conv = run(doc.as_bytes());
    assert_eq!(conv.text_lossy(), "First.\nSecond.\n");
    assert!(conv.diagnostics.is_empty(), "{:?}", conv.diagnostics);
}

#[test]
fn converter_is_shareable_across_threads() {
    let converter = Converter::new();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let converter = &converter;
                s.spawn(move || {
                    let input = format!(r"{{\rtf1 doc {i}\par}}");
                    converter.convert(input.as_bytes()).unwrap().into_text()
                })
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), format!("doc {i}\n").into_bytes());
        }
    });
}

//! Integration tests for the inline formatter

use notepress_core::ast::{Style, TextSpan};
use notepress_core::inline;

/// Reinsert each span's style delimiters, reconstructing the source line.
fn reconstruct(spans: &[TextSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        match span.style {
            Style::Plain => out.push_str(&span.content),
            Style::Bold => {
                out.push_str("**");
                out.push_str(&span.content);
                out.push_str("**");
            }
            Style::Italic => {
                out.push('*');
                out.push_str(&span.content);
                out.push('*');
            }
            Style::Code => {
                out.push('`');
                out.push_str(&span.content);
                out.push('`');
            }
            Style::Strikethrough => {
                out.push_str("~~");
                out.push_str(&span.content);
                out.push_str("~~");
            }
        }
    }
    out
}

// ============================================================================
// Boundary Behavior
// ============================================================================

#[test]
fn test_empty_input_yields_single_empty_plain_span() {
    let spans = inline::format("");
    assert_eq!(spans, vec![TextSpan::plain("")]);
}

#[test]
fn test_plain_text_single_span() {
    let spans = inline::format("plain text");
    assert_eq!(spans, vec![TextSpan::plain("plain text")]);
}

#[test]
fn test_whitespace_only_is_plain() {
    let spans = inline::format("   ");
    assert_eq!(spans, vec![TextSpan::plain("   ")]);
}

// ============================================================================
// Single Delimiter Patterns
// ============================================================================

#[test]
fn test_bold() {
    let spans = inline::format("**bold**");
    assert_eq!(spans, vec![TextSpan::bold("bold")]);
}

#[test]
fn test_italic() {
    let spans = inline::format("*italic*");
    assert_eq!(spans, vec![TextSpan::italic("italic")]);
}

#[test]
fn test_inline_code() {
    let spans = inline::format("`code`");
    assert_eq!(spans, vec![TextSpan::code("code")]);
}

#[test]
fn test_strikethrough() {
    let spans = inline::format("~~gone~~");
    assert_eq!(spans, vec![TextSpan::strikethrough("gone")]);
}

#[test]
fn test_styled_span_in_context() {
    let spans = inline::format("say `hi` now");
    assert_eq!(
        spans,
        vec![
            TextSpan::plain("say "),
            TextSpan::code("hi"),
            TextSpan::plain(" now"),
        ]
    );
}

#[test]
fn test_bold_and_italic_mix() {
    let spans = inline::format("**bold** and *italic*");
    assert_eq!(
        spans,
        vec![
            TextSpan::bold("bold"),
            TextSpan::plain(" and "),
            TextSpan::italic("italic"),
        ]
    );
}

#[test]
fn test_adjacent_styled_spans() {
    let spans = inline::format("**a**`b`");
    assert_eq!(spans, vec![TextSpan::bold("a"), TextSpan::code("b")]);
}

#[test]
fn test_all_four_styles_in_one_line() {
    let spans = inline::format("**b** *i* `c` ~~s~~");
    assert_eq!(
        spans,
        vec![
            TextSpan::bold("b"),
            TextSpan::plain(" "),
            TextSpan::italic("i"),
            TextSpan::plain(" "),
            TextSpan::code("c"),
            TextSpan::plain(" "),
            TextSpan::strikethrough("s"),
        ]
    );
}

// ============================================================================
// Non-Greedy Matching and Atomicity
// ============================================================================

#[test]
fn test_non_greedy_closing() {
    // The nearest closer wins; the second pair starts a new match.
    let spans = inline::format("**a** and **b**");
    assert_eq!(
        spans,
        vec![
            TextSpan::bold("a"),
            TextSpan::plain(" and "),
            TextSpan::bold("b"),
        ]
    );
}

#[test]
fn test_code_content_is_not_scanned() {
    let spans = inline::format("`**not bold**`");
    assert_eq!(spans, vec![TextSpan::code("**not bold**")]);
}

#[test]
fn test_styles_do_not_nest() {
    // The match is atomic: inner markers survive as literal content.
    let spans = inline::format("**a *b* c**");
    assert_eq!(spans, vec![TextSpan::bold("a *b* c")]);
}

#[test]
fn test_italic_swallows_code_markers() {
    let spans = inline::format("*`code`*");
    assert_eq!(spans, vec![TextSpan::italic("`code`")]);
}

#[test]
fn test_no_space_guard_around_content() {
    // Content may start or end with whitespace.
    let spans = inline::format("** bold **");
    assert_eq!(spans, vec![TextSpan::bold(" bold ")]);
}

// ============================================================================
// Unbalanced Delimiters Stay Literal
// ============================================================================

#[test]
fn test_lone_asterisk_is_literal() {
    let spans = inline::format("a * b");
    assert_eq!(spans, vec![TextSpan::plain("a * b")]);
}

#[test]
fn test_unclosed_bold_is_literal() {
    let spans = inline::format("**never closed");
    assert_eq!(spans, vec![TextSpan::plain("**never closed")]);
}

#[test]
fn test_unclosed_backtick_is_literal() {
    let spans = inline::format("a ` b");
    assert_eq!(spans, vec![TextSpan::plain("a ` b")]);
}

#[test]
fn test_single_tilde_pair_is_literal() {
    // Strikethrough needs doubled tildes on both sides.
    let spans = inline::format("~single~ tilde");
    assert_eq!(spans, vec![TextSpan::plain("~single~ tilde")]);
}

#[test]
fn test_empty_delimiter_pair_is_literal() {
    // A closer with no content between is not a match.
    let spans = inline::format("``");
    assert_eq!(spans, vec![TextSpan::plain("``")]);
}

#[test]
fn test_literal_prefix_before_late_match() {
    let spans = inline::format("5 * 3 = `15`");
    assert_eq!(
        spans,
        vec![TextSpan::plain("5 * 3 = "), TextSpan::code("15")]
    );
}

// ============================================================================
// Implementation-Defined Asterisk Pileups
// ============================================================================

#[test]
fn test_triple_asterisk_bold_wins() {
    // Deliberate, documented choice: bold consumes the shared position and
    // takes a leading literal asterisk into its content.
    let spans = inline::format("***text***");
    assert_eq!(spans, vec![TextSpan::bold("*text"), TextSpan::plain("*")]);
}

#[test]
fn test_four_asterisks() {
    // No bold closer exists, so italic matches with a literal `*` content.
    let spans = inline::format("****");
    assert_eq!(spans, vec![TextSpan::italic("*"), TextSpan::plain("*")]);
}

#[test]
fn test_bold_failure_falls_back_to_italic() {
    let spans = inline::format("**x*");
    assert_eq!(spans, vec![TextSpan::italic("*x")]);
}

// ============================================================================
// Round-Trip Property
// ============================================================================

#[test]
fn test_round_trip_reconstructs_input() {
    let inputs = [
        "",
        "plain",
        "**bold**",
        "*italic* tail",
        "`code` and ~~strike~~",
        "**a** *b* `c` ~~d~~ mixed together",
        "unbalanced ** stays ** as ** is",
        "a * b * c",
        "***text***",
        "| not | a | table | here",
        "trailing **bold**",
        "**lead** trailing text",
    ];

    for input in inputs {
        let spans = inline::format(input);
        assert_eq!(reconstruct(&spans), input, "round-trip failed for {input:?}");
    }
}

#[test]
fn test_spans_never_empty_except_empty_input() {
    let spans = inline::format("**a** b");
    for span in &spans {
        assert!(!span.content.is_empty());
    }
}

#[test]
fn test_format_is_deterministic() {
    let input = "**a** and *b* plus `c`";
    assert_eq!(inline::format(input), inline::format(input));
}

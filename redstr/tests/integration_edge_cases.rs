//! Edge-case coverage for replacement strategies and span handling.
//!
//! These tests focus on behavior across Unicode scalar values (including
//! multi-byte characters and combining marks), on boundary cases such as
//! empty or very short values, and on how the engine splices replacements
//! into text around multi-byte characters.

use redstr::{Pattern, RedactionEngine, RedactionRule, Replacement, Sensitivity};

fn engine_with(pattern: Pattern, replacement: Replacement) -> RedactionEngine {
    RedactionEngine::new([RedactionRule::new(pattern, replacement)]).unwrap()
}

// ============================================================================
// Replacement strategies
// ============================================================================

#[test]
fn test_empty_value() {
    // Keep and mask leave empty values unchanged; full always emits the placeholder.
    assert_eq!(Replacement::keep_last(4).apply_to(""), "");
    assert_eq!(Replacement::mask_first(2).apply_to(""), "");
    assert_eq!(Replacement::default_full().apply_to(""), "[REDACTED]");
}

#[test]
fn test_short_value_fits_keep_span() {
    assert_eq!(Replacement::keep_last(4).apply_to("x"), "x");
    assert_eq!(Replacement::mask_first(1).apply_to("x"), "*");
    assert_eq!(Replacement::mask_first(10).apply_to("abc"), "***");
}

#[test]
fn test_unicode_emoji() {
    let value = "secret🔒data";
    assert_eq!(Replacement::keep_first(6).apply_to(value), "secret*****");
    assert_eq!(Replacement::keep_last(4).apply_to(value), "*******data");
}

#[test]
fn test_unicode_multibyte() {
    let value = "秘密数据";
    assert_eq!(Replacement::keep_first(2).apply_to(value), "秘密**");
    assert_eq!(Replacement::mask_last(1).apply_to(value), "秘密数*");
}

#[test]
fn test_combining_marks_count_as_characters() {
    assert_eq!(Replacement::keep_first(4).apply_to("cafe\u{0301}"), "cafe*");
}

#[test]
fn test_custom_mask_char() {
    let replacement = Replacement::keep_last(2).with_mask_char('•');
    assert_eq!(replacement.apply_to("123456"), "••••56");

    // Full replacement ignores the mask symbol.
    let full = Replacement::full_with("<gone>").with_mask_char('#');
    assert_eq!(full.apply_to("123456"), "<gone>");
}

#[test]
fn test_very_long_value() {
    let long = "x".repeat(100_000);
    let result = Replacement::keep_last(10).apply_to(&long);
    assert_eq!(result.len(), 100_000);
    assert!(result.starts_with(&"*".repeat(99_990)));
    assert!(result.ends_with("xxxxxxxxxx"));
}

#[test]
fn test_null_byte_is_an_ordinary_character() {
    assert_eq!(Replacement::mask_last(4).apply_to("test\0data"), "test\0****");
}

// ============================================================================
// Span handling inside the engine
// ============================================================================

#[test]
fn test_match_between_multibyte_characters() {
    let engine = engine_with(
        Pattern::literal("secret", Sensitivity::Secret, "秘密").unwrap(),
        Replacement::full_with("[X]"),
    );
    let result = engine.redact("数据秘密数据");
    assert_eq!(result.text(), "数据[X]数据");
    assert_eq!(result.count("secret"), 1);
}

#[test]
fn test_partial_mask_next_to_emoji() {
    let engine = engine_with(
        Pattern::regex("pin", Sensitivity::Credential, r"[0-9]{4}").unwrap(),
        Replacement::keep_last(2),
    );
    assert_eq!(engine.redact("🔒1234🔒").text(), "🔒**34🔒");
}

#[test]
fn test_adjacent_matches() {
    let engine = engine_with(
        Pattern::literal("ab", Sensitivity::Secret, "ab").unwrap(),
        Replacement::full_with("<>"),
    );
    let result = engine.redact("ababab");
    assert_eq!(result.text(), "<><><>");
    assert_eq!(result.count("ab"), 3);
}

#[test]
fn test_self_overlapping_literal_matches_left_to_right() {
    let engine = engine_with(
        Pattern::literal("aa", Sensitivity::Secret, "aa").unwrap(),
        Replacement::full_with("#"),
    );
    let result = engine.redact("aaaaa");
    assert_eq!(result.text(), "##a");
    assert_eq!(result.count("aa"), 2);
}

#[test]
fn test_secret_group_keeps_surrounding_context() {
    let engine = engine_with(
        Pattern::regex("kv", Sensitivity::Credential, r"key=(?P<secret>\w+)").unwrap(),
        Replacement::full_with("#"),
    );
    let result = engine.redact("key=abc&key=def");
    assert_eq!(result.text(), "key=#&key=#");
    assert_eq!(result.count("kv"), 2);
}

#[test]
fn test_empty_secret_group_is_not_a_redaction() {
    let engine = engine_with(
        Pattern::regex("opt", Sensitivity::Secret, r"x(?P<secret>y*)").unwrap(),
        Replacement::full_with("#"),
    );
    let result = engine.redact("x xy");
    assert_eq!(result.text(), "x x#");
    assert_eq!(result.count("opt"), 1);
}

#[test]
fn test_secret_at_end_of_long_input() {
    let engine = engine_with(
        Pattern::literal("secret", Sensitivity::Secret, "secret123").unwrap(),
        Replacement::full_with("***"),
    );
    let input = format!("{} token=secret123", "a".repeat(100_000));
    let result = engine.redact(&input);
    assert!(result.text().ends_with(" token=***"));
    assert_eq!(result.text().len(), input.len() - "secret123".len() + 3);
}

#[test]
fn test_case_insensitive_pattern() {
    let engine = engine_with(
        Pattern::regex("word", Sensitivity::Secret, r"(?i)hunter2").unwrap(),
        Replacement::default_full(),
    );
    assert_eq!(
        engine.redact("HUNTER2 and Hunter2").text(),
        "[REDACTED] and [REDACTED]"
    );
}

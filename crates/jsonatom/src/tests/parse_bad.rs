use rstest::rstest;

use crate::{ParseError, parse, parse_str};

#[rstest]
#[case("")]
#[case(" ")]
#[case(" \t\r\n ")]
fn whitespace_only_input_expects_a_value(#[case] input: &str) {
    assert_eq!(parse_str(input), Err(ParseError::ExpectValue));
}

#[rstest]
#[case("nul")]
#[case("nulL")]
#[case("nulx")]
#[case("tru")]
#[case("truE")]
#[case("falsf")]
#[case("fals")]
fn corrupted_literals_are_invalid(#[case] input: &str) {
    assert_eq!(parse_str(input), Err(ParseError::InvalidValue));
}

#[rstest]
#[case("+0")]
#[case("+1")]
#[case(".123")]
#[case("1.")]
#[case("1e")]
#[case("1e+")]
#[case("1e-")]
#[case("-")]
#[case("INF")]
#[case("inf")]
#[case("NAN")]
#[case("nan")]
#[case("?")]
#[case("#hello")]
fn malformed_numbers_and_unknown_tokens_are_invalid(#[case] input: &str) {
    assert_eq!(parse_str(input), Err(ParseError::InvalidValue));
}

// A syntactically complete number followed by trailing bytes parses the
// number and then fails the singular-root check, never the number reader.
#[rstest]
#[case("0123")]
#[case("0x0")]
#[case("0x123")]
#[case("1a")]
#[case("1.5x")]
#[case("null x")]
#[case("true false")]
#[case(r#""ok" trailing"#)]
fn trailing_input_makes_the_root_non_singular(#[case] input: &str) {
    assert_eq!(parse_str(input), Err(ParseError::RootNotSingular));
}

#[rstest]
#[case("1e400")]
#[case("-1e400")]
#[case("1e309")]
#[case("-1e309")]
fn overflowing_numbers_are_too_big(#[case] input: &str) {
    assert_eq!(parse_str(input), Err(ParseError::NumberTooBig));
}

#[rstest]
#[case(r#"""#)]
#[case(r#""abc"#)]
#[case("\"a\\nb")]
fn unterminated_strings_miss_the_quotation_mark(#[case] input: &str) {
    assert_eq!(parse_str(input), Err(ParseError::MissQuotationMark));
}

// A backslash at the very end of input consumes the terminator as its
// escape character, so it reports an escape error, not a missing quote.
#[rstest]
#[case(r#""\v""#)]
#[case(r#""\'""#)]
#[case(r#""\0""#)]
#[case(r#""\x12""#)]
#[case(r#""abc\"#)]
fn unknown_escapes_are_rejected(#[case] input: &str) {
    assert_eq!(parse_str(input), Err(ParseError::InvalidStringEscape));
}

#[test]
fn unescaped_control_characters_are_rejected() {
    assert_eq!(parse(b"\"\x01\""), Err(ParseError::InvalidStringChar));
    assert_eq!(parse(b"\"\x1F\""), Err(ParseError::InvalidStringChar));
    assert_eq!(parse(b"\"a\0b\""), Err(ParseError::InvalidStringChar));
}

#[rstest]
#[case(r#""\u""#)]
#[case(r#""\u0""#)]
#[case(r#""\u01""#)]
#[case(r#""\u012""#)]
#[case(r#""\u/000""#)]
#[case(r#""\uG000""#)]
#[case(r#""\u0G00""#)]
#[case(r#""\u00G0""#)]
#[case(r#""\u000G""#)]
#[case(r#""\u 123""#)]
fn malformed_hex_escapes_are_rejected(#[case] input: &str) {
    assert_eq!(parse_str(input), Err(ParseError::InvalidUnicodeHex));
}

#[rstest]
#[case(r#""\uD800""#)]
#[case(r#""\uDBFF""#)]
#[case(r#""\uD800\\""#)]
#[case(r#""\uD800A""#)]
#[case(r#""\uD800\uD800""#)]
#[case(r#""\uD800u0041""#)]
#[case(r#""\uD800 \uDC00""#)]
fn broken_surrogate_pairs_are_rejected(#[case] input: &str) {
    assert_eq!(parse_str(input), Err(ParseError::InvalidUnicodeSurrogate));
}

#[test]
fn failure_yields_no_partial_value() {
    // The error kind is the entire outcome; no value escapes.
    let outcome = parse_str(r#""abc"#);
    assert!(outcome.is_err());
}

#[test]
fn error_kinds_render_messages() {
    use std::string::ToString;

    assert_eq!(ParseError::ExpectValue.to_string(), "expected a value");
    assert_eq!(
        ParseError::MissQuotationMark.to_string(),
        "missing closing quotation mark"
    );
}

//! Number grammar validation and conversion.

use crate::{cursor::Cursor, error::ParseError, value::Value};

fn is_digit(byte: Option<&u8>) -> bool {
    matches!(byte, Some(b'0'..=b'9'))
}

/// Parses a number at the cursor per the RFC 8259 grammar:
/// `-? (0 | [1-9][0-9]*) (\. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
///
/// The walk validates shape only and stops at the first byte outside the
/// grammar; whatever follows is left for the driver's singular-root check,
/// so `1x` parses the `1` here and fails later as a non-singular root
/// rather than as a number error. The same applies to `012`: the leading
/// zero ends the integer part, leaving `12` behind. Shape violations with
/// no valid prefix (`.5`, `1.`, `1e`, `+1`) are
/// [`ParseError::InvalidValue`].
///
/// A magnitude that overflows to infinity is [`ParseError::NumberTooBig`];
/// the cursor is not advanced in that case.
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let text = cursor.rest();
    let mut end = 0usize;

    if text.get(end) == Some(&b'-') {
        end += 1;
    }
    match text.get(end) {
        Some(b'0') => end += 1,
        Some(b'1'..=b'9') => {
            while is_digit(text.get(end)) {
                end += 1;
            }
        }
        _ => return Err(ParseError::InvalidValue),
    }
    if text.get(end) == Some(&b'.') {
        end += 1;
        if !is_digit(text.get(end)) {
            return Err(ParseError::InvalidValue);
        }
        while is_digit(text.get(end)) {
            end += 1;
        }
    }
    if matches!(text.get(end), Some(b'e' | b'E')) {
        end += 1;
        if matches!(text.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        if !is_digit(text.get(end)) {
            return Err(ParseError::InvalidValue);
        }
        while is_digit(text.get(end)) {
            end += 1;
        }
    }

    // The walk admits only ASCII bytes and exactly the shapes `f64`'s
    // parser accepts, so neither conversion can fail on a validated span.
    let lexeme = core::str::from_utf8(&text[..end]).map_err(|_| ParseError::InvalidValue)?;
    let number: f64 = lexeme.parse().map_err(|_| ParseError::InvalidValue)?;
    if number.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    cursor.advance(end);
    Ok(Value::Number(number))
}

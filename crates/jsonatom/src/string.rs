//! String literal decoding.
//!
//! Decoded bytes are pushed one at a time onto the shared [`ByteStack`] and
//! popped back off as a single span when the closing quote is reached. Every
//! failure path rolls the stack back to the length recorded on entry, so a
//! failed string leaves it exactly as if the string had never been
//! attempted.

use alloc::vec::Vec;

use bstr::BString;

use crate::{cursor::Cursor, error::ParseError, stack::ByteStack, value::Value};

const HIGH_SURROGATE_MIN: u32 = 0xD800;
const HIGH_SURROGATE_MAX: u32 = 0xDBFF;
const LOW_SURROGATE_MIN: u32 = 0xDC00;
const LOW_SURROGATE_MAX: u32 = 0xDFFF;

/// Parses a string literal at the cursor, which must be positioned at the
/// opening quote.
pub(crate) fn parse_string(
    cursor: &mut Cursor<'_>,
    stack: &mut ByteStack,
) -> Result<Value, ParseError> {
    let mark = stack.len();
    match decode(cursor, stack, mark) {
        Ok(bytes) => Ok(Value::String(BString::from(bytes))),
        Err(err) => {
            stack.truncate(mark);
            Err(err)
        }
    }
}

fn decode(
    cursor: &mut Cursor<'_>,
    stack: &mut ByteStack,
    mark: usize,
) -> Result<Vec<u8>, ParseError> {
    cursor.advance(1); // opening quote, already peeked by the dispatcher
    loop {
        match cursor.bump() {
            None => return Err(ParseError::MissQuotationMark),
            Some(b'"') => return Ok(stack.pop(stack.len() - mark)),
            Some(b'\\') => match cursor.bump() {
                Some(b'"') => stack.push(b'"'),
                Some(b'\\') => stack.push(b'\\'),
                Some(b'/') => stack.push(b'/'),
                Some(b'b') => stack.push(0x08),
                Some(b'f') => stack.push(0x0C),
                Some(b'n') => stack.push(b'\n'),
                Some(b'r') => stack.push(b'\r'),
                Some(b't') => stack.push(b'\t'),
                Some(b'u') => {
                    let code_point = unicode_escape(cursor)?;
                    encode_utf8(stack, code_point);
                }
                _ => return Err(ParseError::InvalidStringEscape),
            },
            // Unescaped control characters are forbidden inside strings.
            Some(byte) if byte < 0x20 => return Err(ParseError::InvalidStringChar),
            // Bytes >= 0x80 pass through untouched; raw input is not
            // validated as UTF-8.
            Some(byte) => stack.push(byte),
        }
    }
}

/// Decodes the code point of a `\u` escape, with the leading `\u` already
/// consumed. A high surrogate must be immediately followed by a second
/// escape carrying its low half; the pair combines into a supplementary
/// code point.
fn unicode_escape(cursor: &mut Cursor<'_>) -> Result<u32, ParseError> {
    let unit = hex4(cursor).ok_or(ParseError::InvalidUnicodeHex)?;
    if (HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&unit) {
        if cursor.bump() != Some(b'\\') || cursor.bump() != Some(b'u') {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        let low = hex4(cursor).ok_or(ParseError::InvalidUnicodeSurrogate)?;
        if !(LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&low) {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        return Ok(0x10000 + (unit - HIGH_SURROGATE_MIN) * 0x400 + (low - LOW_SURROGATE_MIN));
    }
    Ok(unit)
}

/// Reads exactly four case-insensitive hex digits into a 16-bit code unit.
fn hex4(cursor: &mut Cursor<'_>) -> Option<u32> {
    let mut unit = 0u32;
    for _ in 0..4 {
        let digit = match cursor.bump()? {
            byte @ b'0'..=b'9' => u32::from(byte - b'0'),
            byte @ b'a'..=b'f' => u32::from(byte - b'a') + 10,
            byte @ b'A'..=b'F' => u32::from(byte - b'A') + 10,
            _ => return None,
        };
        unit = unit << 4 | digit;
    }
    Some(unit)
}

/// Pushes the UTF-8 encoding of `code_point` onto the stack, one byte at a
/// time so a later rollback removes exactly this string's contribution.
#[expect(clippy::cast_possible_truncation)]
fn encode_utf8(stack: &mut ByteStack, code_point: u32) {
    debug_assert!(code_point <= 0x10_FFFF);
    if code_point <= 0x7F {
        stack.push((code_point & 0xFF) as u8);
    } else if code_point <= 0x7FF {
        stack.push((0xC0 | (code_point >> 6)) as u8);
        stack.push((0x80 | (code_point & 0x3F)) as u8);
    } else if code_point <= 0xFFFF {
        stack.push((0xE0 | (code_point >> 12)) as u8);
        stack.push((0x80 | ((code_point >> 6) & 0x3F)) as u8);
        stack.push((0x80 | (code_point & 0x3F)) as u8);
    } else {
        stack.push((0xF0 | (code_point >> 18)) as u8);
        stack.push((0x80 | ((code_point >> 12) & 0x3F)) as u8);
        stack.push((0x80 | ((code_point >> 6) & 0x3F)) as u8);
        stack.push((0x80 | (code_point & 0x3F)) as u8);
    }
}

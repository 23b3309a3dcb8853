//! Keyword literal matching for `null`, `true`, and `false`.

use crate::{cursor::Cursor, error::ParseError, value::Value};

/// One keyword the dispatcher may expect after peeking its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    /// The keyword bytes after the first character.
    fn tail(self) -> &'static [u8] {
        match self {
            Literal::Null => b"ull",
            Literal::True => b"rue",
            Literal::False => b"alse",
        }
    }

    fn value(self) -> Value {
        match self {
            Literal::Null => Value::Null,
            Literal::True => Value::Boolean(true),
            Literal::False => Value::Boolean(false),
        }
    }
}

/// Matches the expected keyword at the cursor, consuming it on success.
///
/// The cursor must be positioned at the keyword's first byte, which the
/// dispatcher already peeked. Any mismatch, including premature end of
/// input, is [`ParseError::InvalidValue`]; the cursor position is then
/// unspecified and the caller must not continue from it.
pub(crate) fn parse_literal(
    cursor: &mut Cursor<'_>,
    expected: Literal,
) -> Result<Value, ParseError> {
    cursor.advance(1);
    for &want in expected.tail() {
        if cursor.bump() != Some(want) {
            return Err(ParseError::InvalidValue);
        }
    }
    Ok(expected.value())
}

//! A strict recursive-descent parser for single scalar JSON values.
//!
//! `jsonatom` parses one JSON text containing a single `null`, `true`,
//! `false`, number, or string literal into a tagged [`Value`], reporting
//! exactly one [`ParseError`] kind on failure. String decoding handles the
//! eight single-character escapes, `\uXXXX` hex escapes, UTF-16 surrogate
//! pairs, and re-encodes decoded code points as UTF-8.
//!
//! Arrays and objects are not part of the grammar; an input whose root is a
//! composite value is rejected. Raw string bytes at or above 0x80 are passed
//! through without UTF-8 validation, so string payloads are byte strings
//! ([`bstr::BString`]).
//!
//! ```
//! use jsonatom::{ParseError, Value};
//!
//! assert_eq!(jsonatom::parse_str("true"), Ok(Value::Boolean(true)));
//! assert_eq!(jsonatom::parse_str("1e400"), Err(ParseError::NumberTooBig));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod literal;
mod number;
mod parser;
mod stack;
mod string;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use value::Value;

use parser::Parser;

/// Parses a single JSON value from a bounded byte slice.
///
/// The slice end is the input terminator. Leading and trailing whitespace
/// (space, tab, line feed, carriage return) is permitted; any other
/// trailing input makes the parse fail with [`ParseError::RootNotSingular`].
///
/// # Errors
///
/// Returns the single [`ParseError`] kind describing the first violation
/// encountered. A failed parse never yields a partial value.
///
/// # Examples
///
/// ```
/// use jsonatom::Value;
///
/// let v = jsonatom::parse(b" -1.5e-5 ").unwrap();
/// assert_eq!(v, Value::Number(-1.5e-5));
/// ```
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    Parser::new(input).parse()
}

/// Parses a single JSON value from a string slice.
///
/// Convenience wrapper around [`parse`].
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_str(input: &str) -> Result<Value, ParseError> {
    parse(input.as_bytes())
}

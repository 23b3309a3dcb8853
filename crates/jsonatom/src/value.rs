//! The parsed value type.
//!
//! This module defines the [`Value`] enum, the tagged result of a successful
//! parse, together with predicate and accessor helpers.

use bstr::{BStr, BString};

/// A single scalar JSON value as defined by [RFC 8259].
///
/// Arrays and objects are not part of this crate's grammar; a future
/// aggregate layer would extend the parser, not this type's invariants.
///
/// A `String` payload is an owned *byte* string: raw input bytes at or above
/// 0x80 pass through the decoder untouched, so the decoded content is not
/// guaranteed to be valid UTF-8. Only the bytes the decoder itself produces
/// from `\uXXXX` escapes are well-formed UTF-8 sequences.
///
/// # Examples
///
/// ```
/// use jsonatom::Value;
///
/// let v = jsonatom::parse_str("3.1416").unwrap();
/// assert_eq!(v, Value::Number(3.1416));
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// The `true` or `false` literal.
    Boolean(bool),
    /// A finite double-precision number.
    Number(f64),
    /// A decoded string literal, stored as owned bytes.
    String(BString),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonatom::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns the boolean payload, or `None` if the tag does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonatom::Value;
    ///
    /// assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
    /// assert_eq!(Value::Null.as_boolean(), None);
    /// ```
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric payload, or `None` if the tag does not match.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string payload as a borrowed byte string, or `None` if
    /// the tag does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstr::BStr;
    /// use jsonatom::Value;
    ///
    /// let v = jsonatom::parse_str(r#""hello""#).unwrap();
    /// assert_eq!(v.as_string(), Some(BStr::new("hello")));
    /// ```
    #[must_use]
    pub fn as_string(&self) -> Option<&BStr> {
        match self {
            Self::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }
}

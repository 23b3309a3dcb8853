use thiserror::Error;

/// The reason a parse failed.
///
/// Exactly one kind is produced per failed parse. The enum is
/// `#[non_exhaustive]` so that a future aggregate layer (arrays, objects)
/// can add kinds such as missing commas or brackets without a breaking
/// change.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no value at all (empty or whitespace-only).
    #[error("expected a value")]
    ExpectValue,
    /// The input began with something that is not a JSON value, or a
    /// `null`/`true`/`false` keyword or number was malformed.
    #[error("invalid value")]
    InvalidValue,
    /// A valid value was followed by trailing non-whitespace input.
    #[error("root value is not singular")]
    RootNotSingular,
    /// A number's magnitude overflows the finite `f64` range.
    #[error("number too big")]
    NumberTooBig,
    /// A string literal was not closed before the end of input.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// A backslash was followed by an unrecognized escape character.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// An unescaped control character (below U+0020) appeared in a string.
    #[error("invalid character in string")]
    InvalidStringChar,
    /// A `\u` escape was not followed by exactly four hex digits.
    #[error("invalid unicode hex escape")]
    InvalidUnicodeHex,
    /// A high surrogate was not followed by `\u` and a low surrogate.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
}

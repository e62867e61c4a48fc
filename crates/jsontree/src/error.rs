//! Error categories reported by the parser.

use thiserror::Error;

/// The closed set of ways a parse can fail.
///
/// Every failure is terminal: the parser stops at the first violation and
/// reports exactly one category, with no recovery or partial success.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was empty or all whitespace before any value.
    #[error("expected a value")]
    ExpectValue,
    /// A lead character matched no value grammar, a number violated the
    /// grammar, or a literal keyword mismatched.
    #[error("invalid value")]
    InvalidValue,
    /// A number's converted magnitude overflowed to infinity.
    #[error("number too big")]
    NumberTooBig,
    /// Non-whitespace content followed a successfully parsed root value.
    #[error("root value is not singular")]
    RootNotSingular,
    /// A string reached end of input before its closing quote.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// An unescaped control character (below U+0020) appeared in a string.
    #[error("invalid character in string")]
    InvalidStringChar,
    /// `\` was followed by a character outside the recognized escape set.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// `\u` was not followed by exactly 4 hexadecimal digits.
    #[error("invalid unicode hex escape")]
    InvalidUnicodeHex,
    /// A surrogate escape was malformed: a high surrogate without a
    /// following `\u` low half, a low half out of range, or a lone low
    /// surrogate.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
    /// An array element was not followed by `,` or `]`.
    #[error("missing comma or closing square bracket")]
    MissCommaOrSquareBracket,
    /// An object member did not begin with `"`.
    #[error("missing object key")]
    MissKey,
    /// An object key was not followed by `:`.
    #[error("missing colon after object key")]
    MissColon,
    /// An object member was not followed by `,` or `}`.
    #[error("missing comma or closing curly bracket")]
    MissCommaOrCurlyBracket,
}

/// A parse failure: the category plus the byte offset at which it was
/// detected.
///
/// The offset points at the offending byte in the input (for
/// [`ErrorKind::ExpectValue`] and end-of-input failures it equals the input
/// length).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte offset into the input where the violation was detected.
    pub offset: usize,
}

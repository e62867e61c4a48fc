//! The recursive-descent parsing engine.
//!
//! Parsing is LL(1) at the value level: [`parse_value`] peeks exactly one
//! byte and routes to the matching stage, so no backtracking across value
//! kinds is ever needed. Structural parsers accumulate children into a
//! local `Vec` and move it into the parent only when the closing bracket is
//! seen; any error drops the `Vec`, which releases every partially-built
//! child before the error crosses the call boundary.

mod number;
mod string;

use crate::{
    error::{ErrorKind, ParseError},
    value::{Array, Member, Members, Value},
};

/// The transient read position over one parse call.
///
/// Holds the full input and a byte offset. Never shared across calls; one
/// cursor lives exactly as long as one [`parse`] invocation.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unread byte.
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// Bytes left before end of input, used to seed decode-buffer capacity.
    pub(crate) fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// The unread remainder of the input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The input between `start` and the current offset. Both bounds are
    /// char boundaries by construction (the scanners only stop on ASCII).
    pub(crate) fn slice(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Advances past one byte. Callers only bump after a successful peek.
    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    /// Advances past `n` bytes already validated by lookahead.
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consumes `b` if it is the next byte.
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// An error of `kind` at the current offset.
    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError {
            kind,
            offset: self.pos,
        }
    }

    /// Advances past a maximal run of space, tab, CR, LF. Idempotent.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Reads exactly 4 bytes as case-insensitive hexadecimal, advancing by
    /// 4 on success. Fails with [`ErrorKind::InvalidUnicodeHex`] on any
    /// non-hex byte, including reaching end of input early.
    pub(crate) fn hex4(&mut self) -> Result<u32, ParseError> {
        let mut acc = 0u32;
        for _ in 0..4 {
            let digit = match self.peek() {
                Some(b @ b'0'..=b'9') => u32::from(b - b'0'),
                Some(b @ b'a'..=b'f') => u32::from(b - b'a') + 10,
                Some(b @ b'A'..=b'F') => u32::from(b - b'A') + 10,
                _ => return Err(self.error(ErrorKind::InvalidUnicodeHex)),
            };
            self.bump();
            acc = (acc << 4) | digit;
        }
        Ok(acc)
    }

    /// Matches the tail of a fixed keyword after the dispatcher recognized
    /// its lead byte. JSON has no two tokens sharing a lead, so a mismatch
    /// is terminal with no backtracking.
    fn literal(&mut self, rest: &'static [u8], value: Value) -> Result<Value, ParseError> {
        self.bump();
        for &b in rest {
            if !self.eat(b) {
                return Err(self.error(ErrorKind::InvalidValue));
            }
        }
        Ok(value)
    }
}

/// Dispatches on the next byte without consuming it.
fn parse_value(cur: &mut Cursor) -> Result<Value, ParseError> {
    match cur.peek() {
        None => Err(cur.error(ErrorKind::ExpectValue)),
        Some(b'n') => cur.literal(b"ull", Value::Null),
        Some(b't') => cur.literal(b"rue", Value::Boolean(true)),
        Some(b'f') => cur.literal(b"alse", Value::Boolean(false)),
        Some(b'"') => {
            cur.bump();
            string::parse_string(cur).map(Value::String)
        }
        Some(b'[') => parse_array(cur),
        Some(b'{') => parse_object(cur),
        // Everything else is a number candidate; the lexer rejects
        // non-numeric leads with `InvalidValue`.
        Some(_) => number::parse_number(cur),
    }
}

fn parse_array(cur: &mut Cursor) -> Result<Value, ParseError> {
    cur.bump();
    cur.skip_whitespace();
    if cur.eat(b']') {
        return Ok(Value::Array(Array::new()));
    }
    let mut elements = Array::new();
    loop {
        elements.push(parse_value(cur)?);
        cur.skip_whitespace();
        if cur.eat(b',') {
            cur.skip_whitespace();
        } else if cur.eat(b']') {
            return Ok(Value::Array(elements));
        } else {
            return Err(cur.error(ErrorKind::MissCommaOrSquareBracket));
        }
    }
}

fn parse_object(cur: &mut Cursor) -> Result<Value, ParseError> {
    cur.bump();
    cur.skip_whitespace();
    if cur.eat(b'}') {
        return Ok(Value::Object(Members::new()));
    }
    let mut members = Members::new();
    loop {
        if !cur.eat(b'"') {
            return Err(cur.error(ErrorKind::MissKey));
        }
        let key = string::parse_string(cur)?;
        cur.skip_whitespace();
        if !cur.eat(b':') {
            return Err(cur.error(ErrorKind::MissColon));
        }
        cur.skip_whitespace();
        let value = parse_value(cur)?;
        members.push(Member { key, value });
        cur.skip_whitespace();
        if cur.eat(b',') {
            cur.skip_whitespace();
        } else if cur.eat(b'}') {
            return Ok(Value::Object(members));
        } else {
            return Err(cur.error(ErrorKind::MissCommaOrCurlyBracket));
        }
    }
}

/// Parses a complete JSON document into an owned [`Value`] tree.
///
/// The input must hold exactly one JSON value, optionally surrounded by
/// whitespace. Non-whitespace content after the root value fails with
/// [`ErrorKind::RootNotSingular`] even when the root itself parsed cleanly.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; parsing never recovers or
/// produces a partial tree.
///
/// # Examples
///
/// ```
/// use jsontree::{parse, Value};
///
/// assert_eq!(parse("  true  "), Ok(Value::Boolean(true)));
/// assert!(parse("true false").is_err());
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut cur = Cursor::new(input);
    cur.skip_whitespace();
    let value = parse_value(&mut cur)?;
    cur.skip_whitespace();
    if cur.peek().is_some() {
        return Err(cur.error(ErrorKind::RootNotSingular));
    }
    Ok(value)
}

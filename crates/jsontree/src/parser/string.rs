//! String decoding: escape sequences, `\uXXXX` escapes, and UTF-16
//! surrogate-pair combination, emitting UTF-8.

use alloc::string::String;

use crate::{
    error::{ErrorKind, ParseError},
    parser::Cursor,
};

/// Initial capacity for decode buffers, capped by the remaining input so
/// short documents never over-reserve.
const STRING_BUFFER_SEED: usize = 256;

const HIGH_SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Decodes a string body after the caller consumed the opening quote.
///
/// Used both for object keys (raw `String`) and, wrapped in
/// [`Value::String`], for string values. Runs of plain bytes are copied in
/// one slice append; the byte-at-a-time path only handles quotes, escapes,
/// and control-character rejection. On any failure the partially decoded
/// buffer is dropped by this frame.
///
/// [`Value::String`]: crate::Value::String
pub(crate) fn parse_string(cur: &mut Cursor) -> Result<String, ParseError> {
    let mut out = String::with_capacity(cur.remaining().min(STRING_BUFFER_SEED));
    loop {
        match cur.peek() {
            None => return Err(cur.error(ErrorKind::MissQuotationMark)),
            Some(b'"') => {
                cur.bump();
                return Ok(out);
            }
            Some(b'\\') => {
                cur.bump();
                decode_escape(cur, &mut out)?;
            }
            Some(b) if b < 0x20 => return Err(cur.error(ErrorKind::InvalidStringChar)),
            Some(_) => {
                // Verbatim run. Continuation bytes of multi-byte characters
                // are >= 0x80 and never match a terminator, so the run ends
                // on a char boundary and the slice append stays valid UTF-8.
                let start = cur.offset();
                while let Some(b) = cur.peek() {
                    if b == b'"' || b == b'\\' || b < 0x20 {
                        break;
                    }
                    cur.bump();
                }
                out.push_str(cur.slice(start));
            }
        }
    }
}

fn decode_escape(cur: &mut Cursor, out: &mut String) -> Result<(), ParseError> {
    match cur.peek() {
        Some(b'"') => out.push('"'),
        Some(b'\\') => out.push('\\'),
        Some(b'/') => out.push('/'),
        Some(b'b') => out.push('\u{8}'),
        Some(b'f') => out.push('\u{c}'),
        Some(b'n') => out.push('\n'),
        Some(b'r') => out.push('\r'),
        Some(b't') => out.push('\t'),
        Some(b'u') => {
            cur.bump();
            return decode_unicode_escape(cur, out);
        }
        _ => return Err(cur.error(ErrorKind::InvalidStringEscape)),
    }
    cur.bump();
    Ok(())
}

/// Resolves a `\uXXXX` escape (the `\u` is already consumed) to one code
/// point and pushes its UTF-8 form.
///
/// A high surrogate must be followed by exactly `\u` and a low surrogate;
/// the two combine to one supplementary-plane code point. A lone low
/// surrogate is rejected outright, so every decoded string is valid UTF-8.
fn decode_unicode_escape(cur: &mut Cursor, out: &mut String) -> Result<(), ParseError> {
    let pair_start = cur.offset();
    let u1 = cur.hex4()?;
    let code = if HIGH_SURROGATES.contains(&u1) {
        if !(cur.eat(b'\\') && cur.eat(b'u')) {
            return Err(cur.error(ErrorKind::InvalidUnicodeSurrogate));
        }
        let u2 = cur.hex4().map_err(|e| ParseError {
            kind: ErrorKind::InvalidUnicodeSurrogate,
            offset: e.offset,
        })?;
        if !LOW_SURROGATES.contains(&u2) {
            return Err(cur.error(ErrorKind::InvalidUnicodeSurrogate));
        }
        0x10000 + ((u1 - 0xD800) << 10) + (u2 - 0xDC00)
    } else if LOW_SURROGATES.contains(&u1) {
        return Err(ParseError {
            kind: ErrorKind::InvalidUnicodeSurrogate,
            offset: pair_start,
        });
    } else {
        u1
    };
    // Surrogates were resolved above and hex4 caps at 0xFFFF, so `code` is
    // always a valid scalar; the fallback is unreachable.
    let ch = char::from_u32(code).ok_or_else(|| cur.error(ErrorKind::InvalidUnicodeSurrogate))?;
    out.push(ch);
    Ok(())
}

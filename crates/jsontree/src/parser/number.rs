//! Number lexing and conversion.

use crate::{
    error::{ErrorKind, ParseError},
    parser::Cursor,
    value::Value,
};

/// Validates the JSON number grammar by lookahead, then converts the
/// accepted span to `f64`.
///
/// Grammar: optional `-`; integer part `0` alone or `1-9` followed by any
/// digits; optional `.` with one-or-more digits; optional `E`/`e` with an
/// optional sign and one-or-more digits. The cursor does not move until the
/// whole span is accepted, so a rejected candidate (or an overflowing one)
/// leaves it at the lead byte.
pub(crate) fn parse_number(cur: &mut Cursor) -> Result<Value, ParseError> {
    let rest = cur.rest();
    let bytes = rest.as_bytes();
    let mut i = 0;

    let reject = |at: usize| ParseError {
        kind: ErrorKind::InvalidValue,
        offset: cur.offset() + at,
    };

    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            while let Some(b'0'..=b'9') = bytes.get(i) {
                i += 1;
            }
        }
        _ => return Err(reject(i)),
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
            return Err(reject(i));
        }
        while let Some(b'0'..=b'9') = bytes.get(i) {
            i += 1;
        }
    }
    if let Some(b'e' | b'E') = bytes.get(i) {
        i += 1;
        if let Some(b'+' | b'-') = bytes.get(i) {
            i += 1;
        }
        if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
            return Err(reject(i));
        }
        while let Some(b'0'..=b'9') = bytes.get(i) {
            i += 1;
        }
    }

    // The accepted span is a strict subset of what `f64::from_str` accepts,
    // so conversion cannot fail; it is correctly rounded, and magnitudes
    // below the subnormal range round to exactly 0.0.
    let n: f64 = rest[..i].parse().map_err(|_| reject(0))?;
    if n.is_infinite() {
        return Err(cur.error(ErrorKind::NumberTooBig));
    }
    cur.advance(i);
    Ok(Value::Number(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Result<Value, ParseError> {
        let mut cur = Cursor::new(input);
        parse_number(&mut cur)
    }

    #[test]
    fn accepts_full_grammar() {
        assert_eq!(lex("-1.5e+2"), Ok(Value::Number(-150.0)));
    }

    #[test]
    fn rejects_missing_fraction_digits() {
        let err = lex("1.").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidValue);
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn rejects_leading_plus() {
        assert_eq!(lex("+1").unwrap_err().kind, ErrorKind::InvalidValue);
    }

    #[test]
    fn overflow_leaves_cursor_at_lead() {
        let mut cur = Cursor::new("1e309");
        let err = parse_number(&mut cur).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NumberTooBig);
        assert_eq!(cur.offset(), 0);
    }

    #[test]
    fn stops_at_first_non_number_byte() {
        let mut cur = Cursor::new("0123");
        assert_eq!(parse_number(&mut cur), Ok(Value::Number(0.0)));
        assert_eq!(cur.offset(), 1);
    }
}

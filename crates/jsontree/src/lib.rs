//! A strict JSON parser that turns a complete text into an owned,
//! strongly-typed [`Value`] tree.
//!
//! The grammar is RFC 8259 JSON with no extensions: no comments, no trailing
//! commas, no lenient numbers. Exactly one root value is accepted per
//! document; anything after it (other than whitespace) is an error.
//!
//! ```
//! use jsontree::{parse, Value};
//!
//! let v = parse(r#"{"name":"gopher","tags":["a","b"]}"#).unwrap();
//! assert_eq!(v.get("name").and_then(Value::as_str), Some("gopher"));
//! assert_eq!(v.get("tags").and_then(Value::as_array).map(Vec::len), Some(2));
//! ```
//!
//! Failures report one of thirteen [`ErrorKind`] categories plus the byte
//! offset at which the violation was detected:
//!
//! ```
//! use jsontree::{parse, ErrorKind};
//!
//! let err = parse("[1 2]").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::MissCommaOrSquareBracket);
//! assert_eq!(err.offset, 3);
//! ```
//!
//! # Resource bounds
//!
//! Parsing is purely synchronous and allocates only for decoded strings and
//! container contents. Recursion depth equals the nesting depth of the
//! input, so a pathologically deep document can exhaust the call stack;
//! callers parsing untrusted input should bound document depth externally.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod parser;
mod value;

#[cfg(any(test, feature = "serde"))]
mod serde_impls;


pub use error::{ErrorKind, ParseError};
pub use parser::parse;
pub use value::{Array, Member, Members, Value};

//! # jon
//!
//! A parser, dynamic value tree and schema validator for the jon data format.
//!
//! ## What is jon?
//!
//! jon is a human-friendly superset of JSON aimed at configuration files. It
//! keeps JSON's data model and relaxes the syntax:
//!
//! - the root object needs no braces, and newlines work as separators;
//! - `//` line comments and nestable `/* */` block comments;
//! - single- or double-quoted strings, tripled quotes for multi-line strings;
//! - `0x`/`0o`/`0b` integer literals with `_` digit separators;
//! - signed non-finite floats (`nan`, `+inf`, `-inf`);
//! - `$name` references that resolve to other document locations.
//!
//! ## Quick Start
//!
//! ```rust
//! use jon::parse;
//!
//! let config = parse(
//!     "// server settings
//!      host: 'localhost'
//!      port: 8080
//!      retries: [1, 2, 3],",
//! )
//! .unwrap();
//!
//! assert_eq!(config.at("host").unwrap().get_str().unwrap(), "localhost");
//! assert_eq!(config.at("port").unwrap().get_int().unwrap(), 8080);
//! assert_eq!(config.at("retries").unwrap().size(), 3);
//! ```
//!
//! ### Validating Against A Schema
//!
//! Schemas are written in jon itself and violations come back as a report
//! keyed by pointer paths — nothing is thrown for instance errors:
//!
//! ```rust
//! use jon::{parse, validate, to_error_list};
//!
//! let instance = parse("name: 'jon', port: 70000").unwrap();
//! let schema = parse(
//!     "type: 'object'
//!      props: {
//!        name: { type: 'string', minLen: 1 }
//!        port: { type: 'int', minInt: 1, maxInt: 65535 }
//!      }",
//! )
//! .unwrap();
//!
//! let report = validate(&instance, &schema).unwrap();
//! assert!(report.has("/port/maxInt"));
//!
//! let lines = to_error_list(&report).unwrap();
//! assert_eq!(lines.size(), 1);
//! ```
//!
//! ### Serialising
//!
//! ```rust
//! use jon::{dump, dump_pretty, parse};
//!
//! let doc = parse("a: 1\nb: [true, null]").unwrap();
//! assert_eq!(dump(&doc), "{a:1,b:[true,null]}");
//! assert_eq!(dump_pretty(&doc), "{\n  a: 1\n  b: [\n    true\n    null\n  ]\n}");
//!
//! // the compact form is canonical: it re-parses to an equal tree
//! assert_eq!(parse(&dump(&doc)).unwrap(), doc);
//! ```
//!
//! ## Error Reporting
//!
//! Parse errors point at the offending source position with a caret excerpt:
//!
//! ```text
//! parse error at line 2, column 6:
//! port: }
//!       ^ expected value, got `}`
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All indexing is bounds-checked; access errors are `Result`s, not panics
//! - Parsing is single-pass and O(n) in the input length

pub mod ast;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod parser;
pub mod printer;
pub mod schema;
pub mod value;

pub use cursor::Span;
pub use error::{Error, Result};
pub use lexer::{lex, Token, TokenKind};
pub use map::JonMap;
pub use parser::Parser;
pub use printer::Indent;
pub use schema::{to_error_list, validate};
pub use value::{JonValue, Type};

/// Alias used pervasively in builder-style code and by the [`jon!`] macro.
pub type Value = JonValue;

use std::path::Path;

/// Parses a jon document into a value tree.
///
/// References stay unresolved as [`JonValue::Ref`] nodes; call
/// [`JonValue::resolve_refs`] to replace them.
///
/// # Examples
///
/// ```rust
/// use jon::parse;
///
/// let doc = parse("x: 0xFF_00, y: 0b1010, z: -1.5").unwrap();
/// assert_eq!(doc.at("x").unwrap().get_int().unwrap(), 65280);
/// assert_eq!(doc.at("y").unwrap().get_int().unwrap(), 10);
/// assert_eq!(doc.at("z").unwrap().get_float().unwrap(), -1.5);
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] with a caret excerpt when the text is not valid
/// jon.
pub fn parse(text: &str) -> Result<JonValue> {
    Ok(Parser::parse(text)?.into_value())
}

/// Reads a file as UTF-8 and parses it.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, or any error
/// [`parse`] produces.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<JonValue> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("{}: {e}", path.display())))?;
    parse(&text)
}

/// Serialises a value to the compact canonical form.
#[must_use]
pub fn dump(value: &JonValue) -> String {
    value.dump(&Indent::compact())
}

/// Serialises a value with two-space indentation.
#[must_use]
pub fn dump_pretty(value: &JonValue) -> String {
    value.dump(&Indent::spaces(2))
}

/// Serialises a value with a custom indentation unit.
#[must_use]
pub fn dump_with_indent(value: &JonValue, unit: &str) -> String {
    value.dump(&Indent::new(unit))
}

/// Produces an object mapping pointer paths to every leaf of `value`.
///
/// See [`JonValue::flatten`].
#[must_use]
pub fn flatten(value: &JonValue) -> JonValue {
    value.flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_root() {
        let doc = parse("name: 'jon'\ncount: 3,\n").unwrap();
        assert!(doc.is_object());
        assert_eq!(doc.at("name").unwrap().get_str().unwrap(), "jon");
        assert_eq!(doc.at("count").unwrap().get_int().unwrap(), 3);
    }

    #[test]
    fn test_round_trip() {
        let doc = parse("a: 1\nb: ['x', true, null]\nc: {d: 'e'}").unwrap();
        assert_eq!(parse(&dump(&doc)).unwrap(), doc);
        assert_eq!(parse(&dump_pretty(&doc)).unwrap(), doc);
    }

    #[test]
    fn test_validate_conforming_instance() {
        let instance = parse("42").unwrap();
        let schema = parse("anyOf: [{type: 'string'}, {type: 'int', maxInt: 100}]").unwrap();
        assert_eq!(validate(&instance, &schema).unwrap(), JonValue::Null);
    }

    #[test]
    fn test_flatten() {
        let doc = parse("a: {b: [10, 20]}").unwrap();
        let flat = flatten(&doc);
        assert_eq!(flat.at("a/b/0").unwrap(), &JonValue::Int(10));
        assert_eq!(flat.at("a/b/1").unwrap(), &JonValue::Int(20));
    }

    #[test]
    fn test_from_file_missing() {
        let err = from_file("/definitely/not/here.jon").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_file_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("jon_lib_test_doc.jon");
        std::fs::write(&path, "a: 1\nb: 'two'").unwrap();
        let doc = from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(doc.at("b").unwrap().get_str().unwrap(), "two");
    }
}

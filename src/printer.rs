//! Canonical and pretty serialisation.
//!
//! Serialisation is driven by an [`Indent`] descriptor: a unit string and a
//! nesting level, where level `-1` selects the compact single-line form. The
//! compact form is canonical — strings are escape-processed so the output
//! re-parses to an equal tree; the pretty form favours readability and emits
//! string payloads raw.

use crate::map::JonMap;
use crate::value::JonValue;

/// Indentation descriptor: a repeated unit string and a nesting level.
///
/// # Examples
///
/// ```rust
/// use jon::{parse, Indent};
///
/// let doc = parse("a: 1, b: [2]").unwrap();
/// assert_eq!(doc.dump(&Indent::compact()), "{a:1,b:[2]}");
/// assert_eq!(doc.dump(&Indent::spaces(2)), "{\n  a: 1\n  b: [\n    2\n  ]\n}");
/// ```
#[derive(Clone, Debug)]
pub struct Indent {
    unit: String,
    level: i32,
}

impl Indent {
    /// Pretty indentation starting at level zero with the given unit.
    pub fn new(unit: impl Into<String>) -> Self {
        Indent {
            unit: unit.into(),
            level: 0,
        }
    }

    /// The compact, whitespace-free form.
    #[must_use]
    pub fn compact() -> Self {
        Indent {
            unit: String::new(),
            level: -1,
        }
    }

    /// Pretty indentation with a unit of `n` spaces.
    #[must_use]
    pub fn spaces(n: usize) -> Self {
        Indent::new(" ".repeat(n))
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.level < 0
    }

    fn deeper(&self) -> Indent {
        Indent {
            unit: self.unit.clone(),
            level: if self.level < 0 { -1 } else { self.level + 1 },
        }
    }

    fn write_to(&self, out: &mut String) {
        for _ in 0..self.level {
            out.push_str(&self.unit);
        }
    }
}

pub(crate) fn dump_value(value: &JonValue, indent: &Indent) -> String {
    let mut out = String::new();
    write_value(value, indent, &mut out);
    out
}

fn write_value(value: &JonValue, indent: &Indent, out: &mut String) {
    match value {
        JonValue::Null => out.push_str("null"),
        JonValue::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
        JonValue::Int(v) => out.push_str(&v.to_string()),
        JonValue::Float(v) => out.push_str(&format_float(*v)),
        JonValue::String(s) => write_string(s, indent.is_compact(), out),
        JonValue::Ref(path) => {
            out.push('$');
            out.push_str(path);
        }
        JonValue::Object(map) => write_object(map, indent, out),
        JonValue::Array(items) => write_array(items, indent, out),
    }
}

fn write_object(map: &JonMap, indent: &Indent, out: &mut String) {
    let pretty = !indent.is_compact();
    out.push('{');
    if pretty {
        out.push('\n');
    }
    let inner = indent.deeper();
    for (i, (key, value)) in map.iter().enumerate() {
        if pretty {
            inner.write_to(out);
        }
        out.push_str(key);
        out.push(':');
        if pretty {
            out.push(' ');
        }
        write_value(value, &inner, out);
        if pretty {
            out.push('\n');
        } else if i + 1 < map.len() {
            out.push(',');
        }
    }
    if pretty {
        indent.write_to(out);
    }
    out.push('}');
}

fn write_array(items: &[JonValue], indent: &Indent, out: &mut String) {
    let pretty = !indent.is_compact();
    out.push('[');
    if pretty {
        out.push('\n');
    }
    let inner = indent.deeper();
    for (i, value) in items.iter().enumerate() {
        if pretty {
            inner.write_to(out);
        }
        write_value(value, &inner, out);
        if pretty {
            out.push('\n');
        } else if i + 1 < items.len() {
            out.push(',');
        }
    }
    if pretty {
        indent.write_to(out);
    }
    out.push(']');
}

/// Floats stay re-parseable as floats: non-finite values use the keyword
/// spellings and whole numbers keep a `.0` suffix.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let s = v.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

fn write_string(s: &str, compact: bool, out: &mut String) {
    out.push('\'');
    if compact {
        for ch in s.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{0008}' => out.push_str("\\b"),
                '\u{000C}' => out.push_str("\\f"),
                '\u{000B}' => out.push_str("\\v"),
                _ => out.push(ch),
            }
        }
    } else {
        out.push_str(s);
    }
    out.push('\'');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn compact_has_no_whitespace() {
        let doc = parse("a: 1\nb: {c: 'x'}\nd: [1, 2]").unwrap();
        assert_eq!(doc.dump(&Indent::compact()), "{a:1,b:{c:'x'},d:[1,2]}");
    }

    #[test]
    fn pretty_puts_entries_on_lines() {
        let doc = parse("a: 1\nb: {c: 2}").unwrap();
        let expected = "{\n  a: 1\n  b: {\n    c: 2\n  }\n}";
        assert_eq!(doc.dump(&Indent::spaces(2)), expected);
    }

    #[test]
    fn custom_unit_strings() {
        let doc = parse("a: {b: 1}").unwrap();
        assert_eq!(doc.dump(&Indent::new("\t")), "{\n\ta: {\n\t\tb: 1\n\t}\n}");
    }

    #[test]
    fn empty_containers() {
        assert_eq!(parse("{}").unwrap().dump(&Indent::compact()), "{}");
        assert_eq!(parse("[]").unwrap().dump(&Indent::compact()), "[]");
        assert_eq!(parse("{}").unwrap().dump(&Indent::spaces(2)), "{\n}");
    }

    #[test]
    fn non_finite_floats_use_keywords() {
        assert_eq!(JonValue::Float(f64::NAN).dump(&Indent::compact()), "nan");
        assert_eq!(JonValue::Float(f64::INFINITY).dump(&Indent::compact()), "inf");
        assert_eq!(
            JonValue::Float(f64::NEG_INFINITY).dump(&Indent::compact()),
            "-inf"
        );
    }

    #[test]
    fn whole_floats_stay_floats() {
        assert_eq!(JonValue::Float(1.0).dump(&Indent::compact()), "1.0");
        let reparsed = parse(&JonValue::Float(1.0).dump(&Indent::compact())).unwrap();
        assert!(reparsed.is_float());
    }

    #[test]
    fn compact_strings_escape() {
        let value = JonValue::String("a'b\\c\nd".to_string());
        assert_eq!(value.dump(&Indent::compact()), r"'a\'b\\c\nd'");
        assert_eq!(parse(&value.dump(&Indent::compact())).unwrap(), value);
    }

    #[test]
    fn refs_render_with_dollar() {
        let doc = parse("alias: $target/0").unwrap();
        assert_eq!(doc.dump(&Indent::compact()), "{alias:$target/0}");
    }
}

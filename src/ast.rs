//! Intermediate tree produced by the parser.
//!
//! The AST mirrors the runtime value types plus a [`Ast::Ref`] node, but keeps
//! object entries as an ordered pair list so duplicate keys survive until
//! lowering (where the later entry wins).

use crate::map::JonMap;
use crate::value::JonValue;

#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Ref(String),
    Object(Vec<(String, Ast)>),
    Array(Vec<Ast>),
}

impl Ast {
    /// Lowers the parse tree into the public value representation.
    ///
    /// The lowering is structural and one-to-one; references stay unresolved
    /// as [`JonValue::Ref`] until [`JonValue::resolve_refs`] runs.
    #[must_use]
    pub fn into_value(self) -> JonValue {
        match self {
            Ast::Null => JonValue::Null,
            Ast::Bool(v) => JonValue::Bool(v),
            Ast::Int(v) => JonValue::Int(v),
            Ast::Float(v) => JonValue::Float(v),
            Ast::String(v) => JonValue::String(v),
            Ast::Ref(name) => JonValue::Ref(name),
            Ast::Object(entries) => {
                let mut map = JonMap::with_capacity(entries.len());
                for (key, val) in entries {
                    map.insert(key, val.into_value());
                }
                JonValue::Object(map)
            }
            Ast::Array(values) => {
                JonValue::Array(values.into_iter().map(Ast::into_value).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowering_is_structural() {
        let ast = Ast::Object(vec![
            ("a".to_string(), Ast::Int(1)),
            ("b".to_string(), Ast::Array(vec![Ast::Null, Ast::Bool(true)])),
        ]);
        let value = ast.into_value();
        assert_eq!(value.at("a").unwrap(), &JonValue::Int(1));
        assert_eq!(value.at("b").unwrap().size(), 2);
    }

    #[test]
    fn later_duplicate_key_wins() {
        let ast = Ast::Object(vec![
            ("k".to_string(), Ast::Int(1)),
            ("k".to_string(), Ast::Int(2)),
        ]);
        let value = ast.into_value();
        assert_eq!(value.size(), 1);
        assert_eq!(value.at("k").unwrap(), &JonValue::Int(2));
    }
}

//! Property-based tests for the core guarantees: the compact dump re-parses
//! to an equal tree, separators are interchangeable, bare and braced roots
//! agree, and flatten is idempotent.
//!
//! Floats are left out of the generated trees: the round-trip property is
//! specified for the other scalar types, while float equality is tolerance
//! based.

use jon::{dump, parse, JonMap, JonValue};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = JonValue> {
    prop_oneof![
        Just(JonValue::Null),
        any::<bool>().prop_map(JonValue::Bool),
        any::<i64>().prop_map(JonValue::Int),
        "[a-z0-9 _.-]{0,12}".prop_map(JonValue::from),
    ]
}

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn object_from_entries(entries: Vec<(String, JonValue)>) -> JonValue {
    let mut map = JonMap::new();
    for (k, v) in entries {
        map.insert(k, v);
    }
    JonValue::Object(map)
}

fn tree() -> impl Strategy<Value = JonValue> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JonValue::Array),
            prop::collection::vec((key(), inner), 0..6).prop_map(object_from_entries),
        ]
    })
}

proptest! {
    #[test]
    fn prop_compact_dump_reparses_equal(value in tree()) {
        let text = dump(&value);
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn prop_separators_are_interchangeable(
        seps in prop::collection::vec(
            prop_oneof![
                Just(","),
                Just("\n"),
                Just(",\n"),
                Just("\n,"),
                Just("\n\n,\n\n"),
            ],
            2,
        )
    ) {
        let text = format!("[1{}2{}3]", seps[0], seps[1]);
        prop_assert_eq!(parse(&text).unwrap(), parse("[1,2,3]").unwrap());
    }

    #[test]
    fn prop_bare_and_braced_roots_agree(entries in prop::collection::vec((key(), leaf()), 0..6)) {
        let object = object_from_entries(entries);
        let braced = dump(&object);
        // the compact dump of an object is always `{…}`; the body alone is
        // the same document in bare-root form
        let bare = &braced[1..braced.len() - 1];
        prop_assert_eq!(parse(bare).unwrap(), object);
    }

    #[test]
    fn prop_flatten_is_idempotent(value in tree()) {
        let once = value.flatten();
        let twice = once.flatten();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_parse_never_panics(text in "[ -~\n]{0,64}") {
        let _ = parse(&text);
    }
}

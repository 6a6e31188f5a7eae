use jon::{dump, dump_pretty, flatten, parse, Error, JonValue};

// the compact form is the canonical one; pretty output emits strings raw
// and only round-trips when payloads carry no quotes or control characters
fn assert_roundtrip(source: &str) {
    let doc = parse(source).unwrap();
    let compact = parse(&dump(&doc)).unwrap();
    assert_eq!(compact, doc, "compact round trip of {source:?}");
}

#[test]
fn test_bare_root_with_trailing_comma() {
    let doc = parse("name: 'jon'\ncount: 3,\n").unwrap();
    assert_eq!(doc.size(), 2);
    assert_eq!(doc.at("name").unwrap(), &JonValue::from("jon"));
    assert_eq!(doc.at("count").unwrap(), &JonValue::Int(3));
}

#[test]
fn test_bare_and_braced_roots_are_equivalent() {
    let bare = parse("a: 1\nb: {c: [2, 3]}\nd: 'x'").unwrap();
    let braced = parse("{a: 1\nb: {c: [2, 3]}\nd: 'x'}").unwrap();
    assert_eq!(bare, braced);
}

#[test]
fn test_separator_permissiveness() {
    let plain = parse("a: 1, b: 2, c: 3").unwrap();
    let variants = [
        "a: 1\nb: 2\nc: 3",
        "a: 1,\nb: 2,\nc: 3,",
        "a: 1\n\n\nb: 2 , c: 3",
        "\n\na: 1\nb: 2\n,\nc: 3\n\n",
    ];
    for source in variants {
        assert_eq!(parse(source).unwrap(), plain, "source: {source:?}");
    }
}

#[test]
fn test_multiline_string_with_escape() {
    let doc = parse("text: '''hello\\nworld'''").unwrap();
    let text = doc.at("text").unwrap().get_str().unwrap();
    assert_eq!(text, "hello\nworld");
    assert_eq!(text.len(), 11);
}

#[test]
fn test_multiline_string_with_raw_newlines() {
    let doc = parse("text: \"\"\"line one\nline two\"\"\"").unwrap();
    assert_eq!(
        doc.at("text").unwrap().get_str().unwrap(),
        "line one\nline two"
    );
}

#[test]
fn test_numeric_bases_and_separators() {
    let doc = parse("x: 0xFF_00, y: 0b1010, z: -1.5").unwrap();
    assert_eq!(doc.at("x").unwrap(), &JonValue::Int(65280));
    assert_eq!(doc.at("y").unwrap(), &JonValue::Int(10));
    assert_eq!(doc.at("z").unwrap(), &JonValue::Float(-1.5));
}

#[test]
fn test_non_finite_floats() {
    let doc = parse("a: nan, b: +nan, c: -nan, d: inf, e: +inf, f: -inf").unwrap();
    for key in ["a", "b", "c"] {
        assert!(doc.at(key).unwrap().get_float().unwrap().is_nan());
    }
    assert_eq!(doc.at("d").unwrap().get_float().unwrap(), f64::INFINITY);
    assert_eq!(doc.at("e").unwrap().get_float().unwrap(), f64::INFINITY);
    assert_eq!(doc.at("f").unwrap().get_float().unwrap(), f64::NEG_INFINITY);
}

#[test]
fn test_comments_everywhere() {
    let doc = parse(
        "// leading comment
         a: 1 // trailing
         /* block
            /* nested */
            comment */
         b: 2",
    )
    .unwrap();
    assert_eq!(doc.size(), 2);
    assert_eq!(doc.at("b").unwrap(), &JonValue::Int(2));
}

#[test]
fn test_bare_identifiers_are_strings() {
    let doc = parse("greeting: hello world\nempty: ''").unwrap();
    assert_eq!(doc.at("greeting").unwrap(), &JonValue::from("hello world"));
    assert_eq!(doc.at("empty").unwrap(), &JonValue::from(""));
}

#[test]
fn test_keyword_keys() {
    let doc = parse("null: 1\ntrue: 2\ninf: 3\n-nan: 4").unwrap();
    assert_eq!(doc.at("null").unwrap(), &JonValue::Int(1));
    assert_eq!(doc.at("true").unwrap(), &JonValue::Int(2));
    assert_eq!(doc.at("inf").unwrap(), &JonValue::Int(3));
    assert_eq!(doc.at("-nan").unwrap(), &JonValue::Int(4));
}

#[test]
fn test_duplicate_keys_later_wins() {
    let doc = parse("a: 1\na: 2").unwrap();
    assert_eq!(doc.size(), 1);
    assert_eq!(doc.at("a").unwrap(), &JonValue::Int(2));
}

#[test]
fn test_parse_errors_carry_excerpts() {
    for source in ["a: [1, 2", "{a: 1", "a: 1}", "x: 0x", "s: 'unterminated"] {
        let err = parse(source).unwrap_err();
        let Error::Parse { excerpt, .. } = &err else {
            panic!("expected parse error for {source:?}, got {err:?}");
        };
        assert!(excerpt.contains('^'), "no caret for {source:?}: {excerpt}");
    }
}

#[test]
fn test_error_location_points_at_the_right_line() {
    let err = parse("ok: 1\nbad: }").unwrap_err();
    let Error::Parse { line, .. } = err else {
        panic!("expected parse error");
    };
    assert_eq!(line, 2);
}

#[test]
fn test_round_trips() {
    assert_roundtrip("a: 1, b: -2, c: 0x10");
    assert_roundtrip("s: 'with spaces', t: 'quote\\'s'");
    assert_roundtrip("nested: {list: [1, [2, {deep: null}]], ok: true}");
    assert_roundtrip("[]");
    assert_roundtrip("{}");
    assert_roundtrip("'scalar'");
    assert_roundtrip("alias: $target, target: 7");
}

#[test]
fn test_pretty_round_trip_on_tame_strings() {
    let doc = parse("nested: {list: [1, 'two'], ok: true}\nname: 'plain text'").unwrap();
    assert_eq!(parse(&dump_pretty(&doc)).unwrap(), doc);
}

#[test]
fn test_refs_survive_parsing_and_resolve_on_demand() {
    let mut doc = parse("defaults: {retries: 3}\njob: {retries: $defaults/retries}").unwrap();
    assert_eq!(
        doc.pointer("job/retries"),
        Some(&JonValue::Ref("defaults/retries".to_string()))
    );

    doc.resolve_refs().unwrap();
    assert_eq!(doc.pointer("job/retries"), Some(&JonValue::Int(3)));
}

#[test]
fn test_flatten_pointer_paths() {
    let doc = parse("a: {b: 1}\nlist: [true, {c: 'x'}]\nempty: []").unwrap();
    let flat = flatten(&doc);
    assert_eq!(flat.at("a/b").unwrap(), &JonValue::Int(1));
    assert_eq!(flat.at("list/0").unwrap(), &JonValue::Bool(true));
    assert_eq!(flat.at("list/1/c").unwrap(), &JonValue::from("x"));
    // the empty array contributes no path
    assert_eq!(flat.size(), 3);
    // idempotence
    assert_eq!(flatten(&flat), flat);
}

#[test]
fn test_unicode_escapes_decode() {
    let doc = parse(r"s: 'café \U0001F980'").unwrap();
    assert_eq!(doc.at("s").unwrap().get_str().unwrap(), "café 🦀");
}

#[test]
fn test_byte_escapes() {
    let doc = parse(r"s: '\x41\102\tx'").unwrap();
    assert_eq!(doc.at("s").unwrap().get_str().unwrap(), "AB\tx");
}

#[test]
fn test_deep_nesting() {
    let mut source = String::new();
    for _ in 0..64 {
        source.push_str("[");
    }
    source.push_str("1");
    for _ in 0..64 {
        source.push_str("]");
    }
    let mut doc = parse(&source).unwrap();
    for _ in 0..64 {
        doc = doc.at_index(0).unwrap().clone();
    }
    assert_eq!(doc, JonValue::Int(1));
}

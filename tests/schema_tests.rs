use jon::{parse, to_error_list, validate, Error, JonValue};

fn check(instance: &str, schema: &str) -> JonValue {
    validate(&parse(instance).unwrap(), &parse(schema).unwrap()).unwrap()
}

#[test]
fn test_conforming_document() {
    let report = check(
        "name: 'service'\nport: 8080\ntags: ['a', 'b']",
        "type: 'object'
         props: {
           name: { type: 'string', minLen: 1 }
           port: { type: 'int', minInt: 1, maxInt: 65535 }
           tags: { type: 'array', items: 'string' }
         }",
    );
    assert_eq!(report, JonValue::Null);
}

#[test]
fn test_report_keys_and_entry_shape() {
    let report = check(
        "name: 'a', age: -1",
        "type: 'object'
         props: {
           name: { type: 'string', minLen: 2 }
           age:  { type: 'int', minInt: 0 }
         }",
    );

    assert_eq!(report.size(), 2);
    for (path, keyword, data) in [
        ("/name/minLen", "minLen", JonValue::from("a")),
        ("/age/minInt", "minInt", JonValue::Int(-1)),
    ] {
        let entry = report.at(path).unwrap();
        assert_eq!(entry.at("keyword").unwrap(), &JonValue::from(keyword));
        assert_eq!(entry.at("data").unwrap(), &data);
        assert!(entry.at("message").unwrap().is_string());
    }
}

#[test]
fn test_extras_false_rejects_unknown_keys() {
    let report = check("a: 1, b: 2", "type: 'object', props: { a: 'int' }");
    assert!(report.has("/b/extras"));
    assert_eq!(report.size(), 1);
}

#[test]
fn test_any_of_succeeds_when_one_matches() {
    let report = check("42", "anyOf: [ { type: 'string' }, { type: 'int', maxInt: 100 } ]");
    assert_eq!(report, JonValue::Null);
}

#[test]
fn test_one_of_rejects_double_matches() {
    // both alternatives match 42, which violates the exactly-one rule
    let report = check("42", "oneOf: [ { type: 'int' }, { minInt: 0 } ]");
    assert!(report.has("/oneOf"));
}

#[test]
fn test_schemas_written_as_sole_type_names() {
    assert_eq!(check("'text'", "'string'"), JonValue::Null);
    assert!(check("42", "'string'").has("/type"));
    // a bare type name carries no other constraints, so nothing else runs
    assert_eq!(check("''", "'string'"), JonValue::Null);
}

#[test]
fn test_nested_arrays_of_objects() {
    let report = check(
        "users: [ {name: 'ok'}, {name: 7} ]",
        "props: { users: { type: 'array', items: { props: { name: 'string' } } } }",
    );
    assert!(report.has("/users/1/name/type"));
    assert!(!report.has("/users/0/name/type"));
}

#[test]
fn test_nullable_with_type() {
    assert_eq!(check("null", "type: 'string', nullable: true"), JonValue::Null);
    assert!(check("null", "type: 'string', nullable: false").has("/type"));
}

#[test]
fn test_pattern_dialect_is_anchored() {
    assert_eq!(check("'v1.2.3'", r"pattern: 'v\\d+\\.\\d+\\.\\d+'"), JonValue::Null);
    assert!(check("'xv1.2.3'", r"pattern: 'v\\d+\\.\\d+\\.\\d+'").has("/pattern"));
}

#[test]
fn test_invalid_schema_names_the_path() {
    let err = validate(
        &parse("a: {b: 'x'}").unwrap(),
        &parse("props: { a: { props: { b: { type: 'wat' } } } }").unwrap(),
    )
    .unwrap_err();
    let Error::InvalidSchema { path, .. } = err else {
        panic!("expected InvalidSchema");
    };
    assert!(path.contains("props/a"), "{path}");
}

#[test]
fn test_type_failure_does_not_stop_combinators() {
    // the type keyword records its failure, then combinators still run
    let report = check("'text'", "type: 'int', not: { type: 'string' }");
    assert!(report.has("/type"));
    assert!(report.has("/not"));
}

#[test]
fn test_validation_is_pure() {
    let instance = parse("x: [1, 'two']").unwrap();
    let schema = parse("props: { x: { items: 'int' } }").unwrap();
    assert_eq!(
        validate(&instance, &schema).unwrap(),
        validate(&instance, &schema).unwrap()
    );
}

#[test]
fn test_error_list_round_trips_through_text() {
    let report = check("a: 'x', b: 3", "props: { a: 'int', b: 'string' }");
    let list = to_error_list(&report).unwrap();
    assert_eq!(list.size(), 2);
    for item in list.get_array().unwrap() {
        let line = item.get_str().unwrap();
        assert!(line.contains(": "), "{line}");
    }
}

#[test]
fn test_schema_for_resolved_refs() {
    let mut doc = parse("base: 80\nport: $base").unwrap();
    assert_eq!(check("$x", "'ref'"), JonValue::Null);
    doc.resolve_refs().unwrap();
    let report = validate(
        &doc,
        &parse("props: { base: 'int', port: 'int' }").unwrap(),
    )
    .unwrap();
    assert_eq!(report, JonValue::Null);
}

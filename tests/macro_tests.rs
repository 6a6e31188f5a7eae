use jon::{dump, jon, JonMap, JonValue, Value};

#[test]
fn test_jon_macro_null() {
    let value = jon!(null);
    assert_eq!(value, Value::Null);
    assert!(value.is_null());
}

#[test]
fn test_jon_macro_booleans() {
    assert_eq!(jon!(true), Value::Bool(true));
    assert_eq!(jon!(false), Value::Bool(false));
}

#[test]
fn test_jon_macro_numbers() {
    assert_eq!(jon!(42), Value::Int(42));
    assert_eq!(jon!(2.5), Value::Float(2.5));
}

#[test]
fn test_jon_macro_strings() {
    assert_eq!(jon!("hello"), Value::String("hello".to_string()));
    let name = String::from("owned");
    assert_eq!(jon!(name), Value::String("owned".to_string()));
}

#[test]
fn test_jon_macro_arrays() {
    assert_eq!(jon!([]), Value::Array(vec![]));
    assert_eq!(
        jon!([1, true, "x", null]),
        Value::Array(vec![
            Value::Int(1),
            Value::Bool(true),
            Value::String("x".to_string()),
            Value::Null,
        ])
    );
}

#[test]
fn test_jon_macro_objects() {
    assert_eq!(jon!({}), Value::Object(JonMap::new()));

    let value = jon!({
        "name": "Alice",
        "age": 30,
        "active": true
    });
    assert_eq!(value.at("name").unwrap(), &Value::from("Alice"));
    assert_eq!(value.at("age").unwrap(), &Value::Int(30));
    assert_eq!(value.at("active").unwrap(), &Value::Bool(true));
}

#[test]
fn test_jon_macro_nested() {
    let value = jon!({
        "servers": [
            { "host": "a", "port": 8001 },
            { "host": "b", "port": 8002 }
        ],
        "limits": { "cpu": 2.5 }
    });

    assert_eq!(value.pointer("servers/0/host"), Some(&Value::from("a")));
    assert_eq!(value.pointer("servers/1/port"), Some(&Value::Int(8002)));
    assert_eq!(value.pointer("limits/cpu"), Some(&Value::Float(2.5)));
}

#[test]
fn test_jon_macro_agrees_with_parser() {
    let built = jon!({
        "a": 1,
        "b": ["x", false]
    });
    let parsed = jon::parse("a: 1\nb: ['x', false]").unwrap();
    assert_eq!(built, parsed);
    assert_eq!(dump(&built), dump(&parsed));
}

#[test]
fn test_jon_macro_trailing_commas() {
    let value = jon!({
        "a": 1,
        "b": 2,
    });
    assert_eq!(value.size(), 2);
    let value = jon!([1, 2, 3,]);
    assert_eq!(value.size(), 3);
}

#[test]
fn test_jon_macro_values_are_plain_jonvalues() {
    // the macro output is the same type parse produces
    let value: JonValue = jon!({ "k": [1] });
    assert!(value.is_object());
}

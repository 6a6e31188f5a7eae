//! Schema validation for jon values.
//!
//! A schema is written in the jon format itself: either a bare type name
//! (`'int'`) or an object combining a type constraint with per-kind checks
//! (`minInt`, `pattern`, `items`, `props`, …) and the combinators `anyOf`,
//! `oneOf`, `allOf` and `not`.
//!
//! [`validate`] never fails because of the *instance*: violations are
//! collected into a report object keyed by pointer paths into the instance,
//! suffixed with the failing keyword. Only a malformed *schema* raises
//! [`Error::InvalidSchema`].
//!
//! ## Examples
//!
//! ```rust
//! use jon::{parse, validate};
//!
//! let instance = parse("name: 'a'\nage: -1").unwrap();
//! let schema = parse(
//!     "type: 'object'
//!      props: {
//!        name: { type: 'string', minLen: 2 }
//!        age:  { type: 'int', minInt: 0 }
//!      }",
//! )
//! .unwrap();
//!
//! let report = validate(&instance, &schema).unwrap();
//! assert!(report.has("/name/minLen"));
//! assert!(report.has("/age/minInt"));
//! ```

use crate::error::{Error, Result};
use crate::map::JonMap;
use crate::printer::Indent;
use crate::value::{JonValue, Type};
use regex::Regex;

/// Validates `instance` against `schema`.
///
/// Returns `Ok(JonValue::Null)` when the instance conforms, and otherwise an
/// object mapping `<instance-path>/<keyword>` keys to
/// `{ message, data, keyword }` entries. A malformed schema fails with
/// [`Error::InvalidSchema`] naming the offending schema path.
pub fn validate(instance: &JonValue, schema: &JonValue) -> Result<JonValue> {
    let mut report = JonMap::new();
    validate_node(instance, schema, "", "", &mut report)?;
    if report.is_empty() {
        Ok(JonValue::Null)
    } else {
        Ok(JonValue::Object(report))
    }
}

/// Renders a validation report as an array of `"path: {…}"` strings.
/// A `Null` report becomes an empty array.
pub fn to_error_list(errors: &JonValue) -> Result<JonValue> {
    match errors {
        JonValue::Null => Ok(JonValue::Array(Vec::new())),
        JonValue::Object(report) => Ok(JonValue::Array(
            report
                .iter()
                .map(|(path, entry)| {
                    JonValue::String(format!("{path}: {}", entry.dump(&Indent::compact())))
                })
                .collect(),
        )),
        other => Err(Error::type_error(format!(
            "expected a validation report, got {}",
            other.type_name()
        ))),
    }
}

fn validate_node(
    instance: &JonValue,
    schema: &JonValue,
    path: &str,
    schema_path: &str,
    report: &mut JonMap,
) -> Result<()> {
    match schema {
        // a bare string schema is a sole type name; nothing else applies
        JonValue::String(name) => {
            if !type_matches(name, instance.get_type(), schema_path)? {
                report_entry(
                    report,
                    path,
                    "type",
                    format!("expected {name}, got {}", instance.type_name()),
                    instance,
                );
            }
            Ok(())
        }
        JonValue::Object(keys) => validate_with_keywords(instance, keys, path, schema_path, report),
        other => Err(Error::invalid_schema(
            schema_path,
            format!(
                "schema must be a type name or an object, got {}",
                other.type_name()
            ),
        )),
    }
}

fn validate_with_keywords(
    instance: &JonValue,
    keys: &JonMap,
    path: &str,
    schema_path: &str,
    report: &mut JonMap,
) -> Result<()> {
    if let Some(nullable) = schema_bool(keys, "nullable", schema_path)? {
        if nullable && instance.is_null() {
            return Ok(());
        }
    }

    if let Some(type_value) = keys.get("type") {
        check_type(instance, type_value, path, schema_path, report)?;
    }

    match instance {
        JonValue::Int(v) => check_int(*v, instance, keys, path, schema_path, report)?,
        JonValue::Float(v) => check_float(*v, instance, keys, path, schema_path, report)?,
        JonValue::String(s) => check_string(s, instance, keys, path, schema_path, report)?,
        JonValue::Array(items) => check_array(items, instance, keys, path, schema_path, report)?,
        JonValue::Object(map) => check_object(map, instance, keys, path, schema_path, report)?,
        _ => {}
    }

    check_combinators(instance, keys, path, schema_path, report)
}

fn check_type(
    instance: &JonValue,
    type_value: &JonValue,
    path: &str,
    schema_path: &str,
    report: &mut JonMap,
) -> Result<()> {
    let spath = child(schema_path, "type");
    let names: Vec<&str> = match type_value {
        // `type: null` constrains nothing
        JonValue::Null => return Ok(()),
        JonValue::String(name) => vec![name.as_str()],
        JonValue::Array(items) => {
            if items.is_empty() {
                return Err(Error::invalid_schema(&spath, "empty `type` array"));
            }
            let mut names = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    JonValue::String(name) => names.push(name.as_str()),
                    other => {
                        return Err(Error::invalid_schema(
                            &spath,
                            format!("type names must be strings, got {}", other.type_name()),
                        ))
                    }
                }
            }
            names
        }
        other => {
            return Err(Error::invalid_schema(
                &spath,
                format!(
                    "`type` must be a string, an array of strings, or null, got {}",
                    other.type_name()
                ),
            ))
        }
    };

    let actual = instance.get_type();
    let mut matched = false;
    // resolve every name so unknown names fail even after a match
    for name in &names {
        if type_matches(name, actual, &spath)? {
            matched = true;
        }
    }
    if !matched {
        report_entry(
            report,
            path,
            "type",
            format!("expected {}, got {}", names.join(" | "), actual.name()),
            instance,
        );
    }
    Ok(())
}

fn type_matches(name: &str, actual: Type, schema_path: &str) -> Result<bool> {
    let expected = match name {
        "any" => return Ok(true),
        "null" => Type::Null,
        "bool" => Type::Bool,
        "int" => Type::Int,
        "float" => Type::Float,
        "string" => Type::String,
        "ref" => Type::Ref,
        "object" => Type::Object,
        "array" => Type::Array,
        _ => {
            return Err(Error::invalid_schema(
                schema_path,
                format!("unknown type name `{name}`"),
            ))
        }
    };
    Ok(actual == expected)
}

fn check_int(
    value: i64,
    instance: &JonValue,
    keys: &JonMap,
    path: &str,
    schema_path: &str,
    report: &mut JonMap,
) -> Result<()> {
    if let Some(min) = schema_int(keys, "minInt", schema_path)? {
        if value < min {
            report_entry(
                report,
                path,
                "minInt",
                format!("{value} is less than minimum {min}"),
                instance,
            );
        }
    }
    if let Some(max) = schema_int(keys, "maxInt", schema_path)? {
        if value > max {
            report_entry(
                report,
                path,
                "maxInt",
                format!("{value} is greater than maximum {max}"),
                instance,
            );
        }
    }
    Ok(())
}

fn check_float(
    value: f64,
    instance: &JonValue,
    keys: &JonMap,
    path: &str,
    schema_path: &str,
    report: &mut JonMap,
) -> Result<()> {
    if let Some(min) = schema_float(keys, "minFloat", schema_path)? {
        if value < min {
            report_entry(
                report,
                path,
                "minFloat",
                format!("{value} is less than minimum {min}"),
                instance,
            );
        }
    }
    if let Some(max) = schema_float(keys, "maxFloat", schema_path)? {
        if value > max {
            report_entry(
                report,
                path,
                "maxFloat",
                format!("{value} is greater than maximum {max}"),
                instance,
            );
        }
    }
    Ok(())
}

fn check_string(
    value: &str,
    instance: &JonValue,
    keys: &JonMap,
    path: &str,
    schema_path: &str,
    report: &mut JonMap,
) -> Result<()> {
    let len = value.len() as i64;
    if let Some(min) = schema_int(keys, "minLen", schema_path)? {
        if len < min {
            report_entry(
                report,
                path,
                "minLen",
                format!("length {len} is less than minimum {min}"),
                instance,
            );
        }
    }
    if let Some(max) = schema_int(keys, "maxLen", schema_path)? {
        if len > max {
            report_entry(
                report,
                path,
                "maxLen",
                format!("length {len} is greater than maximum {max}"),
                instance,
            );
        }
    }
    if let Some(pattern) = schema_str(keys, "pattern", schema_path)? {
        let spath = child(schema_path, "pattern");
        // anchored: the whole string must match
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|e| Error::invalid_schema(&spath, format!("invalid pattern: {e}")))?;
        if !regex.is_match(value) {
            report_entry(
                report,
                path,
                "pattern",
                format!("'{value}' does not match pattern '{pattern}'"),
                instance,
            );
        }
    }
    Ok(())
}

fn check_array(
    items: &[JonValue],
    instance: &JonValue,
    keys: &JonMap,
    path: &str,
    schema_path: &str,
    report: &mut JonMap,
) -> Result<()> {
    let len = items.len() as i64;
    if let Some(min) = schema_int(keys, "minSize", schema_path)? {
        if len < min {
            report_entry(
                report,
                path,
                "minSize",
                format!("{len} elements is less than minimum {min}"),
                instance,
            );
        }
    }
    if let Some(max) = schema_int(keys, "maxSize", schema_path)? {
        if len > max {
            report_entry(
                report,
                path,
                "maxSize",
                format!("{len} elements is greater than maximum {max}"),
                instance,
            );
        }
    }
    if let Some(items_schema) = keys.get("items") {
        let spath = child(schema_path, "items");
        for (i, item) in items.iter().enumerate() {
            validate_node(item, items_schema, &child(path, &i.to_string()), &spath, report)?;
        }
    }
    Ok(())
}

fn check_object(
    map: &JonMap,
    instance: &JonValue,
    keys: &JonMap,
    path: &str,
    schema_path: &str,
    report: &mut JonMap,
) -> Result<()> {
    let count = map.len() as i64;
    if let Some(min) = schema_int(keys, "minProps", schema_path)? {
        if count < min {
            report_entry(
                report,
                path,
                "minProps",
                format!("{count} properties is less than minimum {min}"),
                instance,
            );
        }
    }
    if let Some(max) = schema_int(keys, "maxProps", schema_path)? {
        if count > max {
            report_entry(
                report,
                path,
                "maxProps",
                format!("{count} properties is greater than maximum {max}"),
                instance,
            );
        }
    }

    let props = match keys.get("props") {
        None => None,
        Some(JonValue::Object(props)) => Some(props),
        Some(other) => {
            return Err(Error::invalid_schema(
                &child(schema_path, "props"),
                format!("`props` must be an object, got {}", other.type_name()),
            ))
        }
    };

    if let Some(props) = props {
        let props_path = child(schema_path, "props");
        for (key, sub) in props.iter() {
            let sub_path = child(&props_path, key);
            match map.get(key) {
                Some(value) => {
                    validate_node(value, sub, &child(path, key), &sub_path, report)?;
                }
                None => {
                    if !prop_optional(sub, &sub_path)? {
                        report_entry(
                            report,
                            &child(path, key),
                            "required",
                            format!("missing required property `{key}`"),
                            instance,
                        );
                    }
                }
            }
        }

        let extras = schema_bool(keys, "extras", schema_path)?.unwrap_or(false);
        if !extras {
            for (key, value) in map.iter() {
                if !props.contains_key(key) {
                    report_entry(
                        report,
                        &child(path, key),
                        "extras",
                        format!("unexpected property `{key}`"),
                        value,
                    );
                }
            }
        }
    }

    Ok(())
}

fn prop_optional(sub: &JonValue, schema_path: &str) -> Result<bool> {
    if let JonValue::Object(keys) = sub {
        return Ok(schema_bool(keys, "optional", schema_path)?.unwrap_or(false));
    }
    Ok(false)
}

fn check_combinators(
    instance: &JonValue,
    keys: &JonMap,
    path: &str,
    schema_path: &str,
    report: &mut JonMap,
) -> Result<()> {
    for keyword in ["anyOf", "oneOf", "allOf"] {
        let Some(value) = keys.get(keyword) else {
            continue;
        };
        let spath = child(schema_path, keyword);
        let JonValue::Array(subs) = value else {
            return Err(Error::invalid_schema(
                &spath,
                format!("`{keyword}` must be an array of schemas"),
            ));
        };
        if subs.is_empty() {
            return Err(Error::invalid_schema(
                &spath,
                format!("`{keyword}` must not be empty"),
            ));
        }

        let mut matches = 0usize;
        for (i, sub) in subs.iter().enumerate() {
            if validates(instance, sub, &child(&spath, &i.to_string()))? {
                matches += 1;
            }
        }

        match keyword {
            "anyOf" if matches == 0 => report_entry(
                report,
                path,
                "anyOf",
                "no alternative matched".to_string(),
                instance,
            ),
            "oneOf" if matches != 1 => report_entry(
                report,
                path,
                "oneOf",
                format!("expected exactly one alternative to match, got {matches}"),
                instance,
            ),
            "allOf" if matches < subs.len() => report_entry(
                report,
                path,
                "allOf",
                format!("{} of {} alternatives failed", subs.len() - matches, subs.len()),
                instance,
            ),
            _ => {}
        }
    }

    if let Some(value) = keys.get("not") {
        let spath = child(schema_path, "not");
        match value {
            JonValue::Array(subs) => {
                let mut matched = false;
                for (i, sub) in subs.iter().enumerate() {
                    if validates(instance, sub, &child(&spath, &i.to_string()))? {
                        matched = true;
                    }
                }
                if matched {
                    report_entry(
                        report,
                        path,
                        "not",
                        "matched a forbidden schema".to_string(),
                        instance,
                    );
                }
            }
            JonValue::Object(_) | JonValue::String(_) => {
                if validates(instance, value, &spath)? {
                    report_entry(
                        report,
                        path,
                        "not",
                        "matched the forbidden schema".to_string(),
                        instance,
                    );
                }
            }
            other => {
                return Err(Error::invalid_schema(
                    &spath,
                    format!(
                        "`not` must be a schema or an array of schemas, got {}",
                        other.type_name()
                    ),
                ))
            }
        }
    }

    Ok(())
}

/// Checks a sub-schema in isolation; InvalidSchema still propagates.
fn validates(instance: &JonValue, schema: &JonValue, schema_path: &str) -> Result<bool> {
    let mut scratch = JonMap::new();
    validate_node(instance, schema, "", schema_path, &mut scratch)?;
    Ok(scratch.is_empty())
}

fn report_entry(report: &mut JonMap, path: &str, keyword: &str, message: String, data: &JonValue) {
    let mut entry = JonMap::new();
    entry.insert("message".to_string(), JonValue::String(message));
    entry.insert("data".to_string(), data.clone());
    entry.insert("keyword".to_string(), JonValue::String(keyword.to_string()));
    report.insert(child(path, keyword), JonValue::Object(entry));
}

fn child(path: &str, seg: &str) -> String {
    format!("{path}/{seg}")
}

fn schema_int(keys: &JonMap, key: &str, schema_path: &str) -> Result<Option<i64>> {
    match keys.get(key) {
        None => Ok(None),
        Some(JonValue::Int(v)) => Ok(Some(*v)),
        Some(other) => Err(Error::invalid_schema(
            &child(schema_path, key),
            format!("`{key}` must be an integer, got {}", other.type_name()),
        )),
    }
}

fn schema_float(keys: &JonMap, key: &str, schema_path: &str) -> Result<Option<f64>> {
    match keys.get(key) {
        None => Ok(None),
        Some(JonValue::Float(v)) => Ok(Some(*v)),
        Some(other) => Err(Error::invalid_schema(
            &child(schema_path, key),
            format!("`{key}` must be a float, got {}", other.type_name()),
        )),
    }
}

fn schema_bool(keys: &JonMap, key: &str, schema_path: &str) -> Result<Option<bool>> {
    match keys.get(key) {
        None => Ok(None),
        Some(JonValue::Bool(v)) => Ok(Some(*v)),
        Some(other) => Err(Error::invalid_schema(
            &child(schema_path, key),
            format!("`{key}` must be a boolean, got {}", other.type_name()),
        )),
    }
}

fn schema_str<'a>(keys: &'a JonMap, key: &str, schema_path: &str) -> Result<Option<&'a str>> {
    match keys.get(key) {
        None => Ok(None),
        Some(JonValue::String(v)) => Ok(Some(v)),
        Some(other) => Err(Error::invalid_schema(
            &child(schema_path, key),
            format!("`{key}` must be a string, got {}", other.type_name()),
        )),
    }
}

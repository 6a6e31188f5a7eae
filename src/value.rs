//! Dynamic value representation for jon documents.
//!
//! This module provides the [`JonValue`] enum which represents any value a
//! jon document can hold, plus the [`Type`] tag describing its runtime type.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use jon::{jon, JonValue};
//!
//! // From primitives
//! let null = JonValue::Null;
//! let boolean = JonValue::from(true);
//! let number = JonValue::from(42);
//! let text = JonValue::from("hello");
//!
//! // Using the jon! macro
//! let obj = jon!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Reading Values
//!
//! ```rust
//! use jon::parse;
//!
//! let doc = parse("name: 'Alice'\nage: 30").unwrap();
//! assert_eq!(doc.at("name").unwrap().get_str().unwrap(), "Alice");
//! assert_eq!(doc.at("age").unwrap().get_int().unwrap(), 30);
//! assert!(doc.at("missing").is_err());
//! ```
//!
//! ### Building Trees In Place
//!
//! Writing through a `Null` value upgrades it to a container, so nested
//! structures can be grown without scaffolding:
//!
//! ```rust
//! use jon::JonValue;
//!
//! let mut doc = JonValue::Null;
//! *doc.at_mut("server").unwrap().at_mut("port").unwrap() = JonValue::Int(8080);
//! assert_eq!(jon::dump(&doc), "{server:{port:8080}}");
//! ```

use crate::error::{Error, Result};
use crate::map::JonMap;
use crate::printer::{dump_value, Indent};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Runtime type of a [`JonValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Type {
    Null,
    Bool,
    Int,
    Float,
    String,
    Ref,
    Object,
    Array,
}

impl Type {
    /// Human-readable type name used in error messages and schemas.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Type::Null => "null",
            Type::Bool => "boolean",
            Type::Int => "integer",
            Type::Float => "float",
            Type::String => "string",
            Type::Ref => "ref",
            Type::Object => "object",
            Type::Array => "array",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically-typed jon value.
///
/// Seven runtime types plus [`JonValue::Ref`], which preserves `$name`
/// references from the source text until [`JonValue::resolve_refs`] replaces
/// them with clones of their targets.
///
/// # Examples
///
/// ```rust
/// use jon::JonValue;
///
/// let num = JonValue::Int(42);
/// let text = JonValue::String("hello".to_string());
///
/// assert!(num.is_int());
/// assert!(text.is_string());
/// assert_eq!(num.size(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub enum JonValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// An unresolved `$`-reference holding the target pointer path.
    Ref(String),
    Object(JonMap),
    Array(Vec<JonValue>),
}

/// Structural equality; floats compare with an absolute tolerance of
/// [`f64::EPSILON`], so NaN never equals NaN.
impl PartialEq for JonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JonValue::Null, JonValue::Null) => true,
            (JonValue::Bool(a), JonValue::Bool(b)) => a == b,
            (JonValue::Int(a), JonValue::Int(b)) => a == b,
            (JonValue::Float(a), JonValue::Float(b)) => (a - b).abs() <= f64::EPSILON,
            (JonValue::String(a), JonValue::String(b)) => a == b,
            (JonValue::Ref(a), JonValue::Ref(b)) => a == b,
            (JonValue::Object(a), JonValue::Object(b)) => a == b,
            (JonValue::Array(a), JonValue::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl JonValue {
    /// Returns the runtime type tag.
    #[must_use]
    pub const fn get_type(&self) -> Type {
        match self {
            JonValue::Null => Type::Null,
            JonValue::Bool(_) => Type::Bool,
            JonValue::Int(_) => Type::Int,
            JonValue::Float(_) => Type::Float,
            JonValue::String(_) => Type::String,
            JonValue::Ref(_) => Type::Ref,
            JonValue::Object(_) => Type::Object,
            JonValue::Array(_) => Type::Array,
        }
    }

    /// Human-readable name of the runtime type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.get_type().name()
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JonValue::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JonValue::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, JonValue::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, JonValue::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JonValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_ref(&self) -> bool {
        matches!(self, JonValue::Ref(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JonValue::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JonValue::Array(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it as
    /// `i64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JonValue::Int(i) => Some(*i),
            JonValue::Float(f)
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    /// If the value is numeric, returns it as `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JonValue::Int(i) => Some(*i as f64),
            JonValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to its map.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JonMap> {
        match self {
            JonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to its elements.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<JonValue>> {
        match self {
            JonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Checked boolean accessor; fails with a type error on mismatch.
    pub fn get_bool(&self) -> Result<bool> {
        match self {
            JonValue::Bool(b) => Ok(*b),
            other => Err(Error::type_mismatch("boolean", other.type_name())),
        }
    }

    /// Checked integer accessor.
    pub fn get_int(&self) -> Result<i64> {
        match self {
            JonValue::Int(i) => Ok(*i),
            other => Err(Error::type_mismatch("integer", other.type_name())),
        }
    }

    /// Checked float accessor.
    pub fn get_float(&self) -> Result<f64> {
        match self {
            JonValue::Float(f) => Ok(*f),
            other => Err(Error::type_mismatch("float", other.type_name())),
        }
    }

    /// Checked string accessor.
    pub fn get_str(&self) -> Result<&str> {
        match self {
            JonValue::String(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }

    /// Checked object accessor.
    pub fn get_object(&self) -> Result<&JonMap> {
        match self {
            JonValue::Object(map) => Ok(map),
            other => Err(Error::type_mismatch("object", other.type_name())),
        }
    }

    /// Checked mutable object accessor.
    pub fn get_object_mut(&mut self) -> Result<&mut JonMap> {
        match self {
            JonValue::Object(map) => Ok(map),
            other => Err(Error::type_mismatch("object", other.type_name())),
        }
    }

    /// Checked array accessor.
    pub fn get_array(&self) -> Result<&Vec<JonValue>> {
        match self {
            JonValue::Array(items) => Ok(items),
            other => Err(Error::type_mismatch("array", other.type_name())),
        }
    }

    /// Checked mutable array accessor.
    pub fn get_array_mut(&mut self) -> Result<&mut Vec<JonValue>> {
        match self {
            JonValue::Array(items) => Ok(items),
            other => Err(Error::type_mismatch("array", other.type_name())),
        }
    }

    /// Element count for containers, byte length for strings, 0 for null,
    /// 1 for any other scalar.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            JonValue::Null => 0,
            JonValue::String(s) => s.len(),
            JonValue::Object(map) => map.len(),
            JonValue::Array(items) => items.len(),
            _ => 1,
        }
    }

    /// `true` when [`JonValue::size`] is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if the value is an object containing `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        matches!(self, JonValue::Object(map) if map.contains_key(key))
    }

    /// Resets the value to the default of its current runtime type.
    pub fn clear(&mut self) {
        *self = match self {
            JonValue::Null => JonValue::Null,
            JonValue::Bool(_) => JonValue::Bool(false),
            JonValue::Int(_) => JonValue::Int(0),
            JonValue::Float(_) => JonValue::Float(0.0),
            JonValue::String(_) => JonValue::String(String::new()),
            JonValue::Ref(_) => JonValue::Ref(String::new()),
            JonValue::Object(_) => JonValue::Object(JonMap::new()),
            JonValue::Array(_) => JonValue::Array(Vec::new()),
        };
    }

    /// Returns the object entry for `key`, or `None` when the value is not
    /// an object or the key is missing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JonValue> {
        match self {
            JonValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Reads an object entry. Missing keys are out-of-range errors; anything
    /// but an object is a type error.
    pub fn at(&self, key: &str) -> Result<&JonValue> {
        match self {
            JonValue::Object(map) => map
                .get(key)
                .ok_or_else(|| Error::out_of_range(format!("no property `{key}`"))),
            other => Err(Error::type_error(format!(
                "cannot access property `{key}` of {}",
                other.type_name()
            ))),
        }
    }

    /// Writable object entry access: a `Null` value upgrades to an object in
    /// place, and a missing key is inserted as `Null`.
    pub fn at_mut(&mut self, key: &str) -> Result<&mut JonValue> {
        if self.is_null() {
            *self = JonValue::Object(JonMap::new());
        }
        match self {
            JonValue::Object(map) => Ok(map.or_insert_null(key)),
            other => Err(Error::type_error(format!(
                "cannot access property `{key}` of {}",
                other.type_name()
            ))),
        }
    }

    /// Reads an array element. On objects the index is stringified and used
    /// as a key, enabling numeric keys.
    pub fn at_index(&self, idx: usize) -> Result<&JonValue> {
        if self.is_object() {
            return self.at(&idx.to_string());
        }
        match self {
            JonValue::Array(items) => {
                let len = items.len();
                items
                    .get(idx)
                    .ok_or_else(|| Error::out_of_range(format!("index {idx} out of bounds (len {len})")))
            }
            other => Err(Error::type_error(format!(
                "cannot index {} with {idx}",
                other.type_name()
            ))),
        }
    }

    /// Writable array element access: a `Null` value upgrades to an array in
    /// place. The index must be in bounds; use [`JonValue::push`] to extend.
    pub fn at_index_mut(&mut self, idx: usize) -> Result<&mut JonValue> {
        if self.is_null() {
            *self = JonValue::Array(Vec::new());
        }
        if self.is_object() {
            return self.at_mut(&idx.to_string());
        }
        match self {
            JonValue::Array(items) => {
                let len = items.len();
                items
                    .get_mut(idx)
                    .ok_or_else(|| Error::out_of_range(format!("index {idx} out of bounds (len {len})")))
            }
            other => Err(Error::type_error(format!(
                "cannot index {} with {idx}",
                other.type_name()
            ))),
        }
    }

    /// Inserts an object entry, upgrading a `Null` value to an object.
    /// Returns the previous value for the key, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: JonValue) -> Result<Option<JonValue>> {
        if self.is_null() {
            *self = JonValue::Object(JonMap::new());
        }
        match self {
            JonValue::Object(map) => Ok(map.insert(key.into(), value)),
            other => Err(Error::type_error(format!(
                "cannot insert a property into {}",
                other.type_name()
            ))),
        }
    }

    /// Appends an array element, upgrading a `Null` value to an array.
    pub fn push(&mut self, value: JonValue) -> Result<()> {
        if self.is_null() {
            *self = JonValue::Array(Vec::new());
        }
        match self {
            JonValue::Array(items) => {
                items.push(value);
                Ok(())
            }
            other => Err(Error::type_error(format!(
                "cannot push onto {}",
                other.type_name()
            ))),
        }
    }

    /// Builds a value from a list literal, projecting it into an object when
    /// every element is a `[key, value]` pair with a string key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jon::JonValue;
    ///
    /// let pairs = vec![
    ///     JonValue::Array(vec![JonValue::from("a"), JonValue::from(1)]),
    ///     JonValue::Array(vec![JonValue::from("b"), JonValue::from(2)]),
    /// ];
    /// let object = JonValue::from_list(pairs);
    /// assert!(object.is_object());
    ///
    /// let array = JonValue::from_list(vec![JonValue::from(1), JonValue::from(2)]);
    /// assert!(array.is_array());
    /// ```
    #[must_use]
    pub fn from_list(items: Vec<JonValue>) -> JonValue {
        let pairwise = !items.is_empty()
            && items.iter().all(|item| {
                matches!(item, JonValue::Array(pair)
                    if pair.len() == 2 && matches!(pair[0], JonValue::String(_)))
            });
        if pairwise {
            // shape checked above, the forced conversion cannot fail
            Self::object_from(items).unwrap_or_default()
        } else {
            JonValue::Array(items)
        }
    }

    /// Forces the object interpretation of a pair list, failing with a type
    /// error when an element is not a `[string, value]` pair.
    pub fn object_from(items: Vec<JonValue>) -> Result<JonValue> {
        let mut map = JonMap::with_capacity(items.len());
        for item in items {
            let JonValue::Array(pair) = item else {
                return Err(Error::type_error(
                    "object literal entries must be [key, value] pairs",
                ));
            };
            let Ok([key, value]) = <[JonValue; 2]>::try_from(pair) else {
                return Err(Error::type_error(
                    "object literal entries must be [key, value] pairs",
                ));
            };
            let JonValue::String(key) = key else {
                return Err(Error::type_error("object literal keys must be strings"));
            };
            map.insert(key, value);
        }
        Ok(JonValue::Object(map))
    }

    /// Forces the array interpretation of a list literal, bypassing the
    /// object-projection heuristic.
    #[must_use]
    pub fn array_from(items: Vec<JonValue>) -> JonValue {
        JonValue::Array(items)
    }

    /// Looks up a nested value by a `/`-separated pointer path. A leading
    /// `/` is optional; the empty path refers to the value itself.
    #[must_use]
    pub fn pointer(&self, path: &str) -> Option<&JonValue> {
        let path = path.strip_prefix('/').unwrap_or(path);
        if path.is_empty() {
            return Some(self);
        }
        let mut current = self;
        for seg in path.split('/') {
            current = match current {
                JonValue::Object(map) => map.get(seg)?,
                JonValue::Array(items) => items.get(seg.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Produces an object mapping pointer paths to every leaf value.
    ///
    /// Empty containers contribute no paths, and a scalar at the root maps
    /// from the empty path. The result is itself flat, so flattening twice
    /// is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jon::{parse, JonValue};
    ///
    /// let doc = parse("a: {b: [1, 2]}").unwrap();
    /// let flat = doc.flatten();
    /// assert_eq!(flat.at("a/b/0").unwrap(), &JonValue::Int(1));
    /// assert_eq!(flat.at("a/b/1").unwrap(), &JonValue::Int(2));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> JonValue {
        let mut flat = JonMap::new();
        self.flatten_into(String::new(), &mut flat);
        JonValue::Object(flat)
    }

    fn flatten_into(&self, path: String, out: &mut JonMap) {
        match self {
            JonValue::Object(map) => {
                for (key, value) in map.iter() {
                    value.flatten_into(join_path(&path, key), out);
                }
            }
            JonValue::Array(items) => {
                for (i, value) in items.iter().enumerate() {
                    value.flatten_into(join_path(&path, &i.to_string()), out);
                }
            }
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }

    /// Replaces every [`JonValue::Ref`] in the tree with a clone of the value
    /// its pointer path names in the original tree.
    ///
    /// Targets are resolved transitively; a missing target fails with
    /// [`Error::UnresolvedRef`] and a reference chain that reaches itself
    /// with [`Error::CyclicRef`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jon::parse;
    ///
    /// let mut doc = parse("host: 'db1'\nprimary: $host").unwrap();
    /// doc.resolve_refs().unwrap();
    /// assert_eq!(doc.at("primary").unwrap().get_str().unwrap(), "db1");
    /// ```
    pub fn resolve_refs(&mut self) -> Result<()> {
        let root = self.clone();
        let mut active = Vec::new();
        Self::resolve_node(self, &root, &mut active)
    }

    fn resolve_node(node: &mut JonValue, root: &JonValue, active: &mut Vec<String>) -> Result<()> {
        match node {
            JonValue::Ref(path) => {
                let resolved = Self::resolve_path(path, root, active)?;
                *node = resolved;
                Ok(())
            }
            JonValue::Object(map) => {
                for (_, value) in map.iter_mut() {
                    Self::resolve_node(value, root, active)?;
                }
                Ok(())
            }
            JonValue::Array(items) => {
                for value in items {
                    Self::resolve_node(value, root, active)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn resolve_path(path: &str, root: &JonValue, active: &mut Vec<String>) -> Result<JonValue> {
        if active.iter().any(|p| p == path) {
            return Err(Error::CyclicRef(path.to_string()));
        }
        let target = root
            .pointer(path)
            .ok_or_else(|| Error::UnresolvedRef(path.to_string()))?;
        active.push(path.to_string());
        let mut clone = target.clone();
        Self::resolve_node(&mut clone, root, active)?;
        active.pop();
        Ok(clone)
    }

    /// Serialises the value with the given indentation descriptor.
    #[must_use]
    pub fn dump(&self, indent: &Indent) -> String {
        dump_value(self, indent)
    }
}

fn join_path(parent: &str, seg: &str) -> String {
    if parent.is_empty() {
        seg.to_string()
    } else {
        format!("{parent}/{seg}")
    }
}

/// Compact canonical form.
impl fmt::Display for JonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump(&Indent::compact()))
    }
}

impl Serialize for JonValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JonValue::Null => serializer.serialize_unit(),
            JonValue::Bool(b) => serializer.serialize_bool(*b),
            JonValue::Int(i) => serializer.serialize_i64(*i),
            JonValue::Float(f) => serializer.serialize_f64(*f),
            JonValue::String(s) => serializer.serialize_str(s),
            JonValue::Ref(path) => serializer.serialize_str(&format!("${path}")),
            JonValue::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JonValue::Object(map) => {
                use serde::ser::SerializeMap;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JonValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JonValueVisitor;

        impl<'de> Visitor<'de> for JonValueVisitor {
            type Value = JonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid jon value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(JonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(JonValue::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(JonValue::Int(value as i64))
                } else {
                    Ok(JonValue::Float(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(JonValue::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(JonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(JonValue::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(JonValue::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(JonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    items.push(elem);
                }
                Ok(JonValue::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(JonValue::Object(values))
            }
        }

        deserializer.deserialize_any(JonValueVisitor)
    }
}

// TryFrom implementations for extracting native values
impl TryFrom<JonValue> for i64 {
    type Error = Error;

    fn try_from(value: JonValue) -> Result<Self> {
        match value {
            JonValue::Int(i) => Ok(i),
            other => Err(Error::type_mismatch("integer", other.type_name())),
        }
    }
}

impl TryFrom<JonValue> for f64 {
    type Error = Error;

    fn try_from(value: JonValue) -> Result<Self> {
        match value {
            JonValue::Int(i) => Ok(i as f64),
            JonValue::Float(f) => Ok(f),
            other => Err(Error::type_mismatch("float", other.type_name())),
        }
    }
}

impl TryFrom<JonValue> for bool {
    type Error = Error;

    fn try_from(value: JonValue) -> Result<Self> {
        match value {
            JonValue::Bool(b) => Ok(b),
            other => Err(Error::type_mismatch("boolean", other.type_name())),
        }
    }
}

impl TryFrom<JonValue> for String {
    type Error = Error;

    fn try_from(value: JonValue) -> Result<Self> {
        match value {
            JonValue::String(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }
}

// From implementations for creating values from primitives
impl From<bool> for JonValue {
    fn from(value: bool) -> Self {
        JonValue::Bool(value)
    }
}

impl From<i8> for JonValue {
    fn from(value: i8) -> Self {
        JonValue::Int(i64::from(value))
    }
}

impl From<i16> for JonValue {
    fn from(value: i16) -> Self {
        JonValue::Int(i64::from(value))
    }
}

impl From<i32> for JonValue {
    fn from(value: i32) -> Self {
        JonValue::Int(i64::from(value))
    }
}

impl From<i64> for JonValue {
    fn from(value: i64) -> Self {
        JonValue::Int(value)
    }
}

impl From<u8> for JonValue {
    fn from(value: u8) -> Self {
        JonValue::Int(i64::from(value))
    }
}

impl From<u16> for JonValue {
    fn from(value: u16) -> Self {
        JonValue::Int(i64::from(value))
    }
}

impl From<u32> for JonValue {
    fn from(value: u32) -> Self {
        JonValue::Int(i64::from(value))
    }
}

impl From<f32> for JonValue {
    fn from(value: f32) -> Self {
        JonValue::Float(f64::from(value))
    }
}

impl From<f64> for JonValue {
    fn from(value: f64) -> Self {
        JonValue::Float(value)
    }
}

impl From<String> for JonValue {
    fn from(value: String) -> Self {
        JonValue::String(value)
    }
}

impl From<&str> for JonValue {
    fn from(value: &str) -> Self {
        JonValue::String(value.to_string())
    }
}

impl From<Vec<JonValue>> for JonValue {
    fn from(value: Vec<JonValue>) -> Self {
        JonValue::Array(value)
    }
}

impl From<JonMap> for JonValue {
    fn from(value: JonMap) -> Self {
        JonValue::Object(value)
    }
}

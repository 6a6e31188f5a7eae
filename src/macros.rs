/// Builds a [`crate::JonValue`] from a literal.
///
/// Objects use `{ "key": value }` syntax, arrays `[ ... ]`, and any other
/// expression converts through [`From`].
///
/// # Examples
///
/// ```rust
/// use jon::{jon, JonValue};
///
/// let data = jon!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "jon"]
/// });
/// assert_eq!(data.at("name").unwrap(), &JonValue::from("Alice"));
/// ```
#[macro_export]
macro_rules! jon {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::jon!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::JonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JonMap::new();
        $(
            object.insert($key.to_string(), $crate::jon!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback: any expression convertible into a value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

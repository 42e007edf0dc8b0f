//! Population of response models from decoded JSON payloads.
//!
//! Response models implement [`Unflatten`] by reading their fields through an
//! [`Object`], which tracks the key path so that a failure points at the exact
//! offending value (`Response.FaceInfos.0.X`). Scalar fields implement
//! [`FromWire`], which applies the loose coercions the remote side relies on:
//!
//! | Target   | Accepted                                        |
//! |----------|-------------------------------------------------|
//! | `String` | JSON strings                                    |
//! | `i64`    | JSON integers, numeric strings                  |
//! | `u64`    | non-negative JSON integers, numeric strings     |
//! | `f64`    | JSON numbers, numeric strings                   |
//! | `bool`   | JSON booleans, `"true"`/`"false"`, `0`/`1`      |
//! | `Vec<T>` | JSON arrays whose elements are accepted by `T`  |
//!
//! JSON `null` is treated as an absent field.

use serde_json::{Map, Value};
use tencentcloud_core::DecodeError;

use crate::flatten::Params;

/// A response model that can be populated from a JSON object.
pub trait Unflatten: Sized {
    /// Populate a value from `obj`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if a present field cannot be coerced into its
    /// declared type, or a required field is missing.
    fn unflatten(obj: &Object<'_>) -> Result<Self, DecodeError>;
}

/// A scalar (or array of scalars) read from a single JSON value.
pub trait FromWire: Sized {
    /// Convert `value`, found at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] at `path` if the value cannot be coerced.
    fn from_wire(value: &Value, path: &str) -> Result<Self, DecodeError>;
}

/// A JSON object being read, together with its key path.
#[derive(Debug, Clone)]
pub struct Object<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Object<'a> {
    /// Wrap a JSON object found at `path`.
    #[must_use]
    pub fn new(map: &'a Map<String, Value>, path: impl Into<String>) -> Self {
        Self {
            map,
            path: path.into(),
        }
    }

    /// Key path of this object.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    fn child_path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_owned()
        } else {
            format!("{}.{name}", self.path)
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|v| !v.is_null())
    }

    /// Read an optional scalar field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the field is present but cannot be coerced.
    pub fn field<T: FromWire>(&self, name: &str) -> Result<Option<T>, DecodeError> {
        self.get(name)
            .map(|value| T::from_wire(value, &self.child_path(name)))
            .transpose()
    }

    /// Read a scalar field that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the field is missing or cannot be coerced.
    pub fn required<T: FromWire>(&self, name: &str) -> Result<T, DecodeError> {
        self.field(name)?
            .ok_or_else(|| DecodeError::new(self.child_path(name), "missing required field"))
    }

    /// Read an optional nested object.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the field is present but not a valid object.
    pub fn nested<T: Unflatten>(&self, name: &str) -> Result<Option<T>, DecodeError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        let path = self.child_path(name);
        let map = value
            .as_object()
            .ok_or_else(|| DecodeError::new(&path, format!("expected object, found {}", kind(value))))?;
        T::unflatten(&Object::new(map, path)).map(Some)
    }

    /// Read an optional array of nested objects.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the field is present but not an array of
    /// valid objects.
    pub fn nested_list<T: Unflatten>(&self, name: &str) -> Result<Option<Vec<T>>, DecodeError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        let path = self.child_path(name);
        let items = value
            .as_array()
            .ok_or_else(|| DecodeError::new(&path, format!("expected array, found {}", kind(value))))?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let item_path = format!("{path}.{i}");
                let map = item.as_object().ok_or_else(|| {
                    DecodeError::new(&item_path, format!("expected object, found {}", kind(item)))
                })?;
                T::unflatten(&Object::new(map, item_path))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// Populate a model from a JSON value rooted at `path`.
///
/// # Errors
///
/// Returns [`DecodeError`] if `value` is not an object or a field does not fit.
pub fn unflatten<T: Unflatten>(value: &Value, path: &str) -> Result<T, DecodeError> {
    let map = value
        .as_object()
        .ok_or_else(|| DecodeError::new(path, format!("expected object, found {}", kind(value))))?;
    unflatten_object(map, path)
}

/// Populate a model from a JSON object rooted at `path`.
///
/// # Errors
///
/// Returns [`DecodeError`] if a field does not fit.
pub fn unflatten_object<T: Unflatten>(
    map: &Map<String, Value>,
    path: &str,
) -> Result<T, DecodeError> {
    T::unflatten(&Object::new(map, path))
}

/// Rebuild a JSON tree from flattened parameters.
///
/// Numeric key segments become array indices; everything else becomes object
/// keys. Values stay strings, which [`FromWire`] coerces back.
///
/// # Errors
///
/// Returns [`DecodeError`] if two keys conflict (`A=1` and `A.B=2`) or an
/// array index is out of sequence.
pub fn params_to_value(params: &Params) -> Result<Value, DecodeError> {
    let mut root = Value::Object(Map::new());
    for (key, value) in params {
        let segments: Vec<&str> = key.split('.').collect();
        insert(&mut root, &segments, value, key)?;
    }
    Ok(root)
}

fn insert(node: &mut Value, segments: &[&str], value: &str, key: &str) -> Result<(), DecodeError> {
    let Some((head, rest)) = segments.split_first() else {
        return Ok(());
    };
    let conflict = || DecodeError::new(key, "conflicting flattened keys");

    let slot = match node {
        Value::Array(items) => {
            let index: usize = head
                .parse()
                .map_err(|_| DecodeError::new(key, format!("expected array index, found `{head}`")))?;
            if index == items.len() {
                items.push(Value::Null);
            }
            items
                .get_mut(index)
                .ok_or_else(|| DecodeError::new(key, format!("array index {index} out of sequence")))?
        }
        Value::Object(map) => map.entry((*head).to_owned()).or_insert(Value::Null),
        _ => return Err(conflict()),
    };

    if rest.is_empty() {
        if !slot.is_null() {
            return Err(conflict());
        }
        *slot = Value::String(value.to_owned());
        return Ok(());
    }

    if slot.is_null() {
        *slot = if rest[0].bytes().all(|b| b.is_ascii_digit()) {
            Value::Array(Vec::new())
        } else {
            Value::Object(Map::new())
        };
    }
    insert(slot, rest, value, key)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(path: &str, expected: &str, value: &Value) -> DecodeError {
    DecodeError::new(path, format!("expected {expected}, found {}", kind(value)))
}

impl FromWire for String {
    fn from_wire(value: &Value, path: &str) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(ToOwned::to_owned)
            .ok_or_else(|| mismatch(path, "string", value))
    }
}

impl FromWire for i64 {
    fn from_wire(value: &Value, path: &str) -> Result<Self, DecodeError> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| DecodeError::new(path, format!("invalid integer '{n}'"))),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|e| DecodeError::new(path, format!("invalid integer '{s}': {e}"))),
            other => Err(mismatch(path, "integer", other)),
        }
    }
}

impl FromWire for u64 {
    fn from_wire(value: &Value, path: &str) -> Result<Self, DecodeError> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .ok_or_else(|| DecodeError::new(path, format!("invalid unsigned integer '{n}'"))),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|e| DecodeError::new(path, format!("invalid unsigned integer '{s}': {e}"))),
            other => Err(mismatch(path, "unsigned integer", other)),
        }
    }
}

impl FromWire for f64 {
    fn from_wire(value: &Value, path: &str) -> Result<Self, DecodeError> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| DecodeError::new(path, format!("invalid number '{n}'"))),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|e| DecodeError::new(path, format!("invalid number '{s}': {e}"))),
            other => Err(mismatch(path, "number", other)),
        }
    }
}

impl FromWire for bool {
    fn from_wire(value: &Value, path: &str) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s == "true" => Ok(true),
            Value::String(s) if s == "false" => Ok(false),
            Value::Number(n) if n.as_u64() == Some(0) => Ok(false),
            Value::Number(n) if n.as_u64() == Some(1) => Ok(true),
            other => Err(DecodeError::new(
                path,
                format!("invalid boolean: {other}"),
            )),
        }
    }
}

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let items = value
            .as_array()
            .ok_or_else(|| mismatch(path, "array", value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::from_wire(item, &format!("{path}.{i}")))
            .collect()
    }
}

/// Implement [`Unflatten`] for a struct by listing its fields.
///
/// Each entry is `field: "WireName" => accessor`, where the accessor is one of
/// the [`Object`] readers: `field`, `required`, `nested`, `nested_list`.
///
/// # Examples
///
/// ```
/// use tencentcloud_codec::{impl_unflatten, unflatten};
///
/// #[derive(Debug)]
/// struct Point {
///     x: Option<i64>,
///     y: Option<i64>,
/// }
///
/// impl_unflatten! {
///     Point {
///         x: "X" => field,
///         y: "Y" => field,
///     }
/// }
///
/// let value = serde_json::json!({ "X": 3, "Y": "4" });
/// let point: Point = unflatten(&value, "Point").unwrap();
/// assert_eq!((point.x, point.y), (Some(3), Some(4)));
/// ```
#[macro_export]
macro_rules! impl_unflatten {
    ($($ty:ident { $($field:ident : $name:literal => $accessor:ident),* $(,)? })*) => {
        $(
            impl $crate::Unflatten for $ty {
                fn unflatten(
                    obj: &$crate::Object<'_>,
                ) -> ::std::result::Result<Self, $crate::DecodeError> {
                    Ok(Self {
                        $($field: obj.$accessor($name)?,)*
                    })
                }
            }
        )*
    };
}

//! Flattening of request models into dotted key/value pairs.
//!
//! Implemented as a [`serde::Serializer`], so every model that derives
//! `Serialize` can be flattened. Fields are emitted in declaration order.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use serde::ser;

use crate::error::FlattenError;

/// Flattened parameters in emission order.
pub type Params = Vec<(String, String)>;

/// Flatten a request model into `(key, value)` pairs.
///
/// # Errors
///
/// Returns [`FlattenError::RootNotObject`] if `value` is not a struct or map,
/// or a [`FlattenError::Custom`] raised by its `Serialize` implementation.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use tencentcloud_codec::flatten;
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct Filter {
///     name: String,
///     values: Vec<String>,
/// }
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct Request {
///     limit: Option<i64>,
///     offset: Option<i64>,
///     filters: Vec<Filter>,
/// }
///
/// let params = flatten(&Request {
///     limit: Some(1),
///     offset: None,
///     filters: vec![Filter { name: "zone".into(), values: vec!["ap-guangzhou-3".into()] }],
/// })
/// .unwrap();
///
/// assert_eq!(params, vec![
///     ("Limit".to_owned(), "1".to_owned()),
///     ("Filters.0.Name".to_owned(), "zone".to_owned()),
///     ("Filters.0.Values.0".to_owned(), "ap-guangzhou-3".to_owned()),
/// ]);
/// ```
pub fn flatten<T: Serialize + ?Sized>(value: &T) -> Result<Params, FlattenError> {
    let mut params = Params::new();
    value.serialize(FieldSerializer {
        out: &mut params,
        key: None,
    })?;
    Ok(params)
}

fn join(prefix: Option<&str>, segment: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}.{segment}"),
        None => segment.to_owned(),
    }
}

/// Serializes one value under `key`. A `None` key means the root.
struct FieldSerializer<'a> {
    out: &'a mut Params,
    key: Option<String>,
}

impl<'a> FieldSerializer<'a> {
    fn write(self, kind: &'static str, value: String) -> Result<(), FlattenError> {
        match self.key {
            Some(key) => {
                self.out.push((key, value));
                Ok(())
            }
            None => Err(FlattenError::RootNotObject(kind)),
        }
    }

    fn compound(self, segment: Option<&str>) -> Compound<'a> {
        let prefix = match segment {
            Some(segment) => Some(join(self.key.as_deref(), segment)),
            None => self.key,
        };
        Compound {
            out: self.out,
            prefix,
            index: 0,
            pending_key: None,
        }
    }
}

impl<'a> ser::Serializer for FieldSerializer<'a> {
    type Ok = ();
    type Error = FlattenError;
    type SerializeSeq = Compound<'a>;
    type SerializeTuple = Compound<'a>;
    type SerializeTupleStruct = Compound<'a>;
    type SerializeTupleVariant = Compound<'a>;
    type SerializeMap = Compound<'a>;
    type SerializeStruct = Compound<'a>;
    type SerializeStructVariant = Compound<'a>;

    fn serialize_bool(self, v: bool) -> Result<(), FlattenError> {
        self.write("boolean", v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<(), FlattenError> {
        self.write("integer", v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<(), FlattenError> {
        self.write("integer", v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<(), FlattenError> {
        self.write("integer", v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<(), FlattenError> {
        self.write("integer", v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<(), FlattenError> {
        self.write("integer", v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<(), FlattenError> {
        self.write("integer", v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<(), FlattenError> {
        self.write("integer", v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<(), FlattenError> {
        self.write("integer", v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<(), FlattenError> {
        self.write("integer", v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<(), FlattenError> {
        self.write("integer", v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<(), FlattenError> {
        self.write("float", v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<(), FlattenError> {
        self.write("float", v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<(), FlattenError> {
        self.write("char", v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<(), FlattenError> {
        self.write("string", v.to_owned())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<(), FlattenError> {
        self.write("bytes", BASE64.encode(v))
    }

    fn serialize_none(self) -> Result<(), FlattenError> {
        Ok(())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<(), FlattenError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), FlattenError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), FlattenError> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<(), FlattenError> {
        self.write("enum", variant.to_owned())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), FlattenError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<(), FlattenError> {
        let key = join(self.key.as_deref(), variant);
        value.serialize(FieldSerializer {
            out: self.out,
            key: Some(key),
        })
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Compound<'a>, FlattenError> {
        if self.key.is_none() {
            return Err(FlattenError::RootNotObject("sequence"));
        }
        Ok(self.compound(None))
    }

    fn serialize_tuple(self, len: usize) -> Result<Compound<'a>, FlattenError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Compound<'a>, FlattenError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Compound<'a>, FlattenError> {
        Ok(self.compound(Some(variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Compound<'a>, FlattenError> {
        Ok(self.compound(None))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Compound<'a>, FlattenError> {
        Ok(self.compound(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Compound<'a>, FlattenError> {
        Ok(self.compound(Some(variant)))
    }
}

/// Accumulates the children of a struct, map or sequence.
struct Compound<'a> {
    out: &'a mut Params,
    prefix: Option<String>,
    index: usize,
    pending_key: Option<String>,
}

impl Compound<'_> {
    fn child(&mut self, segment: &str) -> FieldSerializer<'_> {
        FieldSerializer {
            out: self.out,
            key: Some(join(self.prefix.as_deref(), segment)),
        }
    }

    fn element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FlattenError> {
        let index = self.index;
        self.index += 1;
        value.serialize(self.child(&index.to_string()))
    }
}

/// Render a map key. Keys must serialize to a string, number or boolean.
fn map_key<T: ?Sized + Serialize>(key: &T) -> Result<String, FlattenError> {
    match serde_json::to_value(key).map_err(|e| FlattenError::Custom(e.to_string()))? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(FlattenError::InvalidMapKey(other.to_string())),
    }
}

impl ser::SerializeSeq for Compound<'_> {
    type Ok = ();
    type Error = FlattenError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FlattenError> {
        self.element(value)
    }

    fn end(self) -> Result<(), FlattenError> {
        Ok(())
    }
}

impl ser::SerializeTuple for Compound<'_> {
    type Ok = ();
    type Error = FlattenError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FlattenError> {
        self.element(value)
    }

    fn end(self) -> Result<(), FlattenError> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for Compound<'_> {
    type Ok = ();
    type Error = FlattenError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FlattenError> {
        self.element(value)
    }

    fn end(self) -> Result<(), FlattenError> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for Compound<'_> {
    type Ok = ();
    type Error = FlattenError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FlattenError> {
        self.element(value)
    }

    fn end(self) -> Result<(), FlattenError> {
        Ok(())
    }
}

impl ser::SerializeMap for Compound<'_> {
    type Ok = ();
    type Error = FlattenError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), FlattenError> {
        self.pending_key = Some(map_key(key)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FlattenError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| FlattenError::Custom("map value without a key".to_owned()))?;
        value.serialize(self.child(&key))
    }

    fn end(self) -> Result<(), FlattenError> {
        Ok(())
    }
}

impl ser::SerializeStruct for Compound<'_> {
    type Ok = ();
    type Error = FlattenError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), FlattenError> {
        value.serialize(self.child(key))
    }

    fn end(self) -> Result<(), FlattenError> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for Compound<'_> {
    type Ok = ();
    type Error = FlattenError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), FlattenError> {
        value.serialize(self.child(key))
    }

    fn end(self) -> Result<(), FlattenError> {
        Ok(())
    }
}

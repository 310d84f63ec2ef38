//! Borrowed, typed view over a parsed JSON tree.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{Error, ErrorKind, Result};

use super::parsable::{Parsable, WireEnum, from_parse_node};

/// A zero-copy cursor into a parsed JSON document.
///
/// Every getter decodes one wire representation into its in-memory
/// type. JSON `null` uniformly decodes as `None`; a value of the wrong
/// JSON type is an [`ErrorKind::UnexpectedType`] error, propagated to
/// the caller unchanged.
///
/// ## Example
///
/// ```rust
/// use graph_models::serialization::JsonParseNode;
///
/// let value = serde_json::json!({"size": 42, "name": null});
/// let node = JsonParseNode::new(&value);
///
/// let size = node.get_child_node("size").unwrap();
/// assert_eq!(size.get_i64_value()?, Some(42));
///
/// let name = node.get_child_node("name").unwrap();
/// assert_eq!(name.get_string_value()?, None);
/// # Ok::<(), graph_models::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    /// Wraps a parsed JSON value.
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Returns the raw JSON value under this node.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Returns the node for the named child property, if present.
    pub fn get_child_node(&self, name: &str) -> Option<JsonParseNode<'a>> {
        self.value.get(name).map(JsonParseNode::new)
    }

    /// Returns the property map of this node.
    ///
    /// Errors with [`ErrorKind::Malformed`] when the node is not a JSON
    /// object.
    pub fn fields(&self) -> Result<&'a Map<String, Value>> {
        self.value.as_object().ok_or_else(|| {
            Error::new(ErrorKind::Malformed, "expected a json object")
        })
    }

    /// Decodes a string property.
    pub fn get_string_value(&self) -> Result<Option<String>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(unexpected("a string", other)),
        }
    }

    /// Decodes a boolean property.
    pub fn get_bool_value(&self) -> Result<Option<bool>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            other => Err(unexpected("a boolean", other)),
        }
    }

    /// Decodes a 32-bit integer property.
    pub fn get_i32_value(&self) -> Result<Option<i32>> {
        match self.get_i64_value()? {
            None => Ok(None),
            Some(wide) => i32::try_from(wide).map(Some).map_err(|_| {
                Error::new(ErrorKind::InvalidValue, "integer out of 32-bit range")
            }),
        }
    }

    /// Decodes a 64-bit integer property.
    pub fn get_i64_value(&self) -> Result<Option<i64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| Error::new(ErrorKind::UnexpectedType, "expected an integer")),
            other => Err(unexpected("an integer", other)),
        }
    }

    /// Decodes a floating-point property. Integral JSON numbers widen.
    pub fn get_f64_value(&self) -> Result<Option<f64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| Error::new(ErrorKind::UnexpectedType, "expected a number")),
            other => Err(unexpected("a number", other)),
        }
    }

    /// Decodes a byte-array property from its base64 wire form.
    pub fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>> {
        match self.get_string_value()? {
            None => Ok(None),
            Some(encoded) => Ok(Some(BASE64.decode(encoded.as_bytes())?)),
        }
    }

    /// Decodes a timestamp property from its RFC 3339 wire form,
    /// normalized to UTC.
    pub fn get_datetime_value(&self) -> Result<Option<DateTime<Utc>>> {
        match self.get_string_value()? {
            None => Ok(None),
            Some(raw) => {
                let parsed = DateTime::parse_from_rfc3339(&raw)?;
                Ok(Some(parsed.with_timezone(&Utc)))
            }
        }
    }

    /// Decodes a GUID property.
    pub fn get_guid_value(&self) -> Result<Option<Uuid>> {
        match self.get_string_value()? {
            None => Ok(None),
            Some(raw) => Ok(Some(Uuid::parse_str(&raw)?)),
        }
    }

    /// Decodes an enum property. An unrecognized wire string is an
    /// [`ErrorKind::InvalidValue`] error.
    pub fn get_enum_value<T: WireEnum>(&self) -> Result<Option<T>> {
        match self.get_string_value()? {
            None => Ok(None),
            Some(raw) => T::from_wire(&raw).map(Some).ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidValue,
                    format!("{:?} is not a known value of {}", raw, std::any::type_name::<T>()),
                )
            }),
        }
    }

    /// Decodes a nested object property into a model type.
    pub fn get_object_value<T: Parsable + Default>(&self) -> Result<Option<T>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(_) => Ok(Some(from_parse_node(*self)?)),
            other => Err(unexpected("an object", other)),
        }
    }

    /// Decodes an ordered collection of nested objects. `null` elements
    /// are skipped.
    pub fn get_collection_of_object_values<T: Parsable + Default>(&self) -> Result<Option<Vec<T>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(elements) => {
                let mut decoded = Vec::with_capacity(elements.len());
                for element in elements {
                    if element.is_null() {
                        continue;
                    }
                    decoded.push(from_parse_node(JsonParseNode::new(element))?);
                }
                Ok(Some(decoded))
            }
            other => Err(unexpected("an array", other)),
        }
    }

    /// Decodes an ordered collection of primitive values. `null`
    /// elements are skipped.
    pub fn get_collection_of_primitive_values<T: JsonPrimitive>(&self) -> Result<Option<Vec<T>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(elements) => {
                let mut decoded = Vec::with_capacity(elements.len());
                for element in elements {
                    if let Some(value) = T::from_node(&JsonParseNode::new(element))? {
                        decoded.push(value);
                    }
                }
                Ok(Some(decoded))
            }
            other => Err(unexpected("an array", other)),
        }
    }
}

fn unexpected(expected: &str, found: &Value) -> Error {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    Error::new(
        ErrorKind::UnexpectedType,
        format!("expected {expected}, found {found}"),
    )
}

/// A primitive that can travel inside a JSON collection.
pub trait JsonPrimitive: Sized {
    /// Decodes one collection element.
    fn from_node(node: &JsonParseNode<'_>) -> Result<Option<Self>>;

    /// Encodes this value as a JSON element.
    fn to_value(&self) -> Value;
}

impl JsonPrimitive for String {
    fn from_node(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        node.get_string_value()
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl JsonPrimitive for bool {
    fn from_node(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        node.get_bool_value()
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl JsonPrimitive for i32 {
    fn from_node(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        node.get_i32_value()
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl JsonPrimitive for i64 {
    fn from_node(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        node.get_i64_value()
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl JsonPrimitive for f64 {
    fn from_node(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        node.get_f64_value()
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

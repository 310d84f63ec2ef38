//! JSON serialization writer, the mirror of the parse node.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::Result;

use super::parsable::{AdditionalData, Parsable, WireEnum};
use super::parse_node::JsonPrimitive;

/// Accumulates one JSON object, property by property.
///
/// Each `write_*` method encodes one wire representation under the
/// given key. `None` values are skipped entirely, so absent properties
/// never appear in the output document.
///
/// ## Example
///
/// ```rust
/// use graph_models::serialization::JsonSerializationWriter;
///
/// let mut writer = JsonSerializationWriter::new();
/// writer.write_string_value("name", Some("a.txt"))?;
/// writer.write_i64_value("size", Some(42))?;
/// writer.write_string_value("skipped", None)?;
///
/// let value = writer.into_value();
/// assert_eq!(value, serde_json::json!({"name": "a.txt", "size": 42}));
/// # Ok::<(), graph_models::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    fields: Map<String, Value>,
}

impl JsonSerializationWriter {
    /// Creates a writer for one empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a string property.
    pub fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        if let Some(value) = value {
            self.fields.insert(key.to_string(), Value::String(value.to_string()));
        }
        Ok(())
    }

    /// Writes a boolean property.
    pub fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<()> {
        if let Some(value) = value {
            self.fields.insert(key.to_string(), Value::Bool(value));
        }
        Ok(())
    }

    /// Writes a 32-bit integer property.
    pub fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<()> {
        if let Some(value) = value {
            self.fields.insert(key.to_string(), Value::from(value));
        }
        Ok(())
    }

    /// Writes a 64-bit integer property.
    pub fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<()> {
        if let Some(value) = value {
            self.fields.insert(key.to_string(), Value::from(value));
        }
        Ok(())
    }

    /// Writes a floating-point property.
    pub fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<()> {
        if let Some(value) = value {
            self.fields.insert(key.to_string(), Value::from(value));
        }
        Ok(())
    }

    /// Writes a byte-array property in its base64 wire form.
    pub fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<()> {
        if let Some(value) = value {
            self.fields
                .insert(key.to_string(), Value::String(BASE64.encode(value)));
        }
        Ok(())
    }

    /// Writes a timestamp property in RFC 3339 form. Fraction-less
    /// inputs round-trip without a synthetic fractional part.
    pub fn write_datetime_value(&mut self, key: &str, value: Option<DateTime<Utc>>) -> Result<()> {
        if let Some(value) = value {
            let encoded = value.to_rfc3339_opts(SecondsFormat::AutoSi, true);
            self.fields.insert(key.to_string(), Value::String(encoded));
        }
        Ok(())
    }

    /// Writes a GUID property in hyphenated form.
    pub fn write_guid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<()> {
        if let Some(value) = value {
            self.fields
                .insert(key.to_string(), Value::String(value.to_string()));
        }
        Ok(())
    }

    /// Writes an enum property as its wire string.
    pub fn write_enum_value<T: WireEnum>(&mut self, key: &str, value: Option<T>) -> Result<()> {
        self.write_string_value(key, value.map(|v| v.as_wire()))
    }

    /// Writes a nested object property.
    pub fn write_object_value<T: Parsable>(&mut self, key: &str, value: Option<&T>) -> Result<()> {
        if let Some(value) = value {
            let mut nested = JsonSerializationWriter::new();
            value.serialize(&mut nested)?;
            self.fields.insert(key.to_string(), nested.into_value());
        }
        Ok(())
    }

    /// Writes an ordered collection of nested objects.
    pub fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        value: Option<&[T]>,
    ) -> Result<()> {
        if let Some(elements) = value {
            let mut encoded = Vec::with_capacity(elements.len());
            for element in elements {
                let mut nested = JsonSerializationWriter::new();
                element.serialize(&mut nested)?;
                encoded.push(nested.into_value());
            }
            self.fields.insert(key.to_string(), Value::Array(encoded));
        }
        Ok(())
    }

    /// Writes an ordered collection of primitive values.
    pub fn write_collection_of_primitive_values<T: JsonPrimitive>(
        &mut self,
        key: &str,
        value: Option<&[T]>,
    ) -> Result<()> {
        if let Some(elements) = value {
            let encoded = elements.iter().map(JsonPrimitive::to_value).collect();
            self.fields.insert(key.to_string(), Value::Array(encoded));
        }
        Ok(())
    }

    /// Re-emits the additional-data bag verbatim. Keys already written
    /// as modeled properties are left untouched.
    pub fn write_additional_data(&mut self, data: &AdditionalData) -> Result<()> {
        for (key, value) in data {
            if !self.fields.contains_key(key) {
                self.fields.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }

    /// Finishes the object and returns it as a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Finishes the object and returns its property map.
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_none_is_skipped() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("name", None).unwrap();
        writer.write_i64_value("size", None).unwrap();
        writer.write_bool_value("flag", None).unwrap();
        assert_eq!(writer.into_value(), json!({}));
    }

    #[test]
    fn test_primitive_values() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("s", Some("v")).unwrap();
        writer.write_bool_value("b", Some(true)).unwrap();
        writer.write_i32_value("narrow", Some(7)).unwrap();
        writer.write_i64_value("wide", Some(42)).unwrap();
        writer.write_f64_value("f", Some(2.5)).unwrap();
        assert_eq!(
            writer.into_value(),
            json!({"s": "v", "b": true, "narrow": 7, "wide": 42, "f": 2.5})
        );
    }

    #[test]
    fn test_byte_array_base64() {
        let mut writer = JsonSerializationWriter::new();
        writer
            .write_byte_array_value("content", Some(&[0u8, 1, 2]))
            .unwrap();
        assert_eq!(writer.into_value(), json!({"content": "AAEC"}));
    }

    #[test]
    fn test_datetime_without_fraction() {
        use chrono::TimeZone;

        let stamp = Utc.with_ymd_and_hms(2016, 3, 21, 20, 1, 37).unwrap();
        let mut writer = JsonSerializationWriter::new();
        writer.write_datetime_value("createdDateTime", Some(stamp)).unwrap();
        assert_eq!(
            writer.into_value(),
            json!({"createdDateTime": "2016-03-21T20:01:37Z"})
        );
    }

    #[test]
    fn test_guid_value() {
        let id = "f2f10c15-0f39-4b06-8dfa-8a5f8e4a7b57".parse::<Uuid>().unwrap();
        let mut writer = JsonSerializationWriter::new();
        writer.write_guid_value("applicationId", Some(id)).unwrap();
        assert_eq!(
            writer.into_value(),
            json!({"applicationId": "f2f10c15-0f39-4b06-8dfa-8a5f8e4a7b57"})
        );
    }

    #[test]
    fn test_string_collection() {
        let roles = vec!["read".to_string(), "write".to_string()];
        let mut writer = JsonSerializationWriter::new();
        writer
            .write_collection_of_primitive_values("roles", Some(roles.as_slice()))
            .unwrap();
        assert_eq!(writer.into_value(), json!({"roles": ["read", "write"]}));
    }

    #[test]
    fn test_additional_data_does_not_clobber_modeled_keys() {
        let mut data = AdditionalData::new();
        data.insert("name".to_string(), json!("shadow"));
        data.insert("extra".to_string(), json!({"nested": 1}));

        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("name", Some("a.txt")).unwrap();
        writer.write_additional_data(&data).unwrap();

        assert_eq!(
            writer.into_value(),
            json!({"name": "a.txt", "extra": {"nested": 1}})
        );
    }
}

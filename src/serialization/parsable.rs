//! Traits connecting model types to the wire layer, and the decode and
//! encode entry points.

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};
use crate::store::InMemoryBackingStore;

use super::parse_node::JsonParseNode;
use super::writer::JsonSerializationWriter;

/// The store key the additional-data bag lives under.
///
/// The bag is a property like any other; it occupies one slot of the
/// backing store rather than a dedicated struct field.
pub(crate) const ADDITIONAL_DATA_KEY: &str = "additionalData";

/// Unmodeled wire properties, captured during decode and re-emitted
/// verbatim on serialization.
pub type AdditionalData = serde_json::Map<String, Value>;

/// A model whose state lives in a backing store.
pub trait BackedModel {
    /// The store holding every property of this model.
    fn backing_store(&self) -> &InMemoryBackingStore;

    /// Mutable access to the store.
    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore;
}

/// Access to the additional-data bag of a model.
///
/// Implemented for every [`BackedModel`]; the bag lives in the backing
/// store under a reserved key.
pub trait AdditionalDataHolder {
    /// The unmodeled properties captured for this model.
    fn additional_data(&self) -> &AdditionalData;

    /// Mutable access to the bag, created empty on first use.
    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

impl<T: BackedModel> AdditionalDataHolder for T {
    fn additional_data(&self) -> &AdditionalData {
        static EMPTY: std::sync::LazyLock<AdditionalData> =
            std::sync::LazyLock::new(AdditionalData::new);
        self.backing_store()
            .get(ADDITIONAL_DATA_KEY)
            .unwrap_or(&EMPTY)
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.backing_store_mut()
            .get_or_insert_with(ADDITIONAL_DATA_KEY, AdditionalData::new)
    }
}

/// A type that can be decoded from and encoded to the wire format.
///
/// `deserialize_field` is the field table of the type: it routes one
/// wire property into the backing store and reports whether the name
/// was recognized. Derived types consult their own table first and
/// delegate unrecognized names to their base, composing the tables the
/// same way the wire schema composes the types.
pub trait Parsable: BackedModel {
    /// Routes one wire property into the model.
    ///
    /// Returns `Ok(true)` when `name` belongs to this type (or a base),
    /// `Ok(false)` when it should be captured as additional data.
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool>;

    /// Writes every known property of this model, base first, under its
    /// exact wire casing.
    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()>;
}

/// An enum-typed property with a fixed wire vocabulary.
pub trait WireEnum: Copy {
    /// The wire string for this variant.
    fn as_wire(&self) -> &'static str;

    /// Resolves a wire string, `None` when unrecognized.
    fn from_wire(value: &str) -> Option<Self>;
}

/// Decodes a model from the object under `node`.
///
/// Every key of the payload is offered to the model's field table;
/// unrecognized keys are captured into additional data. Store change
/// tracking is suspended for the duration, so a freshly decoded model
/// reports no changed properties.
pub fn from_parse_node<T: Parsable + Default>(node: JsonParseNode<'_>) -> Result<T> {
    let mut model = T::default();
    assign_from_node(&mut model, node)?;
    Ok(model)
}

/// Decodes a model from a parsed JSON value.
pub fn from_json_value<T: Parsable + Default>(value: &Value) -> Result<T> {
    from_parse_node(JsonParseNode::new(value))
}

/// Decodes a model from raw JSON bytes.
///
/// ## Example
///
/// ```rust
/// use graph_models::models::{BaseItemModel, DriveItem};
/// use graph_models::serialization;
///
/// let item: DriveItem =
///     serialization::from_json_slice(br#"{"name":"a.txt","size":42}"#)?;
/// assert_eq!(item.name(), Some("a.txt"));
/// assert_eq!(item.size(), Some(42));
/// # Ok::<(), graph_models::Error>(())
/// ```
pub fn from_json_slice<T: Parsable + Default>(bytes: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(bytes)?;
    from_json_value(&value)
}

fn assign_from_node<T: Parsable>(model: &mut T, node: JsonParseNode<'_>) -> Result<()> {
    model.backing_store_mut().set_initialization_completed(false);
    for (name, value) in node.fields()? {
        let child = JsonParseNode::new(value);
        let handled = model.deserialize_field(name, child).map_err(|err| {
            if err.property().is_none() {
                err.with_property(name.as_str())
            } else {
                err
            }
        })?;
        if !handled {
            tracing::trace!(property = %name, "capturing unmodeled property");
            model.additional_data_mut().insert(name.clone(), value.clone());
        }
    }
    model.backing_store_mut().set_initialization_completed(true);
    Ok(())
}

/// Encodes a model as a JSON value.
pub fn to_json_value<T: Parsable>(model: &T) -> Result<Value> {
    let mut writer = JsonSerializationWriter::new();
    model.serialize(&mut writer)?;
    Ok(writer.into_value())
}

/// Encodes a model as raw JSON bytes.
pub fn to_json_vec<T: Parsable>(model: &T) -> Result<Vec<u8>> {
    let value = to_json_value(model)?;
    serde_json::to_vec(&value)
        .map_err(|err| Error::new(ErrorKind::Serialization, "json encoding failed").with_source(err))
}

/// Bridges a `Parsable` model into serde, so models nest inside
/// user-defined `Serialize`/`Deserialize` types.
macro_rules! impl_parsable_serde {
    ($model:ty) => {
        impl serde::Serialize for $model {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let value = $crate::serialization::to_json_value(self)
                    .map_err(serde::ser::Error::custom)?;
                serde::Serialize::serialize(&value, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $model {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                $crate::serialization::from_json_value(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}
pub(crate) use impl_parsable_serde;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Probe {
        store: InMemoryBackingStore,
    }

    impl BackedModel for Probe {
        fn backing_store(&self) -> &InMemoryBackingStore {
            &self.store
        }

        fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
            &mut self.store
        }
    }

    impl Parsable for Probe {
        fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
            match name {
                "known" => {
                    if let Some(value) = node.get_string_value()? {
                        self.store.set("known", value);
                    }
                    Ok(true)
                }
                _ => Ok(false),
            }
        }

        fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
            writer.write_string_value(
                "known",
                self.store.get::<String>("known").map(String::as_str),
            )?;
            writer.write_additional_data(self.additional_data())?;
            Ok(())
        }
    }

    #[test]
    fn test_unknown_keys_land_in_additional_data() {
        let value = json!({"known": "yes", "mystery": [1, 2]});
        let probe: Probe = from_json_value(&value).unwrap();
        assert_eq!(probe.store.get::<String>("known").map(String::as_str), Some("yes"));
        assert_eq!(probe.additional_data().get("mystery"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_decode_reports_no_changes() {
        let value = json!({"known": "yes"});
        let probe: Probe = from_json_value(&value).unwrap();
        assert_eq!(probe.backing_store().changed_keys().count(), 0);
        assert!(probe.backing_store().initialization_completed());
    }

    #[test]
    fn test_decode_error_names_the_property() {
        let value = json!({"known": 42});
        let err = from_json_value::<Probe>(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedType);
        assert_eq!(err.property(), Some("known"));
    }

    #[test]
    fn test_non_object_root_is_malformed() {
        let err = from_json_slice::<Probe>(b"[1,2]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = from_json_slice::<Probe>(b"{not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_round_trip_preserves_additional_data() {
        let value = json!({"known": "yes", "extra": {"deep": true}});
        let probe: Probe = from_json_value(&value).unwrap();
        let encoded = to_json_value(&probe).unwrap();
        assert_eq!(encoded, value);
    }

    #[test]
    fn test_additional_data_empty_by_default() {
        let probe = Probe::default();
        assert!(probe.additional_data().is_empty());
    }

    #[test]
    fn test_additional_data_mut_initializes() {
        let mut probe = Probe::default();
        probe
            .additional_data_mut()
            .insert("added".to_string(), json!(1));
        assert_eq!(probe.additional_data().len(), 1);
    }

    #[test]
    fn test_to_json_vec_is_parseable() {
        let value = json!({"known": "yes"});
        let probe: Probe = from_json_value(&value).unwrap();
        let bytes = to_json_vec(&probe).unwrap();
        let reparsed: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(reparsed, value);
    }
}

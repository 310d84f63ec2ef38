//! Reference to an item's location within a drive hierarchy.

use crate::error::Result;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, JsonParseNode, JsonSerializationWriter, Parsable,
    impl_parsable_serde,
};
use crate::store::InMemoryBackingStore;

/// Identifies where an item lives: the containing drive and the path
/// inside it.
#[derive(Debug, Clone)]
pub struct ItemReference {
    store: InMemoryBackingStore,
}

impl ItemReference {
    /// Creates an empty reference.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }

    /// The identifier of the containing drive.
    pub fn drive_id(&self) -> Option<&str> {
        self.store.get::<String>("driveId").map(String::as_str)
    }

    /// Sets the containing drive identifier; `None` removes it.
    pub fn set_drive_id(&mut self, value: Option<String>) {
        self.store.set_optional("driveId", value);
    }

    /// The kind of the containing drive.
    pub fn drive_type(&self) -> Option<&str> {
        self.store.get::<String>("driveType").map(String::as_str)
    }

    /// Sets the containing drive kind; `None` removes it.
    pub fn set_drive_type(&mut self, value: Option<String>) {
        self.store.set_optional("driveType", value);
    }

    /// The identifier of the referenced item.
    pub fn id(&self) -> Option<&str> {
        self.store.get::<String>("id").map(String::as_str)
    }

    /// Sets the referenced item identifier; `None` removes it.
    pub fn set_id(&mut self, value: Option<String>) {
        self.store.set_optional("id", value);
    }

    /// The name of the referenced item.
    pub fn name(&self) -> Option<&str> {
        self.store.get::<String>("name").map(String::as_str)
    }

    /// Sets the referenced item name; `None` removes it.
    pub fn set_name(&mut self, value: Option<String>) {
        self.store.set_optional("name", value);
    }

    /// The path of the referenced item relative to the drive root.
    pub fn path(&self) -> Option<&str> {
        self.store.get::<String>("path").map(String::as_str)
    }

    /// Sets the path; `None` removes it.
    pub fn set_path(&mut self, value: Option<String>) {
        self.store.set_optional("path", value);
    }
}

impl Default for ItemReference {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for ItemReference {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

impl Parsable for ItemReference {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "driveId" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_drive_id(Some(value));
                }
                Ok(true)
            }
            "driveType" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_drive_type(Some(value));
                }
                Ok(true)
            }
            "id" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_id(Some(value));
                }
                Ok(true)
            }
            "name" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_name(Some(value));
                }
                Ok(true)
            }
            "path" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_path(Some(value));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("driveId", self.drive_id())?;
        writer.write_string_value("driveType", self.drive_type())?;
        writer.write_string_value("id", self.id())?;
        writer.write_string_value("name", self.name())?;
        writer.write_string_value("path", self.path())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(ItemReference);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::serialization::{from_json_value, to_json_value};

    use super::*;

    #[test]
    fn test_round_trip() {
        let value = json!({
            "driveId": "b!x",
            "driveType": "documentLibrary",
            "id": "ref-1",
            "name": "reports",
            "path": "/drive/root:/reports"
        });
        let reference: ItemReference = from_json_value(&value).unwrap();
        assert_eq!(reference.drive_id(), Some("b!x"));
        assert_eq!(reference.path(), Some("/drive/root:/reports"));
        assert_eq!(to_json_value(&reference).unwrap(), value);
    }

    #[test]
    fn test_null_properties_decode_as_absent() {
        let value = json!({"driveId": null, "name": "reports"});
        let reference: ItemReference = from_json_value(&value).unwrap();
        assert!(reference.drive_id().is_none());
        assert_eq!(reference.name(), Some("reports"));
        // Nulls are omitted on re-encode, not replayed.
        assert_eq!(to_json_value(&reference).unwrap(), json!({"name": "reports"}));
    }
}

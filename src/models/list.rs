//! SharePoint-style lists and their rows.

use crate::error::Result;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, JsonParseNode, JsonSerializationWriter, Parsable,
    impl_parsable_serde,
};
use crate::store::InMemoryBackingStore;

use super::{BaseItem, BaseItemModel, DriveItem, EntityModel};

/// A list of items in a site.
#[derive(Debug, Clone)]
pub struct List {
    base: BaseItem,
}

impl List {
    /// The `@odata.type` discriminator for this type.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.list";

    /// Creates a list with the discriminator preset.
    pub fn new() -> Self {
        let mut base = BaseItem::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self { base }
    }

    /// The displayable title of the list.
    pub fn display_name(&self) -> Option<&str> {
        self.backing_store()
            .get::<String>("displayName")
            .map(String::as_str)
    }

    /// Sets the title; `None` removes it.
    pub fn set_display_name(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("displayName", value);
    }

    /// All rows contained in the list.
    pub fn items(&self) -> Option<&[ListItem]> {
        self.backing_store()
            .get::<Vec<ListItem>>("items")
            .map(Vec::as_slice)
    }

    /// Sets the rows collection; `None` removes it.
    pub fn set_items(&mut self, value: Option<Vec<ListItem>>) {
        self.backing_store_mut().set_optional("items", value);
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for List {
    fn backing_store(&self) -> &InMemoryBackingStore {
        self.base.backing_store()
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        self.base.backing_store_mut()
    }
}

impl EntityModel for List {}
impl BaseItemModel for List {}

impl Parsable for List {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "displayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_display_name(Some(value));
                }
                Ok(true)
            }
            "items" => {
                if let Some(value) = node.get_collection_of_object_values()? {
                    self.set_items(Some(value));
                }
                Ok(true)
            }
            _ => self.base.deserialize_field(name, node),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize(writer)?;
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_collection_of_object_values("items", self.items())?;
        Ok(())
    }
}

impl_parsable_serde!(List);

/// A row in a [`List`].
#[derive(Debug, Clone)]
pub struct ListItem {
    base: BaseItem,
}

impl ListItem {
    /// The `@odata.type` discriminator for this type.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.listItem";

    /// Creates a list item with the discriminator preset.
    pub fn new() -> Self {
        let mut base = BaseItem::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self { base }
    }

    /// The content type of the row.
    pub fn content_type(&self) -> Option<&ContentTypeInfo> {
        self.backing_store().get("contentType")
    }

    /// Sets the content type; `None` removes it.
    pub fn set_content_type(&mut self, value: Option<ContentTypeInfo>) {
        self.backing_store_mut().set_optional("contentType", value);
    }

    /// The drive item this row represents, when the list backs a
    /// document library. Read-only.
    pub fn drive_item(&self) -> Option<&DriveItem> {
        self.backing_store().get("driveItem")
    }

    /// Sets the backing drive item; `None` removes it.
    pub fn set_drive_item(&mut self, value: Option<DriveItem>) {
        self.backing_store_mut().set_optional("driveItem", value);
    }
}

impl Default for ListItem {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for ListItem {
    fn backing_store(&self) -> &InMemoryBackingStore {
        self.base.backing_store()
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        self.base.backing_store_mut()
    }
}

impl EntityModel for ListItem {}
impl BaseItemModel for ListItem {}

impl Parsable for ListItem {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "contentType" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_content_type(Some(value));
                }
                Ok(true)
            }
            "driveItem" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_drive_item(Some(value));
                }
                Ok(true)
            }
            _ => self.base.deserialize_field(name, node),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize(writer)?;
        writer.write_object_value("contentType", self.content_type())?;
        writer.write_object_value("driveItem", self.drive_item())?;
        Ok(())
    }
}

impl_parsable_serde!(ListItem);

/// Identifies the content type of a list row.
#[derive(Debug, Clone)]
pub struct ContentTypeInfo {
    store: InMemoryBackingStore,
}

impl ContentTypeInfo {
    /// Creates an empty content type reference.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }

    /// The identifier of the content type.
    pub fn id(&self) -> Option<&str> {
        self.store.get::<String>("id").map(String::as_str)
    }

    /// Sets the identifier; `None` removes it.
    pub fn set_id(&mut self, value: Option<String>) {
        self.store.set_optional("id", value);
    }

    /// The name of the content type.
    pub fn name(&self) -> Option<&str> {
        self.store.get::<String>("name").map(String::as_str)
    }

    /// Sets the name; `None` removes it.
    pub fn set_name(&mut self, value: Option<String>) {
        self.store.set_optional("name", value);
    }
}

impl Default for ContentTypeInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for ContentTypeInfo {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

impl Parsable for ContentTypeInfo {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
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
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("id", self.id())?;
        writer.write_string_value("name", self.name())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(ContentTypeInfo);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::serialization::{from_json_value, to_json_value};

    use super::*;

    #[test]
    fn test_list_with_items_round_trip() {
        let value = json!({
            "@odata.type": "#microsoft.graph.list",
            "displayName": "Documents",
            "items": [
                {
                    "@odata.type": "#microsoft.graph.listItem",
                    "id": "row-1",
                    "contentType": {"id": "0x0101", "name": "Document"},
                    "driveItem": {
                        "@odata.type": "#microsoft.graph.driveItem",
                        "name": "a.txt",
                        "size": 42
                    }
                }
            ]
        });
        let list: List = from_json_value(&value).unwrap();
        assert_eq!(list.display_name(), Some("Documents"));

        let rows = list.items().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].content_type().and_then(ContentTypeInfo::name), Some("Document"));
        assert_eq!(rows[0].drive_item().and_then(|d| d.name()), Some("a.txt"));

        assert_eq!(to_json_value(&list).unwrap(), value);
    }

    #[test]
    fn test_list_item_inherits_base_fields() {
        let value = json!({"id": "row-1", "name": "Row one"});
        let row: ListItem = from_json_value(&value).unwrap();
        assert_eq!(row.id(), Some("row-1"));
        assert_eq!(row.name(), Some("Row one"));
    }
}

//! Drive items: files and folders stored in a drive, plus the facets
//! describing them.

use crate::error::Result;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, JsonParseNode, JsonSerializationWriter, Parsable,
    impl_parsable_serde,
};
use crate::store::InMemoryBackingStore;

use super::{BaseItem, BaseItemModel, EntityModel};

/// An item held in a drive: a file, folder, or deleted tombstone.
///
/// ## Example
///
/// ```rust
/// use graph_models::models::{BaseItemModel, DriveItem};
/// use graph_models::serialization;
///
/// let payload =
///     br#"{"@odata.type":"#microsoft.graph.driveItem","name":"a.txt","size":42}"#;
/// let item: DriveItem = serialization::from_json_slice(payload)?;
/// assert_eq!(item.name(), Some("a.txt"));
/// assert_eq!(item.size(), Some(42));
/// # Ok::<(), graph_models::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DriveItem {
    base: BaseItem,
}

impl DriveItem {
    /// The `@odata.type` discriminator for this type.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.driveItem";

    /// Creates a drive item with the discriminator preset.
    pub fn new() -> Self {
        let mut base = BaseItem::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self { base }
    }

    /// An eTag for the content of the item. Not returned for folders.
    /// Read-only.
    pub fn c_tag(&self) -> Option<&str> {
        self.backing_store().get::<String>("cTag").map(String::as_str)
    }

    /// Sets the content eTag; `None` removes it.
    pub fn set_c_tag(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("cTag", value);
    }

    /// The immediate children of the item. Only folders have children.
    /// Read-only.
    pub fn children(&self) -> Option<&[DriveItem]> {
        self.backing_store()
            .get::<Vec<DriveItem>>("children")
            .map(Vec::as_slice)
    }

    /// Sets the children collection; `None` removes it.
    pub fn set_children(&mut self, value: Option<Vec<DriveItem>>) {
        self.backing_store_mut().set_optional("children", value);
    }

    /// The content stream, if the item represents a file.
    pub fn content(&self) -> Option<&[u8]> {
        self.backing_store()
            .get::<Vec<u8>>("content")
            .map(Vec::as_slice)
    }

    /// Sets the content stream; `None` removes it.
    pub fn set_content(&mut self, value: Option<Vec<u8>>) {
        self.backing_store_mut().set_optional("content", value);
    }

    /// Information about the deleted state of the item. Read-only.
    pub fn deleted(&self) -> Option<&Deleted> {
        self.backing_store().get("deleted")
    }

    /// Sets the deleted facet; `None` removes it.
    pub fn set_deleted(&mut self, value: Option<Deleted>) {
        self.backing_store_mut().set_optional("deleted", value);
    }

    /// File metadata, if the item is a file. Read-only.
    pub fn file(&self) -> Option<&File> {
        self.backing_store().get("file")
    }

    /// Sets the file facet; `None` removes it.
    pub fn set_file(&mut self, value: Option<File>) {
        self.backing_store_mut().set_optional("file", value);
    }

    /// Folder metadata, if the item is a folder. Read-only.
    pub fn folder(&self) -> Option<&Folder> {
        self.backing_store().get("folder")
    }

    /// Sets the folder facet; `None` removes it.
    pub fn set_folder(&mut self, value: Option<Folder>) {
        self.backing_store_mut().set_optional("folder", value);
    }

    /// Size of the item in bytes. Read-only.
    pub fn size(&self) -> Option<i64> {
        self.backing_store().get::<i64>("size").copied()
    }

    /// Sets the size; `None` removes it.
    pub fn set_size(&mut self, value: Option<i64>) {
        self.backing_store_mut().set_optional("size", value);
    }

    /// WebDAV-compatible URL for the item.
    pub fn web_dav_url(&self) -> Option<&str> {
        self.backing_store()
            .get::<String>("webDavUrl")
            .map(String::as_str)
    }

    /// Sets the WebDAV URL; `None` removes it.
    pub fn set_web_dav_url(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("webDavUrl", value);
    }
}

impl Default for DriveItem {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for DriveItem {
    fn backing_store(&self) -> &InMemoryBackingStore {
        self.base.backing_store()
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        self.base.backing_store_mut()
    }
}

impl EntityModel for DriveItem {}
impl BaseItemModel for DriveItem {}

impl Parsable for DriveItem {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "cTag" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_c_tag(Some(value));
                }
                Ok(true)
            }
            "children" => {
                if let Some(value) = node.get_collection_of_object_values()? {
                    self.set_children(Some(value));
                }
                Ok(true)
            }
            "content" => {
                if let Some(value) = node.get_byte_array_value()? {
                    self.set_content(Some(value));
                }
                Ok(true)
            }
            "deleted" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_deleted(Some(value));
                }
                Ok(true)
            }
            "file" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_file(Some(value));
                }
                Ok(true)
            }
            "folder" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_folder(Some(value));
                }
                Ok(true)
            }
            "size" => {
                if let Some(value) = node.get_i64_value()? {
                    self.set_size(Some(value));
                }
                Ok(true)
            }
            "webDavUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_web_dav_url(Some(value));
                }
                Ok(true)
            }
            _ => self.base.deserialize_field(name, node),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize(writer)?;
        writer.write_string_value("cTag", self.c_tag())?;
        writer.write_collection_of_object_values("children", self.children())?;
        writer.write_byte_array_value("content", self.content())?;
        writer.write_object_value("deleted", self.deleted())?;
        writer.write_object_value("file", self.file())?;
        writer.write_object_value("folder", self.folder())?;
        writer.write_i64_value("size", self.size())?;
        writer.write_string_value("webDavUrl", self.web_dav_url())?;
        Ok(())
    }
}

impl_parsable_serde!(DriveItem);

/// File metadata for a drive item.
#[derive(Debug, Clone)]
pub struct File {
    store: InMemoryBackingStore,
}

impl File {
    /// Creates an empty file facet.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }

    /// Hashes of the file's binary content. Read-only.
    pub fn hashes(&self) -> Option<&Hashes> {
        self.store.get("hashes")
    }

    /// Sets the content hashes; `None` removes them.
    pub fn set_hashes(&mut self, value: Option<Hashes>) {
        self.store.set_optional("hashes", value);
    }

    /// The MIME type of the content, determined by the service.
    pub fn mime_type(&self) -> Option<&str> {
        self.store.get::<String>("mimeType").map(String::as_str)
    }

    /// Sets the MIME type; `None` removes it.
    pub fn set_mime_type(&mut self, value: Option<String>) {
        self.store.set_optional("mimeType", value);
    }
}

impl Default for File {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for File {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

impl Parsable for File {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "hashes" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_hashes(Some(value));
                }
                Ok(true)
            }
            "mimeType" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_mime_type(Some(value));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_object_value("hashes", self.hashes())?;
        writer.write_string_value("mimeType", self.mime_type())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(File);

/// Folder metadata for a drive item.
#[derive(Debug, Clone)]
pub struct Folder {
    store: InMemoryBackingStore,
}

impl Folder {
    /// Creates an empty folder facet.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }

    /// Number of children contained immediately within this folder.
    pub fn child_count(&self) -> Option<i32> {
        self.store.get::<i32>("childCount").copied()
    }

    /// Sets the child count; `None` removes it.
    pub fn set_child_count(&mut self, value: Option<i32>) {
        self.store.set_optional("childCount", value);
    }
}

impl Default for Folder {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for Folder {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

impl Parsable for Folder {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "childCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.set_child_count(Some(value));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_i32_value("childCount", self.child_count())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(Folder);

/// Content hashes for a file.
#[derive(Debug, Clone)]
pub struct Hashes {
    store: InMemoryBackingStore,
}

impl Hashes {
    /// Creates an empty hash set.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }

    /// A proprietary rolling hash of the content, base64 encoded.
    pub fn quick_xor_hash(&self) -> Option<&str> {
        self.store.get::<String>("quickXorHash").map(String::as_str)
    }

    /// Sets the rolling hash; `None` removes it.
    pub fn set_quick_xor_hash(&mut self, value: Option<String>) {
        self.store.set_optional("quickXorHash", value);
    }

    /// SHA-1 hash of the content, hex encoded.
    pub fn sha1_hash(&self) -> Option<&str> {
        self.store.get::<String>("sha1Hash").map(String::as_str)
    }

    /// Sets the SHA-1 hash; `None` removes it.
    pub fn set_sha1_hash(&mut self, value: Option<String>) {
        self.store.set_optional("sha1Hash", value);
    }

    /// SHA-256 hash of the content, hex encoded.
    pub fn sha256_hash(&self) -> Option<&str> {
        self.store.get::<String>("sha256Hash").map(String::as_str)
    }

    /// Sets the SHA-256 hash; `None` removes it.
    pub fn set_sha256_hash(&mut self, value: Option<String>) {
        self.store.set_optional("sha256Hash", value);
    }
}

impl Default for Hashes {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for Hashes {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

impl Parsable for Hashes {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "quickXorHash" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_quick_xor_hash(Some(value));
                }
                Ok(true)
            }
            "sha1Hash" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_sha1_hash(Some(value));
                }
                Ok(true)
            }
            "sha256Hash" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_sha256_hash(Some(value));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("quickXorHash", self.quick_xor_hash())?;
        writer.write_string_value("sha1Hash", self.sha1_hash())?;
        writer.write_string_value("sha256Hash", self.sha256_hash())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(Hashes);

/// Marks an item as deleted and records where the state came from.
#[derive(Debug, Clone)]
pub struct Deleted {
    store: InMemoryBackingStore,
}

impl Deleted {
    /// Creates an empty deleted facet.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }

    /// Represents the state of the deleted item.
    pub fn state(&self) -> Option<&str> {
        self.store.get::<String>("state").map(String::as_str)
    }

    /// Sets the deleted state; `None` removes it.
    pub fn set_state(&mut self, value: Option<String>) {
        self.store.set_optional("state", value);
    }
}

impl Default for Deleted {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for Deleted {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

impl Parsable for Deleted {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "state" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_state(Some(value));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("state", self.state())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(Deleted);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::serialization::{from_json_value, to_json_value};

    use super::*;

    #[test]
    fn test_new_presets_discriminator() {
        let item = DriveItem::new();
        assert_eq!(item.odata_type(), Some(DriveItem::ODATA_TYPE));
    }

    #[test]
    fn test_scenario_decode_name_and_size() {
        let value = json!({
            "@odata.type": "#microsoft.graph.driveItem",
            "name": "a.txt",
            "size": 42
        });
        let item: DriveItem = from_json_value(&value).unwrap();
        assert_eq!(item.name(), Some("a.txt"));
        assert_eq!(item.size(), Some(42));
        assert_eq!(to_json_value(&item).unwrap(), value);
    }

    #[test]
    fn test_content_travels_base64() {
        let mut item = DriveItem::new();
        item.set_content(Some(vec![0u8, 1, 2]));
        let encoded = to_json_value(&item).unwrap();
        assert_eq!(encoded["content"], json!("AAEC"));

        let back: DriveItem = from_json_value(&encoded).unwrap();
        assert_eq!(back.content(), Some([0u8, 1, 2].as_slice()));
    }

    #[test]
    fn test_children_collection_round_trip() {
        let value = json!({
            "@odata.type": "#microsoft.graph.driveItem",
            "folder": {"childCount": 2},
            "children": [
                {"@odata.type": "#microsoft.graph.driveItem", "name": "1.txt", "size": 1},
                {"@odata.type": "#microsoft.graph.driveItem", "name": "2.txt", "size": 2}
            ]
        });
        let item: DriveItem = from_json_value(&value).unwrap();
        let children = item.children().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name(), Some("1.txt"));
        assert_eq!(children[1].size(), Some(2));
        assert_eq!(item.folder().and_then(Folder::child_count), Some(2));
        assert_eq!(to_json_value(&item).unwrap(), value);
    }

    #[test]
    fn test_file_facet_with_hashes() {
        let value = json!({
            "file": {
                "mimeType": "text/plain",
                "hashes": {"quickXorHash": "aGFzaA==", "sha1Hash": "da39a3ee"}
            },
            "name": "a.txt"
        });
        let item: DriveItem = from_json_value(&value).unwrap();
        let file = item.file().unwrap();
        assert_eq!(file.mime_type(), Some("text/plain"));
        assert_eq!(file.hashes().and_then(Hashes::quick_xor_hash), Some("aGFzaA=="));
        assert_eq!(to_json_value(&item).unwrap(), value);
    }

    #[test]
    fn test_deleted_facet() {
        let value = json!({"deleted": {"state": "softDeleted"}});
        let item: DriveItem = from_json_value(&value).unwrap();
        assert_eq!(item.deleted().and_then(Deleted::state), Some("softDeleted"));
    }

    #[test]
    fn test_invalid_content_base64_names_property() {
        let value = json!({"content": "%%%"});
        let err = from_json_value::<DriveItem>(&value).unwrap_err();
        assert_eq!(err.property(), Some("content"));
    }

    #[test]
    fn test_inherited_fields_round_trip() {
        let value = json!({
            "@odata.type": "#microsoft.graph.driveItem",
            "id": "item-1",
            "eTag": "\"3\"",
            "name": "a.txt",
            "parentReference": {"driveId": "b!x", "path": "/drive/root:"},
            "webUrl": "https://contoso.example/a.txt"
        });
        let item: DriveItem = from_json_value(&value).unwrap();
        assert_eq!(item.id(), Some("item-1"));
        assert_eq!(item.e_tag(), Some("\"3\""));
        assert_eq!(to_json_value(&item).unwrap(), value);
    }

    #[test]
    fn test_serde_bridge_nests_in_user_types() {
        #[derive(serde::Serialize)]
        struct Envelope {
            item: DriveItem,
        }

        let mut item = DriveItem::new();
        item.set_name(Some("a.txt".to_string()));
        let encoded = serde_json::to_value(Envelope { item }).unwrap();
        assert_eq!(encoded["item"]["name"], json!("a.txt"));
    }
}

//! The common envelope shared by items stored in a drive or site.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::serialization::{
    BackedModel, JsonParseNode, JsonSerializationWriter, Parsable, impl_parsable_serde,
};
use crate::store::InMemoryBackingStore;

use super::{Entity, EntityModel, IdentitySet, ItemReference};

/// Base type for storable items: drives, drive items, lists, and list
/// items all embed this envelope on top of [`Entity`].
#[derive(Debug, Clone)]
pub struct BaseItem {
    entity: Entity,
}

impl BaseItem {
    /// The `@odata.type` discriminator for this type.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.baseItem";

    /// Creates an item envelope with the discriminator preset.
    pub fn new() -> Self {
        let mut entity = Entity::new();
        entity.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self { entity }
    }
}

impl Default for BaseItem {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for BaseItem {
    fn backing_store(&self) -> &InMemoryBackingStore {
        self.entity.backing_store()
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        self.entity.backing_store_mut()
    }
}

impl EntityModel for BaseItem {}

/// Accessors shared by every type embedding the [`BaseItem`] envelope.
pub trait BaseItemModel: EntityModel {
    /// The actors that created the item. Read-only.
    fn created_by(&self) -> Option<&IdentitySet> {
        self.backing_store().get("createdBy")
    }

    /// Sets the creating actors; `None` removes them.
    fn set_created_by(&mut self, value: Option<IdentitySet>) {
        self.backing_store_mut().set_optional("createdBy", value);
    }

    /// When the item was created. Read-only.
    fn created_date_time(&self) -> Option<DateTime<Utc>> {
        self.backing_store()
            .get::<DateTime<Utc>>("createdDateTime")
            .copied()
    }

    /// Sets the creation timestamp; `None` removes it.
    fn set_created_date_time(&mut self, value: Option<DateTime<Utc>>) {
        self.backing_store_mut().set_optional("createdDateTime", value);
    }

    /// A human-readable description of the item.
    fn description(&self) -> Option<&str> {
        self.backing_store()
            .get::<String>("description")
            .map(String::as_str)
    }

    /// Sets the description; `None` removes it.
    fn set_description(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("description", value);
    }

    /// An eTag for the entire item (metadata plus content).
    fn e_tag(&self) -> Option<&str> {
        self.backing_store().get::<String>("eTag").map(String::as_str)
    }

    /// Sets the eTag; `None` removes it.
    fn set_e_tag(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("eTag", value);
    }

    /// The actors that last modified the item. Read-only.
    fn last_modified_by(&self) -> Option<&IdentitySet> {
        self.backing_store().get("lastModifiedBy")
    }

    /// Sets the last-modifying actors; `None` removes them.
    fn set_last_modified_by(&mut self, value: Option<IdentitySet>) {
        self.backing_store_mut().set_optional("lastModifiedBy", value);
    }

    /// When the item was last modified. Read-only.
    fn last_modified_date_time(&self) -> Option<DateTime<Utc>> {
        self.backing_store()
            .get::<DateTime<Utc>>("lastModifiedDateTime")
            .copied()
    }

    /// Sets the last-modified timestamp; `None` removes it.
    fn set_last_modified_date_time(&mut self, value: Option<DateTime<Utc>>) {
        self.backing_store_mut()
            .set_optional("lastModifiedDateTime", value);
    }

    /// The name of the item.
    fn name(&self) -> Option<&str> {
        self.backing_store().get::<String>("name").map(String::as_str)
    }

    /// Sets the name; `None` removes it.
    fn set_name(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("name", value);
    }

    /// The location of the item's parent.
    fn parent_reference(&self) -> Option<&ItemReference> {
        self.backing_store().get("parentReference")
    }

    /// Sets the parent location; `None` removes it.
    fn set_parent_reference(&mut self, value: Option<ItemReference>) {
        self.backing_store_mut().set_optional("parentReference", value);
    }

    /// A URL that displays the item in the browser. Read-only.
    fn web_url(&self) -> Option<&str> {
        self.backing_store().get::<String>("webUrl").map(String::as_str)
    }

    /// Sets the browse URL; `None` removes it.
    fn set_web_url(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("webUrl", value);
    }
}

impl BaseItemModel for BaseItem {}

impl Parsable for BaseItem {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "createdBy" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_created_by(Some(value));
                }
                Ok(true)
            }
            "createdDateTime" => {
                if let Some(value) = node.get_datetime_value()? {
                    self.set_created_date_time(Some(value));
                }
                Ok(true)
            }
            "description" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_description(Some(value));
                }
                Ok(true)
            }
            "eTag" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_e_tag(Some(value));
                }
                Ok(true)
            }
            "lastModifiedBy" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_last_modified_by(Some(value));
                }
                Ok(true)
            }
            "lastModifiedDateTime" => {
                if let Some(value) = node.get_datetime_value()? {
                    self.set_last_modified_date_time(Some(value));
                }
                Ok(true)
            }
            "name" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_name(Some(value));
                }
                Ok(true)
            }
            "parentReference" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_parent_reference(Some(value));
                }
                Ok(true)
            }
            "webUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_web_url(Some(value));
                }
                Ok(true)
            }
            _ => self.entity.deserialize_field(name, node),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_object_value("createdBy", self.created_by())?;
        writer.write_datetime_value("createdDateTime", self.created_date_time())?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("eTag", self.e_tag())?;
        writer.write_object_value("lastModifiedBy", self.last_modified_by())?;
        writer.write_datetime_value("lastModifiedDateTime", self.last_modified_date_time())?;
        writer.write_string_value("name", self.name())?;
        writer.write_object_value("parentReference", self.parent_reference())?;
        writer.write_string_value("webUrl", self.web_url())?;
        Ok(())
    }
}

impl_parsable_serde!(BaseItem);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::serialization::{AdditionalDataHolder, from_json_value, to_json_value};

    use super::*;

    #[test]
    fn test_new_presets_discriminator() {
        let item = BaseItem::new();
        assert_eq!(item.odata_type(), Some(BaseItem::ODATA_TYPE));
    }

    #[test]
    fn test_set_then_get_every_property() {
        let mut item = BaseItem::new();
        let stamp = "2016-03-21T20:01:37Z".parse::<DateTime<Utc>>().unwrap();

        item.set_id(Some("item-1".to_string()));
        item.set_name(Some("a.txt".to_string()));
        item.set_description(Some("sample".to_string()));
        item.set_e_tag(Some("\"etag\"".to_string()));
        item.set_web_url(Some("https://contoso.example/a.txt".to_string()));
        item.set_created_date_time(Some(stamp));
        item.set_last_modified_date_time(Some(stamp));

        let mut creator = IdentitySet::new();
        let mut user = super::super::Identity::new();
        user.set_display_name(Some("Alice".to_string()));
        creator.set_user(Some(user));
        item.set_created_by(Some(creator));

        let mut parent = ItemReference::new();
        parent.set_path(Some("/drive/root:".to_string()));
        item.set_parent_reference(Some(parent));

        assert_eq!(item.id(), Some("item-1"));
        assert_eq!(item.name(), Some("a.txt"));
        assert_eq!(item.description(), Some("sample"));
        assert_eq!(item.e_tag(), Some("\"etag\""));
        assert_eq!(item.web_url(), Some("https://contoso.example/a.txt"));
        assert_eq!(item.created_date_time(), Some(stamp));
        assert_eq!(item.last_modified_date_time(), Some(stamp));
        assert_eq!(
            item.created_by().and_then(|set| set.user()).and_then(|u| u.display_name()),
            Some("Alice")
        );
        assert_eq!(
            item.parent_reference().and_then(ItemReference::path),
            Some("/drive/root:")
        );
    }

    #[test]
    fn test_decode_composes_base_table() {
        // "id" is handled by the embedded entity, "name" by the item
        // envelope, "custom" by neither.
        let value = json!({
            "id": "item-1",
            "name": "a.txt",
            "custom": true
        });
        let item: BaseItem = from_json_value(&value).unwrap();
        assert_eq!(item.id(), Some("item-1"));
        assert_eq!(item.name(), Some("a.txt"));
        assert_eq!(item.additional_data().get("custom"), Some(&json!(true)));
    }

    #[test]
    fn test_round_trip_with_timestamps() {
        let value = json!({
            "@odata.type": "#microsoft.graph.baseItem",
            "createdDateTime": "2016-03-21T20:01:37Z",
            "lastModifiedDateTime": "2020-01-02T03:04:05.678Z",
            "name": "a.txt"
        });
        let item: BaseItem = from_json_value(&value).unwrap();
        assert_eq!(to_json_value(&item).unwrap(), value);
    }

    #[test]
    fn test_bad_timestamp_propagates_with_property() {
        let value = json!({"createdDateTime": "not a date"});
        let err = from_json_value::<BaseItem>(&value).unwrap_err();
        assert_eq!(err.property(), Some("createdDateTime"));
    }
}

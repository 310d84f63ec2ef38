//! The entity envelope every resource type embeds, and the
//! discriminator-driven decode of the entity family.

use serde_json::Value;

use crate::error::Result;
use crate::serialization::{
    BackedModel, JsonParseNode, JsonSerializationWriter, Parsable, impl_parsable_serde,
};
use crate::serialization::{self, AdditionalDataHolder};
use crate::store::InMemoryBackingStore;

use super::{BaseItem, Drive, DriveItem, List, ListItem, Permission, Subscription};

/// The base envelope of every resource type: an identifier plus the
/// `@odata.type` discriminator.
///
/// Like every model in this crate, `Entity` declares no fields of its
/// own; the envelope properties live in the backing store (the
/// discriminator under the `odataType` key, written to the wire under
/// the literal `@odata.type`).
#[derive(Debug, Clone)]
pub struct Entity {
    store: InMemoryBackingStore,
}

impl Entity {
    /// Creates an empty envelope with no discriminator.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for Entity {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

/// Accessors shared by every type embedding the [`Entity`] envelope.
///
/// Provided methods read and write the shared backing store, so a type
/// gets the full envelope surface from an empty `impl` block — the
/// interface-style counterpart of struct embedding.
pub trait EntityModel: BackedModel {
    /// The unique identifier for the entity. Read-only on the service.
    fn id(&self) -> Option<&str> {
        self.backing_store().get::<String>("id").map(String::as_str)
    }

    /// Sets the identifier; `None` removes it.
    fn set_id(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("id", value);
    }

    /// The `@odata.type` discriminator for the entity.
    fn odata_type(&self) -> Option<&str> {
        self.backing_store()
            .get::<String>("odataType")
            .map(String::as_str)
    }

    /// Sets the discriminator; `None` removes it.
    fn set_odata_type(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("odataType", value);
    }
}

impl EntityModel for Entity {}

impl Parsable for Entity {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "id" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_id(Some(value));
                }
                Ok(true)
            }
            "@odata.type" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_odata_type(Some(value));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("id", self.id())?;
        writer.write_string_value("@odata.type", self.odata_type())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(Entity);

/// A decoded member of the entity family.
///
/// [`AnyEntity::from_parse_node`] inspects the payload's `@odata.type`
/// and instantiates the exact concrete type; a payload with an absent
/// or unrecognized tag decodes as the plain [`Entity`] envelope, its
/// unmodeled properties preserved in additional data.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum AnyEntity {
    /// `#microsoft.graph.baseItem`
    BaseItem(BaseItem),
    /// `#microsoft.graph.drive`
    Drive(Drive),
    /// `#microsoft.graph.driveItem`
    DriveItem(DriveItem),
    /// `#microsoft.graph.list`
    List(List),
    /// `#microsoft.graph.listItem`
    ListItem(ListItem),
    /// `#microsoft.graph.permission`
    Permission(Permission),
    /// `#microsoft.graph.subscription`
    Subscription(Subscription),
    /// Fallback for an absent or unrecognized discriminator.
    Entity(Entity),
}

impl AnyEntity {
    /// Decodes the payload under `node` as the concrete type named by
    /// its `@odata.type` discriminator.
    pub fn from_parse_node(node: JsonParseNode<'_>) -> Result<Self> {
        let discriminator = match node.get_child_node("@odata.type") {
            Some(tag) => tag.get_string_value()?,
            None => None,
        };
        let decoded = match discriminator.as_deref() {
            Some("#microsoft.graph.baseItem") => {
                Self::BaseItem(serialization::from_parse_node(node)?)
            }
            Some("#microsoft.graph.drive") => Self::Drive(serialization::from_parse_node(node)?),
            Some("#microsoft.graph.driveItem") => {
                Self::DriveItem(serialization::from_parse_node(node)?)
            }
            Some("#microsoft.graph.list") => Self::List(serialization::from_parse_node(node)?),
            Some("#microsoft.graph.listItem") => {
                Self::ListItem(serialization::from_parse_node(node)?)
            }
            Some("#microsoft.graph.permission") => {
                Self::Permission(serialization::from_parse_node(node)?)
            }
            Some("#microsoft.graph.subscription") => {
                Self::Subscription(serialization::from_parse_node(node)?)
            }
            other => {
                if let Some(unknown) = other {
                    tracing::debug!(
                        discriminator = %unknown,
                        "no concrete type for discriminator, decoding as entity"
                    );
                }
                Self::Entity(serialization::from_parse_node(node)?)
            }
        };
        Ok(decoded)
    }

    /// Decodes a family member from a parsed JSON value.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        Self::from_parse_node(JsonParseNode::new(value))
    }

    /// Decodes a family member from raw JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_json_value(&value)
    }

    /// The identifier of the decoded entity, regardless of variant.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::BaseItem(m) => m.id(),
            Self::Drive(m) => m.id(),
            Self::DriveItem(m) => m.id(),
            Self::List(m) => m.id(),
            Self::ListItem(m) => m.id(),
            Self::Permission(m) => m.id(),
            Self::Subscription(m) => m.id(),
            Self::Entity(m) => m.id(),
        }
    }

    /// The discriminator of the decoded entity, regardless of variant.
    pub fn odata_type(&self) -> Option<&str> {
        match self {
            Self::BaseItem(m) => m.odata_type(),
            Self::Drive(m) => m.odata_type(),
            Self::DriveItem(m) => m.odata_type(),
            Self::List(m) => m.odata_type(),
            Self::ListItem(m) => m.odata_type(),
            Self::Permission(m) => m.odata_type(),
            Self::Subscription(m) => m.odata_type(),
            Self::Entity(m) => m.odata_type(),
        }
    }

    /// Re-encodes the decoded entity as a JSON value.
    pub fn to_json_value(&self) -> Result<Value> {
        match self {
            Self::BaseItem(m) => serialization::to_json_value(m),
            Self::Drive(m) => serialization::to_json_value(m),
            Self::DriveItem(m) => serialization::to_json_value(m),
            Self::List(m) => serialization::to_json_value(m),
            Self::ListItem(m) => serialization::to_json_value(m),
            Self::Permission(m) => serialization::to_json_value(m),
            Self::Subscription(m) => serialization::to_json_value(m),
            Self::Entity(m) => serialization::to_json_value(m),
        }
    }
}

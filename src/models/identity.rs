//! Identity complex types: who created or modified a resource.

use crate::error::Result;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, JsonParseNode, JsonSerializationWriter, Parsable,
    impl_parsable_serde,
};
use crate::store::InMemoryBackingStore;

/// A single actor: an application, device, or user.
#[derive(Debug, Clone)]
pub struct Identity {
    store: InMemoryBackingStore,
}

impl Identity {
    /// Creates an empty identity.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }

    /// The display name of the actor.
    pub fn display_name(&self) -> Option<&str> {
        self.store.get::<String>("displayName").map(String::as_str)
    }

    /// Sets the display name; `None` removes it.
    pub fn set_display_name(&mut self, value: Option<String>) {
        self.store.set_optional("displayName", value);
    }

    /// The unique identifier of the actor within its directory.
    pub fn id(&self) -> Option<&str> {
        self.store.get::<String>("id").map(String::as_str)
    }

    /// Sets the identifier; `None` removes it.
    pub fn set_id(&mut self, value: Option<String>) {
        self.store.set_optional("id", value);
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for Identity {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

impl Parsable for Identity {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "displayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_display_name(Some(value));
                }
                Ok(true)
            }
            "id" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_id(Some(value));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_string_value("id", self.id())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(Identity);

/// The set of actors associated with an event, keyed by kind.
#[derive(Debug, Clone)]
pub struct IdentitySet {
    store: InMemoryBackingStore,
}

impl IdentitySet {
    /// Creates an empty identity set.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }

    /// The application associated with the action, if any.
    pub fn application(&self) -> Option<&Identity> {
        self.store.get("application")
    }

    /// Sets the application identity; `None` removes it.
    pub fn set_application(&mut self, value: Option<Identity>) {
        self.store.set_optional("application", value);
    }

    /// The device associated with the action, if any.
    pub fn device(&self) -> Option<&Identity> {
        self.store.get("device")
    }

    /// Sets the device identity; `None` removes it.
    pub fn set_device(&mut self, value: Option<Identity>) {
        self.store.set_optional("device", value);
    }

    /// The user associated with the action, if any.
    pub fn user(&self) -> Option<&Identity> {
        self.store.get("user")
    }

    /// Sets the user identity; `None` removes it.
    pub fn set_user(&mut self, value: Option<Identity>) {
        self.store.set_optional("user", value);
    }
}

impl Default for IdentitySet {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for IdentitySet {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

impl Parsable for IdentitySet {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "application" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_application(Some(value));
                }
                Ok(true)
            }
            "device" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_device(Some(value));
                }
                Ok(true)
            }
            "user" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_user(Some(value));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_object_value("application", self.application())?;
        writer.write_object_value("device", self.device())?;
        writer.write_object_value("user", self.user())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(IdentitySet);

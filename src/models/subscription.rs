//! Change-notification subscriptions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::serialization::{
    BackedModel, JsonParseNode, JsonSerializationWriter, Parsable, impl_parsable_serde,
};
use crate::store::InMemoryBackingStore;

use super::{Entity, EntityModel};

/// A subscription delivering change notifications for a resource to a
/// notification URL.
#[derive(Debug, Clone)]
pub struct Subscription {
    entity: Entity,
}

impl Subscription {
    /// The `@odata.type` discriminator for this type.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.subscription";

    /// Creates a subscription with the discriminator preset.
    pub fn new() -> Self {
        let mut entity = Entity::new();
        entity.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self { entity }
    }

    /// Identifier of the application that created the subscription.
    /// Read-only.
    pub fn application_id(&self) -> Option<Uuid> {
        self.backing_store().get::<Uuid>("applicationId").copied()
    }

    /// Sets the creating application; `None` removes it.
    pub fn set_application_id(&mut self, value: Option<Uuid>) {
        self.backing_store_mut().set_optional("applicationId", value);
    }

    /// The change kinds the subscription fires on, comma separated
    /// (e.g. `created,updated`).
    pub fn change_type(&self) -> Option<&str> {
        self.backing_store()
            .get::<String>("changeType")
            .map(String::as_str)
    }

    /// Sets the change kinds; `None` removes them.
    pub fn set_change_type(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("changeType", value);
    }

    /// Opaque value echoed back in each notification for validation.
    pub fn client_state(&self) -> Option<&str> {
        self.backing_store()
            .get::<String>("clientState")
            .map(String::as_str)
    }

    /// Sets the client state; `None` removes it.
    pub fn set_client_state(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("clientState", value);
    }

    /// When the subscription expires and stops delivering.
    pub fn expiration_date_time(&self) -> Option<DateTime<Utc>> {
        self.backing_store()
            .get::<DateTime<Utc>>("expirationDateTime")
            .copied()
    }

    /// Sets the expiration; `None` removes it.
    pub fn set_expiration_date_time(&mut self, value: Option<DateTime<Utc>>) {
        self.backing_store_mut()
            .set_optional("expirationDateTime", value);
    }

    /// The endpoint notifications are delivered to.
    pub fn notification_url(&self) -> Option<&str> {
        self.backing_store()
            .get::<String>("notificationUrl")
            .map(String::as_str)
    }

    /// Sets the delivery endpoint; `None` removes it.
    pub fn set_notification_url(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("notificationUrl", value);
    }

    /// The resource path being watched.
    pub fn resource(&self) -> Option<&str> {
        self.backing_store()
            .get::<String>("resource")
            .map(String::as_str)
    }

    /// Sets the watched resource; `None` removes it.
    pub fn set_resource(&mut self, value: Option<String>) {
        self.backing_store_mut().set_optional("resource", value);
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for Subscription {
    fn backing_store(&self) -> &InMemoryBackingStore {
        self.entity.backing_store()
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        self.entity.backing_store_mut()
    }
}

impl EntityModel for Subscription {}

impl Parsable for Subscription {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "applicationId" => {
                if let Some(value) = node.get_guid_value()? {
                    self.set_application_id(Some(value));
                }
                Ok(true)
            }
            "changeType" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_change_type(Some(value));
                }
                Ok(true)
            }
            "clientState" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_client_state(Some(value));
                }
                Ok(true)
            }
            "expirationDateTime" => {
                if let Some(value) = node.get_datetime_value()? {
                    self.set_expiration_date_time(Some(value));
                }
                Ok(true)
            }
            "notificationUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_notification_url(Some(value));
                }
                Ok(true)
            }
            "resource" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_resource(Some(value));
                }
                Ok(true)
            }
            _ => self.entity.deserialize_field(name, node),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_guid_value("applicationId", self.application_id())?;
        writer.write_string_value("changeType", self.change_type())?;
        writer.write_string_value("clientState", self.client_state())?;
        writer.write_datetime_value("expirationDateTime", self.expiration_date_time())?;
        writer.write_string_value("notificationUrl", self.notification_url())?;
        writer.write_string_value("resource", self.resource())?;
        Ok(())
    }
}

impl_parsable_serde!(Subscription);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::serialization::{from_json_value, to_json_value};

    use super::*;

    #[test]
    fn test_round_trip() {
        let value = json!({
            "@odata.type": "#microsoft.graph.subscription",
            "id": "sub-1",
            "applicationId": "f2f10c15-0f39-4b06-8dfa-8a5f8e4a7b57",
            "changeType": "created,updated",
            "clientState": "secret",
            "expirationDateTime": "2026-09-01T00:00:00Z",
            "notificationUrl": "https://contoso.example/hook",
            "resource": "/drives/b!x/root"
        });
        let subscription: Subscription = from_json_value(&value).unwrap();
        assert_eq!(subscription.change_type(), Some("created,updated"));
        assert_eq!(
            subscription.application_id().map(|id| id.to_string()),
            Some("f2f10c15-0f39-4b06-8dfa-8a5f8e4a7b57".to_string())
        );
        assert_eq!(to_json_value(&subscription).unwrap(), value);
    }

    #[test]
    fn test_guid_set_then_get() {
        let id = Uuid::new_v4();
        let mut subscription = Subscription::new();
        subscription.set_application_id(Some(id));
        assert_eq!(subscription.application_id(), Some(id));
    }

    #[test]
    fn test_invalid_guid_names_property() {
        let value = json!({"applicationId": "not-a-guid"});
        let err = from_json_value::<Subscription>(&value).unwrap_err();
        assert_eq!(err.property(), Some("applicationId"));
    }
}

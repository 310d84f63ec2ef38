//! The top-level container for files: a user's OneDrive or a document
//! library.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};
use crate::serialization::{
    AdditionalDataHolder, BackedModel, JsonParseNode, JsonSerializationWriter, Parsable, WireEnum,
    impl_parsable_serde,
};
use crate::store::InMemoryBackingStore;

use super::{BaseItem, BaseItemModel, EntityModel, IdentitySet};

/// The kind of a drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveType {
    /// A personal OneDrive.
    Personal,
    /// A OneDrive for Business.
    Business,
    /// A SharePoint document library.
    DocumentLibrary,
}

impl DriveType {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DriveType::Personal => "personal",
            DriveType::Business => "business",
            DriveType::DocumentLibrary => "documentLibrary",
        }
    }
}

impl WireEnum for DriveType {
    fn as_wire(&self) -> &'static str {
        self.as_str()
    }

    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "personal" => Some(DriveType::Personal),
            "business" => Some(DriveType::Business),
            "documentLibrary" => Some(DriveType::DocumentLibrary),
            _ => None,
        }
    }
}

impl fmt::Display for DriveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriveType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_wire(s).ok_or_else(|| {
            Error::new(ErrorKind::InvalidValue, format!("{s:?} is not a drive type"))
        })
    }
}

/// A drive: the container all items of one user or library live in.
#[derive(Debug, Clone)]
pub struct Drive {
    base: BaseItem,
}

impl Drive {
    /// The `@odata.type` discriminator for this type.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.drive";

    /// Creates a drive with the discriminator preset.
    pub fn new() -> Self {
        let mut base = BaseItem::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self { base }
    }

    /// Describes the kind of drive. Read-only.
    pub fn drive_type(&self) -> Option<DriveType> {
        self.backing_store().get::<DriveType>("driveType").copied()
    }

    /// Sets the drive kind; `None` removes it.
    pub fn set_drive_type(&mut self, value: Option<DriveType>) {
        self.backing_store_mut().set_optional("driveType", value);
    }

    /// The user account that owns the drive. Read-only.
    pub fn owner(&self) -> Option<&IdentitySet> {
        self.backing_store().get("owner")
    }

    /// Sets the owner; `None` removes it.
    pub fn set_owner(&mut self, value: Option<IdentitySet>) {
        self.backing_store_mut().set_optional("owner", value);
    }

    /// Information about the drive's storage quota. Read-only.
    pub fn quota(&self) -> Option<&Quota> {
        self.backing_store().get("quota")
    }

    /// Sets the quota; `None` removes it.
    pub fn set_quota(&mut self, value: Option<Quota>) {
        self.backing_store_mut().set_optional("quota", value);
    }
}

impl Default for Drive {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for Drive {
    fn backing_store(&self) -> &InMemoryBackingStore {
        self.base.backing_store()
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        self.base.backing_store_mut()
    }
}

impl EntityModel for Drive {}
impl BaseItemModel for Drive {}

impl Parsable for Drive {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "driveType" => {
                if let Some(value) = node.get_enum_value()? {
                    self.set_drive_type(Some(value));
                }
                Ok(true)
            }
            "owner" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_owner(Some(value));
                }
                Ok(true)
            }
            "quota" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_quota(Some(value));
                }
                Ok(true)
            }
            _ => self.base.deserialize_field(name, node),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize(writer)?;
        writer.write_enum_value("driveType", self.drive_type())?;
        writer.write_object_value("owner", self.owner())?;
        writer.write_object_value("quota", self.quota())?;
        Ok(())
    }
}

impl_parsable_serde!(Drive);

/// Storage quota state of a drive.
#[derive(Debug, Clone)]
pub struct Quota {
    store: InMemoryBackingStore,
}

impl Quota {
    /// Creates an empty quota facet.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }

    /// Total space consumed by files in the recycle bin, in bytes.
    pub fn deleted(&self) -> Option<i64> {
        self.store.get::<i64>("deleted").copied()
    }

    /// Sets the recycle-bin usage; `None` removes it.
    pub fn set_deleted(&mut self, value: Option<i64>) {
        self.store.set_optional("deleted", value);
    }

    /// Total space remaining before hitting the quota, in bytes.
    pub fn remaining(&self) -> Option<i64> {
        self.store.get::<i64>("remaining").copied()
    }

    /// Sets the remaining space; `None` removes it.
    pub fn set_remaining(&mut self, value: Option<i64>) {
        self.store.set_optional("remaining", value);
    }

    /// Enumeration value indicating the state of the storage space.
    pub fn state(&self) -> Option<&str> {
        self.store.get::<String>("state").map(String::as_str)
    }

    /// Sets the quota state; `None` removes it.
    pub fn set_state(&mut self, value: Option<String>) {
        self.store.set_optional("state", value);
    }

    /// Total allowed storage space, in bytes.
    pub fn total(&self) -> Option<i64> {
        self.store.get::<i64>("total").copied()
    }

    /// Sets the total space; `None` removes it.
    pub fn set_total(&mut self, value: Option<i64>) {
        self.store.set_optional("total", value);
    }

    /// Total space used, in bytes.
    pub fn used(&self) -> Option<i64> {
        self.store.get::<i64>("used").copied()
    }

    /// Sets the used space; `None` removes it.
    pub fn set_used(&mut self, value: Option<i64>) {
        self.store.set_optional("used", value);
    }
}

impl Default for Quota {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for Quota {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

impl Parsable for Quota {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "deleted" => {
                if let Some(value) = node.get_i64_value()? {
                    self.set_deleted(Some(value));
                }
                Ok(true)
            }
            "remaining" => {
                if let Some(value) = node.get_i64_value()? {
                    self.set_remaining(Some(value));
                }
                Ok(true)
            }
            "state" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_state(Some(value));
                }
                Ok(true)
            }
            "total" => {
                if let Some(value) = node.get_i64_value()? {
                    self.set_total(Some(value));
                }
                Ok(true)
            }
            "used" => {
                if let Some(value) = node.get_i64_value()? {
                    self.set_used(Some(value));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_i64_value("deleted", self.deleted())?;
        writer.write_i64_value("remaining", self.remaining())?;
        writer.write_string_value("state", self.state())?;
        writer.write_i64_value("total", self.total())?;
        writer.write_i64_value("used", self.used())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(Quota);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::serialization::{from_json_value, to_json_value};

    use super::*;

    #[test]
    fn test_drive_type_wire_forms() {
        assert_eq!(DriveType::Personal.as_str(), "personal");
        assert_eq!(DriveType::from_wire("documentLibrary"), Some(DriveType::DocumentLibrary));
        assert_eq!(DriveType::from_wire("network"), None);
        assert_eq!("business".parse::<DriveType>().unwrap(), DriveType::Business);
        assert!("network".parse::<DriveType>().is_err());
    }

    #[test]
    fn test_drive_round_trip() {
        let value = json!({
            "@odata.type": "#microsoft.graph.drive",
            "id": "drv-1",
            "driveType": "business",
            "name": "OneDrive",
            "owner": {"user": {"displayName": "Alice", "id": "u-1"}},
            "quota": {"remaining": 100, "state": "normal", "total": 150, "used": 50}
        });
        let drive: Drive = from_json_value(&value).unwrap();
        assert_eq!(drive.drive_type(), Some(DriveType::Business));
        assert_eq!(drive.quota().and_then(Quota::used), Some(50));
        assert_eq!(
            drive.owner().and_then(|o| o.user()).and_then(|u| u.display_name()),
            Some("Alice")
        );
        assert_eq!(to_json_value(&drive).unwrap(), value);
    }

    #[test]
    fn test_unknown_drive_type_is_invalid_value() {
        let value = json!({"driveType": "floppy"});
        let err = from_json_value::<Drive>(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.property(), Some("driveType"));
    }

    #[test]
    fn test_quota_set_then_get() {
        let mut quota = Quota::new();
        quota.set_total(Some(150));
        quota.set_used(Some(50));
        quota.set_state(Some("normal".to_string()));
        assert_eq!(quota.total(), Some(150));
        assert_eq!(quota.used(), Some(50));
        assert_eq!(quota.state(), Some("normal"));
    }
}

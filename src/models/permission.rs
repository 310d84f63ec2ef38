//! Sharing permissions granted on an item.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::{Error, ErrorKind, Result};
use crate::serialization::{
    AdditionalDataHolder, BackedModel, JsonParseNode, JsonSerializationWriter, Parsable, WireEnum,
    impl_parsable_serde,
};
use crate::store::InMemoryBackingStore;

use super::{Entity, EntityModel, IdentitySet};

/// The kind of access a sharing link grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    /// Recipients can view the item.
    View,
    /// Recipients can edit the item.
    Edit,
    /// The link is suitable for embedding in a host page.
    Embed,
}

impl LinkType {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::View => "view",
            LinkType::Edit => "edit",
            LinkType::Embed => "embed",
        }
    }
}

impl WireEnum for LinkType {
    fn as_wire(&self) -> &'static str {
        self.as_str()
    }

    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "view" => Some(LinkType::View),
            "edit" => Some(LinkType::Edit),
            "embed" => Some(LinkType::Embed),
            _ => None,
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_wire(s)
            .ok_or_else(|| Error::new(ErrorKind::InvalidValue, format!("{s:?} is not a link type")))
    }
}

/// Who a sharing link is usable by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkScope {
    /// Anyone holding the link.
    Anonymous,
    /// Members of the owning organization.
    Organization,
    /// Only the users the link was issued to.
    Users,
}

impl LinkScope {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkScope::Anonymous => "anonymous",
            LinkScope::Organization => "organization",
            LinkScope::Users => "users",
        }
    }
}

impl WireEnum for LinkScope {
    fn as_wire(&self) -> &'static str {
        self.as_str()
    }

    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "anonymous" => Some(LinkScope::Anonymous),
            "organization" => Some(LinkScope::Organization),
            "users" => Some(LinkScope::Users),
            _ => None,
        }
    }
}

impl fmt::Display for LinkScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_wire(s)
            .ok_or_else(|| Error::new(ErrorKind::InvalidValue, format!("{s:?} is not a link scope")))
    }
}

/// A permission granted on an item to a set of recipients.
#[derive(Debug, Clone)]
pub struct Permission {
    entity: Entity,
}

impl Permission {
    /// The `@odata.type` discriminator for this type.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.permission";

    /// Creates a permission with the discriminator preset.
    pub fn new() -> Self {
        let mut entity = Entity::new();
        entity.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self { entity }
    }

    /// When the permission stops being valid.
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

    /// The recipients the permission was granted to. Read-only.
    pub fn granted_to(&self) -> Option<&IdentitySet> {
        self.backing_store().get("grantedTo")
    }

    /// Sets the recipients; `None` removes them.
    pub fn set_granted_to(&mut self, value: Option<IdentitySet>) {
        self.backing_store_mut().set_optional("grantedTo", value);
    }

    /// The sharing link backing this permission, if link-based.
    pub fn link(&self) -> Option<&SharingLink> {
        self.backing_store().get("link")
    }

    /// Sets the sharing link; `None` removes it.
    pub fn set_link(&mut self, value: Option<SharingLink>) {
        self.backing_store_mut().set_optional("link", value);
    }

    /// The type of permission (e.g. `read`, `write`).
    pub fn roles(&self) -> Option<&[String]> {
        self.backing_store()
            .get::<Vec<String>>("roles")
            .map(Vec::as_slice)
    }

    /// Sets the roles; `None` removes them.
    pub fn set_roles(&mut self, value: Option<Vec<String>>) {
        self.backing_store_mut().set_optional("roles", value);
    }
}

impl Default for Permission {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for Permission {
    fn backing_store(&self) -> &InMemoryBackingStore {
        self.entity.backing_store()
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        self.entity.backing_store_mut()
    }
}

impl EntityModel for Permission {}

impl Parsable for Permission {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "expirationDateTime" => {
                if let Some(value) = node.get_datetime_value()? {
                    self.set_expiration_date_time(Some(value));
                }
                Ok(true)
            }
            "grantedTo" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_granted_to(Some(value));
                }
                Ok(true)
            }
            "link" => {
                if let Some(value) = node.get_object_value()? {
                    self.set_link(Some(value));
                }
                Ok(true)
            }
            "roles" => {
                if let Some(value) = node.get_collection_of_primitive_values()? {
                    self.set_roles(Some(value));
                }
                Ok(true)
            }
            _ => self.entity.deserialize_field(name, node),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_datetime_value("expirationDateTime", self.expiration_date_time())?;
        writer.write_object_value("grantedTo", self.granted_to())?;
        writer.write_object_value("link", self.link())?;
        writer.write_collection_of_primitive_values("roles", self.roles())?;
        Ok(())
    }
}

impl_parsable_serde!(Permission);

/// Details of a link-based sharing permission.
#[derive(Debug, Clone)]
pub struct SharingLink {
    store: InMemoryBackingStore,
}

impl SharingLink {
    /// Creates an empty sharing link facet.
    pub fn new() -> Self {
        Self {
            store: InMemoryBackingStore::new(),
        }
    }

    /// The audience the link is usable by.
    pub fn scope(&self) -> Option<LinkScope> {
        self.store.get::<LinkScope>("scope").copied()
    }

    /// Sets the audience; `None` removes it.
    pub fn set_scope(&mut self, value: Option<LinkScope>) {
        self.store.set_optional("scope", value);
    }

    /// The kind of access the link grants.
    pub fn link_type(&self) -> Option<LinkType> {
        self.store.get::<LinkType>("type").copied()
    }

    /// Sets the access kind; `None` removes it.
    pub fn set_link_type(&mut self, value: Option<LinkType>) {
        self.store.set_optional("type", value);
    }

    /// The URL that opens the item in the browser.
    pub fn web_url(&self) -> Option<&str> {
        self.store.get::<String>("webUrl").map(String::as_str)
    }

    /// Sets the URL; `None` removes it.
    pub fn set_web_url(&mut self, value: Option<String>) {
        self.store.set_optional("webUrl", value);
    }
}

impl Default for SharingLink {
    fn default() -> Self {
        Self::new()
    }
}

impl BackedModel for SharingLink {
    fn backing_store(&self) -> &InMemoryBackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut InMemoryBackingStore {
        &mut self.store
    }
}

impl Parsable for SharingLink {
    fn deserialize_field(&mut self, name: &str, node: JsonParseNode<'_>) -> Result<bool> {
        match name {
            "scope" => {
                if let Some(value) = node.get_enum_value()? {
                    self.set_scope(Some(value));
                }
                Ok(true)
            }
            "type" => {
                if let Some(value) = node.get_enum_value()? {
                    self.set_link_type(Some(value));
                }
                Ok(true)
            }
            "webUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.set_web_url(Some(value));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_enum_value("scope", self.scope())?;
        writer.write_enum_value("type", self.link_type())?;
        writer.write_string_value("webUrl", self.web_url())?;
        writer.write_additional_data(self.additional_data())?;
        Ok(())
    }
}

impl_parsable_serde!(SharingLink);

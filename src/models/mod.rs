//! The typed object models.
//!
//! Every resource type follows the same shape: a struct with no fields
//! of its own (state lives in the backing store), getter/setter pairs
//! per wire property, a [`Parsable`](crate::serialization::Parsable)
//! implementation routing wire properties in and out, and — for entity
//! types — an envelope trait ([`EntityModel`], [`BaseItemModel`])
//! promoting the embedded base type's accessors.
//!
//! Single inheritance from the wire schema maps to struct embedding:
//! [`DriveItem`] embeds [`BaseItem`] embeds [`Entity`], all three
//! reading one shared store.
//!
//! Polymorphic payloads go through [`AnyEntity`], which dispatches on
//! the `@odata.type` discriminator.

mod base_item;
mod drive;
mod drive_item;
mod entity;
mod identity;
mod item_reference;
mod list;
mod permission;
mod subscription;

pub use base_item::{BaseItem, BaseItemModel};
pub use drive::{Drive, DriveType, Quota};
pub use drive_item::{Deleted, DriveItem, File, Folder, Hashes};
pub use entity::{AnyEntity, Entity, EntityModel};
pub use identity::{Identity, IdentitySet};
pub use item_reference::ItemReference;
pub use list::{ContentTypeInfo, List, ListItem};
pub use permission::{LinkScope, LinkType, Permission, SharingLink};
pub use subscription::Subscription;

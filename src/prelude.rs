//! Prelude module for convenient imports.
//!
//! ```rust
//! use graph_models::prelude::*;
//! ```
//!
//! This provides access to:
//! - The model types and their envelope traits
//! - The serialization entry points
//! - Error types

pub use crate::{
    error::{Error, ErrorKind, Result},
    models::{
        AnyEntity, BaseItem, BaseItemModel, ContentTypeInfo, Deleted, Drive, DriveItem, DriveType,
        Entity, EntityModel, File, Folder, Hashes, Identity, IdentitySet, ItemReference,
        LinkScope, LinkType, List, ListItem, Permission, Quota, SharingLink, Subscription,
    },
    serialization::{
        self, AdditionalData, AdditionalDataHolder, BackedModel, Parsable, WireEnum,
    },
    store::InMemoryBackingStore,
};

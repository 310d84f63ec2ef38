//! # graph-models
//!
//! Typed Microsoft Graph-style object models with forward-compatible
//! JSON serialization.
//!
//! ## Quick Start
//!
//! ```rust
//! use graph_models::prelude::*;
//!
//! fn main() -> graph_models::Result<()> {
//!     let payload =
//!         br#"{"@odata.type":"#microsoft.graph.driveItem","name":"a.txt","size":42}"#;
//!
//!     // Decode directly into a known type...
//!     let item: DriveItem = serialization::from_json_slice(payload)?;
//!     assert_eq!(item.name(), Some("a.txt"));
//!     assert_eq!(item.size(), Some(42));
//!
//!     // ...or let the discriminator pick the concrete type.
//!     let any = AnyEntity::from_json_slice(payload)?;
//!     assert!(matches!(any, AnyEntity::DriveItem(_)));
//!
//!     // Round trips reproduce the payload, discriminator included.
//!     let bytes = serialization::to_json_vec(&item)?;
//!     assert!(!bytes.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Backing store**: models declare no fields; every property lives
//!   in a string-keyed [`store::InMemoryBackingStore`], which also
//!   tracks post-decode changes for minimal re-serialization.
//! - **Additional data**: wire properties the models don't know are
//!   captured verbatim and re-emitted, so newer service payloads
//!   survive a round trip through an older client.
//! - **Discriminator**: the `@odata.type` tag selects the concrete
//!   type at decode time; an unrecognized tag falls back to the base
//!   envelope rather than failing.
//! - **Envelope traits**: [`models::EntityModel`] and
//!   [`models::BaseItemModel`] promote the embedded base type's
//!   accessors, mirroring the wire schema's single inheritance.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod error;
pub mod models;
pub mod serialization;
pub mod store;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use error::{Error, ErrorKind, Result};
pub use models::{
    AnyEntity, BaseItem, BaseItemModel, Drive, DriveItem, Entity, EntityModel, List, ListItem,
    Permission, Subscription,
};
pub use serialization::{AdditionalData, AdditionalDataHolder, BackedModel, Parsable};
pub use store::InMemoryBackingStore;

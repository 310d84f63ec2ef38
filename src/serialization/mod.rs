//! The wire layer: parse nodes, serialization writers, and the traits
//! connecting them to model types.
//!
//! The flow mirrors the shape of the models themselves:
//!
//! ```text
//! bytes ── serde_json ──▶ JsonParseNode ── Parsable::deserialize_field ──▶ backing store
//! backing store ── Parsable::serialize ──▶ JsonSerializationWriter ──▶ bytes
//! ```
//!
//! Decoding walks every key of the payload object. Keys a model knows
//! are routed through its field table ([`Parsable::deserialize_field`]);
//! everything else is captured verbatim into the additional-data bag and
//! re-emitted on the way out.
//!
//! ## Example
//!
//! ```rust
//! use graph_models::models::{BaseItemModel, DriveItem};
//! use graph_models::serialization;
//!
//! let payload = br#"{"name":"a.txt","size":42,"future":"kept"}"#;
//! let item: DriveItem = serialization::from_json_slice(payload)?;
//! assert_eq!(item.name(), Some("a.txt"));
//!
//! let out = serialization::to_json_value(&item)?;
//! assert_eq!(out["future"], "kept");
//! # Ok::<(), graph_models::Error>(())
//! ```

mod parsable;
mod parse_node;
mod writer;

pub use parsable::{
    AdditionalData, AdditionalDataHolder, BackedModel, Parsable, WireEnum, from_json_slice,
    from_json_value, from_parse_node, to_json_value, to_json_vec,
};
pub(crate) use parsable::impl_parsable_serde;
pub use parse_node::{JsonParseNode, JsonPrimitive};
pub use writer::JsonSerializationWriter;

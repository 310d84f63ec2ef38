//! Error types for the graph-models crate.
//!
//! All decode and encode failures surface as a single [`Error`] carrying
//! an [`ErrorKind`] for categorization, the offending wire property when
//! known, and the underlying codec error as a source.
//!
//! Decode errors are propagated upward unchanged — there is no recovery
//! or retry at this layer.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for model (de)serialization.
pub type Result<T> = std::result::Result<T, Error>;

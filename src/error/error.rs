//! Main error type for model (de)serialization.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::ErrorKind;

/// The error type for all decode and encode operations.
///
/// `Error` carries enough context to locate a failure inside a payload:
/// - [`kind()`](Error::kind): categorization for `match` statements
/// - [`property()`](Error::property): the wire property being decoded
/// - [`source()`](StdError::source): the underlying codec error
///
/// ## Example
///
/// ```rust
/// use graph_models::{Error, ErrorKind};
///
/// fn report(err: &Error) {
///     match err.kind() {
///         ErrorKind::UnexpectedType | ErrorKind::InvalidValue => {
///             eprintln!("bad payload at {:?}: {}", err.property(), err);
///         }
///         _ => eprintln!("decode failed: {}", err),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    /// The error category.
    kind: ErrorKind,

    /// Human-readable error message.
    message: Cow<'static, str>,

    /// The wire property name being decoded when the error occurred.
    property: Option<String>,

    /// The underlying error, if any.
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_models::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::UnexpectedType, "expected a string");
    /// assert_eq!(err.kind(), ErrorKind::UnexpectedType);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            property: None,
            source: None,
        }
    }

    /// Attaches the wire property name the error occurred under.
    #[must_use]
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Attaches an underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the wire property name being decoded when the error
    /// occurred, if known.
    #[inline]
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    /// Returns the human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.property {
            Some(property) => write!(f, "{} (property {:?}): {}", self.kind, property, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorKind::Malformed, "invalid json document").with_source(err)
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::new(ErrorKind::InvalidValue, "invalid rfc 3339 timestamp").with_source(err)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::new(ErrorKind::InvalidValue, "invalid base64 content").with_source(err)
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Self {
        Error::new(ErrorKind::InvalidValue, "invalid guid").with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let err = Error::new(ErrorKind::InvalidValue, "bad value");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.message(), "bad value");
        assert!(err.property().is_none());
    }

    #[test]
    fn test_with_property() {
        let err = Error::new(ErrorKind::UnexpectedType, "expected a number").with_property("size");
        assert_eq!(err.property(), Some("size"));
        let display = err.to_string();
        assert!(display.contains("size"));
        assert!(display.contains("expected a number"));
    }

    #[test]
    fn test_source_chain() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert_eq!(err.kind(), ErrorKind::Malformed);
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn test_from_chrono() {
        let parse_err = chrono::DateTime::parse_from_rfc3339("not a date").unwrap_err();
        let err = Error::from(parse_err);
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_from_uuid() {
        let uuid_err = "zzz".parse::<uuid::Uuid>().unwrap_err();
        let err = Error::from(uuid_err);
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_display_without_property() {
        let err = Error::new(ErrorKind::Malformed, "truncated input");
        assert_eq!(err.to_string(), "malformed document: truncated input");
    }
}

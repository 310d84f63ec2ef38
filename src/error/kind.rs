//! Error kind enumeration for categorizing (de)serialization errors.

/// Categorization of (de)serialization errors.
///
/// This enum provides a stable interface for matching on error types.
///
/// | ErrorKind        | Meaning                                        |
/// |------------------|------------------------------------------------|
/// | `Malformed`      | The document is not valid JSON                 |
/// | `UnexpectedType` | A property holds the wrong JSON type           |
/// | `InvalidValue`   | A property value fails domain decoding         |
/// | `Serialization`  | Writing a document failed                      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input is not a syntactically valid JSON document, or the root
    /// is not the expected JSON object.
    #[error("malformed document")]
    Malformed,

    /// A property holds a JSON value of the wrong type (e.g. a string
    /// where a number is expected).
    #[error("unexpected value type")]
    UnexpectedType,

    /// A property value is the right JSON type but fails domain decoding:
    /// bad base64, an unparseable timestamp or GUID, or an enum string
    /// with no known variant.
    #[error("invalid property value")]
    InvalidValue,

    /// Producing the output document failed.
    #[error("serialization failed")]
    Serialization,
}

impl ErrorKind {
    /// Returns `true` if this kind originates while reading a document.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            ErrorKind::Malformed | ErrorKind::UnexpectedType | ErrorKind::InvalidValue
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ErrorKind::Malformed.to_string(), "malformed document");
        assert_eq!(ErrorKind::UnexpectedType.to_string(), "unexpected value type");
        assert_eq!(ErrorKind::InvalidValue.to_string(), "invalid property value");
        assert_eq!(ErrorKind::Serialization.to_string(), "serialization failed");
    }

    #[test]
    fn test_is_decode() {
        assert!(ErrorKind::Malformed.is_decode());
        assert!(ErrorKind::UnexpectedType.is_decode());
        assert!(ErrorKind::InvalidValue.is_decode());
        assert!(!ErrorKind::Serialization.is_decode());
    }
}

//! Domain errors for the tag freshness index.

use thiserror::Error;

/// Domain-level errors raised by ports and adapters.
///
/// The index itself never surfaces these to its callers; it degrades to an
/// empty or uncached result instead. They are still returned by the ports so
/// adapters and the CLI can report what went wrong.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The content store could not be queried.
    #[error("Content store error: {0}")]
    ContentStore(String),

    /// The cache store rejected a read or write.
    #[error("Cache store error: {0}")]
    CacheStore(String),

    /// A SQL statement failed outside the content store.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result alias for port and adapter operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::ContentStore("connection reset".to_string());
        assert_eq!(err.to_string(), "Content store error: connection reset");

        let err = DomainError::CacheStore("disk full".to_string());
        assert_eq!(err.to_string(), "Cache store error: disk full");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let domain: DomainError = err.into();
        assert!(matches!(domain, DomainError::SerializationError(_)));
    }
}

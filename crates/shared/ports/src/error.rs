use thiserror::Error;

/// Errors surfaced by an invest API implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The requested candle period is longer than the provider allows for
    /// the interval. Recoverable by narrowing the window.
    #[error("Maximum request period exceeded: {0}")]
    RangeExceeded(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {code}: {message}")]
    Api { code: i32, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Whether narrowing the request window can fix this error
    pub fn is_range_exceeded(&self) -> bool {
        matches!(self, ApiError::RangeExceeded(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication(_))
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by a cache store
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O failed for '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache entry '{name}' is corrupt: {reason}")]
    Corrupt { name: String, reason: String },

    #[error("Failed to serialize '{name}': {reason}")]
    Serialization { name: String, reason: String },
}

impl CacheError {
    pub fn io(name: impl Into<String>, source: std::io::Error) -> Self {
        CacheError::Io {
            name: name.into(),
            source,
        }
    }
}

pub type CacheResult<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_exceeded_is_the_only_narrowable_error() {
        assert!(ApiError::RangeExceeded("30014".into()).is_range_exceeded());
        assert!(!ApiError::Timeout.is_range_exceeded());
        assert!(
            !ApiError::Api {
                code: 3,
                message: "30014".into()
            }
            .is_range_exceeded()
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Authentication("40003".into());
        assert!(err.is_authentication());
        assert_eq!(err.to_string(), "Authentication failed: 40003");

        let err = CacheError::Corrupt {
            name: "shares".into(),
            reason: "EOF".into(),
        };
        assert_eq!(err.to_string(), "Cache entry 'shares' is corrupt: EOF");
    }
}

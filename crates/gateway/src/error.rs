//! Error types for the gateway crate

use folio_ports::ApiError;
use serde::Deserialize;
use thiserror::Error;

/// Provider error code for "maximum request period exceeded"
pub const RANGE_EXCEEDED_CODE: &str = "30014";

/// Provider error code for a missing or invalid token
pub const AUTHENTICATION_CODE: &str = "40003";

/// gRPC status code UNAUTHENTICATED
const GRPC_UNAUTHENTICATED: i32 = 16;

/// Error payload of the REST gateway
///
/// `code` is the gRPC status, `message` carries the provider's own error
/// code and `description` the human-readable text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub code: i32,
    pub message: String,
    pub description: String,
}

/// REST transport errors
#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {body:?}")]
    Api { status: u16, body: ErrorBody },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Map a provider error payload onto the port error taxonomy
pub fn classify_error(status: u16, body: &ErrorBody) -> ApiError {
    let description = if body.description.is_empty() {
        body.message.clone()
    } else {
        body.description.clone()
    };

    if body.message == RANGE_EXCEEDED_CODE
        || body.description.contains("maximum request period")
    {
        return ApiError::RangeExceeded(description);
    }

    if status == 401 || body.code == GRPC_UNAUTHENTICATED || body.message == AUTHENTICATION_CODE {
        return ApiError::Authentication(description);
    }

    ApiError::Api {
        code: body.code,
        message: description,
    }
}

/// Convert infrastructure RestError to port ApiError
impl From<RestError> for ApiError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Http(e) if e.is_timeout() => ApiError::Timeout,
            RestError::Http(e) => ApiError::Network(e.to_string()),
            RestError::Api { status, body } => classify_error(status, &body),
            RestError::Parse(msg) => ApiError::Parse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(code: i32, message: &str, description: &str) -> ErrorBody {
        ErrorBody {
            code,
            message: message.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_range_exceeded_by_code() {
        let err = classify_error(
            400,
            &body(
                3,
                "30014",
                "the maximum request period for the given candle interval has been exceeded",
            ),
        );
        assert!(err.is_range_exceeded());
        assert!(err.to_string().contains("maximum request period"));
    }

    #[test]
    fn test_range_exceeded_by_description_only() {
        let err = classify_error(400, &body(3, "", "maximum request period exceeded"));
        assert!(err.is_range_exceeded());
    }

    #[test]
    fn test_authentication() {
        assert!(classify_error(401, &ErrorBody::default()).is_authentication());
        assert!(classify_error(400, &body(16, "40003", "")).is_authentication());
        assert!(classify_error(200, &body(0, "40003", "token invalid")).is_authentication());
    }

    #[test]
    fn test_other_errors_are_opaque() {
        let err = classify_error(400, &body(3, "30008", "instrument not found"));
        assert_eq!(
            err,
            ApiError::Api {
                code: 3,
                message: "instrument not found".to_string()
            }
        );
    }

    #[test]
    fn test_parse_error_maps_through() {
        let err: ApiError = RestError::Parse("bad json".into()).into();
        assert_eq!(err, ApiError::Parse("bad json".into()));
    }
}

//! API error type.
//!
//! Every non-success HTTP status is treated uniformly as a failure; there is
//! no status-code-specific branching anywhere in the client.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The request never produced a response (DNS, CORS, connection reset...).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code() {
        let err = ApiError::Status(502);
        assert_eq!(err.to_string(), "HTTP 502");
    }
}

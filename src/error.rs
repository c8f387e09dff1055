//! Error types for the transport and the instance adapter
use std::time::Duration;

use thiserror::Error;

use crate::cloudprovider::InstanceStatus;

/// Errors raised by the REST transport
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failures
    #[error("Network error: {0}")]
    Network(String),

    /// Azure answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        /// Azure error code from the `error` envelope, when present
        code: Option<String>,
        message: String,
    },

    /// The response body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The request could not be built from the given input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Build an `Http` error from a status and a raw body, decoding the
    /// `{"error": {"code": .., "message": ..}}` envelope when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let envelope = parsed.as_ref().and_then(|v| v.get("error"));
        let code = envelope
            .and_then(|e| e.get("code"))
            .and_then(|c| c.as_str())
            .map(|s| s.to_string());
        let message = envelope
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    "empty response body".to_string()
                } else {
                    body.trim().to_string()
                }
            });
        ApiError::Http { status, code, message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

/// Errors surfaced by the classic instance adapter
#[derive(Debug, Error)]
pub enum CloudError {
    /// The operation has no meaning for classic instances
    #[error("Operation not supported: {0}")]
    NotSupported(&'static str),

    /// The operation could exist but has not been built
    #[error("Operation not implemented: {0}")]
    NotImplemented(&'static str),

    /// A wait-for-status loop did not converge before its deadline
    #[error("Timeout waiting for {resource} to become {expected} (waited {elapsed:?})")]
    Timeout {
        resource: String,
        expected: InstanceStatus,
        elapsed: Duration,
    },

    /// A remote call failed
    #[error("{operation}: {source}")]
    Remote {
        operation: String,
        #[source]
        source: ApiError,
    },
}

impl CloudError {
    pub fn remote(operation: impl Into<String>, source: ApiError) -> Self {
        CloudError::Remote {
            operation: operation.into(),
            source,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, CloudError::Timeout { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
pub type CloudResult<T> = Result<T, CloudError>;

/// Attach an operation name to a transport result.
pub trait ApiResultExt<T> {
    fn context(self, operation: &str) -> CloudResult<T>;
}

impl<T> ApiResultExt<T> for ApiResult<T> {
    fn context(self, operation: &str) -> CloudResult<T> {
        self.map_err(|e| CloudError::remote(operation, e))
    }
}

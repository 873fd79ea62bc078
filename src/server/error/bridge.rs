use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

/// Failures of the hand-off between request threads and the gateway executor.
///
/// None of these say anything about whether the submitted work itself succeeded,
/// only that the caller could not observe its outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The caller stopped waiting after the configured timeout.
    ///
    /// The unit of work keeps running on the executor and its result is discarded.
    /// Results in a 504 Gateway Timeout response.
    #[error("Timed out after {0:?} waiting for the Discord gateway")]
    Timeout(Duration),

    /// The gateway executor thread has stopped and accepts no more work.
    ///
    /// Results in a 503 Service Unavailable response.
    #[error("The Discord gateway executor is not running")]
    ExecutorUnavailable,

    /// The executor is alive but dropped this unit of work before it produced a
    /// result, typically because the work panicked.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("The submitted operation was aborted before completing")]
    WorkAborted,
}

impl BridgeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::ExecutorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::WorkAborted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts bridge errors into HTTP responses.
///
/// # Returns
/// - 504 Gateway Timeout - For `Timeout`
/// - 503 Service Unavailable - For `ExecutorUnavailable`
/// - 500 Internal Server Error - For `WorkAborted`, logged at error level
impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self);
            return (status, "Internal server error").into_response();
        }

        (status, self.to_string()).into_response()
    }
}

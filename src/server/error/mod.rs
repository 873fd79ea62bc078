//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in request handlers.
//!
//! Every error is recovered at the request boundary. Client-facing bodies are short
//! plain-text messages; anything unanticipated is logged and reported as a generic 500.

pub mod bridge;
pub mod config;
pub mod gateway;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{bridge::BridgeError, config::ConfigError, gateway::GatewayError};

/// Message returned to clients in place of internal error details.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `GatewayError` handle their own
/// response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Gateway cache lookup or moderation failure.
    ///
    /// Delegates to `GatewayError::into_response()` for status code mapping
    /// (403 Forbidden, 404 Not Found, 503 Service Unavailable, etc.).
    #[error(transparent)]
    GatewayErr(#[from] GatewayError),

    /// Failure handing work to the gateway executor.
    ///
    /// Delegates to `BridgeError::into_response()` (504, 503 or 500).
    #[error(transparent)]
    BridgeErr(#[from] BridgeError),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// flash messages and return-to tracking.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// A blocking request task panicked or was cancelled.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    JoinErr(#[from] tokio::task::JoinError),

    /// I/O error, such as failing to bind the HTTP listener.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::GatewayErr(err) => err.status_code(),
            Self::BridgeErr(err) => err.status_code(),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to show to the user, either in a response body or as
    /// a flashed error on the next page render.
    ///
    /// Internal failures collapse to a generic message.
    pub fn user_message(&self) -> String {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and plain-text body.
/// Gateway and bridge errors delegate to their own response handling, while other
/// errors use standard mappings. Internal errors are logged with full details but
/// return generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (SessionErr, JoinErr, etc.)
/// - Variable - For `GatewayErr` and `BridgeErr`, delegated to their own `into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::GatewayErr(err) => err.into_response(),
            Self::BridgeErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
///
/// # Arguments
/// - `E` - Any type that implements `Display` (typically an error type)
///
/// # Returns
/// A 500 Internal Server Error response with a generic plain-text body
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
    }
}

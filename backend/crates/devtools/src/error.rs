//! Dev Endpoint Error Types
//!
//! This module provides devtools-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Devtools-specific result type alias
pub type DevToolsResult<T> = Result<T, DevToolsError>;

/// Devtools-specific error variants
///
/// These map to appropriate HTTP status codes and can be converted to
/// `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum DevToolsError {
    /// Endpoint is switched off in production deployments
    #[error("Not available in production")]
    DisabledInProduction,

    /// Endpoint is only allowed on a local development machine
    #[error("Only available in local development")]
    LocalDevOnly,

    /// A configured table name is not a plain SQL identifier
    #[error("Invalid table name in truncate list: {0}")]
    InvalidTableName(String),

    /// The background email spool has shut down
    #[error("Email spool is not running")]
    SpoolUnavailable,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DevToolsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DevToolsError::DisabledInProduction => StatusCode::BAD_REQUEST,
            DevToolsError::LocalDevOnly => StatusCode::FORBIDDEN,
            DevToolsError::SpoolUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            DevToolsError::InvalidTableName(_)
            | DevToolsError::Database(_)
            | DevToolsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DevToolsError::DisabledInProduction => ErrorKind::BadRequest,
            DevToolsError::LocalDevOnly => ErrorKind::Forbidden,
            DevToolsError::SpoolUnavailable => ErrorKind::ServiceUnavailable,
            DevToolsError::InvalidTableName(_)
            | DevToolsError::Database(_)
            | DevToolsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DevToolsError::Database(e) => {
                tracing::error!(error = %e, "Devtools database error");
            }
            DevToolsError::Internal(msg) => {
                tracing::error!(message = %msg, "Devtools internal error");
            }
            DevToolsError::InvalidTableName(table) => {
                tracing::error!(table = %table, "Invalid table name in truncate configuration");
            }
            DevToolsError::SpoolUnavailable => {
                tracing::error!("Email spool worker is gone");
            }
            DevToolsError::DisabledInProduction | DevToolsError::LocalDevOnly => {
                tracing::warn!(error = %self, "Dev endpoint rejected by environment guard");
            }
        }
    }
}

impl From<DevToolsError> for AppError {
    fn from(err: DevToolsError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for DevToolsError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Return empty body for security (don't leak details)
        (status, ()).into_response()
    }
}

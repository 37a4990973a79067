//! Application error type and its HTTP envelope.
//!
//! Every failure surfaced to a client renders as
//! `{"status": "Error", "error": <message>}` with the status code keyed to
//! the variant. Storage faults are logged with full detail and reported to
//! the client with a generic message.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::allocator::Exhausted;

/// JSON envelope for failed requests.
#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    error: String,
}

/// Application-wide error taxonomy.
///
/// Validation failures, duplicate aliases, and exhausted alias capacity are
/// all client-visible `400` conditions; `Internal` covers storage faults
/// without leaking their details.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Exhausted { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn exhausted(message: impl Into<String>) -> Self {
        Self::Exhausted {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Exhausted { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let body = Json(ErrorBody {
            status: "Error",
            error: message,
        });

        if status == StatusCode::UNAUTHORIZED {
            // RFC 7617 challenge for clients that skipped or failed basic auth.
            let challenge = [(header::WWW_AUTHENTICATE, "Basic realm=\"url-shortener\"")];
            (status, challenge, body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict("alias already exists");
            }
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("internal server error")
    }
}

impl From<Exhausted> for AppError {
    fn from(e: Exhausted) -> Self {
        AppError::exhausted(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(e.to_string())
    }
}

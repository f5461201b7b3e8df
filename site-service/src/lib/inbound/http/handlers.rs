use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::errors::RepositoryError;
use crate::domain::review::errors::ReviewError;
use crate::user::errors::UserError;

pub mod auth;
pub mod bookings;
pub mod contact;
pub mod gallery;
pub mod reviews;
pub mod services;
pub mod sliders;

/// Uniform response envelope: `{ success, message?, data? }`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponseBody<T: Serialize> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Successful response carrying the envelope and a status code.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<ApiResponseBody<T>>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody {
                success: true,
                message: None,
                data: Some(data),
            }),
        )
    }

    pub fn with_message(status: StatusCode, message: &str, data: T) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody {
                success: true,
                message: Some(message.to_string()),
                data: Some(data),
            }),
        )
    }
}

impl ApiSuccess<()> {
    /// Success envelope with a message and no data, for deletions.
    pub fn message_only(status: StatusCode, message: &str) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody {
                success: true,
                message: Some(message.to_string()),
                data: None,
            }),
        )
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Closed error-kind enumeration at the HTTP boundary.
///
/// Every failure a handler can produce maps to exactly one of these, so every
/// failure response has a predictable shape and status. `Internal` carries
/// the detail for the log only; clients get a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(detail) => {
                // Detail stays in the log; the body never exposes store or
                // hashing internals.
                tracing::error!(error = %detail, "Internal server error");
                "Internal server error".to_string()
            }
            ApiError::Validation(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg) => msg,
        };

        let body: ApiResponseBody<()> = ApiResponseBody {
            success: false,
            message: Some(message),
            data: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_) | UserError::InvalidEmail(_) => {
                ApiError::Validation(err.to_string())
            }
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::Password(detail) | UserError::Token(detail) | UserError::Database(detail) => {
                ApiError::Internal(detail)
            }
        }
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::InvalidContent(_) => ApiError::Validation(err.to_string()),
            ReviewError::AlreadyReviewed => ApiError::Conflict(err.to_string()),
            ReviewError::AdminsCannotReview => ApiError::Forbidden(err.to_string()),
            ReviewError::Database(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => ApiError::Conflict(err.to_string()),
            RepositoryError::Database(detail) => ApiError::Internal(detail),
        }
    }
}

/// Presence check for required request fields: `None`, empty, and
/// whitespace-only all count as missing.
pub(crate) fn required(field: Option<String>, name: &str) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::Validation(format!("Field '{name}' is required"))),
    }
}

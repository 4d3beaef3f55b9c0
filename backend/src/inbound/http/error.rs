//! HTTP error payloads and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating
//! [`Error`](crate::domain::Error) into Actix responses here. The wire
//! envelope is `{ "error": string, "details"?: string }`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

/// Standard error envelope returned by HTTP handlers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    #[schema(example = "Reservation not found")]
    pub error: String,
    /// Underlying detail, typically the persistence message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Adapter-level error wrapping a domain failure for Actix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    inner: Error,
}

impl ApiError {
    /// The wrapped domain error.
    #[must_use]
    pub const fn inner(&self) -> &Error {
        &self.inner
    }

    const fn to_status_code(&self) -> StatusCode {
        match self.inner.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(inner: Error) -> Self {
        Self { inner }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.inner.code(), ErrorCode::InternalError) {
            error!(
                message = self.inner.message(),
                details = self.inner.details(),
                "request failed with internal error"
            );
        }

        let body = ErrorBody {
            error: self.inner.message().to_owned(),
            details: self.inner.details().map(str::to_owned),
        };

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        builder.json(body)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

use crate::{service, validation::FieldError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use tracing::{error, warn};

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur in request handlers
#[derive(Debug)]
pub(crate) enum Error {
    /// The request body did not pass validation
    Validation(Vec<FieldError>),
    Service(service::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "{} invalid field(s)", errors.len()),
            Self::Service(_) => write!(f, "unexpected service error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Service(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        use std::error::Error as _;

        match self {
            Self::Validation(errors) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationErrors { errors }),
                )
                    .into_response()
            }
            Self::Service(error) if error.is_caused_by_request() => {
                warn!(%error, "request rejected by service")
            }
            Self::Service(error) => match error.source() {
                Some(source) => error!(%error, %source, "unexpected service error"),
                None => error!(%error, "unexpected service error"),
            },
        };

        ApiError::internal_server_error()
    }
}

impl From<service::Error> for Error {
    fn from(error: service::Error) -> Self {
        Self::Service(error)
    }
}

impl From<Vec<FieldError>> for Error {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<FieldError> for Error {
    fn from(error: FieldError) -> Self {
        Self::Validation(vec![error])
    }
}

#[derive(Serialize)]
struct ValidationErrors {
    errors: Vec<FieldError>,
}

#[derive(Serialize)]
struct ApiError {
    success: bool,
    message: &'static str,
}

impl ApiError {
    fn internal_server_error() -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError {
                success: false,
                message: "Internal server error",
            }),
        )
            .into_response()
    }
}

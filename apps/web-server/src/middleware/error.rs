//! Error responses: RFC 7807 JSON for the API, HTML pages for browsers.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use quill_core::error::{DomainError, RepoError};
use quill_core::ports::AuthError;
use quill_shared::ErrorResponse;

use crate::views;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Upstream failure: {0}")]
    BadGateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn problem(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Forbidden(detail) => ErrorResponse::forbidden().with_detail(detail),
            AppError::Validation(detail) => {
                ErrorResponse::new(422, "Validation Failed").with_detail(detail)
            }
            AppError::BadGateway(_) => {
                ErrorResponse::bad_gateway("The identity provider could not be reached")
            }
            AppError::Internal(_) => ErrorResponse::internal_error(),
        }
    }

    fn log(&self) {
        match self {
            AppError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            AppError::BadGateway(detail) => tracing::error!("Upstream error: {}", detail),
            _ => {}
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.log();
        HttpResponse::build(self.status_code()).json(self.problem())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Forbidden(msg) => AppError::Forbidden(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::BadRequest(msg),
            RepoError::Connection(msg) => {
                AppError::Internal(format!("database connection error: {msg}"))
            }
            RepoError::Query(msg) => AppError::Internal(format!("database query error: {msg}")),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired | AuthError::InvalidToken(_) | AuthError::MissingAuth => {
                AppError::Unauthorized
            }
            AuthError::InvalidState => AppError::BadRequest("OAuth state mismatch".to_string()),
            AuthError::ProviderUnavailable(msg) | AuthError::ProviderRejected(msg) => {
                AppError::BadGateway(msg)
            }
            AuthError::Configuration(msg) => AppError::Internal(msg),
        }
    }
}

/// An [`AppError`] raised while serving an HTML page.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PageError(#[from] pub AppError);

impl PageError {
    fn message(&self) -> (&'static str, String) {
        match &self.0 {
            AppError::NotFound(_) => ("Not found", "That page does not exist.".to_string()),
            AppError::BadRequest(detail) | AppError::Validation(detail) => {
                ("Bad request", detail.clone())
            }
            AppError::Unauthorized => ("Sign in required", "Please log in first.".to_string()),
            AppError::Forbidden(detail) => ("Forbidden", detail.clone()),
            AppError::BadGateway(_) => (
                "Sign-in unavailable",
                "The sign-in service could not be reached. Please try again.".to_string(),
            ),
            AppError::Internal(_) => (
                "Something went wrong",
                "The blog is temporarily unavailable. Please try again later.".to_string(),
            ),
        }
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        self.0.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        self.0.log();
        let (title, detail) = self.message();
        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(views::error::render(self.status_code().as_u16(), title, &detail))
    }
}

impl From<RepoError> for PageError {
    fn from(err: RepoError) -> Self {
        Self(err.into())
    }
}

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        Self(err.into())
    }
}

impl From<AuthError> for PageError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

/// Result type alias for JSON handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for page handlers.
pub type PageResult<T> = Result<T, PageError>;

use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::AuthError;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters long with at least one uppercase letter and one digit.")]
    InvalidPassword,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,

    #[error("User with email {0} not found.")]
    UserNotFound(String),

    #[error("Invalid email or password.")]
    IncorrectCredentials,

    #[error("Service temporarily unavailable, please try again later.")]
    ServiceUnavailable,
}

impl From<AuthError> for LoginError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unavailable => LoginError::ServiceUnavailable,
            _ => LoginError::InternalServerError,
        }
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::Json(_) => StatusCode::BAD_REQUEST,
            LoginError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            LoginError::UserNotFound(_) => StatusCode::UNAUTHORIZED,
            LoginError::IncorrectCredentials => StatusCode::UNAUTHORIZED,
            LoginError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status, self.to_string()).into_response()
    }
}

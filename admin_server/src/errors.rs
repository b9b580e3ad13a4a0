use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use log::error;
use thiserror::Error;

use crate::data_objects::JsonResponse;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    /// The request body could not be parsed. Carries the exact message the endpoint reports.
    #[error("{0}")]
    InvalidRequestBody(String),
    #[error("{0}")]
    AuthenticationError(#[from] AuthError),
    /// Login failures. Unknown email, digest mismatch and backend failures during login all
    /// surface as 401, matching the wire contract.
    #[error("{0}")]
    LoginFailed(String),
    #[error("{0}")]
    NoRecordFound(String),
    /// A data-access failure behind a read or write. Reported as 500; never retried here.
    #[error("{0}")]
    BackendError(String),
    /// A data-access failure behind a delete. Deletes report 502 on the wire.
    #[error("Unable to execute the query")]
    QueryExecError,
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationError(e) => match e {
                AuthError::EmptyToken => StatusCode::UNAUTHORIZED,
                AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
                AuthError::InvalidClaims => StatusCode::UNAUTHORIZED,
                AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
                AuthError::SigningError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::LoginFailed(_) => StatusCode::UNAUTHORIZED,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::QueryExecError => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status)
            .insert_header(ContentType::json())
            .json(JsonResponse::failure(self.to_string(), status.as_u16()))
    }
}

/// The rejection classes of the credential verifier. An expired token is deliberately
/// indistinguishable from a tampered one (`InvalidToken`), while a valid token with the wrong
/// role is the distinct `InsufficientPermissions` class, so clients can tell "not logged in"
/// (401) from "logged in, not allowed" (403).
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Error Token is Empty")]
    EmptyToken,
    #[error("Error Invalid Token")]
    InvalidToken,
    #[error("Error Invalid Claims")]
    InvalidClaims,
    #[error("Error: You are Unauthorized")]
    InsufficientPermissions,
    #[error("Could not sign access token. {0}")]
    SigningError(String),
}

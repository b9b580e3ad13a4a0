use actix_web::web;
use admin_engine::{paging::PagedFetchError, traits::AdminApiError};
use serde::de::DeserializeOwned;

use crate::errors::ServerError;

/// Deserializes a raw request body, reporting `error_message` on failure. Endpoints read the raw
/// bytes instead of using an extractor so that malformed bodies produce the JSON envelope rather
/// than actix's plain-text 400.
pub fn parse_body<T: DeserializeOwned>(body: &web::Bytes, error_message: &str) -> Result<T, ServerError> {
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("Could not parse request body. {e}");
        ServerError::InvalidRequestBody(error_message.to_string())
    })
}

/// Maps a listing failure onto the wire message for the phase that failed.
pub fn map_list_error(err: PagedFetchError<AdminApiError>) -> ServerError {
    match err {
        PagedFetchError::Count(e) => {
            log::warn!("Count query failed. {e}");
            ServerError::BackendError("Error getting total count".to_string())
        },
        PagedFetchError::Fetch(e) => {
            log::warn!("Page query failed. {e}");
            ServerError::BackendError("Error executing the query".to_string())
        },
    }
}

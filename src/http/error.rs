use rouille::Response;
use thiserror::Error;

use crate::{http::render, storage::error::StorageError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not connect to song store: {0}")]
    StoreUnavailable(StorageError),

    #[error("could not query songs: {0}")]
    Query(StorageError),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::StoreUnavailable(_) | ApiError::Query(_) => 500,
        }
    }

    /// Details stay in the log; the page only says what went wrong in general
    pub fn into_response(self) -> Response {
        let status = self.status_code();
        Response::html(render::error_page(status, "internal server error"))
            .with_status_code(status)
    }
}

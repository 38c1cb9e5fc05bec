use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur while talking to the remote generation service.
///
/// These never escape the generator: every variant is logged and recovered
/// by falling back to the static template.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Completion API error: status {status} {location}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Completion JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Completion contained no choices {location}")]
    EmptyCompletion { location: ErrorLocation },

    #[error("Completion copy is missing or has empty fields {location}")]
    IncompleteCopy { location: ErrorLocation },
}

impl GenError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GenError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        GenError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API status error
    #[track_caller]
    pub fn api(status: reqwest::StatusCode, body: String) -> Self {
        GenError::Api {
            status,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an empty-completion error
    #[track_caller]
    pub fn empty_completion() -> Self {
        GenError::EmptyCompletion {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an incomplete-copy error
    #[track_caller]
    pub fn incomplete_copy() -> Self {
        GenError::IncompleteCopy {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for GenError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GenError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for GenError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GenError::from_json(err)
    }
}

pub type GenResult<T> = std::result::Result<T, GenError>;

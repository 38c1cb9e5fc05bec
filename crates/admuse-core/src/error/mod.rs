use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid product data {location}")]
    InvalidProduct { location: ErrorLocation },

    #[error("Invalid mascot selection: {value} {location}")]
    UnknownMascot {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create an invalid-product error
    #[track_caller]
    pub fn invalid_product() -> Self {
        CoreError::InvalidProduct {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an unknown-mascot error carrying the rejected value
    #[track_caller]
    pub fn unknown_mascot<S: Into<String>>(value: S) -> Self {
        CoreError::UnknownMascot {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

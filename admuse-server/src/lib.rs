pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    copy::{
        ad_copy_dto::AdCopyDto, copy::generate_copy,
        generate_copy_response::GenerateCopyResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller_id::CallerId,
};

pub use crate::metrics::Metrics;
pub use crate::routes::build_router;
pub use crate::state::AppState;

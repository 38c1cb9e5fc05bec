pub mod error;
pub mod models;
pub mod request;


pub use error::{CoreError, Result};
pub use models::ad_copy::AdCopy;
pub use models::copy_source::CopySource;
pub use models::mascot::Mascot;
pub use models::product_brief::ProductBrief;
pub use request::CopyRequest;

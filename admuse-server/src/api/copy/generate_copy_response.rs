use crate::AdCopyDto;

use admuse_core::CopySource;

use serde::Serialize;

/// Successful copy-generation response.
///
/// `powered_by` is always present: "AI" for remote generation,
/// "template" for the deterministic fallback.
#[derive(Debug, Serialize)]
pub struct GenerateCopyResponse {
    pub copy: AdCopyDto,
    pub powered_by: CopySource,
}

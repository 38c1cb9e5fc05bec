use admuse_core::AdCopy;

use serde::Serialize;

/// Ad copy DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct AdCopyDto {
    pub headline: String,
    pub tagline: String,
    pub cta: String,
    pub blurb: String,
}

impl From<AdCopy> for AdCopyDto {
    fn from(copy: AdCopy) -> Self {
        Self {
            headline: copy.headline,
            tagline: copy.tagline,
            cta: copy.cta,
            blurb: copy.blurb,
        }
    }
}

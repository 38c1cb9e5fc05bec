use serde::{Deserialize, Serialize};

/// Generated ad copy. All four fields are present in a successful
/// result; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCopy {
    pub headline: String,
    pub tagline: String,
    pub cta: String,
    pub blurb: String,
}

impl AdCopy {
    /// True when every field carries visible text
    pub fn is_complete(&self) -> bool {
        !self.headline.trim().is_empty()
            && !self.tagline.trim().is_empty()
            && !self.cta.trim().is_empty()
            && !self.blurb.trim().is_empty()
    }
}

use admuse_core::CopySource;

use metrics::counter;

/// Metrics collector for copy-generation operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "admuse" }
    }

    /// Record a successfully generated copy, split by source
    pub fn copy_generated(&self, source: CopySource) {
        let source_key = match source {
            CopySource::Ai => "ai",
            CopySource::Template => "template",
        };

        counter!(format!("{}.copy.generated", self.prefix)).increment(1);
        counter!(format!("{}.copy.generated.{}", self.prefix, source_key)).increment(1);
    }

    /// Record a rejected request, split by the failing field
    pub fn validation_failed(&self, field: &str) {
        counter!(format!("{}.validation.failed", self.prefix)).increment(1);
        counter!(format!("{}.validation.failed.{}", self.prefix, field)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

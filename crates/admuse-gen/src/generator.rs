use crate::fallback;
use crate::remote::RemoteGenerator;

use admuse_config::GenerationConfig;
use admuse_core::{AdCopy, CopySource, Mascot, ProductBrief};

/// Copy generation with a total fallback.
///
/// `generate` is infallible by construction: the remote outcome is a
/// plain `Result` that is pattern-matched here, and the template path
/// covers every mascot. Callers always get a complete `AdCopy`.
pub struct CopyGenerator {
    remote: Option<RemoteGenerator>,
}

impl CopyGenerator {
    pub fn new(config: &GenerationConfig) -> Self {
        let remote = config.enabled.then(|| RemoteGenerator::new(config));
        Self { remote }
    }

    /// Generator that always renders the static templates
    pub fn template_only() -> Self {
        Self { remote: None }
    }

    pub fn is_remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    /// Produce copy for a validated request.
    ///
    /// Tries the remote service once when enabled; any failure is logged
    /// for operator visibility and recovered with the template, without
    /// changing the response shape.
    pub async fn generate(&self, mascot: Mascot, brief: &ProductBrief) -> (AdCopy, CopySource) {
        let Some(remote) = &self.remote else {
            return (fallback::render(mascot, brief), CopySource::Template);
        };

        match remote.generate(mascot, brief).await {
            Ok(copy) => (copy, CopySource::Ai),
            Err(e) => {
                log::warn!("Remote generation failed, using template: {}", e);
                (fallback::render(mascot, brief), CopySource::Template)
            }
        }
    }
}

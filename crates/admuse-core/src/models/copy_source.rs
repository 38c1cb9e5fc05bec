use serde::{Deserialize, Serialize};

/// Marks how a successful result was produced.
///
/// Always included in the response payload so the client can tell remote
/// generation apart from the deterministic template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopySource {
    /// Remote text-generation service produced the copy
    #[serde(rename = "AI")]
    Ai,
    /// Static per-mascot template produced the copy
    #[serde(rename = "template")]
    Template,
}

impl CopySource {
    /// Wire string, as serialized in `powered_by`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::Template => "template",
        }
    }
}

impl std::fmt::Display for CopySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

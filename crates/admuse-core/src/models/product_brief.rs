//! Product details supplied by the client, all fields optional.

use serde::{Deserialize, Serialize};

/// Placeholder used when the client leaves the product name blank
pub const DEFAULT_NAME: &str = "Product Name";
/// Placeholder used when the client leaves the description blank
pub const DEFAULT_DESCRIPTION: &str = "Product description goes here.";
/// Placeholder used when the client leaves the audience blank
pub const DEFAULT_AUDIENCE: &str = "Target Audience";

/// Product details for a single copy request.
///
/// Fields are independently optional; empty strings count as absent.
/// Placeholders are substituted at generation time, never stored back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBrief {
    pub name: Option<String>,
    pub description: Option<String>,
    pub audience: Option<String>,
}

impl ProductBrief {
    /// Product name, if supplied and non-empty
    pub fn name(&self) -> Option<&str> {
        Self::present(&self.name)
    }

    /// Product description, if supplied and non-empty
    pub fn description(&self) -> Option<&str> {
        Self::present(&self.description)
    }

    /// Target audience, if supplied and non-empty
    pub fn audience(&self) -> Option<&str> {
        Self::present(&self.audience)
    }

    pub fn name_or_default(&self) -> &str {
        self.name().unwrap_or(DEFAULT_NAME)
    }

    pub fn description_or_default(&self) -> &str {
        self.description().unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn audience_or_default(&self) -> &str {
        self.audience().unwrap_or(DEFAULT_AUDIENCE)
    }

    fn present(field: &Option<String>) -> Option<&str> {
        field.as_deref().filter(|s| !s.is_empty())
    }
}

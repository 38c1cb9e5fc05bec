use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Brand mascot persona selected by the client.
///
/// The set is closed: every mascot has a display name, a tone descriptor
/// for remote generation, and a complete fallback template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mascot {
    /// Calm, soothing voice
    Capybara,
    /// High-energy, punchy voice
    Hamster,
    /// Quirky, playful voice
    Parrot,
    /// Polished, professional voice
    Panda,
}

impl Mascot {
    pub const ALL: [Mascot; 4] = [Self::Capybara, Self::Hamster, Self::Parrot, Self::Panda];

    /// Convert to wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Capybara => "capybara",
            Self::Hamster => "hamster",
            Self::Parrot => "parrot",
            Self::Panda => "panda",
        }
    }

    /// Human-facing persona name shown in the client
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Capybara => "Cozy Capybara",
            Self::Hamster => "Hype Hamster",
            Self::Parrot => "Pixel Parrot",
            Self::Panda => "Polished Panda",
        }
    }

    /// Tone descriptor handed to the remote copywriter prompt
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Capybara => "calm, soothing, and reassuring",
            Self::Hamster => "high-energy, punchy, and bold",
            Self::Parrot => "quirky, playful, and a little bit wild",
            Self::Panda => "polished, professional, and trustworthy",
        }
    }
}

impl FromStr for Mascot {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "capybara" => Ok(Self::Capybara),
            "hamster" => Ok(Self::Hamster),
            "parrot" => Ok(Self::Parrot),
            "panda" => Ok(Self::Panda),
            _ => Err(CoreError::unknown_mascot(s)),
        }
    }
}

impl std::fmt::Display for Mascot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

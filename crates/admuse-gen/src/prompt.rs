//! Prompt assembly for the remote copywriter.

use admuse_core::{Mascot, ProductBrief};

pub(crate) const SYSTEM_PROMPT: &str = "You are an advertising copywriter. \
Respond with a single JSON object containing exactly these string fields: \
\"headline\", \"tagline\", \"cta\", \"blurb\". No other text.";

/// Build the user prompt from the mascot persona and the product brief.
///
/// Absent product fields are replaced with their placeholders so the
/// prompt shape is stable regardless of what the client supplied.
pub(crate) fn user_prompt(mascot: Mascot, brief: &ProductBrief) -> String {
    format!(
        "Write short ad copy for the following product in the voice of {persona}. \
The voice is {tone}.\n\n\
Product name: {name}\n\
Description: {description}\n\
Target audience: {audience}",
        persona = mascot.display_name(),
        tone = mascot.tone(),
        name = brief.name_or_default(),
        description = brief.description_or_default(),
        audience = brief.audience_or_default(),
    )
}

//! Static per-mascot copy templates.
//!
//! The fallback is total over `Mascot` and performs no I/O: whatever
//! happens to the remote service, a complete `AdCopy` comes out of here.
//! Output is deterministic for identical inputs.

use admuse_core::{AdCopy, Mascot, ProductBrief};

/// Fill the mascot's template with the product brief.
///
/// The product name (or its placeholder) is interpolated into the
/// headline; the description becomes the blurb, with a per-mascot stock
/// line when the client left it blank.
pub fn render(mascot: Mascot, brief: &ProductBrief) -> AdCopy {
    let name = brief.name_or_default();

    match mascot {
        Mascot::Capybara => AdCopy {
            headline: format!("{}: Gentle Clean, Calm Mind.", name),
            tagline: "Pure comfort in every wash.".to_string(),
            cta: "Relax & Refresh".to_string(),
            blurb: brief
                .description()
                .unwrap_or("Experience soothing, natural care every day.")
                .to_string(),
        },
        Mascot::Hamster => AdCopy {
            headline: format!("{}: Get Zesty, Get Noticed!", name),
            tagline: "Energize your day with every wash.".to_string(),
            cta: "Feel the Buzz!".to_string(),
            blurb: brief
                .description()
                .unwrap_or("Unleash your energy with every use.")
                .to_string(),
        },
        Mascot::Parrot => AdCopy {
            headline: format!("{}: Clean, Green, and a Little Bit Wild!", name),
            tagline: "Clever copy for colorful brands.".to_string(),
            cta: "Lather Up, Stand Out!".to_string(),
            blurb: brief
                .description()
                .unwrap_or("Make your routine a little more fun.")
                .to_string(),
        },
        Mascot::Panda => AdCopy {
            headline: format!("{}: Quality You Can Trust.", name),
            tagline: "Thoughtful design, dependable results.".to_string(),
            cta: "Discover More".to_string(),
            blurb: brief
                .description()
                .unwrap_or("Crafted with care for people who notice the details.")
                .to_string(),
        },
    }
}

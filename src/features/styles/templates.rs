//! Static instruction tables
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.2.0: Avatar final prompt reads "She is ..." again
//! - 1.1.0: Final prompt templates moved here from the form
//! - 1.0.0: Initial release

use super::StyleMode;

/// Fixed text bound to one style mode
///
/// Nothing in here is built at runtime. `final_prompt` uses `${name}`
/// placeholders filled in after the model has answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTemplate {
    /// System message sent with every request for this mode
    pub system: &'static str,
    /// Static style keywords appended after the rendered slots
    pub trailing: &'static str,
    /// Image generator prompt wrapped around the model output
    pub final_prompt: &'static str,
}

const AVATAR: ModeTemplate = ModeTemplate {
    system: "You are an expert AI art prompter. Convert the user's simple description into a \
             detailed visual description of an ACTION and OUTFIT for a photorealistic portrait. \
             Keep it under 20 words. Reply in English with direct visual keywords only. No filler.",
    trailing: "Style: photorealistic portrait, 85mm lens, golden hour lighting, 8k",
    final_prompt: "Portrait of ${subject}. Shot on 85mm portrait lens.\n\
                   She is ${enhanced}.\n\
                   High-end fashion photography, 8k, extreme facial detail, golden hour lighting.\n\
                   (masterpiece, best quality:1.2).",
};

const POSTER: ModeTemplate = ModeTemplate {
    system: "You are an expert AI art prompter. Convert the user's simple description into a \
             detailed visual description of a BACKGROUND and MOOD for a fashion poster. \
             Keep it under 20 words. Reply in English with direct visual keywords only.",
    trailing: "Style: cinematic fashion poster, medium full shot, negative space at the top",
    final_prompt: "Full frame cinematic fashion poster art. A Medium Full Shot.\n\
                   Scene details: ${enhanced}.\n\
                   Massive negative space at the top. Huge, elegant, wide-spaced serif typography \
                   reading \"${title}\" floating in the upper space.\n\
                   Cinematic lighting, high texture details, photorealistic 8k. NO magazine mockup.",
};

const PRODUCT: ModeTemplate = ModeTemplate {
    system: "You are an expert AI art prompter for commercial product photography. Convert the \
             user's description into a detailed visual description of the PRODUCT, its SURFACE \
             and LIGHTING. Keep it under 30 words. Reply in English with direct visual keywords only.",
    trailing: "Style: studio product photography, softbox lighting, shallow depth of field, 8k",
    final_prompt: "Professional studio product photograph of ${subject}.\n\
                   ${enhanced}.\n\
                   Softbox lighting, crisp reflections, shallow depth of field, commercial advertising, 8k.",
};

const ANIME: ModeTemplate = ModeTemplate {
    system: "You are an expert AI art prompter for anime illustration. Convert the user's \
             description into a detailed visual description of the CHARACTER's POSE, OUTFIT and \
             SCENE. Keep it under 40 words. Reply in English with comma-separated visual keywords only.",
    trailing: "Style: anime key visual, cel shading, vibrant colors, detailed line art",
    final_prompt: "Anime key visual of ${subject}.\n\
                   ${enhanced}.\n\
                   Cel shading, vibrant colors, detailed line art, studio quality, \
                   (masterpiece, best quality:1.2).",
};

/// Look up the template table entry for a mode
pub fn template(mode: StyleMode) -> &'static ModeTemplate {
    match mode {
        StyleMode::Avatar => &AVATAR,
        StyleMode::Poster => &POSTER,
        StyleMode::Product => &PRODUCT,
        StyleMode::Anime => &ANIME,
    }
}

/// System instruction for a mode
pub fn system_instruction(mode: StyleMode) -> &'static str {
    template(mode).system
}

/// Static trailing keywords for a mode
pub fn trailing_keywords(mode: StyleMode) -> &'static str {
    template(mode).trailing
}

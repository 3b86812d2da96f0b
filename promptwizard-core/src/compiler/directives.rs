//! Per-image-model formatting directives.

use crate::types::ImageModel;

/// Label used when image mode has no specific model selected
pub const GENERIC_IMAGE_TARGET: &str = "Generic Image Generator";

const MIDJOURNEY: &str = "\
- FORMAT: Use a token-based, comma-separated structure.
- PARAMETERS: Append appropriate Midjourney parameters at the end (e.g., --v 6.1, --ar 16:9, --stylize 250, --chaos 10) depending on the context.
- STYLE: Focus on cinematic lighting, photorealism, or specific art styles. Avoid 'In the style of' if possible; describe the visual style directly.
";

const DALLE: &str = "\
- FORMAT: Use natural, descriptive English sentences. Do NOT use comma-separated lists of tags.
- STYLE: Be extremely specific about visual details. DALL-E 3 follows instructions literally. Describe the mood, atmosphere, and composition in a narrative flow.
- Do NOT use parameters like --v or --ar within the prompt text.
";

const STABLE_DIFFUSION: &str = "\
- FORMAT: Use a mix of descriptive phrases and Danbooru-style tags, separated by commas.
- WEIGHTING: Use (keyword:1.2) syntax for emphasis where necessary.
- STRUCTURE: [Subject], [Action/Context], [Art Style/Medium], [Lighting], [Camera/Technical Details].
";

const WISK: &str = "\
- FORMAT: Clean, high-fidelity descriptive sentences combined with key visual tokens.
- STYLE: Focus on commercial quality, advertising standards, and realistic composition.
";

const UNSPECIFIED: &str =
    "- Ensure the output is comma-separated or descriptive sentences suitable for text-to-image models.\n";

/// Name of the image target as it appears in the instruction
pub fn target_label(model: Option<ImageModel>) -> &'static str {
    model.map_or(GENERIC_IMAGE_TARGET, |m| m.label())
}

/// Formatting directive block for an image model
pub fn directive(model: Option<ImageModel>) -> &'static str {
    match model {
        Some(ImageModel::Midjourney) => MIDJOURNEY,
        Some(ImageModel::DallE) => DALLE,
        Some(ImageModel::StableDiffusion) => STABLE_DIFFUSION,
        Some(ImageModel::Wisk) => WISK,
        None => UNSPECIFIED,
    }
}

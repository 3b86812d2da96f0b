//! Configuration compiler.
//!
//! Turns raw input text plus [`Settings`] into a [`GenerationRequest`]: the
//! layered system instruction, the response schema descriptor, and the fixed
//! sampling parameters. Compilation is pure and deterministic.

pub mod directives;

use crate::types::{GenerationRequest, Settings};

/// Model every request is sent to
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Sampling temperature, biased toward variance between variations
pub const SAMPLING_TEMPERATURE: f32 = 0.85;

/// MIME type of the structured response
pub const RESPONSE_MIME_TYPE: &str = "application/json";

const NEGATIVES_REQUIRED: &str = "IMPORTANT: You MUST generate a high-quality 'suggestedNegativePrompt' for each variation that includes technical terms (blur, bad anatomy, etc.) and content-specific exclusions.";

const NEGATIVES_EMPTY: &str = "IMPORTANT: Do NOT generate a 'suggestedNegativePrompt'. Leave it as an empty string for every variation.";

/// Structural descriptor of the expected response: an array of enhanced results.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "enhancedPrompt": {
                    "type": "STRING",
                    "description": "The fully engineered, improved prompt."
                },
                "explanation": {
                    "type": "STRING",
                    "description": "A brief explanation of the improvements."
                },
                "tags": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Key themes."
                },
                "suggestedNegativePrompt": {
                    "type": "STRING",
                    "description": "Optional negative prompt."
                }
            },
            "required": ["enhancedPrompt", "explanation", "tags"]
        }
    })
}

/// Build the system instruction for `settings`.
pub fn build_instruction(settings: &Settings) -> String {
    let quantity = settings.quantity();

    let mut instruction = format!(
        "You are a world-class Prompt Engineer specializing in {mode}.\n\
         Your goal is to generate {quantity} DISTINCT and high-quality variations of prompts based on the user's raw input.\n\
         \n\
         Configuration:\n\
         - Tone: {tone}\n\
         - Complexity: {complexity}\n\
         - Quantity: Generate exactly {quantity} variations.\n\
         \n\
         Guidelines:\n\
         1. Vary the structure, vocabulary, and angle of each prompt variation slightly to give the user options.\n\
         2. If the mode is Coding: focus on specific constraints, language versions, edge cases, and clean architecture requirements.\n\
         3. If the mode is Text/LLM: use techniques like chain-of-thought, persona adoption, and clear constraint setting.\n",
        mode = settings.mode(),
        quantity = quantity,
        tone = settings.tone(),
        complexity = settings.complexity(),
    );

    if settings.mode().is_image() {
        let model = settings.image_model();

        instruction.push_str(&format!(
            "\nSPECIFIC INSTRUCTIONS FOR IMAGE GENERATION ({}):\n\
             - Focus heavily on visual descriptors: lighting, texture, camera angle, lens type, color palette, and artistic style.\n",
            directives::target_label(model)
        ));
        instruction.push_str(directives::directive(model));

        instruction.push('\n');
        instruction.push_str(if settings.include_negatives() {
            NEGATIVES_REQUIRED
        } else {
            NEGATIVES_EMPTY
        });
        instruction.push('\n');
    }

    instruction
}

/// Compile input text and settings into a request.
///
/// `input` is passed through verbatim; callers reject blank input before
/// dispatching (see [`RequestExecutor::execute`](crate::runtime::RequestExecutor::execute)).
pub fn compile(input: &str, settings: &Settings) -> GenerationRequest {
    GenerationRequest {
        input_text: input.to_string(),
        instruction: build_instruction(settings),
        response_schema: response_schema(),
        response_mime_type: RESPONSE_MIME_TYPE.to_string(),
        temperature: SAMPLING_TEMPERATURE,
        model: GEMINI_MODEL.to_string(),
        quantity: settings.quantity(),
        image_model: settings.image_model(),
    }
}

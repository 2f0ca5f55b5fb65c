// Storyboard Core — Prompt Construction

/// Fixed qualifiers appended to every positive prompt.
const QUALITY_SUFFIX: &str =
    "cinematic lighting, detailed, high quality, 4k, professional photography";

/// Fixed negative prompt suppressing low-quality artifacts.
pub const NEGATIVE_PROMPT: &str =
    "blurry, low quality, distorted, ugly, bad anatomy, bad proportions, watermark, signature";

/// Build the positive prompt for one scene. The style directive is embedded
/// unmodified; the emotion label sets the atmosphere.
pub fn build_prompt(scene_text: &str, emotion: &str, style: &str) -> String {
    format!("A {style} scene: {scene_text}, {emotion} atmosphere, {QUALITY_SUFFIX}")
}

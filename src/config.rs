// Storyboard Core — Generation Configuration
// Tuning knobs read once from the environment at process start

use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

const DEFAULT_EMOTION_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";
const DEFAULT_IMAGE_MODEL: &str = "CompVis/stable-diffusion-v1-4";
const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";

/// Synthesis parameters are configuration-time constants, not per-call
/// inputs: every request in the process lifetime renders with the same
/// models, step count, guidance scale, and resolution.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub emotion_model: String,
    pub image_model: String,
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
    pub image_width: u32,
    pub image_height: u32,
    pub api_base: String,
    pub api_token: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            emotion_model: DEFAULT_EMOTION_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            num_inference_steps: 20,
            guidance_scale: 7.5,
            image_width: 512,
            image_height: 512,
            api_base: DEFAULT_API_BASE.to_string(),
            api_token: None,
        }
    }
}

impl GenerationConfig {
    /// Read the configuration from the environment. Malformed numeric values
    /// fall back to their defaults with a warning rather than aborting
    /// startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            emotion_model: env_or("EMOTION_MODEL", &defaults.emotion_model),
            image_model: env_or("MODEL_ID", &defaults.image_model),
            num_inference_steps: parse_or("NUM_INFERENCE_STEPS", defaults.num_inference_steps),
            guidance_scale: parse_or("GUIDANCE_SCALE", defaults.guidance_scale),
            image_width: parse_or("IMAGE_WIDTH", defaults.image_width),
            image_height: parse_or("IMAGE_HEIGHT", defaults.image_height),
            api_base: env_or("INFERENCE_API_URL", &defaults.api_base),
            api_token: std::env::var("HF_API_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_or<T: FromStr + Copy + Display>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("[CONFIG] {} has invalid value '{}', using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

// Storyboard Core — Hosted Inference Bridge
// reqwest clients for the text-classification and text-to-image capabilities

use crate::config::GenerationConfig;
use crate::error::CapabilityError;
use crate::inference::{
    prompt, EmotionClassifier, ImageSynthesizer, RenderedImage, Unavailable,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{info, warn};

/// Image synthesis can be slow on a cold model.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Initialize both hosted capabilities once at process startup.
///
/// If the HTTP client cannot be constructed, the process runs with
/// permanently degraded capabilities (neutral labels, omitted images)
/// instead of retrying initialization per request.
pub fn build_capabilities(
    config: &GenerationConfig,
) -> (Box<dyn EmotionClassifier>, Box<dyn ImageSynthesizer>) {
    match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => {
            info!(
                "[INFERENCE] emotions: {} | images: {} | endpoint: {}",
                config.emotion_model, config.image_model, config.api_base
            );
            (
                Box::new(HfEmotionClassifier::new(client.clone(), config)),
                Box::new(HfImageSynthesizer::new(client, config)),
            )
        }
        Err(err) => {
            warn!("[INFERENCE] HTTP client init failed, running degraded: {}", err);
            (Box::new(Unavailable), Box::new(Unavailable))
        }
    }
}

fn model_endpoint(base: &str, model: &str) -> String {
    format!("{}/models/{}", base.trim_end_matches('/'), model)
}

/// Text-classification client: scene text in, top-ranked emotion label out.
pub struct HfEmotionClassifier {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HfEmotionClassifier {
    pub fn new(client: reqwest::Client, config: &GenerationConfig) -> Self {
        Self {
            client,
            endpoint: model_endpoint(&config.api_base, &config.emotion_model),
            token: config.api_token.clone(),
        }
    }
}

#[async_trait]
impl EmotionClassifier for HfEmotionClassifier {
    async fn classify(&self, text: &str) -> Result<String, CapabilityError> {
        let mut request = self.client.post(&self.endpoint).json(&json!({ "inputs": text }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(CapabilityError::InvalidResponse(format!(
                "classification endpoint answered {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        top_label(&body)
            .ok_or_else(|| CapabilityError::InvalidResponse(body.to_string()))
    }
}

/// The hosted classification task answers `[[{label, score}, ...]]` or, for
/// some model revisions, the un-nested `[{label, score}, ...]`. Labels are
/// ranked by score; the first one wins.
fn top_label(body: &Value) -> Option<String> {
    let first = body.as_array()?.first()?;
    let candidate = if first.is_array() {
        first.as_array()?.first()?
    } else {
        first
    };
    candidate["label"].as_str().map(str::to_string)
}

/// Text-to-image client. Builds the prompt pair internally and re-encodes
/// whatever image format the endpoint returns as a JPEG data URI.
pub struct HfImageSynthesizer {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
    num_inference_steps: u32,
    guidance_scale: f64,
    width: u32,
    height: u32,
}

impl HfImageSynthesizer {
    pub fn new(client: reqwest::Client, config: &GenerationConfig) -> Self {
        Self {
            client,
            endpoint: model_endpoint(&config.api_base, &config.image_model),
            token: config.api_token.clone(),
            num_inference_steps: config.num_inference_steps,
            guidance_scale: config.guidance_scale,
            width: config.image_width,
            height: config.image_height,
        }
    }
}

#[async_trait]
impl ImageSynthesizer for HfImageSynthesizer {
    async fn synthesize(
        &self,
        scene_text: &str,
        emotion: &str,
        style: &str,
    ) -> Result<RenderedImage, CapabilityError> {
        let positive = prompt::build_prompt(scene_text, emotion, style);
        let payload = json!({
            "inputs": positive,
            "parameters": {
                "negative_prompt": prompt::NEGATIVE_PROMPT,
                "num_inference_steps": self.num_inference_steps,
                "guidance_scale": self.guidance_scale,
                "width": self.width,
                "height": self.height,
            }
        });

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(CapabilityError::InvalidResponse(format!(
                "image endpoint answered {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        let img = image::load_from_memory(&bytes)?;
        RenderedImage::from_image(&img)
    }
}

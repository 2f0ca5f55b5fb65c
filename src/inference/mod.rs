// Storyboard Core — Inference Capabilities
// External model capabilities behind injectable traits with an explicit
// unavailable state

pub mod huggingface;
pub mod prompt;

use crate::error::CapabilityError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Cursor;

/// Emotion substituted whenever classification is unavailable or fails.
pub const FALLBACK_EMOTION: &str = "neutral";

/// JPEG quality factor for rendered images.
pub const JPEG_QUALITY: u8 = 95;

/// An opaque rendered image, already encoded as a
/// `data:image/jpeg;base64,` URI. Ownership passes entirely to the
/// storyboard entry that references it.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub data_uri: String,
}

impl RenderedImage {
    /// Re-encode a decoded image as JPEG and wrap it as a data URI.
    pub fn from_image(img: &image::DynamicImage) -> Result<Self, CapabilityError> {
        // JPEG carries no alpha channel; flatten before encoding.
        let rgb = image::DynamicImage::ImageRgb8(img.to_rgb8());
        let mut jpeg = Vec::new();
        rgb.write_to(
            &mut Cursor::new(&mut jpeg),
            image::ImageOutputFormat::Jpeg(JPEG_QUALITY),
        )?;
        Ok(Self {
            data_uri: format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg)),
        })
    }
}

/// Maps scene text to an emotion label. Single-shot: one attempt per scene,
/// no retries.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<String, CapabilityError>;
}

/// Renders a representative image for a scene. Single-shot and possibly
/// slow; failure here drops the scene rather than the request.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        scene_text: &str,
        emotion: &str,
        style: &str,
    ) -> Result<RenderedImage, CapabilityError>;
}

/// Permanently degraded capability, installed at startup when
/// initialization fails. Every call takes the fallback path; initialization
/// is never retried for the process lifetime.
pub struct Unavailable;

#[async_trait]
impl EmotionClassifier for Unavailable {
    async fn classify(&self, _text: &str) -> Result<String, CapabilityError> {
        Err(CapabilityError::Unavailable)
    }
}

#[async_trait]
impl ImageSynthesizer for Unavailable {
    async fn synthesize(
        &self,
        _scene_text: &str,
        _emotion: &str,
        _style: &str,
    ) -> Result<RenderedImage, CapabilityError> {
        Err(CapabilityError::Unavailable)
    }
}

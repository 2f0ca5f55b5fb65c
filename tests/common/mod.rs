// Shared test doubles for the storyboard pipeline.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use storyboard_core::error::CapabilityError;
use storyboard_core::inference::{EmotionClassifier, ImageSynthesizer, RenderedImage};

/// A real (tiny) rendered image so data-URI assertions exercise the actual
/// encoding path.
pub fn test_image() -> RenderedImage {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        8,
        8,
        image::Rgb([64, 64, 64]),
    ));
    RenderedImage::from_image(&img).unwrap()
}

/// Classifier that always answers the same label and counts invocations.
pub struct FixedClassifier {
    pub label: &'static str,
    pub calls: Arc<AtomicUsize>,
}

impl FixedClassifier {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl EmotionClassifier for FixedClassifier {
    async fn classify(&self, _text: &str) -> Result<String, CapabilityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.label.to_string())
    }
}

/// Synthesizer that always succeeds and counts invocations.
pub struct StubSynthesizer {
    pub calls: Arc<AtomicUsize>,
}

impl StubSynthesizer {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ImageSynthesizer for StubSynthesizer {
    async fn synthesize(
        &self,
        _scene_text: &str,
        _emotion: &str,
        _style: &str,
    ) -> Result<RenderedImage, CapabilityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(test_image())
    }
}

/// Synthesizer that fails for any scene containing a marker word.
pub struct SelectiveSynthesizer {
    pub fail_marker: &'static str,
}

#[async_trait]
impl ImageSynthesizer for SelectiveSynthesizer {
    async fn synthesize(
        &self,
        scene_text: &str,
        _emotion: &str,
        _style: &str,
    ) -> Result<RenderedImage, CapabilityError> {
        if scene_text.contains(self.fail_marker) {
            Err(CapabilityError::InvalidResponse("render error".to_string()))
        } else {
            Ok(test_image())
        }
    }
}

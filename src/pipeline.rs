// Storyboard Core — Generation Pipeline
// Sequential per-scene orchestration with partial-failure tolerance

use crate::error::{Result, StoryboardError};
use crate::inference::{EmotionClassifier, ImageSynthesizer, FALLBACK_EMOTION};
use crate::segment::segment_script;
use crate::storyboard::{Storyboard, StoryboardEntry};
use tracing::{info, warn};

/// Hard cap on scenes processed per request. Synthesis is the expensive
/// step and requests are otherwise unbounded in size; scenes past the cap
/// are silently dropped.
pub const MAX_SCENES: usize = 6;

/// Drives the classifier and synthesizer over the segmented script, one
/// scene at a time, in order. The capabilities hold exclusive access to a
/// single shared compute resource, so there is no per-scene concurrency.
pub struct StoryboardPipeline {
    classifier: Box<dyn EmotionClassifier>,
    synthesizer: Box<dyn ImageSynthesizer>,
}

impl StoryboardPipeline {
    pub fn new(
        classifier: Box<dyn EmotionClassifier>,
        synthesizer: Box<dyn ImageSynthesizer>,
    ) -> Self {
        Self {
            classifier,
            synthesizer,
        }
    }

    /// Build a storyboard for `script`.
    ///
    /// Classification failures degrade to the neutral label; synthesis
    /// failures drop the affected scene. The request as a whole fails only
    /// when the script is empty or when no scene produced an image.
    pub async fn build(&self, script: &str, style: &str) -> Result<Storyboard> {
        if script.is_empty() {
            return Err(StoryboardError::EmptyInput);
        }

        let scenes = segment_script(script);
        info!(
            "[PIPELINE] {} scenes segmented, processing up to {}",
            scenes.len(),
            MAX_SCENES
        );

        let mut storyboard = Storyboard::default();
        for (index, scene) in scenes.into_iter().take(MAX_SCENES).enumerate() {
            let emotion = match self.classifier.classify(&scene).await {
                Ok(label) => label,
                Err(err) => {
                    warn!(
                        "[EMOTION] scene {} classification failed, using '{}': {}",
                        index, FALLBACK_EMOTION, err
                    );
                    FALLBACK_EMOTION.to_string()
                }
            };

            match self.synthesizer.synthesize(&scene, &emotion, style).await {
                Ok(image) => {
                    info!("[PIPELINE] scene {} rendered ({})", index, emotion);
                    storyboard.entries.push(StoryboardEntry {
                        scene,
                        emotion,
                        image_url: image.data_uri,
                    });
                }
                Err(err) => {
                    warn!("[RENDER] scene {} dropped, synthesis failed: {}", index, err);
                }
            }
        }

        if storyboard.is_empty() {
            return Err(StoryboardError::GenerationFailed);
        }
        Ok(storyboard)
    }
}

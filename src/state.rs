// Storyboard Core — Shared Application State

use crate::pipeline::StoryboardPipeline;

/// Process-wide state handed to the HTTP layer.
///
/// The pipeline sits behind an async mutex: the inference capabilities hold
/// exclusive access to one shared compute resource, so requests serialize
/// on it rather than invoking the models concurrently.
pub struct AppState {
    pub pipeline: tokio::sync::Mutex<StoryboardPipeline>,
}

impl AppState {
    pub fn new(pipeline: StoryboardPipeline) -> Self {
        Self {
            pipeline: tokio::sync::Mutex::new(pipeline),
        }
    }
}

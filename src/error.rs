// Storyboard Core — Error Taxonomy

use thiserror::Error;

/// Terminal pipeline failures surfaced to the transport boundary.
///
/// Everything that goes wrong inside a capability is absorbed by the
/// pipeline; only these two conditions end a request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoryboardError {
    /// The caller supplied no script at all. Maps to HTTP 400.
    #[error("Script is required")]
    EmptyInput,

    /// Every retained scene failed image synthesis. Maps to HTTP 500.
    #[error("Failed to generate storyboard")]
    GenerationFailed,
}

/// Failures inside an inference capability.
///
/// Never surfaced to the caller: classification failures degrade to the
/// neutral label, synthesis failures drop the affected scene.
#[derive(Error, Debug)]
pub enum CapabilityError {
    #[error("capability unavailable")]
    Unavailable,

    #[error("inference request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected inference response: {0}")]
    InvalidResponse(String),

    #[error("image processing failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, StoryboardError>;

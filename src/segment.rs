// Storyboard Core — Script Segmentation

/// Split a raw script into ordered, trimmed scene texts.
///
/// A paragraph break is any run of two or more consecutive newlines. Each
/// block is trimmed; blocks that are empty after trimming are dropped.
/// Original order is preserved. No scene-count limit is applied here — the
/// pipeline caps the batch downstream.
pub fn segment_script(script: &str) -> Vec<String> {
    // CRLF scripts segment the same as LF scripts.
    let normalized = script.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

//! Result and step derivation for the request details panel.

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

use crate::net::types::{GenerationRequest, ImageSpec};

/// Path suffixes rendered as `<img>`; everything else is treated as video.
const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".webp"];

/// How a result URL is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Which part of the generation spec a step belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepSource {
    Image,
    /// Zero-based index of the video within the spec.
    Video(usize),
}

/// One generation step as listed in the details panel.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedStep {
    /// One-based position within its source (images, or a single video).
    pub index: usize,
    pub source: StepSource,
    pub spec: ImageSpec,
}

/// Non-empty result URLs, in backend order.
#[must_use]
pub fn result_urls(request: &GenerationRequest) -> Vec<String> {
    request
        .results
        .iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Whether the request has anything worth expanding for.
#[must_use]
pub fn has_details(request: &GenerationRequest) -> bool {
    !result_urls(request).is_empty()
}

/// Classify a URL by the extension of its path, ignoring query and fragment.
#[must_use]
pub fn media_kind(url: &str) -> MediaKind {
    let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
    if IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        MediaKind::Image
    } else {
        MediaKind::Video
    }
}

/// Flatten every image and video step of the request's spec.
///
/// Image steps are numbered from 1; each video restarts its numbering at 1.
#[must_use]
pub fn indexed_steps(request: &GenerationRequest) -> Vec<IndexedStep> {
    let Some(spec) = &request.spec else {
        return Vec::new();
    };

    let images = spec.images.iter().enumerate().map(|(i, image)| IndexedStep {
        index: i + 1,
        source: StepSource::Image,
        spec: image.clone(),
    });
    let videos = spec.videos.iter().enumerate().flat_map(|(v, video)| {
        video.steps.iter().enumerate().map(move |(i, step)| IndexedStep {
            index: i + 1,
            source: StepSource::Video(v),
            spec: step.clone(),
        })
    });

    images.chain(videos).collect()
}

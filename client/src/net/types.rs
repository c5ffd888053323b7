//! Shared wire DTOs for the generation-request API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Every field that the
//! backend may omit carries a serde default so a partially populated request
//! (freshly queued, no progress yet) still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Default optimisation iterations per generation step.
pub const DEFAULT_ITERATIONS: u32 = 75;
/// Default iterations used to initialise the very first frame.
pub const DEFAULT_INIT_ITERATIONS: u32 = 200;
/// Default number of epochs per text/style combination.
pub const DEFAULT_EPOCHS: u32 = 25;

/// User-authored description of a single image: prompt texts and style tags,
/// plus generation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSpec {
    #[serde(default)]
    pub texts: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_init_iterations")]
    pub init_iterations: u32,
    #[serde(default = "default_epochs")]
    pub epochs: u32,
    #[serde(default)]
    pub x_velocity: f64,
    #[serde(default)]
    pub y_velocity: f64,
    #[serde(default)]
    pub z_velocity: f64,
    #[serde(default)]
    pub upscale: bool,
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self {
            texts: Vec::new(),
            styles: Vec::new(),
            iterations: DEFAULT_ITERATIONS,
            init_iterations: DEFAULT_INIT_ITERATIONS,
            epochs: DEFAULT_EPOCHS,
            x_velocity: 0.0,
            y_velocity: 0.0,
            z_velocity: 0.0,
            upscale: false,
        }
    }
}

impl ImageSpec {
    /// Number of generation steps this spec expands into.
    ///
    /// Every text is rendered once per style (or once when no styles are
    /// given), `epochs` times each.
    #[must_use]
    pub fn generation_steps(&self) -> u64 {
        let texts = self.texts.len() as u64;
        let styles = self.styles.len().max(1) as u64;
        texts * styles * u64::from(self.epochs)
    }

    /// Whether the camera moves between steps.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        [self.x_velocity, self.y_velocity, self.z_velocity]
            .iter()
            .any(|v| v.abs() > f64::EPSILON)
    }
}

/// A video: an ordered sequence of image specs rendered into frames.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoSpec {
    #[serde(default)]
    pub steps: Vec<ImageSpec>,
}

/// Full generation job description as submitted to the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageSpec>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub videos: Vec<VideoSpec>,
}

impl GenerationSpec {
    /// Wrap a single image draft into a job spec.
    #[must_use]
    pub fn from_image(image: ImageSpec) -> Self {
        Self { images: vec![image], videos: Vec::new() }
    }

    /// Total pipeline steps the backend will report for this spec.
    ///
    /// Each image adds one cleanup step ahead of its generation steps; each
    /// video adds a cleanup step before and an encode step after its frames.
    #[must_use]
    pub fn total_steps(&self) -> u64 {
        let images: u64 = self.images.iter().map(|image| 1 + image.generation_steps()).sum();
        let videos: u64 = self
            .videos
            .iter()
            .map(|video| 2 + video.steps.iter().map(ImageSpec::generation_steps).sum::<u64>())
            .sum();
        images + videos
    }
}

/// A server-tracked generation job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(default)]
    pub completed: Option<String>,
    #[serde(default)]
    pub failed: Option<String>,
    #[serde(default)]
    pub cancelled: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub steps_completed: Option<u32>,
    #[serde(default)]
    pub steps_total: Option<u32>,
    /// Latest preview frame URL, if any.
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub spec: Option<GenerationSpec>,
    /// Final artefact URLs (images or videos).
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<String>,
}

impl GenerationRequest {
    /// Display name, falling back to `#id` while the backend has not named
    /// the job yet.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("#{}", self.id),
        }
    }
}

/// Body of `POST /generation-request/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateRequestBody {
    pub spec: GenerationSpec,
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_init_iterations() -> u32 {
    DEFAULT_INIT_ITERATIONS
}

fn default_epochs() -> u32 {
    DEFAULT_EPOCHS
}

/// The backend marshals unset list fields as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

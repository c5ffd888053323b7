use super::*;
use serde_json::json;

// =============================================================
// ImageSpec
// =============================================================

#[test]
fn image_spec_default_matches_backend_defaults() {
    let spec = ImageSpec::default();
    assert!(spec.texts.is_empty());
    assert!(spec.styles.is_empty());
    assert_eq!(spec.iterations, 75);
    assert_eq!(spec.init_iterations, 200);
    assert_eq!(spec.epochs, 25);
    assert!(!spec.upscale);
    assert!(!spec.is_moving());
}

#[test]
fn image_spec_deserializes_texts_only_payload() {
    let spec: ImageSpec = serde_json::from_value(json!({ "texts": ["a lighthouse"] })).unwrap();
    assert_eq!(spec.texts, vec!["a lighthouse".to_owned()]);
    assert_eq!(spec.epochs, DEFAULT_EPOCHS);
    assert_eq!(spec.iterations, DEFAULT_ITERATIONS);
}

#[test]
fn image_spec_generation_steps_without_styles() {
    let spec = ImageSpec { texts: vec!["a".into(), "b".into()], epochs: 10, ..ImageSpec::default() };
    assert_eq!(spec.generation_steps(), 20);
}

#[test]
fn image_spec_generation_steps_multiplies_styles() {
    let spec = ImageSpec {
        texts: vec!["a".into(), "b".into()],
        styles: vec!["oil".into(), "ink".into(), "chalk".into()],
        epochs: 2,
        ..ImageSpec::default()
    };
    assert_eq!(spec.generation_steps(), 12);
}

#[test]
fn image_spec_without_texts_has_no_steps() {
    let spec = ImageSpec { styles: vec!["oil".into()], ..ImageSpec::default() };
    assert_eq!(spec.generation_steps(), 0);
}

#[test]
fn image_spec_is_moving_when_any_velocity_set() {
    let spec = ImageSpec { z_velocity: 0.5, ..ImageSpec::default() };
    assert!(spec.is_moving());
}

// =============================================================
// GenerationSpec
// =============================================================

#[test]
fn generation_spec_total_steps_counts_cleanup_and_encode() {
    let image = ImageSpec { texts: vec!["a".into()], epochs: 3, ..ImageSpec::default() };
    let spec = GenerationSpec {
        images: vec![image.clone()],
        videos: vec![VideoSpec { steps: vec![image.clone(), image] }],
    };
    // image: 1 + 3, video: 1 + 3 + 3 + 1
    assert_eq!(spec.total_steps(), 12);
}

#[test]
fn generation_spec_from_image_wraps_single_image() {
    let spec = GenerationSpec::from_image(ImageSpec::default());
    assert_eq!(spec.images.len(), 1);
    assert!(spec.videos.is_empty());
}

#[test]
fn generation_spec_accepts_null_lists() {
    let spec: GenerationSpec = serde_json::from_value(json!({ "images": null, "videos": null })).unwrap();
    assert_eq!(spec, GenerationSpec::default());
}

// =============================================================
// GenerationRequest
// =============================================================

#[test]
fn generation_request_decodes_minimal_payload() {
    let request: GenerationRequest = serde_json::from_value(json!({ "id": 7 })).unwrap();
    assert_eq!(request.id, 7);
    assert_eq!(request.steps_total, None);
    assert!(request.results.is_empty());
    assert!(request.spec.is_none());
}

#[test]
fn generation_request_decodes_full_payload() {
    let request: GenerationRequest = serde_json::from_value(json!({
        "id": 3,
        "name": "amber-heron",
        "created": "2021-09-12T10:00:00",
        "started": "2021-09-12T10:01:00",
        "completed": null,
        "failed": null,
        "steps_completed": 12,
        "steps_total": 40,
        "preview": "/files/amber-heron-preview.png",
        "spec": { "images": [{ "texts": ["sunrise"], "styles": [] }], "videos": null },
        "results": null
    }))
    .unwrap();
    assert_eq!(request.name.as_deref(), Some("amber-heron"));
    assert_eq!(request.steps_completed, Some(12));
    assert_eq!(request.spec.unwrap().images[0].texts, vec!["sunrise".to_owned()]);
    assert!(request.results.is_empty());
}

#[test]
fn display_name_falls_back_to_id() {
    let unnamed = GenerationRequest { id: 42, ..GenerationRequest::default() };
    assert_eq!(unnamed.display_name(), "#42");

    let blank = GenerationRequest { id: 42, name: Some("  ".into()), ..GenerationRequest::default() };
    assert_eq!(blank.display_name(), "#42");

    let named = GenerationRequest { id: 42, name: Some("amber-heron".into()), ..GenerationRequest::default() };
    assert_eq!(named.display_name(), "amber-heron");
}

#[test]
fn create_body_serializes_spec_envelope() {
    let body = CreateRequestBody {
        spec: GenerationSpec::from_image(ImageSpec { texts: vec!["a".into()], ..ImageSpec::default() }),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["spec"]["images"][0]["texts"], json!(["a"]));
    assert_eq!(value["spec"]["videos"], json!([]));
}

// Hosted inference clients against a local mock endpoint.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use mockito::{Matcher, Server};
use serde_json::json;
use storyboard_core::config::GenerationConfig;
use storyboard_core::inference::huggingface::{HfEmotionClassifier, HfImageSynthesizer};
use storyboard_core::inference::prompt::{build_prompt, NEGATIVE_PROMPT};
use storyboard_core::inference::{EmotionClassifier, ImageSynthesizer};

fn test_config(api_base: String) -> GenerationConfig {
    GenerationConfig {
        emotion_model: "test/emotion".to_string(),
        image_model: "test/diffusion".to_string(),
        num_inference_steps: 7,
        guidance_scale: 9.0,
        image_width: 64,
        image_height: 64,
        api_base,
        api_token: None,
    }
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        width,
        height,
        image::Rgb([0, 0, 255]),
    ));
    let mut out = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut out),
        image::ImageOutputFormat::Png,
    )
    .unwrap();
    out
}

#[tokio::test]
async fn test_classifier_extracts_top_label() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/models/test/emotion")
        .match_body(Matcher::PartialJson(json!({ "inputs": "The hero falls." })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([[
                { "label": "sadness", "score": 0.91 },
                { "label": "fear", "score": 0.06 }
            ]])
            .to_string(),
        )
        .create_async()
        .await;

    let config = test_config(server.url());
    let classifier = HfEmotionClassifier::new(reqwest::Client::new(), &config);

    let label = classifier.classify("The hero falls.").await.unwrap();
    assert_eq!(label, "sadness");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_classifier_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/models/test/emotion")
        .match_header("authorization", "Bearer hf_secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{ "label": "joy", "score": 0.99 }]).to_string())
        .create_async()
        .await;

    let mut config = test_config(server.url());
    config.api_token = Some("hf_secret".to_string());
    let classifier = HfEmotionClassifier::new(reqwest::Client::new(), &config);

    assert_eq!(classifier.classify("dawn").await.unwrap(), "joy");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_classifier_error_status_is_capability_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/test/emotion")
        .with_status(503)
        .with_body(json!({ "error": "model loading" }).to_string())
        .create_async()
        .await;

    let config = test_config(server.url());
    let classifier = HfEmotionClassifier::new(reqwest::Client::new(), &config);

    assert!(classifier.classify("dawn").await.is_err());
}

#[tokio::test]
async fn test_synthesizer_builds_prompt_and_jpeg_data_uri() {
    let mut server = Server::new_async().await;
    let expected_prompt = build_prompt("A storm hits the fleet.", "fear", "noir");
    let mock = server
        .mock("POST", "/models/test/diffusion")
        .match_body(Matcher::PartialJson(json!({
            "inputs": expected_prompt,
            "parameters": {
                "negative_prompt": NEGATIVE_PROMPT,
                "num_inference_steps": 7,
                "guidance_scale": 9.0,
                "width": 64,
                "height": 64,
            }
        })))
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(png_bytes(16, 16))
        .create_async()
        .await;

    let config = test_config(server.url());
    let synthesizer = HfImageSynthesizer::new(reqwest::Client::new(), &config);

    let rendered = synthesizer
        .synthesize("A storm hits the fleet.", "fear", "noir")
        .await
        .unwrap();

    let payload = rendered
        .data_uri
        .strip_prefix("data:image/jpeg;base64,")
        .unwrap();
    let decoded = image::load_from_memory(&STANDARD.decode(payload).unwrap()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (16, 16));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_synthesizer_error_status_is_capability_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/test/diffusion")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let config = test_config(server.url());
    let synthesizer = HfImageSynthesizer::new(reqwest::Client::new(), &config);

    assert!(synthesizer.synthesize("x", "neutral", "cinematic").await.is_err());
}

#[tokio::test]
async fn test_synthesizer_rejects_non_image_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/test/diffusion")
        .with_status(200)
        .with_body("not an image")
        .create_async()
        .await;

    let config = test_config(server.url());
    let synthesizer = HfImageSynthesizer::new(reqwest::Client::new(), &config);

    assert!(synthesizer.synthesize("x", "neutral", "cinematic").await.is_err());
}

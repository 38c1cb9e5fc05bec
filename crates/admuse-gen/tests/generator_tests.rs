//! Integration tests for the generator's remote-then-fallback behavior

use admuse_config::GenerationConfig;
use admuse_core::{CopySource, Mascot, ProductBrief};
use admuse_gen::CopyGenerator;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn remote_config(base_url: &str) -> GenerationConfig {
    GenerationConfig {
        enabled: true,
        base_url: base_url.to_string(),
        model: "test-model".to_string(),
        api_key: Some("test-key".to_string()),
    }
}

#[tokio::test]
async fn test_template_only_generator_never_calls_out() {
    let generator = CopyGenerator::template_only();

    let (copy, source) = generator
        .generate(Mascot::Capybara, &ProductBrief::default())
        .await;

    assert_eq!(source, CopySource::Template);
    assert!(copy.is_complete());
    assert!(!generator.is_remote_enabled());
}

#[tokio::test]
async fn test_disabled_config_means_template_source() {
    let generator = CopyGenerator::new(&GenerationConfig::default());

    let (_, source) = generator
        .generate(Mascot::Panda, &ProductBrief::default())
        .await;

    assert_eq!(source, CopySource::Template);
}

#[tokio::test]
async fn test_successful_remote_call_is_marked_ai() {
    let mock_server = MockServer::start().await;

    let content = json!({
        "headline": "Bottled Brilliance",
        "tagline": "One bottle, endless refills.",
        "cta": "Grab Yours",
        "blurb": "Built for a lifetime of hydration."
    });
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [ { "message": { "role": "assistant", "content": content.to_string() } } ]
        })))
        .mount(&mock_server)
        .await;

    let generator = CopyGenerator::new(&remote_config(&mock_server.uri()));
    let (copy, source) = generator
        .generate(Mascot::Hamster, &ProductBrief::default())
        .await;

    assert_eq!(source, CopySource::Ai);
    assert_eq!(copy.headline, "Bottled Brilliance");
}

#[tokio::test]
async fn test_remote_failure_falls_back_to_template() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let brief = ProductBrief {
        name: Some("Eco Bottle".to_string()),
        description: None,
        audience: Some("Millennials".to_string()),
    };

    let generator = CopyGenerator::new(&remote_config(&mock_server.uri()));
    let (copy, source) = generator.generate(Mascot::Capybara, &brief).await;

    assert_eq!(source, CopySource::Template);
    assert!(copy.headline.contains("Eco Bottle"));
    assert!(copy.is_complete());
}

#[tokio::test]
async fn test_unreachable_remote_falls_back_to_template() {
    let generator = CopyGenerator::new(&remote_config("http://127.0.0.1:1"));

    let (copy, source) = generator
        .generate(Mascot::Parrot, &ProductBrief::default())
        .await;

    assert_eq!(source, CopySource::Template);
    assert!(copy.is_complete());
}

#[tokio::test]
async fn test_fallback_output_is_identical_across_calls() {
    let generator = CopyGenerator::template_only();
    let brief = ProductBrief {
        name: Some("Eco Bottle".to_string()),
        description: Some("A reusable bottle.".to_string()),
        audience: None,
    };

    let (first, _) = generator.generate(Mascot::Panda, &brief).await;
    let (second, _) = generator.generate(Mascot::Panda, &brief).await;

    assert_eq!(first, second);
}

#![allow(dead_code)]

use ai_content_etl::core::gemini::GenerationConfig;
use ai_content_etl::{AppConfig, ContentPipeline, GeminiClient, LocalStorage};
use httpmock::prelude::*;
use httpmock::Mock;
use tempfile::TempDir;

pub const GENERATE_PATH: &str = "/models/test-model:generateContent";

/// A temp working directory holding `input.txt`, plus a config pointing at `server`.
pub struct Workspace {
    pub dir: TempDir,
    pub config: AppConfig,
}

impl Workspace {
    pub fn new(server: &MockServer, input: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("input.txt"), input).unwrap();

        let config = AppConfig {
            generation: GenerationConfig {
                api_base_url: server.base_url(),
                model: "test-model".to_string(),
                api_key: Some("test-key".to_string()),
            },
            ..AppConfig::default()
        };

        Self { dir, config }
    }

    pub fn pipeline(&self) -> ContentPipeline<LocalStorage, GeminiClient, AppConfig> {
        ContentPipeline::new(
            LocalStorage::new(self.dir.path()),
            GeminiClient::new(self.config.generation_config()),
            self.config.clone(),
        )
    }

    pub fn output_json(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.dir.path().join("content_output.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

/// Gemini response whose single candidate carries `text`.
pub fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

pub fn mock_generation<'a>(server: &'a MockServer, text: &str) -> Mock<'a> {
    let body = gemini_reply(text);
    server.mock(|when, then| {
        when.method(POST)
            .path(GENERATE_PATH)
            .header("x-goog-api-key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body);
    })
}

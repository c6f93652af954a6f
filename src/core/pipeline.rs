use crate::core::parser::parse_content_record;
use crate::core::prompt::PromptBuilder;
use crate::core::{ConfigProvider, ContentRecord, Pipeline, Storage, TextGenerator};
use crate::utils::error::{EtlError, Result};

/// Reads the input text, asks the generator for a rewrite and writes the
/// parsed record back through storage.
pub struct ContentPipeline<S: Storage, G: TextGenerator, C: ConfigProvider> {
    storage: S,
    generator: G,
    config: C,
    prompt: PromptBuilder,
}

impl<S: Storage, G: TextGenerator, C: ConfigProvider> ContentPipeline<S, G, C> {
    pub fn new(storage: S, generator: G, config: C) -> Self {
        let prompt = PromptBuilder::from_template(config.prompt_template());
        Self {
            storage,
            generator,
            config,
            prompt,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, G: TextGenerator, C: ConfigProvider> Pipeline for ContentPipeline<S, G, C> {
    async fn extract(&self) -> Result<String> {
        let path = self.config.input_path();
        tracing::debug!("Reading input text from: {}", path);

        let bytes = self.storage.read_file(path).await?;
        let raw_text = String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
            message: format!("{} is not valid UTF-8: {}", path, e),
        })?;

        tracing::debug!("Read {} bytes of input", raw_text.len());
        Ok(raw_text)
    }

    async fn transform(&self, raw_text: String) -> Result<ContentRecord> {
        let prompt = self.prompt.build(&raw_text);
        let reply = self.generator.generate(&prompt).await?;
        tracing::debug!("Model reply: {}", reply);
        parse_content_record(&reply)
    }

    async fn load(&self, record: &ContentRecord) -> Result<String> {
        let path = self.config.output_path();
        let json = serde_json::to_string_pretty(record)?;

        tracing::debug!("Writing {} bytes to {}", json.len(), path);
        self.storage.write_file(path, json.as_bytes()).await?;
        Ok(path.to_string())
    }
}

pub const RAW_TEXT_PLACEHOLDER: &str = "{raw_text}";

pub const DEFAULT_PROMPT_TEMPLATE: &str = "You are a professional content editor for a README file. \
Take the following raw text and rewrite it into a compelling, professional project summary. \
The output MUST be a single, valid JSON object with two keys: 'title' (a catchy headline) \
and 'summary' (a detailed paragraph summary). The original text is: \"{raw_text}\"";

/// Interpolates raw input text into an instruction template.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    template: String,
}

impl PromptBuilder {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn from_template(template: Option<&str>) -> Self {
        Self::new(template.unwrap_or(DEFAULT_PROMPT_TEMPLATE))
    }

    pub fn build(&self, raw_text: &str) -> String {
        self.template.replace(RAW_TEXT_PLACEHOLDER, raw_text)
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt_quotes_raw_text() {
        let prompt = PromptBuilder::default().build("A tiny ETL tool");
        assert!(prompt.starts_with("You are a professional content editor"));
        assert!(prompt.contains("'title' (a catchy headline)"));
        assert!(prompt.ends_with("The original text is: \"A tiny ETL tool\""));
    }

    #[test]
    fn test_custom_template() {
        let builder = PromptBuilder::from_template(Some("Summarize:\n{raw_text}\n---"));
        assert_eq!(builder.build("hello"), "Summarize:\nhello\n---");
    }

    #[test]
    fn test_raw_text_is_inserted_verbatim() {
        // 內容中的佔位符不會被再次替換
        let prompt = PromptBuilder::new("<{raw_text}>").build("keep {raw_text} literal");
        assert_eq!(prompt, "<keep {raw_text} literal>");
    }
}

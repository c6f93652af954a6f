pub mod cli;
pub mod toml_config;

use crate::core::gemini::GenerationConfig;
use crate::core::prompt::RAW_TEXT_PLACEHOLDER;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "input.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "content_output.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "ai-content-etl")]
#[command(about = "Rewrite raw notes into a title and summary with Gemini for a static site")]
pub struct CliConfig {
    /// Raw text input file [default: input.txt]
    #[arg(long)]
    pub input: Option<String>,

    /// JSON output file [default: content_output.json]
    #[arg(long)]
    pub output: Option<String>,

    /// Gemini model name [default: gemini-2.5-flash]
    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub api_base_url: Option<String>,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Deploy hook called after a successful run
    #[arg(long, env = "VERCEL_DEPLOY_HOOK", hide_env_values = true)]
    pub deploy_hook: Option<String>,

    #[arg(long, help = "Never call the deploy hook")]
    pub no_deploy: bool,

    #[arg(long, help = "TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Log time and memory after each phase")]
    pub monitor: bool,
}

/// Fully resolved settings for one run.
#[derive(Clone)]
pub struct AppConfig {
    pub input_path: String,
    pub output_path: String,
    pub generation: GenerationConfig,
    pub prompt_template: Option<String>,
    pub deploy_hook_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            generation: GenerationConfig::new(None),
            prompt_template: None,
            deploy_hook_url: None,
        }
    }
}

impl AppConfig {
    /// 合併設定檔與預設值，`None` 表示沒有設定檔
    pub fn from_toml(file: Option<&TomlConfig>) -> Self {
        let mut config = Self::default();
        let Some(file) = file else {
            return config;
        };

        if let Some(path) = file.input_path() {
            config.input_path = path.to_string();
        }
        if let Some(path) = file.output_path() {
            config.output_path = path.to_string();
        }
        if let Some(model) = file.model() {
            config.generation.model = model.to_string();
        }
        if let Some(url) = file.api_base_url() {
            config.generation.api_base_url = url.to_string();
        }
        config.generation.api_key = file.api_key().map(str::to_string);
        config.prompt_template = file.prompt_template().map(str::to_string);
        config.deploy_hook_url = if file.deploy_enabled() {
            file.deploy_hook_url().map(str::to_string)
        } else {
            None
        };
        config
    }

    /// CLI 參數與環境變數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = cli
            .config
            .as_deref()
            .map(TomlConfig::from_file)
            .transpose()?;
        let mut config = Self::from_toml(file.as_ref());
        // 設定檔停用部署時，環境變數提供的 hook 也不生效
        let deploy_enabled = file.as_ref().map_or(true, TomlConfig::deploy_enabled);

        if let Some(input) = &cli.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &cli.output {
            config.output_path = output.clone();
        }
        if let Some(model) = &cli.model {
            config.generation.model = model.clone();
        }
        if let Some(url) = &cli.api_base_url {
            config.generation.api_base_url = url.clone();
        }
        if cli.api_key.is_some() {
            config.generation.api_key = cli.api_key.clone();
        }
        if deploy_enabled && cli.deploy_hook.is_some() {
            config.deploy_hook_url = cli.deploy_hook.clone();
        }
        if cli.no_deploy {
            config.deploy_hook_url = None;
        }

        Ok(config)
    }

    pub fn generation_config(&self) -> GenerationConfig {
        self.generation.clone()
    }

    pub fn deploy_hook_url(&self) -> Option<&str> {
        self.deploy_hook_url.as_deref()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("input_path", &self.input_path)
            .field("output_path", &self.output_path)
            .field("generation", &self.generation)
            .field("custom_prompt", &self.prompt_template.is_some())
            .field("deploy_hook_url", &self.deploy_hook_url.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("model", &self.generation.model)?;
        validation::validate_url("api_base_url", &self.generation.api_base_url)?;

        if let Some(template) = &self.prompt_template {
            validation::validate_contains("prompt_template", template, RAW_TEXT_PLACEHOLDER)?;
        }
        // hook URL 不在此檢查，錯誤由 DeployNotifier 記錄，不阻擋輸出
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn prompt_template(&self) -> Option<&str> {
        self.prompt_template.as_deref()
    }
}

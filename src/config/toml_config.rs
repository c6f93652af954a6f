use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file configuration. Every key may be omitted; CLI flags and
/// environment variables take precedence over anything set here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub files: Option<FilesConfig>,
    pub generation: Option<GenerationSection>,
    pub deploy: Option<DeployConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationSection {
    pub model: Option<String>,
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub prompt_template: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployConfig {
    pub hook_url: Option<String>,
    pub enabled: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn input_path(&self) -> Option<&str> {
        self.files.as_ref()?.input_path.as_deref()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.files.as_ref()?.output_path.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.generation.as_ref()?.model.as_deref()
    }

    pub fn api_base_url(&self) -> Option<&str> {
        self.generation.as_ref()?.api_base_url.as_deref()
    }

    /// Unresolved `${VAR}` references count as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.generation
            .as_ref()?
            .api_key
            .as_deref()
            .filter(|k| !k.starts_with("${"))
    }

    pub fn prompt_template(&self) -> Option<&str> {
        self.generation.as_ref()?.prompt_template.as_deref()
    }

    pub fn deploy_hook_url(&self) -> Option<&str> {
        self.deploy
            .as_ref()?
            .hook_url
            .as_deref()
            .filter(|u| !u.starts_with("${"))
    }

    pub fn deploy_enabled(&self) -> bool {
        self.deploy
            .as_ref()
            .and_then(|d| d.enabled)
            .unwrap_or(true)
    }
}

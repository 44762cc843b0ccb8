use crate::app::report::OutputFormat;
use crate::core::fetch::DEFAULT_REGISTRY_ENDPOINT;
use crate::core::aggregate::DEFAULT_CONCURRENT_REQUESTS;
use crate::core::ConfigProvider;
use crate::data::regions;
use crate::domain::model::SortKey;
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{validate_concurrency, validate_registry_endpoint, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinderConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_REGISTRY_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub concurrent_requests: Option<usize>,
    pub default_sort: Option<SortKey>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl FinderConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NFZ_ENDPOINT})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FinderError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn sort_key(&self) -> SortKey {
        self.search.default_sort.unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }
}

impl ConfigProvider for FinderConfig {
    fn registry_endpoint(&self) -> &str {
        &self.registry.endpoint
    }

    fn concurrent_requests(&self) -> usize {
        self.search
            .concurrent_requests
            .unwrap_or(DEFAULT_CONCURRENT_REQUESTS)
    }
}

impl Validate for FinderConfig {
    fn validate(&self) -> Result<()> {
        validate_registry_endpoint("registry.endpoint", &self.registry.endpoint)?;

        if let Some(concurrent) = self.search.concurrent_requests {
            validate_concurrency(
                "search.concurrent_requests",
                concurrent,
                regions::regions().len(),
            )?;
        }

        Ok(())
    }
}

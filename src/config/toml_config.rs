use crate::core::SourceSpec;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source table loaded from a TOML file.
///
/// ```toml
/// [http]
/// timeout_seconds = 10
/// concurrent_requests = 2
///
/// [[sources]]
/// name = "reqres"
/// url = "https://reqres.in/api/users"
///
/// [sources.fields]
/// first_name = ["first_name"]
/// ```
///
/// Field lists left out of `[sources.fields]` use the default lookup order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    pub http: Option<HttpConfig>,
    #[serde(default)]
    pub sources: Vec<SourceSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
    pub concurrent_requests: Option<usize>,
}

impl SourcesConfig {
    /// 從 TOML 檔案載入來源設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_HOST})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.http.as_ref().and_then(|h| h.timeout_seconds)
    }

    pub fn concurrent_requests(&self) -> Option<usize> {
        self.http.as_ref().and_then(|h| h.concurrent_requests)
    }
}

impl Validate for SourcesConfig {
    fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(EtlError::MissingConfigError {
                field: "sources".to_string(),
            });
        }

        validate_sources(&self.sources)?;

        if let Some(concurrent) = self.concurrent_requests() {
            validation::validate_positive_number("http.concurrent_requests", concurrent, 1)?;
        }

        Ok(())
    }
}

pub fn validate_sources(sources: &[SourceSpec]) -> Result<()> {
    for source in sources {
        validation::validate_non_empty_string("sources.name", &source.name)?;
        validation::validate_url("sources.url", &source.url)?;
    }
    validation::validate_unique("sources.name", sources.iter().map(|s| s.name.as_str()))
}

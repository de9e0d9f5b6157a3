use crate::config::toml_config::{validate_sources, SourcesConfig};
use crate::core::{ConfigProvider, OutputFormat, SourceSpec};
use crate::domain::model::default_sources;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

/// Everything one run needs: where to write, in which format, and which
/// sources to query.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sources: Vec<SourceSpec>,
    pub output_dir: String,
    pub output_format: OutputFormat,
    pub concurrent_requests: usize,
    pub timeout_seconds: Option<u64>,
}

impl RunConfig {
    pub fn new(output_dir: impl Into<String>, output_format: OutputFormat) -> Self {
        Self {
            sources: default_sources(),
            output_dir: output_dir.into(),
            output_format,
            concurrent_requests: 1,
            timeout_seconds: None,
        }
    }

    pub fn with_sources(mut self, sources: Vec<SourceSpec>) -> Self {
        self.sources = sources;
        self
    }

    /// 套用 TOML 來源設定；命令列參數之後再覆蓋
    pub fn apply_sources_config(mut self, config: SourcesConfig) -> Self {
        if let Some(timeout) = config.timeout_seconds() {
            self.timeout_seconds = Some(timeout);
        }
        if let Some(concurrent) = config.concurrent_requests() {
            self.concurrent_requests = concurrent;
        }
        self.sources = config.sources;
        self
    }
}

impl ConfigProvider for RunConfig {
    fn sources(&self) -> &[SourceSpec] {
        &self.sources
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;
        validate_sources(&self.sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_builtin_sources_sequentially() {
        let config = RunConfig::new("/tmp/out", OutputFormat::Json);

        assert_eq!(config.sources().len(), 4);
        assert_eq!(config.concurrent_requests(), 1);
        assert_eq!(config.request_timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sources_config_replaces_table() {
        let sources = SourcesConfig::from_toml_str(
            r#"
[http]
timeout_seconds = 3
concurrent_requests = 4

[[sources]]
name = "only"
url = "https://only.example.com/users"
"#,
        )
        .unwrap();

        let config = RunConfig::new("/tmp/out", OutputFormat::Csv).apply_sources_config(sources);

        assert_eq!(config.sources().len(), 1);
        assert_eq!(config.sources()[0].name, "only");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(3)));
        assert_eq!(config.concurrent_requests(), 4);
    }

    #[test]
    fn test_blank_folder_does_not_block_the_run() {
        assert!(RunConfig::new("", OutputFormat::Csv).validate().is_ok());
        assert!(RunConfig::new("  ", OutputFormat::Json).validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_is_invalid() {
        let mut config = RunConfig::new("/tmp/out", OutputFormat::Json);
        config.concurrent_requests = 0;
        assert!(config.validate().is_err());
    }
}

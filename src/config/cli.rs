use crate::config::run::RunConfig;
use crate::config::toml_config::SourcesConfig;
use crate::core::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Command line flags. The folder and format themselves are asked for
/// interactively.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "user-etl")]
#[command(about = "Collect users from several public APIs into one JSON or CSV file")]
pub struct CliConfig {
    /// TOML file replacing the built-in source table
    #[arg(long)]
    pub sources: Option<String>,

    /// Number of sources fetched at the same time (default 1)
    #[arg(long)]
    pub concurrent_requests: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Exit without waiting for a final Enter")]
    pub no_pause: bool,
}

impl CliConfig {
    pub fn to_run_config(
        &self,
        folder: String,
        format: OutputFormat,
        sources: Option<SourcesConfig>,
    ) -> RunConfig {
        let mut config = RunConfig::new(folder, format);
        if let Some(sources) = sources {
            config = config.apply_sources_config(sources);
        }

        // 命令列有指定才覆蓋 TOML 的 [http] 設定
        if let Some(concurrent) = self.concurrent_requests {
            config.concurrent_requests = concurrent;
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = Some(timeout);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "user-etl",
            "--concurrent-requests",
            "3",
            "--timeout-seconds",
            "7",
            "--no-pause",
        ]);

        assert_eq!(cli.concurrent_requests, Some(3));
        assert!(cli.no_pause);
        assert!(!cli.verbose);

        let config = cli.to_run_config("/tmp/out".to_string(), OutputFormat::Json, None);
        assert_eq!(config.concurrent_requests(), 3);
        assert_eq!(config.request_timeout(), Some(std::time::Duration::from_secs(7)));
        assert_eq!(config.sources().len(), 4);
    }

    fn http_sources() -> SourcesConfig {
        SourcesConfig::from_toml_str(
            r#"
[http]
timeout_seconds = 10
concurrent_requests = 4

[[sources]]
name = "reqres"
url = "https://reqres.in/api/users"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_explicit_flag_overrides_toml_http_settings() {
        let cli = CliConfig::parse_from([
            "user-etl",
            "--concurrent-requests",
            "1",
            "--timeout-seconds",
            "2",
        ]);

        let config = cli.to_run_config("/tmp/out".to_string(), OutputFormat::Csv, Some(http_sources()));
        assert_eq!(config.concurrent_requests(), 1);
        assert_eq!(config.request_timeout(), Some(std::time::Duration::from_secs(2)));
        assert_eq!(config.sources().len(), 1);
    }

    #[test]
    fn test_toml_http_settings_apply_without_flags() {
        let cli = CliConfig::parse_from(["user-etl"]);
        assert_eq!(cli.concurrent_requests, None);

        let config = cli.to_run_config("/tmp/out".to_string(), OutputFormat::Csv, Some(http_sources()));
        assert_eq!(config.concurrent_requests(), 4);
        assert_eq!(config.request_timeout(), Some(std::time::Duration::from_secs(10)));

        let defaults = cli.to_run_config("/tmp/out".to_string(), OutputFormat::Csv, None);
        assert_eq!(defaults.concurrent_requests(), 1);
        assert_eq!(defaults.request_timeout(), None);
    }
}

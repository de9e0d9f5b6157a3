pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{run::RunConfig, toml_config::SourcesConfig, LocalStorage};

pub use crate::core::{etl::EtlEngine, pipeline::UserPipeline};
pub use domain::model::{OutputFormat, RunSummary, SourceSpec, UserRecord};
pub use utils::error::{EtlError, Result};

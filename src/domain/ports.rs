use crate::domain::model::{Collection, FetchOutcome, OutputFormat, SourceSpec};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn sources(&self) -> &[SourceSpec];
    fn output_dir(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn concurrent_requests(&self) -> usize;
    fn request_timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    fn output_format(&self) -> OutputFormat;
    async fn extract(&self) -> Result<Vec<FetchOutcome>>;
    async fn transform(&self, fetched: Vec<FetchOutcome>) -> Result<Collection>;
    async fn load(&self, collection: &Collection) -> Result<String>;
}

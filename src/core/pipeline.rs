use crate::core::collector::Collector;
use crate::core::fetcher::HttpFetcher;
use crate::core::{exporter, normalizer};
use crate::core::{
    Collection, ConfigProvider, FetchOutcome, OutputFormat, Pipeline, SourceReport, Storage,
};
use crate::utils::error::Result;

/// Fetch, normalize, and export users from every configured source.
pub struct UserPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) fetcher: HttpFetcher,
}

impl<S: Storage, C: ConfigProvider> UserPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let fetcher = HttpFetcher::new(config.request_timeout());
        Self {
            storage,
            config,
            fetcher,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for UserPipeline<S, C> {
    fn output_format(&self) -> OutputFormat {
        self.config.output_format()
    }

    async fn extract(&self) -> Result<Vec<FetchOutcome>> {
        let sources = self.config.sources();
        tracing::info!(
            "📡 Fetching {} sources ({} at a time)",
            sources.len(),
            self.config.concurrent_requests()
        );

        Ok(self
            .fetcher
            .fetch_all(sources, self.config.concurrent_requests())
            .await)
    }

    async fn transform(&self, fetched: Vec<FetchOutcome>) -> Result<Collection> {
        let mut collector = Collector::new();

        for FetchOutcome { source, body } in fetched {
            let result = body.and_then(|body| normalizer::normalize_body(&source.name, &body, &source.fields));
            collector.absorb(SourceReport {
                source: source.name,
                url: source.url,
                result,
            });
        }

        tracing::info!("🔧 Collected {} users", collector.len());
        Ok(collector.finish())
    }

    async fn load(&self, collection: &Collection) -> Result<String> {
        let format = self.config.output_format();
        let data = exporter::render(format, &collection.records)?;

        tracing::debug!("💾 Writing {} ({} bytes)", format.file_name(), data.len());
        self.storage.write_file(format.file_name(), &data).await
    }
}

pub mod collector;
pub mod etl;
pub mod exporter;
pub mod fetcher;
pub mod normalizer;
pub mod pipeline;

pub use crate::domain::model::{
    Collection, FetchOutcome, FieldMapping, NormalizedBatch, OutputFormat, RejectedEntry,
    RunSummary, SourceReport, SourceSpec, SourceSummary, UserField, UserRecord,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

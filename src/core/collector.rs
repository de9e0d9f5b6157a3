use crate::core::{Collection, SourceReport, SourceSummary};
use crate::utils::error::EtlError;

pub const MISSING_LIST_MESSAGE: &str = "No user information found in the API response.";
pub const INCOMPLETE_ENTRY_MESSAGE: &str = "Incomplete user information found in the API response.";

/// Merges per-source reports into one ordered [`Collection`].
///
/// This is the only place that decides how a failed source or a rejected
/// entry is reported; everything upstream just returns values.
#[derive(Debug, Default)]
pub struct Collector {
    collection: Collection,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, report: SourceReport) {
        let SourceReport { source, url, result } = report;

        let summary = match result {
            Ok(batch) => {
                for rejected in &batch.rejected {
                    let missing: Vec<&str> = rejected.missing.iter().map(|f| f.label()).collect();
                    tracing::warn!(
                        "⚠️ {}: entry #{} skipped, missing {}",
                        source,
                        rejected.index,
                        missing.join(", ")
                    );
                    self.collection
                        .diagnostics
                        .push(INCOMPLETE_ENTRY_MESSAGE.to_string());
                }

                tracing::info!("📥 {}: {} users accepted", source, batch.records.len());
                let summary = SourceSummary {
                    source,
                    accepted: batch.records.len(),
                    rejected: batch.rejected.len(),
                    failed: false,
                };
                self.collection.records.extend(batch.records);
                summary
            }
            Err(EtlError::MissingUserList { .. }) => {
                tracing::warn!("⚠️ {}: no results/data/users list in response", source);
                self.collection
                    .diagnostics
                    .push(MISSING_LIST_MESSAGE.to_string());
                SourceSummary::failed(source)
            }
            Err(e) => {
                tracing::warn!(
                    "❌ {}: {} (Category: {:?})",
                    source,
                    e,
                    e.category()
                );
                self.collection.diagnostics.push(format!(
                    "An error occurred while retrieving users from {}: {}",
                    url, e
                ));
                SourceSummary::failed(source)
            }
        };

        self.collection.sources.push(summary);
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn finish(self) -> Collection {
        self.collection
    }
}

impl SourceSummary {
    fn failed(source: String) -> Self {
        Self {
            source,
            accepted: 0,
            rejected: 0,
            failed: true,
        }
    }
}

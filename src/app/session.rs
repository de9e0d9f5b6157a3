use crate::config::prompt;
use crate::config::run::RunConfig;
use crate::config::LocalStorage;
use crate::core::etl::EtlEngine;
use crate::core::pipeline::UserPipeline;
use crate::core::{OutputFormat, RunSummary};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub monitor: bool,
    pub pause: bool,
}

#[derive(Debug)]
pub enum SessionOutcome {
    Completed(RunSummary),
    /// The format answer was not JSON or CSV; nothing was fetched or written.
    InvalidFormat(EtlError),
}

/// Asks for the folder and format, runs the pipeline, and prints the source
/// diagnostics, the save result and the total.
///
/// `configure` turns the two answers into the run configuration, so callers
/// decide which sources and HTTP settings apply.
pub async fn run_session<R, W, F>(
    input: &mut R,
    output: &mut W,
    configure: F,
    options: SessionOptions,
) -> Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
    F: FnOnce(String, OutputFormat) -> RunConfig,
{
    let answers = prompt::read_answers(input, output)?;

    let format = match answers.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            tracing::error!("❌ {}", e);
            writeln!(output, "{}", e.user_friendly_message())?;
            return Ok(SessionOutcome::InvalidFormat(e));
        }
    };

    // 資料夾不在這裡檢查，寫入失敗時照樣回報筆數
    let config = configure(answers.folder, format);
    config.validate()?;
    tracing::debug!("Run config: {:?}", config);

    let storage = LocalStorage::new(config.output_dir.clone());
    let engine = EtlEngine::new_with_monitoring(UserPipeline::new(storage, config), options.monitor);
    let summary = engine.run().await?;

    if let Some(error) = &summary.export_error {
        tracing::warn!("⚠️ No file written: {}", error);
    }
    for diagnostic in &summary.diagnostics {
        writeln!(output, "{}", diagnostic)?;
    }
    writeln!(output, "{}", summary.export_message)?;
    writeln!(output, "Total number of users: {}", summary.total_records)?;
    output.flush()?;

    if options.pause {
        prompt::wait_for_enter(input)?;
    }

    Ok(SessionOutcome::Completed(summary))
}

use clap::Parser;
use user_etl::app::session::{run_session, SessionOptions, SessionOutcome};
use user_etl::utils::error::ErrorSeverity;
use user_etl::utils::{logger, validation::Validate};
use user_etl::{CliConfig, EtlError, SourcesConfig};

fn exit_with(e: &EtlError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High | ErrorSeverity::Critical => 1,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 先載入來源設定，設定錯誤時不進入互動
    let sources = match &cli.sources {
        Some(path) => {
            tracing::info!("📁 Loading sources from: {}", path);
            let sources = SourcesConfig::from_file(path).unwrap_or_else(|e| exit_with(&e));
            if let Err(e) = sources.validate() {
                exit_with(&e);
            }
            Some(sources)
        }
        None => None,
    };

    let options = SessionOptions {
        monitor: cli.monitor,
        pause: !cli.no_pause,
    };
    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout();

    let outcome = run_session(
        &mut input,
        &mut output,
        |folder, format| cli.to_run_config(folder, format, sources),
        options,
    )
    .await;

    match outcome {
        Ok(SessionOutcome::Completed(_)) => Ok(()),
        Ok(SessionOutcome::InvalidFormat(_)) => std::process::exit(1),
        Err(e) => exit_with(&e),
    }
}

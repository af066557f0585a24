use clap::Parser;
use pair_overlap::core::ConfigProvider;
use pair_overlap::utils::error::{ErrorSeverity, PairError};
use pair_overlap::utils::{logger, validation::Validate};
use pair_overlap::{CliConfig, CsvPipeline, EtlEngine, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pair-overlap");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => execute(config).await,
                Err(e) => Err(e),
            }
        }
        None => execute(cli).await,
    };

    match outcome {
        Ok(destination) => {
            tracing::info!("✅ Analysis completed successfully");
            if destination != "stdout" {
                println!("📁 Output saved to: {}", destination);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

async fn execute<C>(config: C) -> Result<String, PairError>
where
    C: ConfigProvider + Validate + 'static,
{
    // 驗證配置
    config.validate()?;

    let pipeline = CsvPipeline::new(LocalStorage::default(), config);
    EtlEngine::new(pipeline).run().await
}

use ai_content_etl::utils::{logger, validation::Validate};
use ai_content_etl::{
    AppConfig, CliConfig, ContentPipeline, DeployNotifier, DeployOutcome, EtlEngine,
    GeminiClient, LocalStorage, ProcessingOutcome,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 不存在時直接略過，已設定的環境變數優先
    dotenvy::dotenv().ok();
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ai-content-etl");

    let config = match AppConfig::resolve(&cli).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let generator = GeminiClient::new(config.generation_config());
    let hook_url = config.deploy_hook_url().map(str::to_string);
    let pipeline = ContentPipeline::new(LocalStorage::current_dir(), generator, config);

    let mut engine = EtlEngine::new_with_monitoring(pipeline, cli.monitor);
    if !cli.no_deploy {
        engine = engine.with_notifier(DeployNotifier::new(hook_url));
    }

    match engine.run().await {
        Ok(report) => {
            match &report.outcome {
                ProcessingOutcome::Generated => {
                    println!("✅ Success! Content saved to {}", report.output_path);
                }
                ProcessingOutcome::Fallback { reason } => {
                    // 下游網站仍可讀取佔位紀錄，因此不以非零碼結束
                    println!("❌ An error occurred during AI processing: {}", reason);
                    println!("📁 Fallback record saved to {}", report.output_path);
                }
            }

            match &report.deploy {
                Some(DeployOutcome::Triggered { .. }) => {
                    println!("✅ Deploy hook triggered successfully.");
                }
                Some(DeployOutcome::Rejected { status, .. }) => {
                    println!("❌ Failed to trigger deploy hook. Status: {}", status);
                }
                Some(DeployOutcome::Unreachable { reason }) => {
                    println!("❌ Failed to reach deploy hook: {}", reason);
                }
                Some(DeployOutcome::Skipped) => {
                    println!("⚠️ Deploy hook not set. Skipping deployment trigger.");
                }
                None => {}
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Could not write output: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

use clap::Parser;
use std::process::ExitCode;
use sf6ta_kml::utils::{logger, validation::Validate};
use sf6ta_kml::{ArcadePipeline, CliConfig, EtlEngine, LocalStorage, NetworkLinkPipeline};

async fn run(config: CliConfig) -> sf6ta_kml::Result<()> {
    config.validate()?;

    let storage = LocalStorage::new(config.output_path.clone());

    let network_link = EtlEngine::new(NetworkLinkPipeline::new(storage.clone(), config.clone()));
    network_link.run().await?;

    let arcades = EtlEngine::new(ArcadePipeline::new(storage, config));
    arcades.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sf6ta-kml");
    tracing::debug!("CLI config: {:?}", config);

    match run(config).await {
        Ok(()) => {
            tracing::info!("✅ KML export completed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            ExitCode::FAILURE
        }
    }
}

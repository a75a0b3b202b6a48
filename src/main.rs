use clap::Parser;
use pokedex_etl::utils::{logger, validation::Validate};
use pokedex_etl::{CliConfig, EtlEngine, LocalStorage, PokeApiPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pokedex-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = PokeApiPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await? {
        Some(path) => {
            println!("✅ ETL process completed successfully!");
            println!("📁 Output saved to: {}", path);
        }
        None => {
            println!("⚠️ ETL process finished with no data to save");
        }
    }

    Ok(())
}

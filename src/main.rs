use clap::Parser;
use map_link::utils::error::MapLinkError;
use map_link::utils::{logger, validation::Validate};
use map_link::{CliConfig, MapLinkEngine, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ map-link failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        std::process::exit(e.severity().exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), MapLinkError> {
    let toml_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    toml_config.validate()?;

    if config.list_providers {
        for provider in toml_config.registry().providers() {
            println!("{}\t{}", provider.id, provider.name);
        }
        return Ok(());
    }

    let engine = MapLinkEngine::from_config(
        &toml_config,
        config.provider.as_deref(),
        config.policy_override(),
    )?;
    tracing::info!("🗺️ Using provider: {}", engine.provider().name);
    let address = config.address.to_record()?;
    if address.is_empty() {
        tracing::warn!("Address has no components, link will have an empty destination");
    }

    println!("{}", engine.render(&address, config.output_mode())?);
    Ok(())
}

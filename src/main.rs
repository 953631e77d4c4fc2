use clap::Parser;
use desc_replacer::utils::{logger, validation::Validate};
use desc_replacer::{CliConfig, LocalStorage, ReplaceEngine, RunConfig, TextReplacer};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match RunConfig::from_cli(&cli).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    tracing::info!(
        "🎯 Target: {} ({} replacements)",
        config.target_path.display(),
        config.table.len()
    );

    let replacer = TextReplacer::new(LocalStorage::new(), config);
    let engine = ReplaceEngine::new(replacer);

    match engine.run() {
        Ok(summary) => {
            if let Some(path) = summary.saved_to {
                tracing::info!("📁 Saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

use clap::Parser;
use class_directory::utils::error::ErrorSeverity;
use class_directory::utils::{logger, validation::Validate};
use class_directory::{ClassDirectoryClient, ClassRecord, CliConfig, DirectoryError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli).await {
        Ok(record) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig) -> Result<ClassRecord, DirectoryError> {
    let config = cli.client_config()?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }
    tracing::info!("Using class directory at {}", config.base_url);

    let directory = ClassDirectoryClient::new(config);
    match cli.command.class_id() {
        None => directory.fetch_all().await,
        Some(id) => directory.fetch_by_id(&id).await,
    }
}

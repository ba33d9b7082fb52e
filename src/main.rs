use clap::Parser;
use shopee_watch::cli::{self, CheckCommand, Cli, Commands};
use shopee_watch::domain::ProductKey;
use shopee_watch::infrastructure::config::Config;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    match cli.resolved_command() {
        Commands::Run => {
            if let Err(e) = cli::run::execute(config).await {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        Commands::Check(CheckCommand::Config) => cli::check::execute_config(&config),
        Commands::Check(CheckCommand::Product(args)) => {
            let key = ProductKey::new(args.shop_id, args.item_id);
            if !cli::check::execute_product(&config, key).await {
                std::process::exit(1);
            }
        }
    }
}

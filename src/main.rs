use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use postgrid::app::AppContext;
use postgrid::cli::{commands, Cli, Commands};
use postgrid::config::BlockSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { json } => {
            let settings = BlockSettings::load(cli.config.as_deref())?;
            let ctx = AppContext::new();
            commands::render(&ctx, &settings, json).await?;
        }
        Commands::Init => {
            commands::init(cli.config.as_deref())?;
        }
        Commands::ConfigPath => {
            commands::config_path()?;
        }
    }

    Ok(())
}

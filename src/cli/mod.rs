pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "postgrid")]
#[command(about = "Render a recent-posts image grid from a social feed", long_about = None)]
pub struct Cli {
    /// Path to the settings file (default: ~/.config/postgrid/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch recent posts and print the rendered grid
    Render {
        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a commented default settings file
    Init,
    /// Print the settings file location
    ConfigPath,
}

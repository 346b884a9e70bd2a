use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hylla-tui")]
#[command(about = "Terminal UI for searching the Hylla book catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against a real catalog server
    Run,
    /// Run in dev mode with a built-in sample catalog
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}

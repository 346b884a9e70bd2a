mod app;
mod bootstrap;
mod cli;
mod config;
mod runtime;
mod search;
mod ui;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use bokindex::CatalogClient;
use cli::{Cli, Commands};
use config::HyllaConfig;
use search::{CatalogBackend, DevCatalog};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            let config = HyllaConfig::load()?;
            let backend: Arc<dyn CatalogBackend> = Arc::new(CatalogClient::new(config.api_url));
            run_tui(backend).await
        }
        Commands::Dev => {
            let backend: Arc<dyn CatalogBackend> = Arc::new(DevCatalog::new());
            run_tui(backend).await
        }
        Commands::ConfigPath => {
            let path = HyllaConfig::config_path()?;
            if !path.exists() {
                HyllaConfig::default().save()?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run_tui(backend: Arc<dyn CatalogBackend>) -> Result<()> {
    let (completion_tx, mut completion_rx) = runtime::channel();
    let mut app = App::new(backend, completion_tx);
    bootstrap::initialize_app_state(&mut app);

    // Setup terminal. Mouse capture is on so popup clicks reach the app.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &mut completion_rx).await;

    // Restore terminal before surfacing any error from the loop.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

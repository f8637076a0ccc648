//! Vimail - Modal Terminal Mail Client
//!
//! A vim-style TUI email client.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod ai;
mod app;
mod controller;
mod directory;
mod input;
mod logging;
mod mail;
mod ui;

use app::{App, AppConfig};

/// Vim-style terminal email client
#[derive(Parser)]
#[command(name = "vimail")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON mailbox fixture to load instead of the sample mail
    #[arg(long)]
    mailbox: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a user-created webhook payload in the user directory
    IngestUser {
        /// Raw JSON payload
        payload: String,

        /// Directory file (overrides the config)
        #[arg(long)]
        directory: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::default_path);
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;

    let _guard = logging::init(&config.log_level)?;
    tracing::info!(config = %config_path.display(), "starting");
    if let Some(used) = config.layout.reading_override() {
        tracing::warn!(
            configured = config.layout.reading,
            used,
            "layout.reading is the remainder after sidebar and list; configured value ignored"
        );
    }

    if let Some(Commands::IngestUser { payload, directory: target }) = cli.command {
        let path = target.unwrap_or_else(|| config.directory.clone());
        let record = directory::ingest(&path, &payload)
            .with_context(|| format!("Failed to ingest user into {}", path.display()))?;
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let mut app = App::load(config, config_path, cli.mailbox.as_deref())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            tracing::info!("exiting");
            return Ok(());
        }
    }
}

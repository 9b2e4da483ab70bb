// SorTTY: Step-by-Step Insertion Sort in the Terminal

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortty::config::{Args, Config};
use sortty::session::Session;
use sortty::ui::App;

/// Send tracing output to `path`; the terminal itself belongs to the TUI
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortty=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Run with --help to see the supported ranges.");
            std::process::exit(1);
        }
    };

    if let Some(path) = config.log_file() {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: cannot open log file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let session = Session::new(&config);
    info!(
        size = session.array_size(),
        speed_ms = session.speed_ms(),
        source = ?session.controller().source(),
        "starting visualizer"
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

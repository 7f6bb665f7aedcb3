mod app;
mod config;
mod error;
mod event;
mod indicator;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::app::App;
use crate::config::CliArgs;
use crate::error::TridotError;
use crate::event::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse();

    if cli.print_default_config {
        print!("{}", config::default_config_toml());
        return Ok(());
    }

    // Initialize color-eyre with a panic hook that restores the terminal
    install_panic_hook();

    let config = config::load(&cli)?;
    init_logging(&config.general.log_level, &cli.log)?;

    info!("tridot starting");

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| TridotError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create event handler and app
    let mut event_handler = EventHandler::new(config.tick_rate_ms());
    let mut app = App::new(&config);

    // ── Main event loop ───────────────────────────────────────────────
    loop {
        // Draw
        terminal.draw(|f| ui::draw(f, &mut app))?;

        // Handle events
        match event_handler.next().await {
            Some(event) => {
                app.handle_event(event);
                if app.should_quit {
                    break;
                }
            }
            None => break,
        }
    }

    // Teardown: stop the animation and the event tasks, then restore
    app.indicator.stop();
    event_handler.stop();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("tridot exiting");
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call default handler
        default_hook(panic_info);
    }));
    color_eyre::install().ok();
}

/// Initialize tracing to a log file
fn init_logging(level: &str, log_path: &Option<PathBuf>) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    if let Some(path) = log_path {
        let file = std::fs::File::create(path)
            .wrap_err_with(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
            )
            .with_writer(file)
            .with_ansi(false)
            .init();
    } else {
        // No logging if no log path specified (can't log to stdout in a TUI)
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("off"))
            .with_writer(io::sink)
            .init();
    }
    Ok(())
}

//! Depmap TUI binary: terminal setup, event loop, teardown.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use depmap_tui::config::{self, TuiConfig};
use depmap_tui::{input, ui, App};

#[derive(Parser)]
#[command(
    name = "depmap-tui",
    about = "Interactive dependency map of the Forex AI bot"
)]
struct Args {
    /// Config file. Defaults to <config dir>/depmap/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file, written only when RUST_LOG is set.
    #[arg(long, default_value = "depmap-tui.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let config_path = args.config.unwrap_or_else(config::default_path);
    let (config, config_err) = config::load_or_default(&config_path);
    tracing::info!(path = %config_path.display(), ?config, "starting");

    let mut app = App::new(&config);
    if let Some(err) = config_err {
        tracing::warn!(error = %err, "config ignored, using defaults");
        app.set_warning(format!("Config ignored: {err}"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        expanded = app.expansion.expanded_count(),
        "shutdown"
    );
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &TuiConfig,
) -> Result<()> {
    let tick = config.tick_rate();
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Log to a file so the alternate screen stays clean. Off unless RUST_LOG is set.
fn init_logging(path: &Path) -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

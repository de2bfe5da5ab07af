//! Memory calculator in the terminal
//!
//! Run with: cargo run --example calculator_tui -- --log-file memcalc.log

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use memcalc::config::CalculatorConfig;
use memcalc::logging::init_tracing;
use memcalc::tui::{render, CalculatorApp, UiLayout};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

#[derive(Debug, Parser)]
#[command(name = "calculator_tui", about = "Memory calculator for the terminal")]
struct Args {
    /// JSON configuration file
    #[arg(short, long, env = "MEMCALC_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "memcalc=debug"
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    if let Some(file) = args.log_file {
        config = config.with_log_file(file);
    }
    if let Some(filter) = args.log_filter {
        config = config.with_log_filter(filter);
    }
    init_tracing(&config.logging)?;
    tracing::info!(?config, "starting calculator");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, CalculatorApp::with_config(config.tui));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(%err, "calculator exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if let Some(keypad) = UiLayout::new(area, app.config()).keypad {
                    app.click(keypad, mouse.column, mouse.row);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

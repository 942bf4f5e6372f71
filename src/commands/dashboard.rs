//! Dashboard command implementation
//!
//! Runs the interactive calculator until the user quits.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

use ai_impact::{
    config::Config,
    dashboard::{ui, DashboardApp},
};

/// Execute the dashboard command
pub fn execute(cfg: &Config, model: Option<&str>, requests: Option<i64>) -> Result<()> {
    // Build state before touching the terminal so errors print normally
    let app = DashboardApp::new(
        cfg.load_catalog()?,
        cfg.estimator.settings(),
        cfg.estimator.requests,
        model,
        requests,
    )?;

    run_dashboard(app)
}

fn run_dashboard(mut app: DashboardApp) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let result = loop {
        if let Err(e) = terminal.draw(|f| ui::render(&app, f)) {
            break Err(e.into());
        }

        match event::poll(Duration::from_millis(250)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) {
                        break Ok(());
                    }
                }
                Ok(_) => {}
                Err(e) => break Err(e.into()),
            },
            Ok(false) => {}
            Err(e) => break Err(e.into()),
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

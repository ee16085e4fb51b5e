//! Terminal setup and the main event loop

use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::time::Duration;

use super::app::App;
use super::core::{Action, Component, EventHandler, EventType};
use crate::catalog::{seed, PrizeCatalog};
use crate::config::Config;
use crate::logger::LogBuffer;

/// Run the prizes page until the user quits
pub async fn run_app(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let catalog = PrizeCatalog::new(
        seed::demo_prizes(config.catalog.demo_rows),
        Duration::from_millis(config.catalog.latency_ms),
    );
    let mut app = App::new(&config, Arc::new(catalog), log_buffer)?;
    let mut event_handler = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.init()?;
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                let action = app.handle_key_events(key);
                app.update(action);
                needs_render = true;
            }
            EventType::Resize(_, _) => needs_render = true,
            EventType::Tick => {
                app.tick();
                // Spinner and row animation advance every tick
                needs_render = true;
            }
            EventType::Other => {}
        }

        for action in app.process_background_actions() {
            if matches!(app.update(action), Action::Quit) {
                return Ok(());
            }
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

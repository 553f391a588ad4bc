//! Terminal setup and the main event loop.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::api::BoardApi;
use crate::config::Config;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{EventHandler, EventType};

/// Run the application until the user quits. Restores the terminal even when
/// the loop errors out.
pub async fn run_app(api: Arc<dyn BoardApi>, config: Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(api, config);
    app.load_initial_data().await;

    let result = run_app_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppComponent) -> Result<()> {
    let mut event_handler = EventHandler::new();
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(..)) => {
                app.handle_event(event).await;
                needs_render = true;
            }
            EventType::Tick | EventType::Other => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

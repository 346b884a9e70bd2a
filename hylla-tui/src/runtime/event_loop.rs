use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::dismissal::handle_mouse;
use super::views::handle_view_key;
use super::CompletionRx;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    completion_rx: &mut CompletionRx,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.search.loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handle_view_key(key, app),
                Event::Mouse(mouse) => handle_mouse(mouse, app),
                _ => {}
            }
        }

        // Fetches land here, between input rounds, so every apply runs on
        // this thread against a settled app state.
        while let Ok(completion) = completion_rx.try_recv() {
            app.apply_completion(completion);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

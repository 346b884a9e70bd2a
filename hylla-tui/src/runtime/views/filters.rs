use crate::app::{App, FilterField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_filters_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        // a: apply current filters and search
        KeyCode::Char('a') | KeyCode::Char('A') => app.apply_filters(),
        // r: reset all filters
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_filters(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.close_filters(),
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => app.next_filter_field(),
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => app.previous_filter_field(),
        KeyCode::Enter | KeyCode::Char(' ') => match app.filter_field {
            FilterField::Category | FilterField::Author => app.open_picker(app.filter_field),
            FilterField::Published => app.cycle_published(true),
        },
        KeyCode::Right | KeyCode::Char('l') => {
            if app.filter_field == FilterField::Published {
                app.cycle_published(true);
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if app.filter_field == FilterField::Published {
                app.cycle_published(false);
            }
        }
        _ => {}
    }
}

use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_browse_key(key: KeyEvent, app: &mut App) {
    match key.code {
        // Ctrl+C quits from anywhere
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        // Ctrl+X: clear the query
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => app.clear_query(),
        // Ctrl+F: open the filter panel
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => app.open_filters(),
        // Ctrl+R: drop all filters and search again
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.reset_filters()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.query_input_char(c);
        }
        KeyCode::Backspace => app.query_input_backspace(),
        KeyCode::Enter => handle_enter_key(app),
        KeyCode::Esc => handle_escape_key(app),
        KeyCode::Down => {
            if app.suggest.visible {
                app.suggestion_move_down();
            } else {
                app.select_next_result();
            }
        }
        KeyCode::Up => {
            if app.suggest.visible {
                app.suggestion_move_up();
            } else {
                app.select_previous_result();
            }
        }
        KeyCode::Left => app.query_move_cursor(true),
        KeyCode::Right => app.query_move_cursor(false),
        KeyCode::Home => app.query_cursor_home_end(true),
        KeyCode::End => app.query_cursor_home_end(false),
        _ => {}
    }
}

/// Enter adopts the highlighted suggestion if one is highlighted, and
/// otherwise submits the query exactly as typed.
fn handle_enter_key(app: &mut App) {
    if app.suggest.visible {
        if let Some(index) = app.suggestion_cursor {
            app.select_suggestion(index);
            return;
        }
    }
    app.submit_search();
}

fn handle_escape_key(app: &mut App) {
    if app.suggest.visible {
        app.dismiss_suggestions();
    } else {
        app.quit();
    }
}

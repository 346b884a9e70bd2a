use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One handler covers both the category and the author picker. Every
/// printable character goes to the filter input, so names containing any
/// letter stay reachable.
pub(super) fn handle_picker_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.picker_input_clear()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.picker_input_char(c);
        }
        KeyCode::Backspace => app.picker_input_backspace(),
        KeyCode::Down => app.picker_select_next(),
        KeyCode::Up => app.picker_select_previous(),
        KeyCode::Left => app.picker_move_cursor(true),
        KeyCode::Right => app.picker_move_cursor(false),
        KeyCode::Home => app.picker_cursor_home_end(true),
        KeyCode::End => app.picker_cursor_home_end(false),
        KeyCode::Enter => app.confirm_picker(),
        KeyCode::Esc => app.cancel_picker(),
        _ => {}
    }
}

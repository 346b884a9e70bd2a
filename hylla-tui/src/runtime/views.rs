use crate::app::{self, App};
use crossterm::event::KeyEvent;

mod browse;
mod filters;
mod pickers;

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App) {
    match &app.current_view {
        app::View::Browse => browse::handle_browse_key(key, app),
        app::View::Filters => filters::handle_filters_key(key, app),
        app::View::SelectCategory | app::View::SelectAuthor => {
            pickers::handle_picker_key(key, app)
        }
    }
}

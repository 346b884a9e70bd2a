//! Mouse handling for the suggestion popup. A left click on a suggestion
//! row adopts it; a left click anywhere else closes the popup and
//! invalidates whatever suggestion fetch is still in flight.

use crate::app::App;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

pub(super) fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if !app.suggest.visible {
        return;
    }

    let Some(area) = app.suggestion_area else {
        // No popup rect was recorded this frame, so there is nothing to
        // hit-test against.
        return;
    };

    if !point_in_rect(area, mouse.column, mouse.row) {
        app.dismiss_suggestions();
        return;
    }

    if let Some(index) = suggestion_row_at(area, mouse.row, app.suggest.suggestions.len()) {
        app.select_suggestion(index);
    }
}

/// Returns `true` if the point `(x, y)` is inside the rectangle.
const fn point_in_rect(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

/// Maps a click row inside the popup to a suggestion index. The popup is a
/// bordered list, so the first item sits one row below the top edge and the
/// last row of the rect is the bottom border.
fn suggestion_row_at(area: Rect, y: u16, len: usize) -> Option<usize> {
    if y <= area.y || y >= area.y.saturating_add(area.height).saturating_sub(1) {
        return None;
    }
    let index = (y - area.y - 1) as usize;
    if index < len {
        Some(index)
    } else {
        None
    }
}

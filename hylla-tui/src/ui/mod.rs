use crate::app::{App, Severity, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

mod browse_view;
mod filters_view;
mod picker_views;

pub fn render(frame: &mut Frame, app: &mut App) {
    // The popup rect is recorded while drawing, so clear it up front; mouse
    // hits must never test against a rect from an earlier frame.
    app.suggestion_area = None;

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Browse => browse_view::render_browse(frame, app, body),
        View::Filters => filters_view::render_filter_panel(frame, app, body),
        View::SelectCategory => picker_views::render_category_picker(frame, app, body),
        View::SelectAuthor => picker_views::render_author_picker(frame, app, body),
    }
}

/// Top bar: a throbber that spins while a search is in flight, plus the
/// application title.
fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top padding
            Constraint::Length(1), // content
        ])
        .split(area);
    let content_row = rows[1];
    let area = Rect {
        x: content_row.x + 2,
        y: content_row.y,
        width: content_row.width.saturating_sub(4),
        height: 1,
    };

    const LABEL: &str = " Hylla Book Search";

    let throbber_area = Rect {
        x: area.x,
        y: area.y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(1),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.search.loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, Style::default().fg(Color::Yellow))),
        label_area,
    );
}

/// Bordered status line. Destructive notices render red, info notices
/// green; with no notice pending it falls back to a contextual message.
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let contextual = if app.search.loading {
        "Searching...".to_string()
    } else if app.suggest.query.value.is_empty() {
        "Browsing the whole catalog".to_string()
    } else {
        format!("Results for \"{}\"", app.suggest.query.value)
    };

    let (text, color) = match &app.notice {
        Some(notice) => (
            notice.text.clone(),
            match notice.severity {
                Severity::Destructive => Color::Red,
                Severity::Info => Color::Green,
            },
        ),
        None => (contextual, Color::White),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(color))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (i, (key, action)) in entries.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        if i + 1 == entries.len() {
            spans.push(Span::raw(format!(": {}", action)));
        } else {
            spans.push(Span::raw(format!(": {}  ", action)));
        }
    }

    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}

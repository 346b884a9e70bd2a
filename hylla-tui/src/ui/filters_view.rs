use super::*;
use crate::app::FilterField;
use bokindex::PublishedFilter;

pub fn render_filter_panel(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Category
            Constraint::Length(3), // Author
            Constraint::Length(3), // Published
            Constraint::Min(0),
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let filters = &app.search.filters;
    render_facet_row(
        frame,
        chunks[0],
        " Category ",
        filters.category.as_deref(),
        app.filter_field == FilterField::Category,
    );
    render_facet_row(
        frame,
        chunks[1],
        " Author ",
        filters.author.as_deref(),
        app.filter_field == FilterField::Author,
    );
    render_published_row(
        frame,
        chunks[2],
        filters.published,
        app.filter_field == FilterField::Published,
    );

    render_controls(
        frame,
        chunks[4],
        &[
            ("↑↓/j/k", "Navigate"),
            ("Enter", "Edit/Cycle"),
            ("A", "Apply & search"),
            ("R", "Reset"),
            ("Esc", "Back"),
        ],
    );
}

fn render_facet_row(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: Option<&str>,
    focused: bool,
) {
    let text = match value {
        Some(value) => Span::styled(value.to_string(), Style::default().fg(Color::White)),
        None => Span::styled("All", Style::default().fg(Color::DarkGray)),
    };
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let row = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title.to_string())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(row, area);
}

fn render_published_row(frame: &mut Frame, area: Rect, published: PublishedFilter, focused: bool) {
    let text = match published {
        PublishedFilter::Unset => Span::styled("Any", Style::default().fg(Color::DarkGray)),
        PublishedFilter::Published => {
            Span::styled("Published only", Style::default().fg(Color::White))
        }
        PublishedFilter::Unpublished => {
            Span::styled("Unpublished only", Style::default().fg(Color::White))
        }
    };
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let row = Paragraph::new(Line::from(vec![
        text,
        Span::styled("  (Space to cycle)", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Published ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(row, area);
}

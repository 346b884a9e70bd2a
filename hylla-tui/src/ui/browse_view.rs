use super::*;

pub fn render_browse(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Active filters
            Constraint::Min(5),    // Result list
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_search_box(frame, chunks[0], app);
    render_filter_line(frame, chunks[1], app);
    render_results(frame, chunks[2], app);
    render_status(frame, chunks[3], app);
    render_controls(
        frame,
        chunks[4],
        &[
            ("Type", "Search"),
            ("Enter", "Search/Select"),
            ("↑↓", "Navigate"),
            ("Ctrl+F", "Filters"),
            ("Ctrl+R", "Clear filters"),
            ("Ctrl+X", "Clear query"),
            ("Esc", "Dismiss/Quit"),
        ],
    );

    if app.suggest.visible {
        render_suggestions(frame, chunks[0], app);
    }
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let popup_focused = app.suggestion_cursor.is_some();
    let search_text = if popup_focused {
        app.suggest.query.value.clone()
    } else {
        let (before, after) = app.suggest.query.split_at_cursor();
        format!("{}█{}", before, after)
    };
    let search_border = if popup_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_border)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, area);
}

fn render_filter_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.filter_summary() {
        Some(summary) => Line::from(vec![
            Span::styled("Filters ", Style::default().fg(Color::Yellow)),
            Span::styled(summary, Style::default().fg(Color::White)),
        ]),
        None => Line::from(Span::styled(
            "No filters active",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(" Books ({}) ", app.search.results.len());

    if app.search.results.is_empty() {
        let text = if app.search.loading {
            "Searching..."
        } else {
            "No books found"
        };
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(title)
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .search
        .results
        .iter()
        .map(|book| {
            let mut spans = vec![
                Span::styled(book.title.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {} · {}", book.author, book.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if !book.published {
                spans.push(Span::styled(
                    "  [unpublished]",
                    Style::default().fg(Color::Red),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.result_index));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Draws the suggestion dropdown anchored under the search box, and records
/// the rect it landed in for mouse hit-testing. Rows that do not fit on
/// screen are simply not drawn, and not clickable.
fn render_suggestions(frame: &mut Frame, search_area: Rect, app: &mut App) {
    let total = app.suggest.suggestions.len();
    if total == 0 {
        return;
    }

    let top = search_area.y + search_area.height;
    let available = frame.area().height.saturating_sub(top);
    if available < 3 {
        return;
    }
    let visible = total.min((available - 2) as usize);
    let popup = Rect {
        x: search_area.x,
        y: top,
        width: search_area.width,
        height: visible as u16 + 2,
    };

    let items: Vec<ListItem> = app
        .suggest
        .suggestions
        .iter()
        .take(visible)
        .enumerate()
        .map(|(i, suggestion)| {
            let style = if Some(i) == app.suggestion_cursor {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(suggestion.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Suggestions ")
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(list, popup);
    app.suggestion_area = Some(popup);
}

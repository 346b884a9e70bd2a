use super::*;
use crate::app::FacetPicker;

pub fn render_category_picker(frame: &mut Frame, app: &App, body: Rect) {
    if let Some(picker) = &app.picker {
        render_facet_picker(frame, picker, body, "Categories");
    }
}

pub fn render_author_picker(frame: &mut Frame, app: &App, body: Rect) {
    if let Some(picker) = &app.picker {
        render_facet_picker(frame, picker, body, "Authors");
    }
}

fn render_facet_picker(frame: &mut Frame, picker: &FacetPicker, body: Rect, noun: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Filter input
            Constraint::Min(0),    // Option list
            Constraint::Length(3), // Controls
        ])
        .split(body);

    // Filter input box
    let (before, after) = picker.input.split_at_cursor();
    let search_box = Paragraph::new(format!("{}█{}", before, after))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Filter ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, chunks[0]);

    // Option list, with the "All" row ahead of the matches
    let mut items: Vec<ListItem> = Vec::with_capacity(picker.matches.len() + 1);
    items.push(
        ListItem::new("All").style(if picker.index == 0 {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }),
    );
    items.extend(picker.matches.iter().enumerate().map(|(i, option)| {
        let style = if i + 1 == picker.index {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        ListItem::new(option.clone()).style(style)
    }));

    // Show count: filtered / total
    let title = if picker.input.value.is_empty() {
        format!(" {} ({}) ", noun, picker.options.len())
    } else {
        format!(
            " {} ({}/{}) ",
            noun,
            picker.matches.len(),
            picker.options.len()
        )
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default());

    frame.render_widget(list, chunks[1]);

    render_controls(
        frame,
        chunks[2],
        &[
            ("Type", "Filter"),
            ("↑↓", "Navigate"),
            ("Enter", "Select"),
            ("Ctrl+X", "Clear"),
            ("Esc", "Cancel"),
        ],
    );
}

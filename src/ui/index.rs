use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    render_entries(frame, chunks[1], app);
    render_controls(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Span::styled(
        "INDEX",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_entries(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.index_scroll();
    let lines: Vec<Line> = app
        .store()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let is_selected = index == selected;
            let (symbol, color) = if record.is_answered() {
                (" ", Color::Gray)
            } else {
                ("?", Color::Yellow)
            };
            let text_style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(color)
            };

            Line::from(vec![
                Span::styled(
                    if is_selected { ">" } else { " " },
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(format!("{} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", record.id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(record.preview(), text_style),
            ])
        })
        .collect();

    // Keep the selection on screen.
    let height = area.height.max(1) as usize;
    let offset = selected.saturating_sub(height - 1);

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((offset as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  enter open  ·  ? unanswered  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

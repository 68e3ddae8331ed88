use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::QuestionRecord;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(6),
        Constraint::Length(question.choices.len() as u16 * 2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app, question);
    render_prompt(frame, chunks[1], &question.prompt);
    render_choices(frame, chunks[2], question, app.answer_revealed());
    render_answer_status(frame, chunks[3], question, app.answer_revealed());
    render_controls(frame, chunks[4]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, question: &QuestionRecord) {
    let progress = format!(
        "#{}  ·  {}/{}",
        question.id,
        app.current_position(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let mut lines = prompt.lines();
    let mut content: Vec<Line> = Vec::new();

    if let Some(first) = lines.next() {
        content.push(Line::from(Span::styled(
            first,
            Style::default().fg(Color::White).bold(),
        )));
    }
    content.extend(lines.map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Yellow)))));

    // Wrap without trimming so code indentation survives.
    let widget = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_choices(frame: &mut Frame, area: Rect, question: &QuestionRecord, revealed: bool) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.choices.len() * 2);

    for choice in &question.choices {
        let is_correct = revealed && question.correct_choice == Some(choice.label);
        let style = if is_correct {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_correct { "+" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}) ", choice.label), style),
            Span::styled(choice.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_answer_status(frame: &mut Frame, area: Rect, question: &QuestionRecord, revealed: bool) {
    if !revealed {
        return;
    }

    let widget = match question.correct_choice {
        Some(label) => Paragraph::new(format!("Answer: {}", label)).fg(Color::Green),
        None => Paragraph::new("No answer stated for this question").fg(Color::Yellow),
    };
    frame.render_widget(widget.alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k move  ·  a answer  ·  g/G first/last  ·  i index  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

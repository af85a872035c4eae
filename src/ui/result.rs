use std::time::Duration;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::percentage;

pub fn render_quiz_complete(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let quiz = engine.current_quiz();
    let score = engine.state().score;
    let total = u32::try_from(quiz.len()).unwrap_or(u32::MAX);
    let pct = percentage(score, total);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    let headline = if score * 2 >= total {
        "QUIZ PASSED"
    } else {
        "QUIZ FINISHED"
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(quiz.title.as_str().fg(Color::White)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", score, total, pct),
            Style::default().fg(super::grade_color(pct)).bold(),
        )),
        Line::from(""),
    ];
    if let Some(message) = &quiz.message {
        content.push(Line::from(message.as_str().fg(Color::Yellow)));
    }
    content.push(Line::from("Result saved to your profile.".fg(Color::Green)));

    if let Some(remaining) = app.auto_advance_remaining() {
        content.push(Line::from(Span::styled(
            format!("Next quiz in {}s...", countdown_secs(remaining)),
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    super::render_status(frame, chunks[2], app.status());

    let controls = if engine.is_last_quiz() {
        "enter finish  ·  r redo quiz  ·  b back  ·  esc menu"
    } else {
        "enter next quiz now  ·  r redo quiz  ·  b back  ·  esc menu"
    };
    super::render_controls(frame, chunks[4], controls);
}

/// Whole seconds left, rounded up so a fresh 3 s timer reads "3s".
fn countdown_secs(remaining: Duration) -> u128 {
    remaining.as_millis().div_ceil(1000)
}

pub fn render_all_complete(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CONGRATULATIONS!",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(""),
        Line::from("You have been through every quiz.".fg(Color::White)),
        Line::from("You now know the basics of Hausa!".fg(Color::White)),
        Line::from(""),
        Line::from("Open your profile to see all your results.".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    super::render_controls(frame, chunks[3], "r start over  ·  esc menu  ·  q quit");
}

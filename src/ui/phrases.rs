//! Listen and repeat screens.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render_listen(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(Span::styled(
        "LISTEN",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let phrases = app.listen_phrases();
    let selected = app.listen_selected();
    let lines: Vec<Line> = phrases
        .iter()
        .enumerate()
        .map(|(index, phrase)| {
            let style = if index == selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(format!("{:2}. ", phrase.id), Style::default().fg(Color::DarkGray)),
                Span::styled(phrase.text.as_str(), style),
            ])
        })
        .collect();

    // Keep the selection in view.
    let visible = usize::from(chunks[1].height.saturating_sub(2)).max(1);
    let scroll = selected.saturating_sub(visible - 1);
    let list = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        )
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(list, chunks[1]);

    if let Some(phrase) = phrases.get(selected) {
        let detail = vec![
            Line::from(Span::styled(
                phrase.text.as_str(),
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(phrase.translation.as_str().fg(Color::Yellow)),
        ];
        frame.render_widget(
            Paragraph::new(detail)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[2],
        );
    }

    super::render_controls(frame, chunks[3], "j/k navigate  ·  esc menu");
}

pub fn render_repeat(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let drill = app.drill();
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "REPEAT AFTER ME",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "Phrase {}/{}  ·  {} repeated",
                drill.index() + 1,
                drill.len(),
                drill.repeated_count()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if let Some(phrase) = app.repeat_phrases().get(drill.index()) {
        let status = if drill.is_repeated(drill.index()) {
            Line::from(Span::styled(
                "Well done, you repeated this one!",
                Style::default().fg(Color::Green).bold(),
            ))
        } else {
            Line::from("Say it out loud, then press r".fg(Color::DarkGray))
        };

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                phrase.text.as_str(),
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(""),
            Line::from(phrase.translation.as_str().fg(Color::Yellow)),
            Line::from(""),
            status,
        ];

        let widget = Paragraph::new(content).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
        frame.render_widget(widget, chunks[2]);
    }

    super::render_controls(
        frame,
        chunks[4],
        "r repeated  ·  n/l next  ·  p/h previous  ·  esc menu",
    );
}

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{App, MENU_ITEMS};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let header = vec![
        Line::from(Span::styled(
            "MAIN MENU",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Choose an activity".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), chunks[0]);

    let mut lines: Vec<Line> = Vec::with_capacity(MENU_ITEMS.len() * 3);
    for (index, item) in MENU_ITEMS.iter().enumerate() {
        let is_selected = index == app.menu_selected();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(item.title, style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", item.description),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, chunks[1]);

    super::render_controls(frame, chunks[2], "j/k navigate  ·  enter open  ·  q quit");
}

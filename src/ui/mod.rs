mod menu;
mod phrases;
mod profile;
mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};
use crate::models::Phase;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Welcome => welcome::render(frame, area),
        Screen::Menu => menu::render(frame, area, app),
        Screen::Listen => phrases::render_listen(frame, area, app),
        Screen::Repeat => phrases::render_repeat(frame, area, app),
        Screen::Quiz => match app.engine().phase() {
            Phase::Answering | Phase::ShowingResult(_) => quiz::render(frame, area, app),
            Phase::QuizComplete => result::render_quiz_complete(frame, area, app),
            Phase::AllComplete => result::render_all_complete(frame, area),
        },
        Screen::Profile => profile::render(frame, area, app),
    }
}

/// Colour used for a score percentage.
fn grade_color(percentage: u32) -> Color {
    match percentage {
        80.. => Color::Green,
        60..=79 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, status: Option<&str>) {
    if let Some(message) = status {
        let widget = Paragraph::new(message)
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, area);
    }
}

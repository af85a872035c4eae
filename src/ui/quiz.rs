use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{AnswerFeedback, Question};

const OPTION_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let question = engine.current_question();
    let feedback = engine.phase().feedback();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_title(frame, chunks[0], &engine.current_quiz().title);
    render_progress(frame, chunks[1], app);
    render_question_text(frame, chunks[2], &question.prompt);
    render_options(frame, chunks[3], question, app.selected_option(), feedback);

    if let Some(feedback) = feedback {
        render_feedback(frame, chunks[4], feedback);
    }
    super::render_status(frame, chunks[5], app.status());
    super::render_controls(frame, chunks[6], controls(feedback.is_some(), engine.is_last_question()));
}

fn controls(showing_result: bool, last_question: bool) -> &'static str {
    match (showing_result, last_question) {
        (false, _) => "j/k navigate  ·  enter answer  ·  b back  ·  s skip quiz  ·  esc menu",
        (true, false) => "enter next question  ·  b back  ·  r restart  ·  s skip quiz  ·  esc menu",
        (true, true) => "enter finish quiz  ·  b back  ·  r restart  ·  s skip quiz  ·  esc menu",
    }
}

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let progress = format!(
        "Question {}/{}  ·  score {}",
        engine.state().question_index + 1,
        engine.current_quiz().len(),
        engine.state().score
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selected: usize,
    feedback: Option<&AnswerFeedback>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let style = option_style(index, question, selected, feedback);
        let marker = match feedback {
            Some(f) if f.selected == index => ">",
            None if index == selected => ">",
            _ => " ",
        };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_style(
    index: usize,
    question: &Question,
    selected: usize,
    feedback: Option<&AnswerFeedback>,
) -> Style {
    match feedback {
        Some(_) if question.is_correct(index) => Style::default().fg(Color::Green).bold(),
        Some(f) if f.selected == index => Style::default().fg(Color::Red),
        Some(_) => Style::default().fg(Color::DarkGray),
        None if index == selected => Style::default().fg(Color::Cyan).bold(),
        None => Style::default().fg(Color::Gray),
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: &AnswerFeedback) {
    let line = if feedback.correct {
        Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        Line::from(vec![
            Span::styled("Wrong. ", Style::default().fg(Color::Red).bold()),
            Span::styled("The answer was: ", Style::default().fg(Color::Gray)),
            Span::styled(
                feedback.correct_answer.as_str(),
                Style::default().fg(Color::White).bold(),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

//! Profile view: overall statistics, per-quiz progress and recent results.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::app::{App, ProfileView};
use crate::store::AggregateStats;

const BAR_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let profile = app.profile();
    let quiz_rows = u16::try_from(profile.stats.discovered_quizzes.len()).unwrap_or(u16::MAX);

    let chunks = Layout::vertical([
        Constraint::Length(2),                           // Header
        Constraint::Length(4),                           // Global statistics
        Constraint::Length(quiz_rows.saturating_add(3)), // Quiz progress
        Constraint::Fill(1),                             // Recent results
        Constraint::Length(1),                           // Status
        Constraint::Length(1),                           // Controls
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    render_stats(frame, chunks[1], &profile.stats);
    render_progress(frame, chunks[2], &profile.stats);
    render_history(frame, chunks[3], profile);
    super::render_status(frame, chunks[4], app.status());

    let controls = if profile.confirm_clear {
        "Delete all results? y confirm  ·  n cancel"
    } else {
        "j/k scroll  ·  c clear results  ·  esc menu"
    };
    super::render_controls(frame, chunks[5], controls);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = vec![
        Line::from(Span::styled(
            "PROFILE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Guest mode".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), area);
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &AggregateStats) {
    let lines = if stats.total_attempts == 0 {
        vec![Line::from(Span::styled(
            "  No results yet. Finish a quiz to see your statistics here.",
            Style::default().fg(Color::DarkGray).italic(),
        ))]
    } else {
        vec![
            Line::from(vec![
                stat("Attempts", stats.total_attempts.to_string(), Color::White),
                stat(
                    "Average",
                    format!("{}%", stats.average_percentage),
                    super::grade_color(stats.average_percentage),
                ),
            ]),
            Line::from(vec![
                stat(
                    "Best",
                    format!("{}%", stats.best_percentage),
                    super::grade_color(stats.best_percentage),
                ),
                stat(
                    "Correct",
                    format!(
                        "{}/{}",
                        stats.total_correct_answers, stats.total_questions_answered
                    ),
                    Color::White,
                ),
            ]),
        ]
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn stat(label: &str, value: String, color: Color) -> Span<'static> {
    Span::styled(format!("  {:<9}{:<12}", label, value), Style::default().fg(color))
}

fn render_progress(frame: &mut Frame, area: Rect, stats: &AggregateStats) {
    let mut lines: Vec<Line> = Vec::new();

    if stats.discovered_quizzes.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No quizzes discovered yet...",
            Style::default().fg(Color::DarkGray).italic(),
        )));
    } else {
        let completion = stats.completion_percentage();
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "  {}/{} quizzes completed ",
                    stats.per_quiz_progress.len(),
                    stats.discovered_quizzes.len()
                ),
                Style::default().fg(Color::White),
            ),
            Span::styled(progress_bar(completion), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" {:>3}%", completion),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    for quiz in &stats.discovered_quizzes {
        let line = match stats.per_quiz_progress.get(&quiz.id) {
            Some(progress) => Line::from(vec![
                Span::styled(format!("  Q{:<3}", quiz.id), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{:<26}", quiz.short_title),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>4}%", progress.best_percentage),
                    Style::default().fg(super::grade_color(progress.best_percentage)),
                ),
                Span::styled(
                    format!(
                        "  {} attempt{}",
                        progress.attempt_count,
                        if progress.attempt_count > 1 { "s" } else { "" }
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            None => Line::from(vec![
                Span::styled(format!("  Q{:<3}", quiz.id), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{:<26}", quiz.short_title),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled("  not done", Style::default().fg(Color::DarkGray)),
            ]),
        };
        lines.push(line);
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Quiz progress ")
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn progress_bar(pct: u32) -> String {
    let filled = (pct.min(100) as usize * BAR_WIDTH) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn render_history(frame: &mut Frame, area: Rect, profile: &ProfileView) {
    let lines: Vec<Line> = if profile.history.is_empty() {
        vec![Line::from(Span::styled(
            "  Complete a quiz to see your results here!",
            Style::default().fg(Color::DarkGray).italic(),
        ))]
    } else {
        profile
            .history
            .iter()
            .map(|attempt| {
                let color = super::grade_color(attempt.percentage());
                Line::from(vec![
                    Span::styled(
                        format!("  {:<32}", attempt.quiz_title()),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!(
                            "{}/{} ({}%)",
                            attempt.score(),
                            attempt.total_questions(),
                            attempt.percentage()
                        ),
                        Style::default().fg(color),
                    ),
                    Span::styled(
                        format!("  {}", attempt.completed_at()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Recent results ")
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        )
        .scroll((u16::try_from(profile.scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(widget, area);
}

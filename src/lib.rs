//! # hausa-trainer
//!
//! A terminal trainer for basic Hausa phrases: a phrase list to browse, a
//! repeat drill, and a sequence of multiple-choice quizzes whose results are
//! saved and summarised on a profile screen.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hausa_trainer::{AppError, FileStore, ScoreStore, Trainer, builtin_catalog};
//!
//! fn main() -> Result<(), AppError> {
//!     let catalog = builtin_catalog()?;
//!     let scores = ScoreStore::new(FileStore::open(".hausa-trainer")?);
//!
//!     Trainer::new(catalog, scores).run()
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod engine;
mod error;
pub mod logging;
mod models;
pub mod store;
pub mod terminal;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;

pub use app::{App, Screen};
pub use data::{Catalog, builtin_catalog, listen_phrases, load_catalog_from_json, repeat_phrases};
pub use engine::{Advance, AttemptSink, DeadlineScheduler, QuizEngine};
pub use error::{AppError, CatalogError, EngineError, LoadError, PersistenceError};
pub use models::{
    AnswerFeedback, Attempt, COMPLETED_AT_FORMAT, Phase, Phrase, Question, Quiz, RepeatDrill,
    SessionState,
};
pub use store::{AggregateStats, FileStore, MemoryStore, ScoreStore, compute_stats};

/// Longest the event loop sleeps waiting for a key.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// The interactive trainer.
pub struct Trainer {
    app: App,
}

impl Trainer {
    pub fn new(catalog: Catalog, scores: ScoreStore) -> Self {
        Self::with_engine(QuizEngine::new(catalog, DeadlineScheduler::new()), scores)
    }

    pub fn with_engine(engine: QuizEngine, scores: ScoreStore) -> Self {
        Self {
            app: App::new(engine, scores),
        }
    }

    /// Take over the terminal until the user quits.
    pub fn run(mut self) -> Result<(), AppError> {
        let mut term = terminal::init()?;
        info!("trainer started");
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        info!("trainer stopped");
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::TrainerTerminal, app: &mut App) -> Result<(), AppError> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_input(app, key.code);
                }
            }
        }

        app.tick(Instant::now());
    }

    Ok(())
}

/// Apply one key press to the current screen.
pub fn handle_input(app: &mut App, key: KeyCode) {
    match app.screen {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Menu => handle_menu_input(app, key),
        Screen::Listen => handle_listen_input(app, key),
        Screen::Repeat => handle_repeat_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Profile => handle_profile_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.open(Screen::Menu),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_menu_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_menu_item(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_menu_item(),
        KeyCode::Enter => app.open_selected_menu_item(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_listen_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_phrase(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_phrase(),
        KeyCode::Esc => app.back_to_menu(),
        _ => {}
    }
}

fn handle_repeat_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => app.drill_mut().mark_repeated(),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l') => app.drill_mut().next(),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => app.drill_mut().previous(),
        KeyCode::Esc => app.back_to_menu(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    let phase = app.engine().phase().clone();
    match phase {
        Phase::Answering => match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
            KeyCode::Char('b') => app.go_back(),
            KeyCode::Char('s') => app.skip_quiz(),
            KeyCode::Esc => app.back_to_menu(),
            _ => {}
        },
        Phase::ShowingResult(_) => match key {
            KeyCode::Enter | KeyCode::Char(' ') => app.advance(),
            KeyCode::Char('b') => app.go_back(),
            KeyCode::Char('r') => app.restart_quiz(),
            KeyCode::Char('s') => app.skip_quiz(),
            KeyCode::Esc => app.back_to_menu(),
            _ => {}
        },
        Phase::QuizComplete => match key {
            KeyCode::Enter => app.next_quiz(),
            KeyCode::Char('r') => app.restart_quiz(),
            KeyCode::Char('b') => app.go_back(),
            KeyCode::Esc => app.back_to_menu(),
            _ => {}
        },
        Phase::AllComplete => match key {
            KeyCode::Char('r') => app.restart_all(),
            KeyCode::Esc => app.back_to_menu(),
            KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
            _ => {}
        },
    }
}

fn handle_profile_input(app: &mut App, key: KeyCode) {
    if app.profile().confirm_clear {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_clear_history(),
            _ => app.cancel_clear_history(),
        }
        return;
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_profile_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_profile_down(),
        KeyCode::Char('c') => app.request_clear_history(),
        KeyCode::Esc => app.back_to_menu(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trainer() -> Trainer {
        Trainer::new(builtin_catalog().unwrap(), ScoreStore::in_memory())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            handle_input(app, *key);
        }
    }

    fn answer(app: &mut App, option: usize) {
        for _ in 0..option {
            handle_input(app, KeyCode::Char('j'));
        }
        press(app, &[KeyCode::Enter, KeyCode::Enter]);
    }

    #[test]
    fn test_welcome_to_quiz() {
        let mut trainer = trainer();
        let app = trainer.app_mut();
        assert_eq!(app.screen, Screen::Welcome);

        // Menu order: Listen, Repeat, Quiz, Profile.
        press(app, &[KeyCode::Enter, KeyCode::Char('j'), KeyCode::Char('j'), KeyCode::Enter]);
        assert_eq!(app.screen, Screen::Quiz);
        assert_eq!(app.engine().phase(), &Phase::Answering);
    }

    #[test]
    fn test_playing_a_quiz_with_keys() {
        let mut trainer = trainer();
        let app = trainer.app_mut();
        app.open(Screen::Quiz);

        let answers: Vec<usize> = app
            .engine()
            .current_quiz()
            .questions
            .iter()
            .map(|q| q.correct_index)
            .collect();
        for correct in answers {
            answer(app, correct);
        }

        assert_eq!(app.engine().phase(), &Phase::QuizComplete);
        press(app, &[KeyCode::Enter]);
        assert_eq!(app.engine().state().quiz_index, 1);
        assert_eq!(app.engine().phase(), &Phase::Answering);

        // Menu selection still sits on the first entry; wrapping up lands on Profile.
        press(app, &[KeyCode::Esc, KeyCode::Char('k'), KeyCode::Enter]);
        assert_eq!(app.screen, Screen::Profile);
        assert_eq!(app.profile().history.len(), 1);
        assert_eq!(app.profile().history[0].percentage(), 100);
    }

    #[test]
    fn test_skip_then_quit_from_menu() {
        let mut trainer = trainer();
        let app = trainer.app_mut();
        app.open(Screen::Quiz);

        press(app, &[KeyCode::Char('s')]);
        assert_eq!(app.engine().state().quiz_index, 1);

        press(app, &[KeyCode::Esc]);
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.engine().state().quiz_index, 0);

        press(app, &[KeyCode::Char('q')]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_profile_clear_requires_yes() {
        let mut trainer = trainer();
        let app = trainer.app_mut();
        app.open(Screen::Quiz);
        answer(app, 0);
        answer(app, 0);
        answer(app, 0);
        app.open(Screen::Profile);

        press(app, &[KeyCode::Char('c'), KeyCode::Char('n')]);
        assert_eq!(app.profile().history.len(), 1);

        press(app, &[KeyCode::Char('c'), KeyCode::Char('y')]);
        assert!(app.profile().history.is_empty());
    }

    #[test]
    fn test_repeat_drill_keys() {
        let mut trainer = trainer();
        let app = trainer.app_mut();
        app.open(Screen::Repeat);

        press(app, &[KeyCode::Char('r'), KeyCode::Char('n'), KeyCode::Char('r')]);
        assert_eq!(app.drill().repeated_count(), 2);
        assert_eq!(app.drill().index(), 1);

        press(app, &[KeyCode::Char('p'), KeyCode::Char('p')]);
        assert_eq!(app.drill().index(), app.repeat_phrases().len() - 1);
    }
}

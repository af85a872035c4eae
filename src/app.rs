use std::time::{Duration, Instant};

use log::{error, warn};

use crate::data::{listen_phrases, repeat_phrases};
use crate::engine::{Advance, QuizEngine};
use crate::error::EngineError;
use crate::models::{Attempt, Phrase, RepeatDrill};
use crate::store::{AggregateStats, ScoreStore};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Menu,
    Listen,
    Repeat,
    Quiz,
    Profile,
}

pub struct MenuItem {
    pub title: &'static str,
    pub description: &'static str,
    pub screen: Screen,
}

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem {
        title: "Listen",
        description: "Browse Hausa phrases",
        screen: Screen::Listen,
    },
    MenuItem {
        title: "Repeat",
        description: "Practise saying phrases aloud",
        screen: Screen::Repeat,
    },
    MenuItem {
        title: "Quiz",
        description: "Test what you know",
        screen: Screen::Quiz,
    },
    MenuItem {
        title: "Profile",
        description: "See your results and progress",
        screen: Screen::Profile,
    },
];

/// Snapshot shown on the profile screen, reloaded each time it opens.
#[derive(Debug, Default)]
pub struct ProfileView {
    pub history: Vec<Attempt>,
    pub stats: AggregateStats,
    pub scroll: usize,
    pub confirm_clear: bool,
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    engine: QuizEngine,
    scores: ScoreStore,
    menu_selected: usize,
    listen: Vec<Phrase>,
    listen_selected: usize,
    repeat: Vec<Phrase>,
    drill: RepeatDrill,
    selected_option: usize,
    status: Option<String>,
    profile: ProfileView,
}

impl App {
    pub fn new(engine: QuizEngine, scores: ScoreStore) -> Self {
        let repeat = repeat_phrases();
        let drill = RepeatDrill::new(repeat.len());

        Self {
            screen: Screen::Welcome,
            should_quit: false,
            engine,
            scores,
            menu_selected: 0,
            listen: listen_phrases(),
            listen_selected: 0,
            repeat,
            drill,
            selected_option: 0,
            status: None,
            profile: ProfileView::default(),
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn profile(&self) -> &ProfileView {
        &self.profile
    }

    pub fn open(&mut self, screen: Screen) {
        self.status = None;
        match screen {
            Screen::Quiz => {
                self.engine.restart_all();
                self.selected_option = 0;
            }
            Screen::Profile => self.refresh_profile(),
            Screen::Repeat => self.drill = RepeatDrill::new(self.repeat.len()),
            Screen::Welcome | Screen::Menu | Screen::Listen => {}
        }
        self.screen = screen;
    }

    /// Leave the current screen for the menu, ending any quiz session.
    pub fn back_to_menu(&mut self) {
        if self.screen == Screen::Quiz {
            self.engine.restart_all();
        }
        self.status = None;
        self.screen = Screen::Menu;
    }

    // Menu

    pub fn menu_selected(&self) -> usize {
        self.menu_selected
    }

    pub fn select_next_menu_item(&mut self) {
        self.menu_selected = (self.menu_selected + 1) % MENU_ITEMS.len();
    }

    pub fn select_previous_menu_item(&mut self) {
        self.menu_selected = (self.menu_selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    pub fn open_selected_menu_item(&mut self) {
        let screen = MENU_ITEMS[self.menu_selected].screen;
        self.open(screen);
    }

    // Listen

    pub fn listen_phrases(&self) -> &[Phrase] {
        &self.listen
    }

    pub fn listen_selected(&self) -> usize {
        self.listen_selected
    }

    pub fn select_next_phrase(&mut self) {
        if !self.listen.is_empty() {
            self.listen_selected = (self.listen_selected + 1) % self.listen.len();
        }
    }

    pub fn select_previous_phrase(&mut self) {
        if !self.listen.is_empty() {
            self.listen_selected = (self.listen_selected + self.listen.len() - 1) % self.listen.len();
        }
    }

    // Repeat

    pub fn repeat_phrases(&self) -> &[Phrase] {
        &self.repeat
    }

    pub fn drill(&self) -> &RepeatDrill {
        &self.drill
    }

    pub fn drill_mut(&mut self) -> &mut RepeatDrill {
        &mut self.drill
    }

    // Quiz

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn select_next_option(&mut self) {
        let count = self.engine.current_question().options.len();
        self.selected_option = (self.selected_option + 1) % count;
    }

    pub fn select_previous_option(&mut self) {
        let count = self.engine.current_question().options.len();
        self.selected_option = (self.selected_option + count - 1) % count;
    }

    pub fn submit_answer(&mut self) {
        let result = self.engine.submit_answer(self.selected_option).map(|_| ());
        self.report(result);
    }

    /// Confirm the shown result. A failed save stays on the result with a
    /// message; confirming again retries it.
    pub fn advance(&mut self) {
        match self.engine.advance(&mut self.scores) {
            Ok(Advance::NextQuestion) => {
                self.selected_option = 0;
                self.status = None;
            }
            Ok(Advance::QuizCompleted(_)) => {
                self.status = None;
            }
            Err(EngineError::Persistence(err)) => {
                error!("failed to save score: {err}");
                self.status = Some(format!("Could not save your score ({err}). Press enter to retry."));
            }
            Err(err) => self.report::<()>(Err(err)),
        }
    }

    pub fn next_quiz(&mut self) {
        let result = self.engine.go_to_next_quiz();
        self.selected_option = 0;
        self.report(result);
    }

    pub fn skip_quiz(&mut self) {
        let result = self.engine.skip_quiz();
        self.selected_option = 0;
        self.report(result);
    }

    pub fn restart_quiz(&mut self) {
        self.engine.restart_current_quiz();
        self.selected_option = 0;
        self.status = None;
    }

    pub fn restart_all(&mut self) {
        self.engine.restart_all();
        self.selected_option = 0;
        self.status = None;
    }

    pub fn go_back(&mut self) {
        let result = self.engine.go_back();
        self.selected_option = 0;
        self.report(result);
    }

    /// Earliest moment the event loop must wake up for a timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.engine.scheduler().next_deadline()
    }

    /// Time left before the finished quiz moves on by itself.
    pub fn auto_advance_remaining(&self) -> Option<Duration> {
        if !self.engine.auto_advance_pending() {
            return None;
        }
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Fire every timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        let due = self.engine.scheduler_mut().take_due(now);
        for handle in due {
            if self.engine.on_timer(handle) {
                self.selected_option = 0;
            }
        }
    }

    // Profile

    pub fn refresh_profile(&mut self) {
        let history = self.scores.load_history();
        let stats = crate::store::compute_stats(&history);
        self.profile = ProfileView {
            history,
            stats,
            scroll: 0,
            confirm_clear: false,
        };
    }

    pub fn scroll_profile_down(&mut self) {
        let max_scroll = self.profile.history.len().saturating_sub(1);
        self.profile.scroll = (self.profile.scroll + 1).min(max_scroll);
    }

    pub fn scroll_profile_up(&mut self) {
        self.profile.scroll = self.profile.scroll.saturating_sub(1);
    }

    pub fn request_clear_history(&mut self) {
        if !self.profile.history.is_empty() {
            self.profile.confirm_clear = true;
        }
    }

    pub fn cancel_clear_history(&mut self) {
        self.profile.confirm_clear = false;
    }

    pub fn confirm_clear_history(&mut self) {
        match self.scores.clear_all() {
            Ok(()) => {
                self.refresh_profile();
                self.status = Some("All results deleted.".to_string());
            }
            Err(err) => {
                error!("failed to clear history: {err}");
                self.profile.confirm_clear = false;
                self.status = Some(format!("Could not delete results ({err})."));
            }
        }
    }

    fn report<T>(&mut self, result: Result<T, EngineError>) {
        match result {
            Ok(_) => self.status = None,
            Err(err) => {
                warn!("ignored quiz action: {err}");
                self.status = Some(err.to_string());
            }
        }
    }
}

//! Quiz session state machine.
//!
//! [`QuizEngine`] walks a learner through every quiz of a [`Catalog`]:
//!
//! ```text
//! Answering --submit_answer--> ShowingResult --advance--> Answering (next question)
//!                                            \--advance--> QuizComplete (last question, attempt saved)
//! QuizComplete --go_to_next_quiz / timer--> Answering (next quiz) | AllComplete
//! ```
//!
//! Finishing a quiz hands exactly one [`Attempt`] to an [`AttemptSink`]
//! before the phase changes, and arms a cancellable auto-advance timer.

mod timer;

use std::time::Duration;

use chrono::Local;
use log::{debug, info};

use crate::data::Catalog;
use crate::error::{EngineError, PersistenceError};
use crate::models::{AnswerFeedback, Attempt, Phase, Question, Quiz, SessionState};

pub use timer::{DeadlineScheduler, Scheduler, TimerHandle};

/// Delay before a finished quiz moves on to the next one by itself.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(3);

/// Receives finished attempts.
pub trait AttemptSink {
    fn record(&mut self, attempt: &Attempt) -> Result<(), PersistenceError>;
}

impl AttemptSink for Vec<Attempt> {
    fn record(&mut self, attempt: &Attempt) -> Result<(), PersistenceError> {
        self.push(attempt.clone());
        Ok(())
    }
}

/// Outcome of [`QuizEngine::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the next question of the same quiz.
    NextQuestion,
    /// The quiz is finished; this attempt was recorded.
    QuizCompleted(Attempt),
}

pub struct QuizEngine<S: Scheduler = DeadlineScheduler> {
    catalog: Catalog,
    state: SessionState,
    scheduler: S,
    pending_advance: Option<TimerHandle>,
    auto_advance_delay: Duration,
}

impl<S: Scheduler> QuizEngine<S> {
    pub fn new(catalog: Catalog, scheduler: S) -> Self {
        Self {
            catalog,
            state: SessionState::new(),
            scheduler,
            pending_advance: None,
            auto_advance_delay: AUTO_ADVANCE_DELAY,
        }
    }

    pub fn with_auto_advance_delay(mut self, delay: Duration) -> Self {
        self.auto_advance_delay = delay;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn current_quiz(&self) -> &Quiz {
        &self.catalog.quizzes()[self.state.quiz_index]
    }

    pub fn current_question(&self) -> &Question {
        &self.current_quiz().questions[self.state.question_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.state.question_index + 1 == self.current_quiz().len()
    }

    pub fn is_last_quiz(&self) -> bool {
        self.state.quiz_index + 1 == self.catalog.len()
    }

    /// Handle of the armed auto-advance timer, if any.
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending_advance
    }

    pub fn auto_advance_pending(&self) -> bool {
        self.pending_advance.is_some()
    }

    pub fn auto_advance_delay(&self) -> Duration {
        self.auto_advance_delay
    }

    /// Answer the current question. Returns whether the answer was correct.
    pub fn submit_answer(&mut self, selected: usize) -> Result<bool, EngineError> {
        self.require("submit an answer", |phase| matches!(phase, Phase::Answering))?;

        let question = self.current_question();
        if selected >= question.options.len() {
            return Err(EngineError::InvalidAnswer {
                selected,
                options: question.options.len(),
            });
        }

        let feedback = AnswerFeedback {
            correct: question.is_correct(selected),
            selected,
            correct_answer: question.correct_option().to_string(),
        };
        let correct = feedback.correct;

        if correct {
            // The score never exceeds the number of questions reached.
            let cap = self.answered_cap();
            self.state.score = (self.state.score + 1).min(cap);
        }

        debug!(
            "quiz {} question {}: answered {} ({})",
            self.current_quiz().id,
            self.state.question_index,
            selected,
            if correct { "correct" } else { "wrong" }
        );

        self.state.phase = Phase::ShowingResult(feedback);
        Ok(correct)
    }

    /// Leave the result screen. On the last question of a quiz the attempt
    /// is recorded through `sink` first; if that fails the engine stays on
    /// the result so the same call can be retried.
    pub fn advance<A>(&mut self, sink: &mut A) -> Result<Advance, EngineError>
    where
        A: AttemptSink + ?Sized,
    {
        let feedback = match &self.state.phase {
            Phase::ShowingResult(feedback) => feedback.clone(),
            other => {
                return Err(EngineError::InvalidState {
                    operation: "advance",
                    phase: other.name(),
                });
            }
        };

        if !self.is_last_question() {
            self.state.question_index += 1;
            self.state.phase = Phase::Answering;
            return Ok(Advance::NextQuestion);
        }

        let attempt = Attempt::record(self.current_quiz(), self.state.score, Local::now());
        sink.record(&attempt)?;

        info!(
            "completed {:?}: {}/{} ({}%)",
            attempt.quiz_title(),
            attempt.score(),
            attempt.total_questions(),
            attempt.percentage()
        );

        self.state.last_feedback = Some(feedback);
        self.state.phase = Phase::QuizComplete;
        if !self.is_last_quiz() {
            self.arm_auto_advance();
        }

        Ok(Advance::QuizCompleted(attempt))
    }

    /// Move from a finished quiz to the next one, or to `AllComplete`.
    pub fn go_to_next_quiz(&mut self) -> Result<(), EngineError> {
        self.require("go to the next quiz", |phase| {
            matches!(phase, Phase::QuizComplete)
        })?;

        self.disarm_auto_advance();
        self.move_past_current_quiz();
        Ok(())
    }

    /// Deliver a fired timer. Returns `true` if it triggered the auto-advance.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.pending_advance != Some(handle) {
            debug!("ignoring stale timer {:?}", handle);
            return false;
        }

        self.pending_advance = None;
        if !matches!(self.state.phase, Phase::QuizComplete) {
            return false;
        }

        debug!("auto-advancing past quiz {}", self.current_quiz().id);
        self.move_past_current_quiz();
        true
    }

    /// Abandon the current quiz without recording it.
    pub fn skip_quiz(&mut self) -> Result<(), EngineError> {
        self.require("skip the quiz", |phase| {
            matches!(phase, Phase::Answering | Phase::ShowingResult(_))
        })?;

        debug!("skipping quiz {}", self.current_quiz().id);
        self.move_past_current_quiz();
        Ok(())
    }

    pub fn restart_current_quiz(&mut self) {
        self.disarm_auto_advance();
        let quiz_index = self.state.quiz_index;
        self.state.start_quiz(quiz_index);
    }

    pub fn restart_all(&mut self) {
        self.disarm_auto_advance();
        self.state = SessionState::new();
    }

    /// Step back one screen.
    ///
    /// Backing out of a result keeps the point it awarded.
    pub fn go_back(&mut self) -> Result<(), EngineError> {
        match self.state.phase {
            Phase::ShowingResult(_) => {
                self.state.phase = Phase::Answering;
            }
            Phase::QuizComplete => {
                self.disarm_auto_advance();
                self.state.phase = match self.state.last_feedback.take() {
                    Some(feedback) => Phase::ShowingResult(feedback),
                    None => Phase::Answering,
                };
            }
            Phase::AllComplete => {
                return Err(EngineError::InvalidState {
                    operation: "go back",
                    phase: Phase::AllComplete.name(),
                });
            }
            Phase::Answering if self.state.question_index > 0 => {
                self.state.question_index -= 1;
                let cap = self.answered_cap();
                self.state.score = self.state.score.min(cap);
            }
            Phase::Answering if self.state.quiz_index > 0 => {
                let previous = self.state.quiz_index - 1;
                self.state.start_quiz(previous);
            }
            Phase::Answering => {}
        }

        Ok(())
    }

    fn require(
        &self,
        operation: &'static str,
        allowed: impl Fn(&Phase) -> bool,
    ) -> Result<(), EngineError> {
        if allowed(&self.state.phase) {
            Ok(())
        } else {
            Err(EngineError::InvalidState {
                operation,
                phase: self.state.phase.name(),
            })
        }
    }

    fn answered_cap(&self) -> u32 {
        u32::try_from(self.state.question_index + 1).unwrap_or(u32::MAX)
    }

    fn move_past_current_quiz(&mut self) {
        if self.is_last_quiz() {
            self.state.phase = Phase::AllComplete;
        } else {
            let next = self.state.quiz_index + 1;
            self.state.start_quiz(next);
        }
    }

    fn arm_auto_advance(&mut self) {
        self.disarm_auto_advance();
        self.pending_advance = Some(self.scheduler.schedule(self.auto_advance_delay));
    }

    fn disarm_auto_advance(&mut self) {
        if let Some(handle) = self.pending_advance.take() {
            self.scheduler.cancel(handle);
        }
    }
}

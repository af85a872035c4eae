//! Per-session quiz progress.

use std::fmt;

/// What the learner saw after submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    /// Whether the selected option was the right one.
    pub correct: bool,
    /// The option the learner picked.
    pub selected: usize,
    /// Text of the correct option.
    pub correct_answer: String,
}

/// Where the session is in the quiz flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an answer to the current question.
    Answering,
    /// Showing whether the last answer was right.
    ShowingResult(AnswerFeedback),
    /// The current quiz is finished and its attempt was saved.
    QuizComplete,
    /// Every quiz in the catalog has been passed through.
    AllComplete,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Answering => "answering",
            Phase::ShowingResult(_) => "showing result",
            Phase::QuizComplete => "quiz complete",
            Phase::AllComplete => "all complete",
        }
    }

    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        match self {
            Phase::ShowingResult(feedback) => Some(feedback),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable state of one learning session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub quiz_index: usize,
    pub question_index: usize,
    pub score: u32,
    pub phase: Phase,
    /// Feedback of the last question of a finished quiz, kept so that
    /// stepping back from `QuizComplete` can show it again.
    pub(crate) last_feedback: Option<AnswerFeedback>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            quiz_index: 0,
            question_index: 0,
            score: 0,
            phase: Phase::Answering,
            last_feedback: None,
        }
    }

    /// Position the session on the first question of `quiz_index`.
    pub(crate) fn start_quiz(&mut self, quiz_index: usize) {
        self.quiz_index = quiz_index;
        self.question_index = 0;
        self.score = 0;
        self.phase = Phase::Answering;
        self.last_feedback = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

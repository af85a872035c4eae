//! Finished quiz attempts and score percentages.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::Quiz;

/// Display format used for `completedAt` (day/month/year).
pub const COMPLETED_AT_FORMAT: &str = "%d/%m/%Y";

/// One finished run through a quiz.
///
/// Attempts are created once, when the last answer of a quiz is confirmed,
/// and never change afterwards. The serialized shape is the persisted
/// history format, so field names are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    id: String,
    quiz_id: u32,
    quiz_title: String,
    score: u32,
    total_questions: u32,
    percentage: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    completed_at: String,
}

impl Attempt {
    /// Record a finished run of `quiz` with the given score.
    pub fn record(quiz: &Quiz, score: u32, at: DateTime<Local>) -> Self {
        let total_questions = u32::try_from(quiz.len()).unwrap_or(u32::MAX);
        Self::new(quiz.id, quiz.title.clone(), score, total_questions, at)
    }

    pub fn new(
        quiz_id: u32,
        quiz_title: impl Into<String>,
        score: u32,
        total_questions: u32,
        at: DateTime<Local>,
    ) -> Self {
        let score = score.min(total_questions);
        Self {
            id: Uuid::new_v4().to_string(),
            quiz_id,
            quiz_title: quiz_title.into(),
            score,
            total_questions,
            percentage: percentage(score, total_questions),
            created_at: Some(at.with_timezone(&Utc)),
            completed_at: at.format(COMPLETED_AT_FORMAT).to_string(),
        }
    }

    /// Rebuild an attempt from recovered persisted fields.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn restore(
        id: String,
        quiz_id: u32,
        quiz_title: String,
        score: u32,
        total_questions: u32,
        percentage: u32,
        created_at: Option<DateTime<Utc>>,
        completed_at: String,
    ) -> Self {
        Self {
            id,
            quiz_id,
            quiz_title,
            score,
            total_questions,
            percentage,
            created_at,
            completed_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn quiz_id(&self) -> u32 {
        self.quiz_id
    }

    pub fn quiz_title(&self) -> &str {
        &self.quiz_title
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn completed_at(&self) -> &str {
        &self.completed_at
    }
}

/// `round(part / total * 100)`, rounding half away from zero. Zero when
/// `total` is zero.
pub fn percentage(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((f64::from(part) / f64::from(total)) * 100.0).round() as u32
}

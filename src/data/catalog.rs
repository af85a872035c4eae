use std::collections::HashSet;

use crate::error::CatalogError;
use crate::models::{Question, Quiz};

/// Validated, immutable set of quizzes ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    quizzes: Vec<Quiz>,
}

impl Catalog {
    /// Validate `quizzes` and sort them by id.
    pub fn new(mut quizzes: Vec<Quiz>) -> Result<Self, CatalogError> {
        if quizzes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(quizzes.len());
        for quiz in &quizzes {
            if quiz.id == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(quiz.id) {
                return Err(CatalogError::DuplicateId(quiz.id));
            }
            validate_quiz(quiz)?;
        }

        quizzes.sort_by_key(|quiz| quiz.id);
        Ok(Self { quizzes })
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn get(&self, index: usize) -> Option<&Quiz> {
        self.quizzes.get(index)
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

fn validate_quiz(quiz: &Quiz) -> Result<(), CatalogError> {
    if quiz.questions.is_empty() {
        return Err(CatalogError::NoQuestions { quiz_id: quiz.id });
    }

    for (question_index, question) in quiz.questions.iter().enumerate() {
        validate_question(quiz.id, question_index, question)?;
    }

    Ok(())
}

fn validate_question(quiz_id: u32, question: usize, q: &Question) -> Result<(), CatalogError> {
    if q.options.len() < 2 {
        return Err(CatalogError::TooFewOptions {
            quiz_id,
            question,
            found: q.options.len(),
        });
    }

    if q.correct_index >= q.options.len() {
        return Err(CatalogError::CorrectIndexOutOfBounds {
            quiz_id,
            question,
            index: q.correct_index,
        });
    }

    Ok(())
}

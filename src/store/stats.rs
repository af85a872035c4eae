//! Aggregate statistics over the attempt history.

use std::collections::BTreeMap;

use crate::models::{Attempt, percentage};

/// Best result and attempt count for one quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub best_percentage: u32,
    pub attempt_count: usize,
    pub title: String,
    pub short_title: String,
}

/// A quiz seen in the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredQuiz {
    pub id: u32,
    pub title: String,
    pub short_title: String,
}

/// Summary of a whole history. Computed on demand, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub total_attempts: usize,
    /// Weighted by question count: correct answers over questions answered.
    pub average_percentage: u32,
    pub best_percentage: u32,
    pub total_questions_answered: u64,
    pub total_correct_answers: u64,
    pub per_quiz_progress: BTreeMap<u32, QuizProgress>,
    /// Sorted by quiz id.
    pub discovered_quizzes: Vec<DiscoveredQuiz>,
}

impl AggregateStats {
    /// Share of discovered quizzes that have progress, as a percentage.
    pub fn completion_percentage(&self) -> u32 {
        let completed = u32::try_from(self.per_quiz_progress.len()).unwrap_or(u32::MAX);
        let discovered = u32::try_from(self.discovered_quizzes.len()).unwrap_or(u32::MAX);
        percentage(completed, discovered)
    }
}

/// Derive statistics from a most-recent-first history.
///
/// Quizzes are grouped by id only. Titles come from the first attempt seen
/// for an id, which is the most recent one.
pub fn compute_stats(history: &[Attempt]) -> AggregateStats {
    // Stored counts are arbitrary u32 values, so sum wide.
    let total_questions_answered: u64 = history
        .iter()
        .map(|a| u64::from(a.total_questions()))
        .sum();
    let total_correct_answers: u64 = history.iter().map(|a| u64::from(a.score())).sum();
    let best_percentage = history
        .iter()
        .map(Attempt::percentage)
        .max()
        .unwrap_or(0);

    let mut per_quiz_progress: BTreeMap<u32, QuizProgress> = BTreeMap::new();
    for attempt in history {
        per_quiz_progress
            .entry(attempt.quiz_id())
            .and_modify(|progress| {
                progress.best_percentage = progress.best_percentage.max(attempt.percentage());
                progress.attempt_count += 1;
            })
            .or_insert_with(|| QuizProgress {
                best_percentage: attempt.percentage(),
                attempt_count: 1,
                title: attempt.quiz_title().to_string(),
                short_title: short_title(attempt.quiz_title()).to_string(),
            });
    }

    let discovered_quizzes = per_quiz_progress
        .iter()
        .map(|(id, progress)| DiscoveredQuiz {
            id: *id,
            title: progress.title.clone(),
            short_title: progress.short_title.clone(),
        })
        .collect();

    AggregateStats {
        total_attempts: history.len(),
        average_percentage: weighted_percentage(total_correct_answers, total_questions_answered),
        best_percentage,
        total_questions_answered,
        total_correct_answers,
        per_quiz_progress,
        discovered_quizzes,
    }
}

fn weighted_percentage(correct: u64, answered: u64) -> u32 {
    if answered == 0 {
        return 0;
    }
    ((correct as f64 / answered as f64) * 100.0).round() as u32
}

/// Strip a leading `"Quiz <n>: "` from a quiz title.
pub fn short_title(title: &str) -> &str {
    let Some(rest) = title.strip_prefix("Quiz ") else {
        return title;
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return title;
    }
    match rest[digits..].strip_prefix(':') {
        Some(tail) => tail.trim_start(),
        None => title,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;

    fn attempt(quiz_id: u32, title: &str, score: u32, total: u32) -> Attempt {
        Attempt::new(quiz_id, title, score, total, Local::now())
    }

    #[test]
    fn test_empty_history() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, AggregateStats::default());
        assert_eq!(stats.average_percentage, 0);
        assert!(stats.per_quiz_progress.is_empty());
        assert!(stats.discovered_quizzes.is_empty());
        assert_eq!(stats.completion_percentage(), 0);
    }

    #[test]
    fn test_repeated_quiz_groups_into_one_entry() {
        // Most recent first: the 3/3 run came after the 2/3 run.
        let history = vec![
            attempt(3, "Quiz 3: Numbers", 3, 3),
            attempt(3, "Quiz 3: Numbers", 2, 3),
        ];
        let stats = compute_stats(&history);

        let progress = &stats.per_quiz_progress[&3];
        assert_eq!(progress.best_percentage, 100);
        assert_eq!(progress.attempt_count, 2);
        assert_eq!(progress.short_title, "Numbers");

        assert_eq!(stats.discovered_quizzes.len(), 1);
        assert_eq!(stats.discovered_quizzes[0].id, 3);
        assert_eq!(stats.total_attempts, 2);
        assert_eq!(stats.best_percentage, 100);
        assert_eq!(stats.completion_percentage(), 100);
    }

    #[test]
    fn test_average_is_weighted_by_questions() {
        // 1/4 (25%) and 3/3 (100%): plain mean would be 63, weighted is 4/7.
        let history = vec![attempt(1, "Quiz 1", 1, 4), attempt(2, "Quiz 2", 3, 3)];
        let stats = compute_stats(&history);

        assert_eq!(stats.total_questions_answered, 7);
        assert_eq!(stats.total_correct_answers, 4);
        assert_eq!(stats.average_percentage, 57);
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 1/8 = 12.5%
        let history = vec![attempt(1, "Quiz 1", 1, 8)];
        assert_eq!(compute_stats(&history).average_percentage, 13);
    }

    #[test]
    fn test_zero_question_attempts_do_not_divide_by_zero() {
        let history = vec![attempt(1, "Quiz 1", 0, 0)];
        let stats = compute_stats(&history);
        assert_eq!(stats.average_percentage, 0);
        assert_eq!(stats.total_attempts, 1);
    }

    #[test]
    fn test_most_recent_title_wins_and_ids_sorted() {
        let history = vec![
            attempt(7, "Quiz 7: Body parts", 1, 3),
            attempt(2, "Quiz 2: Expressions", 2, 3),
            attempt(7, "Quiz 7: Parts of the body", 3, 3),
        ];
        let stats = compute_stats(&history);

        let ids: Vec<u32> = stats.discovered_quizzes.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 7]);
        assert_eq!(stats.per_quiz_progress[&7].title, "Quiz 7: Body parts");
        assert_eq!(stats.per_quiz_progress[&7].best_percentage, 100);
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let history = vec![
            attempt(1, "Quiz 1", u32::MAX, u32::MAX),
            attempt(2, "Quiz 2", u32::MAX, u32::MAX),
            attempt(3, "Quiz 3", 0, 2),
        ];
        let stats = compute_stats(&history);

        assert_eq!(stats.total_questions_answered, 2 * u64::from(u32::MAX) + 2);
        assert_eq!(stats.total_correct_answers, 2 * u64::from(u32::MAX));
        assert_eq!(stats.average_percentage, 100);
        assert_eq!(stats.best_percentage, 100);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let history = vec![attempt(1, "Quiz 1", 2, 3), attempt(4, "Quiz 4", 1, 3)];
        assert_eq!(compute_stats(&history), compute_stats(&history));
    }

    #[test]
    fn test_short_title() {
        assert_eq!(short_title("Quiz 1: Greetings in Hausa"), "Greetings in Hausa");
        assert_eq!(short_title("Quiz 12:Colours"), "Colours");
        assert_eq!(short_title("Quiz time"), "Quiz time");
        assert_eq!(short_title("Quiz 3 Numbers"), "Quiz 3 Numbers");
        assert_eq!(short_title("Colours"), "Colours");
    }
}

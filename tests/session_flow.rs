use std::fs;
use std::time::{Duration, Instant};

use chrono::Local;
use hausa_trainer::store::{HISTORY_KEY, HISTORY_LIMIT};
use hausa_trainer::{
    Advance, Attempt, Catalog, DeadlineScheduler, FileStore, Phase, Question, Quiz, QuizEngine,
    ScoreStore, builtin_catalog, compute_stats, load_catalog_from_json,
};
use tempfile::tempdir;

fn file_scores(dir: &std::path::Path) -> ScoreStore {
    ScoreStore::new(FileStore::open(dir).unwrap())
}

/// Answer every question of the current quiz, getting `correct` of them right.
fn play_quiz(engine: &mut QuizEngine, scores: &mut ScoreStore, correct: usize) -> Attempt {
    let questions = engine.current_quiz().questions.clone();
    let mut last = None;
    for (i, question) in questions.iter().enumerate() {
        let choice = if i < correct {
            question.correct_index
        } else {
            (question.correct_index + 1) % question.options.len()
        };
        engine.submit_answer(choice).unwrap();
        if let Advance::QuizCompleted(attempt) = engine.advance(scores).unwrap() {
            last = Some(attempt);
        }
    }
    last.expect("last question completes the quiz")
}

fn numbers_catalog() -> Catalog {
    let question = |prompt: &str| Question::new(prompt, ["a", "b", "c"], 1);
    Catalog::new(vec![
        Quiz::new(3, "Quiz 3: Numbers", vec![question("one"), question("two"), question("three")]),
        Quiz::new(4, "Quiz 4: Colours", vec![question("red")]),
    ])
    .unwrap()
}

#[test]
fn full_session_is_persisted_across_reopen() {
    let dir = tempdir().unwrap();
    let catalog = builtin_catalog().unwrap();
    let quiz_count = catalog.len();

    {
        let mut scores = file_scores(dir.path());
        let mut engine = QuizEngine::new(catalog, DeadlineScheduler::new());
        for _ in 0..quiz_count {
            let total = engine.current_quiz().len();
            let attempt = play_quiz(&mut engine, &mut scores, total);
            assert_eq!(attempt.percentage(), 100);
            assert_eq!(engine.phase(), &Phase::QuizComplete);
            engine.go_to_next_quiz().unwrap();
        }
        assert_eq!(engine.phase(), &Phase::AllComplete);
        assert!(!engine.auto_advance_pending());
    }

    assert!(dir.path().join(format!("{HISTORY_KEY}.json")).exists());

    let reopened = file_scores(dir.path());
    let history = reopened.load_history();
    assert_eq!(history.len(), quiz_count);
    // Most recent first: the last quiz played leads.
    assert_eq!(history[0].quiz_id(), 7);
    assert_eq!(history[quiz_count - 1].quiz_id(), 1);

    let stats = reopened.stats();
    assert_eq!(stats.total_attempts, quiz_count);
    assert_eq!(stats.average_percentage, 100);
    assert_eq!(stats.discovered_quizzes.len(), quiz_count);
    assert_eq!(stats.completion_percentage(), 100);
}

#[test]
fn repeating_a_quiz_keeps_the_best_result() {
    let dir = tempdir().unwrap();
    let mut scores = file_scores(dir.path());
    let mut engine = QuizEngine::new(numbers_catalog(), DeadlineScheduler::new());

    let first = play_quiz(&mut engine, &mut scores, 2);
    assert_eq!(first.score(), 2);
    assert_eq!(first.percentage(), 67);

    engine.restart_current_quiz();
    assert!(!engine.auto_advance_pending());
    let second = play_quiz(&mut engine, &mut scores, 3);
    assert_eq!(second.percentage(), 100);

    let stats = scores.stats();
    let progress = &stats.per_quiz_progress[&3];
    assert_eq!(progress.best_percentage, 100);
    assert_eq!(progress.attempt_count, 2);
    assert_eq!(stats.discovered_quizzes.len(), 1);
    assert_eq!(stats.discovered_quizzes[0].short_title, "Numbers");
    assert_eq!(stats.average_percentage, 83);
}

#[test]
fn timer_moves_to_next_quiz_once() {
    let mut scores = ScoreStore::in_memory();
    let mut engine = QuizEngine::new(numbers_catalog(), DeadlineScheduler::new())
        .with_auto_advance_delay(Duration::from_secs(1));

    play_quiz(&mut engine, &mut scores, 3);
    assert!(engine.auto_advance_pending());

    let later = Instant::now() + Duration::from_secs(2);
    let due = engine.scheduler_mut().take_due(later);
    assert_eq!(due.len(), 1);
    assert!(engine.on_timer(due[0]));
    assert_eq!(engine.state().quiz_index, 1);
    assert_eq!(engine.phase(), &Phase::Answering);

    // Delivering the same handle again changes nothing.
    assert!(!engine.on_timer(due[0]));
    assert_eq!(engine.state().quiz_index, 1);
}

#[test]
fn manual_advance_cancels_the_timer() {
    let mut scores = ScoreStore::in_memory();
    let mut engine = QuizEngine::new(numbers_catalog(), DeadlineScheduler::new());

    play_quiz(&mut engine, &mut scores, 1);
    let handle = engine.pending_timer().unwrap();
    engine.go_to_next_quiz().unwrap();

    assert!(!engine.scheduler().is_pending(handle));
    assert!(!engine.on_timer(handle));
    assert_eq!(engine.state().quiz_index, 1);
}

#[test]
fn history_is_capped_on_disk() {
    let dir = tempdir().unwrap();
    {
        let mut scores = file_scores(dir.path());
        for i in 0..(HISTORY_LIMIT + 5) {
            let quiz_id = u32::try_from(i % 7).unwrap() + 1;
            let attempt = Attempt::new(quiz_id, format!("Quiz {quiz_id}"), 1, 3, Local::now());
            scores.append_attempt(&attempt).unwrap();
        }
    }

    let history = file_scores(dir.path()).load_history();
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(compute_stats(&history).total_attempts, HISTORY_LIMIT);
}

#[test]
fn clearing_removes_the_file() {
    let dir = tempdir().unwrap();
    let mut scores = file_scores(dir.path());
    let mut engine = QuizEngine::new(numbers_catalog(), DeadlineScheduler::new());
    play_quiz(&mut engine, &mut scores, 3);

    scores.clear_all().unwrap();
    assert!(!dir.path().join(format!("{HISTORY_KEY}.json")).exists());
    assert!(file_scores(dir.path()).load_history().is_empty());
}

#[test]
fn catalog_file_drives_the_engine() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quizzes.json");
    fs::write(
        &path,
        r#"[
            {"id": 2, "title": "Quiz 2: Family", "questions": [
                {"prompt": "Mother", "options": ["Uwa", "Uba"], "correct_index": 0}
            ]},
            {"id": 1, "title": "Quiz 1: Greetings", "questions": [
                {"prompt": "Hello", "options": ["Sannu", "Nagode"], "correct_index": 0},
                {"prompt": "Thank you", "options": ["Sannu", "Nagode"], "correct_index": 1}
            ]}
        ]"#,
    )
    .unwrap();

    let catalog = load_catalog_from_json(&path).unwrap();
    let mut engine = QuizEngine::new(catalog, DeadlineScheduler::new());
    assert_eq!(engine.current_quiz().id, 1);

    let mut scores = ScoreStore::in_memory();
    let attempt = play_quiz(&mut engine, &mut scores, 1);
    assert_eq!(attempt.quiz_title(), "Quiz 1: Greetings");
    assert_eq!(attempt.percentage(), 50);
    assert_eq!(attempt.total_questions(), 2);
}

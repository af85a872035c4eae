//! Persistent attempt history and the statistics derived from it.

mod history;
mod kv;
mod stats;

use log::{debug, warn};

use crate::engine::AttemptSink;
use crate::error::PersistenceError;
use crate::models::Attempt;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use stats::{AggregateStats, DiscoveredQuiz, QuizProgress, compute_stats, short_title};

/// Key holding the JSON attempt list.
pub const HISTORY_KEY: &str = "quizScores";

/// Number of attempts kept; older ones fall off the end.
pub const HISTORY_LIMIT: usize = 20;

/// Capped, most-recent-first log of finished attempts.
pub struct ScoreStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl ScoreStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            key: HISTORY_KEY.to_string(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Prepend `attempt`, keeping at most [`HISTORY_LIMIT`] entries.
    pub fn append_attempt(&mut self, attempt: &Attempt) -> Result<(), PersistenceError> {
        let mut history = match self.backend.get(&self.key)? {
            Some(payload) => history::decode(&payload),
            None => Vec::new(),
        };

        history.insert(0, attempt.clone());
        history.truncate(HISTORY_LIMIT);

        let payload = serde_json::to_string(&history)?;
        self.backend.set(&self.key, &payload)?;

        debug!(
            "saved attempt {} for quiz {} ({} in history)",
            attempt.id(),
            attempt.quiz_id(),
            history.len()
        );
        Ok(())
    }

    /// Saved attempts, most recent first, at most [`HISTORY_LIMIT`]. Never
    /// fails: unreadable history is reported as empty.
    pub fn load_history(&self) -> Vec<Attempt> {
        match self.backend.get(&self.key) {
            Ok(Some(payload)) => capped(history::decode(&payload)),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("could not read score history: {err}");
                Vec::new()
            }
        }
    }

    /// Delete the whole history.
    pub fn clear_all(&mut self) -> Result<(), PersistenceError> {
        self.backend.remove(&self.key)?;
        debug!("cleared score history");
        Ok(())
    }

    /// Statistics over the current history.
    pub fn stats(&self) -> AggregateStats {
        compute_stats(&self.load_history())
    }
}

fn capped(mut history: Vec<Attempt>) -> Vec<Attempt> {
    if history.len() > HISTORY_LIMIT {
        warn!(
            "score history holds {} entries, ignoring all but the latest {}",
            history.len(),
            HISTORY_LIMIT
        );
        history.truncate(HISTORY_LIMIT);
    }
    history
}

impl AttemptSink for ScoreStore {
    fn record(&mut self, attempt: &Attempt) -> Result<(), PersistenceError> {
        self.append_attempt(attempt)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::Local;

    use super::*;

    fn attempt(quiz_id: u32, score: u32) -> Attempt {
        Attempt::new(quiz_id, format!("Quiz {quiz_id}: Topic"), score, 3, Local::now())
    }

    /// Memory store whose operations can be made to fail.
    #[derive(Default)]
    struct BrokenStore {
        inner: MemoryStore,
        fail_reads: Rc<Cell<bool>>,
        fail_writes: Rc<Cell<bool>>,
    }

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
            if self.fail_reads.get() {
                return Err(PersistenceError::Backend("read failed".to_string()));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
            if self.fail_writes.get() {
                return Err(PersistenceError::Backend("write failed".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
            if self.fail_writes.get() {
                return Err(PersistenceError::Backend("remove failed".to_string()));
            }
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_empty_store_has_no_history() {
        let store = ScoreStore::in_memory();
        assert!(store.load_history().is_empty());
        assert_eq!(store.stats(), AggregateStats::default());
    }

    #[test]
    fn test_append_is_most_recent_first() {
        let mut store = ScoreStore::in_memory();
        let first = attempt(1, 1);
        let second = attempt(2, 2);
        store.append_attempt(&first).unwrap();
        store.append_attempt(&second).unwrap();

        assert_eq!(store.load_history(), vec![second, first]);
    }

    #[test]
    fn test_history_is_capped() {
        let mut store = ScoreStore::in_memory();
        let originals: Vec<Attempt> = (0..HISTORY_LIMIT).map(|_| attempt(1, 1)).collect();
        for a in &originals {
            store.append_attempt(a).unwrap();
        }
        assert_eq!(store.load_history().len(), HISTORY_LIMIT);

        let newest = attempt(2, 3);
        store.append_attempt(&newest).unwrap();

        let history = store.load_history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0], newest);
        assert!(!history.iter().any(|a| a.id() == originals[0].id()));
        assert_eq!(history[HISTORY_LIMIT - 1], originals[1]);
    }

    #[test]
    fn test_malformed_payload_reads_as_empty_and_is_replaced() {
        let mut backend = MemoryStore::new();
        backend.set(HISTORY_KEY, "not json at all").unwrap();
        let mut store = ScoreStore::new(backend);

        assert!(store.load_history().is_empty());

        let a = attempt(4, 2);
        store.append_attempt(&a).unwrap();
        assert_eq!(store.load_history(), vec![a]);
    }

    #[test]
    fn test_oversized_payload_loads_only_the_latest_entries() {
        let entries: Vec<String> = (1..=30)
            .map(|n| format!(r#"{{"id":"a{n}","quizId":{n},"score":1,"totalQuestions":3}}"#))
            .collect();
        let mut backend = MemoryStore::new();
        backend
            .set(HISTORY_KEY, &format!("[{}]", entries.join(",")))
            .unwrap();
        let mut store = ScoreStore::new(backend);

        let history = store.load_history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].id(), "a1");
        assert_eq!(history[HISTORY_LIMIT - 1].id(), "a20");
        assert_eq!(store.stats().total_attempts, HISTORY_LIMIT);

        let newest = attempt(2, 3);
        store.append_attempt(&newest).unwrap();
        let history = store.load_history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0], newest);
        assert_eq!(history[HISTORY_LIMIT - 1].id(), "a19");
    }

    #[test]
    fn test_hand_edited_huge_counts_still_give_stats() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                HISTORY_KEY,
                r#"[
                    {"quizId": 1, "score": 4294967295, "totalQuestions": 4294967295},
                    {"quizId": 2, "score": 4294967295, "totalQuestions": 4294967295}
                ]"#,
            )
            .unwrap();
        let store = ScoreStore::new(backend);

        assert_eq!(store.load_history().len(), 2);
        let stats = store.stats();
        assert_eq!(stats.total_questions_answered, 2 * u64::from(u32::MAX));
        assert_eq!(stats.average_percentage, 100);
    }

    #[test]
    fn test_clear_all() {
        let mut store = ScoreStore::in_memory();
        store.append_attempt(&attempt(1, 3)).unwrap();
        store.clear_all().unwrap();
        assert!(store.load_history().is_empty());
    }

    #[test]
    fn test_write_failure_is_returned() {
        let backend = BrokenStore::default();
        let fail_writes = Rc::clone(&backend.fail_writes);
        let mut store = ScoreStore::new(backend);

        store.append_attempt(&attempt(1, 1)).unwrap();
        fail_writes.set(true);

        assert!(matches!(
            store.append_attempt(&attempt(2, 2)),
            Err(PersistenceError::Backend(_))
        ));
        assert!(store.clear_all().is_err());
        assert_eq!(store.load_history().len(), 1);
    }

    #[test]
    fn test_read_failure_degrades_on_load_but_blocks_append() {
        let backend = BrokenStore::default();
        let fail_reads = Rc::clone(&backend.fail_reads);
        let mut store = ScoreStore::new(backend);

        store.append_attempt(&attempt(1, 1)).unwrap();
        fail_reads.set(true);

        assert!(store.load_history().is_empty());
        assert!(store.append_attempt(&attempt(2, 2)).is_err());

        fail_reads.set(false);
        assert_eq!(store.load_history().len(), 1);
    }

    #[test]
    fn test_store_is_an_attempt_sink() {
        let mut store = ScoreStore::in_memory();
        let a = attempt(6, 3);
        store.record(&a).unwrap();
        assert_eq!(store.stats().per_quiz_progress[&6].best_percentage, 100);
    }
}

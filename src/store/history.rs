//! Tolerant decoding of the persisted attempt history.
//!
//! The history is written by this crate, but older or hand-edited payloads
//! must still load: each entry is recovered field by field and anything that
//! cannot be made sense of is dropped instead of failing the whole list.

use chrono::{DateTime, Utc};
use log::warn;
use serde_json::Value;

use crate::models::{Attempt, percentage};

/// Decode a persisted payload. Malformed JSON yields an empty history.
pub(crate) fn decode(payload: &str) -> Vec<Attempt> {
    let value: Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(err) => {
            warn!("discarding unreadable score history: {err}");
            return Vec::new();
        }
    };

    let Value::Array(entries) = value else {
        warn!("discarding score history that is not a list");
        return Vec::new();
    };

    let total = entries.len();
    let attempts: Vec<Attempt> = entries.iter().filter_map(recover_attempt).collect();
    if attempts.len() < total {
        warn!(
            "skipped {} unreadable entries in score history",
            total - attempts.len()
        );
    }
    attempts
}

fn recover_attempt(entry: &Value) -> Option<Attempt> {
    let object = entry.as_object()?;
    let quiz_id = object.get("quizId").and_then(as_u32).filter(|id| *id > 0)?;

    let score = object.get("score").and_then(as_u32).unwrap_or(0);
    let total_questions = object
        .get("totalQuestions")
        .and_then(as_u32)
        .unwrap_or(score);
    let score = score.min(total_questions);
    let pct = object
        .get("percentage")
        .and_then(as_u32)
        .filter(|p| *p <= 100)
        .unwrap_or_else(|| percentage(score, total_questions));

    let created_at = object
        .get("createdAt")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|at| at.with_timezone(&Utc));

    let id = object
        .get("id")
        .and_then(as_text)
        .unwrap_or_else(|| fallback_id(quiz_id, created_at));
    let quiz_title = object
        .get("quizTitle")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Quiz {quiz_id}"));
    let completed_at = object
        .get("completedAt")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default();

    Some(Attempt::restore(
        id,
        quiz_id,
        quiz_title,
        score,
        total_questions,
        pct,
        created_at,
        completed_at,
    ))
}

/// Numbers may have been written as JSON numbers or numeric strings.
fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn fallback_id(quiz_id: u32, created_at: Option<DateTime<Utc>>) -> String {
    match created_at {
        Some(at) => format!("{quiz_id}-{}", at.timestamp_millis()),
        None => format!("{quiz_id}-{}", uuid::Uuid::new_v4()),
    }
}

//! Session-local question history.
//!
//! An explicit store the presentation layer owns and passes around, with
//! append/clear/delete operations. Nothing in the computational core reads
//! it; entries only accumulate what the user asked and what came back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionHistory {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl QuestionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a question/answer pair and returns its id.
    pub fn append(&mut self, question: impl Into<String>, answer: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(HistoryEntry {
            id,
            question: question.into(),
            answer: answer.into(),
            asked_at: Utc::now(),
        });
        id
    }

    /// Removes the entry with the given id; returns whether it existed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut history = QuestionHistory::new();
        let first = history.append("Why did utilities increase?", "Utilities rose by £30.");
        let second = history.append("What is the revenue?", "Revenue in Feb: £1,500.");
        assert!(second > first);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().id, second);
    }

    #[test]
    fn test_delete_removes_only_the_target() {
        let mut history = QuestionHistory::new();
        let first = history.append("q1", "a1");
        let second = history.append("q2", "a2");
        assert!(history.delete(first));
        assert!(!history.delete(first));
        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.entries()[0].id, second);
    }

    #[test]
    fn test_ids_are_not_reused_after_clear() {
        let mut history = QuestionHistory::new();
        let first = history.append("q1", "a1");
        history.clear();
        assert!(history.is_empty());
        let next = history.append("q2", "a2");
        assert!(next > first);
    }
}

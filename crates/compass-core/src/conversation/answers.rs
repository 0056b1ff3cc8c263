//! Answer storage keyed by question.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One recorded answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Answer {
    /// Key of the question that was answered
    pub key: String,
    /// Raw answer text as the student typed it
    pub value: String,
}

/// Insertion-ordered mapping from question key to raw answer text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AnswerRecord(Vec<Answer>);

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the answer for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|answer| answer.key == key)
            .map(|answer| answer.value.as_str())
    }

    /// Inserts a new answer or overwrites the existing one in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|answer| answer.key == key) {
            Some(existing) => existing.value = value,
            None => self.0.push(Answer { key, value }),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Answers in the order they were first recorded.
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl From<Vec<Answer>> for AnswerRecord {
    fn from(answers: Vec<Answer>) -> Self {
        answers
            .into_iter()
            .map(|answer| (answer.key, answer.value))
            .collect()
    }
}

/// Mutable answer storage owned by a conversation.
///
/// Values are stored as given: rejecting blank input is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    record: AnswerRecord,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.record.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.record.get(key)
    }

    /// Returns an owned snapshot. Changing the snapshot does not affect the
    /// store.
    pub fn all(&self) -> AnswerRecord {
        self.record.clone()
    }

    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut store = AnswerStore::new();
        store.set("subjects", "Math");
        assert_eq!(store.get("subjects"), Some("Math"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut store = AnswerStore::new();
        store.set("a", "1");
        store.set("b", "2");
        store.set("a", "3");

        let keys: Vec<_> = store.all().iter().map(|a| a.key.clone()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(store.get("a"), Some("3"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = AnswerStore::new();
        store.set("a", "1");

        let mut snapshot = store.all();
        snapshot.insert("b", "2");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("b"), None);
    }

    #[test]
    fn test_store_accepts_empty_values() {
        let mut store = AnswerStore::new();
        store.set("a", "");
        assert_eq!(store.get("a"), Some(""));
    }

    #[test]
    fn test_record_serializes_as_ordered_list() {
        let record: AnswerRecord = [("subjects", "Math"), ("studyHours", "3")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(
            json,
            r#"[{"key":"subjects","value":"Math"},{"key":"studyHours","value":"3"}]"#
        );

        let back: AnswerRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, record);
    }
}

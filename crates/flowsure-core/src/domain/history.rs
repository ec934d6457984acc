use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub kind: String,
    pub notes: String,
    pub actor_id: String,
}

impl HistoryEntry {
    pub fn new(
        date: NaiveDate,
        kind: &str,
        notes: &str,
        actor_id: &str,
    ) -> Result<Self, CoreError> {
        let notes = notes.trim();
        if notes.is_empty() {
            return Err(CoreError::EmptyHistoryNotes);
        }
        Ok(Self {
            date,
            kind: kind.trim().to_string(),
            notes: notes.to_string(),
            actor_id: actor_id.trim().to_string(),
        })
    }
}

use crate::domain::{Lead, LeadStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    NextContactDate,
    DiscussionSummary,
    HandoverNote,
    SelectedAction,
}

/// Transient draft for one open detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEdit {
    pub next_contact_date: Option<NaiveDate>,
    pub discussion_summary: String,
    pub handover_note: String,
    pub selected_action: Option<LeadStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftUpdate {
    NextContactDate(Option<NaiveDate>),
    DiscussionSummary(String),
    HandoverNote(String),
}

impl DraftUpdate {
    pub fn field(&self) -> DraftField {
        match self {
            DraftUpdate::NextContactDate(_) => DraftField::NextContactDate,
            DraftUpdate::DiscussionSummary(_) => DraftField::DiscussionSummary,
            DraftUpdate::HandoverNote(_) => DraftField::HandoverNote,
        }
    }
}

impl PendingEdit {
    /// Only the existing next contact date carries over; notes start empty.
    pub fn for_lead(lead: &Lead) -> Self {
        Self {
            next_contact_date: lead.next_contact_date,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::NextContactDate(value) => self.next_contact_date = value,
            DraftUpdate::DiscussionSummary(value) => self.discussion_summary = value,
            DraftUpdate::HandoverNote(value) => self.handover_note = value,
        }
    }

    /// Path A counts as started once the date or the summary holds anything.
    pub fn follow_up_started(&self) -> bool {
        self.next_contact_date.is_some() || !self.discussion_summary.is_empty()
    }

    pub fn handover_started(&self) -> bool {
        !self.handover_note.is_empty() || self.selected_action.is_some()
    }
}

use crate::domain::{DraftField, PendingEdit};
use crate::error::CoreError;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_FOLLOW_UP_WINDOW_MONTHS: u32 = 1;
pub const MAX_FOLLOW_UP_WINDOW_MONTHS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FieldError {
    #[error("schedule a follow-up with a summary, or add a handover note and choose an action")]
    IncompleteDraft,
    #[error("next contact date is required")]
    MissingNextContactDate,
    #[error("next contact date {date} is before {earliest}")]
    NextContactDateInPast { date: NaiveDate, earliest: NaiveDate },
    #[error("next contact date {date} is after {latest}")]
    NextContactDateTooFar { date: NaiveDate, latest: NaiveDate },
    #[error("discussion summary is required")]
    MissingDiscussionSummary,
    #[error("handover note is required")]
    MissingHandoverNote,
    #[error("select an action")]
    MissingAction,
}

impl FieldError {
    /// Field the error points at; `None` for the banner-level error.
    pub fn field(&self) -> Option<DraftField> {
        match self {
            FieldError::IncompleteDraft => None,
            FieldError::MissingNextContactDate
            | FieldError::NextContactDateInPast { .. }
            | FieldError::NextContactDateTooFar { .. } => Some(DraftField::NextContactDate),
            FieldError::MissingDiscussionSummary => Some(DraftField::DiscussionSummary),
            FieldError::MissingHandoverNote => Some(DraftField::HandoverNote),
            FieldError::MissingAction => Some(DraftField::SelectedAction),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePath {
    FollowUp,
    Handover,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(SavePath),
    Rejected(Vec<FieldError>),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Verdict::Accepted(_) => &[],
            Verdict::Rejected(errors) => errors,
        }
    }
}

/// Two-path completeness check run before a draft may be saved or closed.
///
/// Path A needs a next contact date within `[today, today + window]` and a
/// non-blank discussion summary. Path B needs a non-blank handover note and a
/// selected action; the caller is responsible for only letting actions from
/// the lead's allowed set into the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationGate {
    window_months: u32,
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self {
            window_months: DEFAULT_FOLLOW_UP_WINDOW_MONTHS,
        }
    }
}

impl ValidationGate {
    pub fn new(window_months: u32) -> Result<Self, CoreError> {
        if window_months == 0 || window_months > MAX_FOLLOW_UP_WINDOW_MONTHS {
            return Err(CoreError::InvalidFollowUpWindow(window_months));
        }
        Ok(Self { window_months })
    }

    pub fn window_months(&self) -> u32 {
        self.window_months
    }

    pub fn latest_follow_up(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_months(Months::new(self.window_months))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn validate(&self, edit: &PendingEdit, today: NaiveDate) -> Verdict {
        let follow_up = self.follow_up_errors(edit, today);
        let handover = handover_errors(edit);

        match (follow_up.is_empty(), handover.is_empty()) {
            (true, true) => return Verdict::Accepted(SavePath::Both),
            (true, false) => return Verdict::Accepted(SavePath::FollowUp),
            (false, true) => return Verdict::Accepted(SavePath::Handover),
            (false, false) => {}
        }

        let follow_up_started = edit.follow_up_started();
        let handover_started = edit.handover_started();
        if !follow_up_started && !handover_started {
            return Verdict::Rejected(vec![FieldError::IncompleteDraft]);
        }

        let mut errors = Vec::new();
        if follow_up_started {
            errors.extend(follow_up);
        }
        if handover_started {
            errors.extend(handover);
        }
        Verdict::Rejected(errors)
    }

    fn follow_up_errors(&self, edit: &PendingEdit, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match edit.next_contact_date {
            None => errors.push(FieldError::MissingNextContactDate),
            Some(date) if date < today => errors.push(FieldError::NextContactDateInPast {
                date,
                earliest: today,
            }),
            Some(date) => {
                let latest = self.latest_follow_up(today);
                if date > latest {
                    errors.push(FieldError::NextContactDateTooFar { date, latest });
                }
            }
        }
        if edit.discussion_summary.trim().is_empty() {
            errors.push(FieldError::MissingDiscussionSummary);
        }
        errors
    }
}

fn handover_errors(edit: &PendingEdit) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if edit.handover_note.trim().is_empty() {
        errors.push(FieldError::MissingHandoverNote);
    }
    if edit.selected_action.is_none() {
        errors.push(FieldError::MissingAction);
    }
    errors
}

pub fn validate(edit: &PendingEdit, today: NaiveDate) -> Verdict {
    ValidationGate::default().validate(edit, today)
}

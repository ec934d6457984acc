//! Detail-view lifecycle over a [`LeadStore`].
//!
//! At most one detail view is open at a time. Draft edits are re-validated on
//! every change, saves and closes pass through the validation gate, and the
//! cached rows and summary are recomputed after every commit.

use crate::error::StoreError;
use crate::store::LeadStore;
use chrono::NaiveDate;
use flowsure_core::view::{dashboard_view, detail_view};
use flowsure_core::{
    ensure_action_allowed, CoreError, DashboardViewDto, DraftUpdate, FieldError, FilterState,
    HistoryEntry, Lead, LeadDetailDto, LeadId, LeadRowDto, LeadStatus, PendingEdit, SavePath,
    SummaryDto, ValidationGate, Verdict,
};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("lead not found: {0}")]
    NotFound(LeadId),
    #[error("no detail view open for lead {0}")]
    NotOpen(LeadId),
    #[error("detail view already open for lead {open}")]
    AlreadyOpen { open: LeadId, requested: LeadId },
    #[error("invalid action: {0}")]
    InvalidAction(#[source] CoreError),
    #[error("validation rejected: {}", join_errors(.0))]
    Rejected(Vec<FieldError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleErrorKind {
    NotFound,
    Conflict,
    InvalidAction,
    Rejected,
}

impl LifecycleError {
    pub fn kind(&self) -> LifecycleErrorKind {
        match self {
            LifecycleError::NotFound(_) | LifecycleError::NotOpen(_) => {
                LifecycleErrorKind::NotFound
            }
            LifecycleError::AlreadyOpen { .. } => LifecycleErrorKind::Conflict,
            LifecycleError::InvalidAction(_) => LifecycleErrorKind::InvalidAction,
            LifecycleError::Rejected(_) => LifecycleErrorKind::Rejected,
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            LifecycleError::Rejected(errors) => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, LifecycleError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Open,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSession {
    pub lead_id: LeadId,
    pub edit: PendingEdit,
    pub phase: DetailPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    pub lead_id: LeadId,
    pub previous_status: LeadStatus,
    pub status: LeadStatus,
    pub path: SavePath,
    pub draft: PendingEdit,
}

impl CommitReceipt {
    pub fn status_changed(&self) -> bool {
        self.previous_status != self.status
    }
}

pub struct Dashboard {
    store: LeadStore,
    filter: FilterState,
    gate: ValidationGate,
    view: DashboardViewDto,
    session: Option<DetailSession>,
}

impl Dashboard {
    pub fn new(store: LeadStore, filter: FilterState) -> Self {
        let view = dashboard_view(store.get_all(), &filter);
        Self {
            store,
            filter,
            gate: ValidationGate::default(),
            view,
            session: None,
        }
    }

    pub fn with_gate(mut self, gate: ValidationGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn store(&self) -> &LeadStore {
        &self.store
    }

    pub fn into_store(self) -> LeadStore {
        self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.refresh();
    }

    pub fn view(&self) -> &DashboardViewDto {
        &self.view
    }

    pub fn list_visible(&self) -> &[LeadRowDto] {
        &self.view.rows
    }

    pub fn summary(&self) -> SummaryDto {
        self.view.summary
    }

    pub fn session(&self) -> Option<&DetailSession> {
        self.session.as_ref()
    }

    pub fn open_detail(&mut self, id: LeadId) -> Result<LeadDetailDto> {
        if let Some(session) = &self.session {
            return Err(LifecycleError::AlreadyOpen {
                open: session.lead_id,
                requested: id,
            });
        }
        let lead = self.store.get(id).ok_or(LifecycleError::NotFound(id))?;
        let edit = PendingEdit::for_lead(lead);
        let detail = detail_view(lead, &edit);
        self.session = Some(DetailSession {
            lead_id: id,
            edit,
            phase: DetailPhase::Open,
        });
        debug!(lead_id = %id, "detail opened");
        Ok(detail)
    }

    pub fn detail(&self, id: LeadId) -> Result<LeadDetailDto> {
        let session = self.session_for(id)?;
        let lead = self.store.get(id).ok_or(LifecycleError::NotFound(id))?;
        Ok(detail_view(lead, &session.edit))
    }

    /// Records `action` as the pending decision; nothing is committed yet.
    pub fn select_action(
        &mut self,
        id: LeadId,
        action: LeadStatus,
        today: NaiveDate,
    ) -> Result<Verdict> {
        self.session_for(id)?;
        let lead = self.store.get(id).ok_or(LifecycleError::NotFound(id))?;
        ensure_action_allowed(&lead.department, action).map_err(LifecycleError::InvalidAction)?;

        let gate = self.gate;
        let session = self.session_for_mut(id)?;
        session.edit.selected_action = Some(action);
        session.phase = DetailPhase::Editing;
        debug!(lead_id = %id, action = %action, "action selected");
        Ok(gate.validate(&session.edit, today))
    }

    pub fn update_draft(
        &mut self,
        id: LeadId,
        update: DraftUpdate,
        today: NaiveDate,
    ) -> Result<Verdict> {
        let gate = self.gate;
        let session = self.session_for_mut(id)?;
        debug!(lead_id = %id, field = ?update.field(), "draft updated");
        session.edit.apply(update);
        session.phase = DetailPhase::Editing;
        Ok(gate.validate(&session.edit, today))
    }

    /// Commits the draft once the gate accepts it. Only a selected action
    /// changes the lead's status.
    pub fn attempt_save(&mut self, id: LeadId, today: NaiveDate) -> Result<CommitReceipt> {
        self.discard_if_vanished(id)?;
        let path = self.check_gate(id, today)?;
        let Some(session) = self.session.take() else {
            return Err(LifecycleError::NotOpen(id));
        };

        let committed = match session.edit.selected_action {
            Some(action) => self
                .store
                .commit_status(id, action)
                .map(|previous| (previous, action)),
            None => self
                .store
                .get(id)
                .map(|lead| (lead.status, lead.status))
                .ok_or(StoreError::NotFound(id)),
        };
        let (previous_status, status) = match committed {
            Ok(statuses) => statuses,
            Err(err) => {
                warn!(lead_id = %id, error = %err, "lead vanished before commit");
                self.refresh();
                return Err(LifecycleError::NotFound(id));
            }
        };

        self.refresh();
        info!(
            lead_id = %id,
            from = %previous_status,
            to = %status,
            path = ?path,
            "detail saved"
        );
        Ok(CommitReceipt {
            lead_id: id,
            previous_status,
            status,
            path,
            draft: session.edit,
        })
    }

    /// Closes the detail view without committing, provided the draft passes
    /// the gate.
    pub fn attempt_close(&mut self, id: LeadId, today: NaiveDate) -> Result<()> {
        self.discard_if_vanished(id)?;
        self.check_gate(id, today)?;
        self.session = None;
        debug!(lead_id = %id, "detail closed");
        Ok(())
    }

    /// History append hook for collaborators; the lifecycle itself never
    /// writes history.
    pub fn append_history(&mut self, id: LeadId, entry: HistoryEntry) -> Result<()> {
        self.store
            .append_history(id, entry)
            .map_err(|_| LifecycleError::NotFound(id))?;
        self.refresh();
        Ok(())
    }

    /// Follow-up scheduling hook for collaborators, applied after a save.
    pub fn schedule_follow_up(&mut self, id: LeadId, date: Option<NaiveDate>) -> Result<()> {
        self.store
            .set_next_contact_date(id, date)
            .map_err(|_| LifecycleError::NotFound(id))?;
        self.refresh();
        Ok(())
    }

    pub fn remove_lead(&mut self, id: LeadId) -> Result<Lead> {
        let lead = self
            .store
            .remove(id)
            .map_err(|_| LifecycleError::NotFound(id))?;
        self.refresh();
        Ok(lead)
    }

    /// A session whose lead is gone can never pass the gate; drop it so the
    /// controller can open another view.
    fn discard_if_vanished(&mut self, id: LeadId) -> Result<()> {
        self.session_for(id)?;
        if self.store.get(id).is_some() {
            return Ok(());
        }
        warn!(lead_id = %id, "lead vanished while its detail view was open");
        self.session = None;
        self.refresh();
        Err(LifecycleError::NotFound(id))
    }

    fn check_gate(&self, id: LeadId, today: NaiveDate) -> Result<SavePath> {
        let session = self.session_for(id)?;
        match self.gate.validate(&session.edit, today) {
            Verdict::Accepted(path) => Ok(path),
            Verdict::Rejected(errors) => {
                debug!(lead_id = %id, errors = errors.len(), "draft rejected");
                Err(LifecycleError::Rejected(errors))
            }
        }
    }

    fn session_for(&self, id: LeadId) -> Result<&DetailSession> {
        self.session
            .as_ref()
            .filter(|session| session.lead_id == id)
            .ok_or(LifecycleError::NotOpen(id))
    }

    fn session_for_mut(&mut self, id: LeadId) -> Result<&mut DetailSession> {
        self.session
            .as_mut()
            .filter(|session| session.lead_id == id)
            .ok_or(LifecycleError::NotOpen(id))
    }

    fn refresh(&mut self) {
        self.view = dashboard_view(self.store.get_all(), &self.filter);
    }
}

use crate::error::{Result, StoreError};
use crate::loader::{write_leads_json, LeadLoader};
use chrono::NaiveDate;
use flowsure_core::{HistoryEntry, Lead, LeadId, LeadStatus};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Owned, insertion-ordered lead collection. `commit_status` is the only
/// way a lead's status changes.
#[derive(Debug, Clone, Default)]
pub struct LeadStore {
    leads: Vec<Lead>,
}

impl LeadStore {
    pub fn new(leads: Vec<Lead>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(leads.len());
        for lead in &leads {
            if !seen.insert(lead.id) {
                return Err(StoreError::DuplicateId(lead.id));
            }
        }
        Ok(Self { leads })
    }

    pub fn load(loader: &dyn LeadLoader) -> Result<Self> {
        let leads = loader.load()?;
        debug!(source = loader.source_name(), count = leads.len(), "leads loaded");
        Self::new(leads)
    }

    pub fn get_all(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: LeadId) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    /// Returns the status the lead held before the commit.
    pub fn commit_status(&mut self, id: LeadId, status: LeadStatus) -> Result<LeadStatus> {
        let lead = self.get_mut(id)?;
        let previous = lead.status;
        lead.status = status;
        Ok(previous)
    }

    pub fn append_history(&mut self, id: LeadId, entry: HistoryEntry) -> Result<()> {
        self.get_mut(id)?.history.push(entry);
        Ok(())
    }

    pub fn set_next_contact_date(&mut self, id: LeadId, date: Option<NaiveDate>) -> Result<()> {
        self.get_mut(id)?.next_contact_date = date;
        Ok(())
    }

    pub fn remove(&mut self, id: LeadId) -> Result<Lead> {
        let index = self
            .leads
            .iter()
            .position(|lead| lead.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.leads.remove(index))
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        write_leads_json(path, &self.leads)
    }

    fn get_mut(&mut self, id: LeadId) -> Result<&mut Lead> {
        self.leads
            .iter_mut()
            .find(|lead| lead.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

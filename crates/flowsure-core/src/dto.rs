use crate::domain::{HistoryEntry, LeadId, LeadSource, LeadStatus, PendingEdit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRowDto {
    pub id: LeadId,
    pub company: String,
    pub contact_person: String,
    pub status: LeadStatus,
    pub source: LeadSource,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDto {
    pub total: usize,
    pub new_count: usize,
    pub contacted_count: usize,
    pub won_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardViewDto {
    pub label: String,
    pub summary: SummaryDto,
    pub rows: Vec<LeadRowDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDetailDto {
    pub id: LeadId,
    pub company: String,
    pub contact_person: String,
    pub source: LeadSource,
    pub department: String,
    pub status: LeadStatus,
    pub created_at: NaiveDate,
    pub next_contact_date: Option<NaiveDate>,
    pub history: Vec<HistoryEntry>,
    pub document_count: usize,
    pub allowed_actions: Vec<LeadStatus>,
    pub draft: PendingEdit,
}

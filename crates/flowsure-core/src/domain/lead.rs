use crate::domain::{Department, HistoryEntry, LeadId, LeadSource, LeadStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub company: String,
    pub contact_person: String,
    pub status: LeadStatus,
    pub source: LeadSource,
    pub department: Department,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub next_contact_date: Option<NaiveDate>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub documents: Vec<serde_json::Value>,
}

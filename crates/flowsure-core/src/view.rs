use crate::domain::{Lead, LeadStatus, PendingEdit};
use crate::dto::{DashboardViewDto, LeadDetailDto, LeadRowDto, SummaryDto};
use crate::filter::{visible_leads, FilterState};
use crate::rules::allowed_actions;

pub fn list_visible(leads: &[Lead], filter: &FilterState) -> Vec<LeadRowDto> {
    visible_leads(leads, filter)
        .into_iter()
        .map(row_for)
        .collect()
}

/// Counts over exactly the rows `list_visible` returns for the same filter.
pub fn summarize(leads: &[Lead], filter: &FilterState) -> SummaryDto {
    summarize_visible(&visible_leads(leads, filter))
}

pub fn dashboard_view(leads: &[Lead], filter: &FilterState) -> DashboardViewDto {
    let visible = visible_leads(leads, filter);
    DashboardViewDto {
        label: filter.label(),
        summary: summarize_visible(&visible),
        rows: visible.into_iter().map(row_for).collect(),
    }
}

pub fn detail_view(lead: &Lead, draft: &PendingEdit) -> LeadDetailDto {
    LeadDetailDto {
        id: lead.id,
        company: lead.company.clone(),
        contact_person: lead.contact_person.clone(),
        source: lead.source,
        department: lead.department.as_str().to_string(),
        status: lead.status,
        created_at: lead.created_at,
        next_contact_date: lead.next_contact_date,
        history: lead.history.clone(),
        document_count: lead.documents.len(),
        allowed_actions: allowed_actions(&lead.department).to_vec(),
        draft: draft.clone(),
    }
}

fn summarize_visible(visible: &[&Lead]) -> SummaryDto {
    let count = |status: LeadStatus| visible.iter().filter(|lead| lead.status == status).count();
    SummaryDto {
        total: visible.len(),
        new_count: count(LeadStatus::New),
        contacted_count: count(LeadStatus::Contacted),
        won_count: count(LeadStatus::Won),
    }
}

fn row_for(lead: &Lead) -> LeadRowDto {
    LeadRowDto {
        id: lead.id,
        company: lead.company.clone(),
        contact_person: lead.contact_person.clone(),
        status: lead.status,
        source: lead.source,
    }
}

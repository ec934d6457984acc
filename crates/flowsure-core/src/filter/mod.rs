mod department;
mod selection;

pub use department::{department_visible, role_for_department, RoleKey};
pub use selection::{active_roles, filter_label, RoleSelection, ALL_DEPARTMENTS_LABEL};

use crate::domain::{Lead, LeadSource, LeadStatus};
use serde::{Deserialize, Serialize};

/// Active dashboard filter. The default selects every role with no status or
/// source restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub roles: RoleSelection,
    pub status: Option<LeadStatus>,
    pub source: Option<LeadSource>,
}

impl FilterState {
    pub fn with_roles(roles: RoleSelection) -> Self {
        Self {
            roles,
            ..Self::default()
        }
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        if !department_visible(&lead.department, &self.roles) {
            return false;
        }
        if self.status.is_some_and(|status| status != lead.status) {
            return false;
        }
        if self.source.is_some_and(|source| source != lead.source) {
            return false;
        }
        true
    }

    pub fn label(&self) -> String {
        filter_label(&self.roles)
    }
}

/// Leads passing `filter`, in the order they were given.
pub fn visible_leads<'a>(leads: &'a [Lead], filter: &FilterState) -> Vec<&'a Lead> {
    leads.iter().filter(|lead| filter.matches(lead)).collect()
}

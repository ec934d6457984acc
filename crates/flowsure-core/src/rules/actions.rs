use crate::domain::{Department, LeadStatus};
use crate::error::CoreError;

const TECHNOLOGY_ACTIONS: &[LeadStatus] = &[LeadStatus::Qualified, LeadStatus::Unqualified];
const SERVICES_ACTIONS: &[LeadStatus] = &[LeadStatus::Delivered, LeadStatus::Cancelled];
const BD_ACTIONS: &[LeadStatus] = &[LeadStatus::Won, LeadStatus::Lost];

/// Terminal actions offered in the detail view, in button order.
pub fn allowed_actions(department: &Department) -> &'static [LeadStatus] {
    match department {
        Department::Technology => TECHNOLOGY_ACTIONS,
        Department::Services => SERVICES_ACTIONS,
        Department::Retail | Department::Manufacturing => BD_ACTIONS,
        Department::Other(_) => TECHNOLOGY_ACTIONS,
    }
}

pub fn ensure_action_allowed(department: &Department, action: LeadStatus) -> Result<(), CoreError> {
    if allowed_actions(department).contains(&action) {
        Ok(())
    } else {
        Err(CoreError::ActionNotAllowed {
            department: department.as_str().to_string(),
            action: action.as_str().to_string(),
        })
    }
}

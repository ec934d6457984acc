use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid lead id: {0}")]
    InvalidLeadId(String),
    #[error("invalid lead status: {0}")]
    InvalidStatus(String),
    #[error("invalid lead source: {0}")]
    InvalidSource(String),
    #[error("invalid department role: {0}")]
    InvalidRole(String),
    #[error("department cannot be empty")]
    EmptyDepartment,
    #[error("action {action} is not allowed for department {department}")]
    ActionNotAllowed { department: String, action: String },
    #[error("history notes cannot be empty")]
    EmptyHistoryNotes,
    #[error("invalid follow-up window: {0} months")]
    InvalidFollowUpWindow(u32),
}

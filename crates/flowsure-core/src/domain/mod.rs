pub mod department;
pub mod draft;
pub mod history;
pub mod ids;
pub mod lead;
pub mod role;
pub mod source;
pub mod status;

pub use department::Department;
pub use draft::{DraftField, DraftUpdate, PendingEdit};
pub use history::HistoryEntry;
pub use ids::LeadId;
pub use lead::Lead;
pub use role::DepartmentRole;
pub use source::LeadSource;
pub use status::LeadStatus;

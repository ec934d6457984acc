pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod rules;
pub mod time;
pub mod view;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use filter::{filter_label, visible_leads, FilterState, RoleSelection};
pub use rules::*;
pub use view::{list_visible, summarize};

pub mod actions;
pub mod validation;

pub use actions::{allowed_actions, ensure_action_allowed};
pub use validation::{
    validate, FieldError, SavePath, ValidationGate, Verdict, DEFAULT_FOLLOW_UP_WINDOW_MONTHS,
    MAX_FOLLOW_UP_WINDOW_MONTHS,
};

use anyhow::Error;
use flowsure_config::ConfigError;
use flowsure_core::time::TimeParseError;
use flowsure_core::CoreError;
use flowsure_feedback::FeedbackError;
use flowsure_store::error::{StoreError, StoreErrorKind};
use flowsure_store::{LifecycleError, LifecycleErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            });
        }
        if let Some(lifecycle_err) = cause.downcast_ref::<LifecycleError>() {
            return ExitCode::from(lifecycle_exit_code(lifecycle_err));
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(feedback_err) = cause.downcast_ref::<FeedbackError>() {
            return ExitCode::from(feedback_exit_code(feedback_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(_parse_err) = cause.downcast_ref::<TimeParseError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn lifecycle_exit_code(err: &LifecycleError) -> u8 {
    match err.kind() {
        LifecycleErrorKind::NotFound => EXIT_NOT_FOUND,
        LifecycleErrorKind::Conflict => EXIT_FAILURE,
        LifecycleErrorKind::InvalidAction | LifecycleErrorKind::Rejected => EXIT_INVALID_INPUT,
    }
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::NotFound => EXIT_NOT_FOUND,
        StoreErrorKind::InvalidDataPath
        | StoreErrorKind::DuplicateId
        | StoreErrorKind::Parse
        | StoreErrorKind::Core => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir | StoreErrorKind::Encode | StoreErrorKind::Io => {
            EXIT_FAILURE
        }
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidFollowUpWindow(_)
        | ConfigError::InvalidRole(_)
        | ConfigError::InvalidUserId
        | ConfigError::InvalidFeedbackField { .. }
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn feedback_exit_code(err: &FeedbackError) -> u8 {
    match err {
        FeedbackError::EmptyText
        | FeedbackError::EmptyContext
        | FeedbackError::InvalidEmail(_)
        | FeedbackError::InvalidKind(_) => EXIT_INVALID_INPUT,
        FeedbackError::Io(_)
        | FeedbackError::Encode(_)
        | FeedbackError::Delivery(_)
        | FeedbackError::Unavailable(_) => EXIT_FAILURE,
    }
}

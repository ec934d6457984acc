pub mod error;
pub mod feedback;
pub mod http;
pub mod sink;
pub mod submit;

pub use error::{FeedbackError, Result};
pub use feedback::{Feedback, FeedbackId, FeedbackKind};
pub use http::HttpSink;
pub use sink::{FeedbackSink, JsonlFileSink, LogSink};
pub use submit::{submit, submit_blocking, FallbackReason, SubmitOutcome};

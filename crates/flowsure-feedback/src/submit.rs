//! Best-effort submission. Delivery runs on tokio's blocking pool and is raced
//! against a timeout; any timeout or sink failure degrades to a simulated
//! outcome instead of an error.

use crate::error::{FeedbackError, Result};
use crate::feedback::{Feedback, FeedbackId};
use crate::sink::FeedbackSink;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FallbackReason {
    TimedOut { timeout_ms: u64 },
    Failed { message: String },
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Delivered {
        id: FeedbackId,
        sink: &'static str,
    },
    Simulated {
        id: FeedbackId,
        #[serde(flatten)]
        reason: FallbackReason,
    },
}

impl SubmitOutcome {
    pub fn disabled(feedback: &Feedback) -> Self {
        debug!(id = %feedback.id, "feedback delivery disabled, simulating");
        SubmitOutcome::Simulated {
            id: feedback.id,
            reason: FallbackReason::Disabled,
        }
    }

    pub fn id(&self) -> FeedbackId {
        match self {
            SubmitOutcome::Delivered { id, .. } | SubmitOutcome::Simulated { id, .. } => *id,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered { .. })
    }
}

pub async fn submit(
    sink: Arc<dyn FeedbackSink>,
    feedback: Feedback,
    timeout: Duration,
) -> SubmitOutcome {
    let id = feedback.id;
    let sink_name = sink.sink_name();
    let task = tokio::task::spawn_blocking(move || sink.deliver(&feedback));

    let reason = match tokio::time::timeout(timeout, task).await {
        Ok(Ok(Ok(()))) => {
            debug!(%id, sink = sink_name, "feedback delivered");
            return SubmitOutcome::Delivered {
                id,
                sink: sink_name,
            };
        }
        Ok(Ok(Err(err))) => FallbackReason::Failed {
            message: err.to_string(),
        },
        Ok(Err(join_err)) => FallbackReason::Failed {
            message: join_err.to_string(),
        },
        Err(_) => FallbackReason::TimedOut {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        },
    };
    warn!(%id, sink = sink_name, ?reason, "feedback delivery fell back to simulation");
    SubmitOutcome::Simulated { id, reason }
}

/// Runs `submit` on a private current-thread runtime. A sink still blocked
/// after the timeout is abandoned rather than joined.
pub fn submit_blocking(
    sink: Arc<dyn FeedbackSink>,
    feedback: Feedback,
    timeout: Duration,
) -> Result<SubmitOutcome> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(FeedbackError::Io)?;
    let outcome = runtime.block_on(submit(sink, feedback, timeout));
    runtime.shutdown_background();
    Ok(outcome)
}

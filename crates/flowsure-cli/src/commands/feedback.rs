use crate::commands::{print_json, Context};
use crate::util::read_text_from_stdin;
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use flowsure_config::{FeedbackBackend, FeedbackConfig};
use flowsure_feedback::{
    submit_blocking, Feedback, FeedbackKind, FeedbackSink, HttpSink, JsonlFileSink, LogSink,
    SubmitOutcome,
};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct FeedbackArgs {
    /// feature or problem
    #[arg(long, default_value = "feature")]
    pub kind: String,
    /// Feedback text; read from stdin when omitted
    #[arg(long)]
    pub text: Option<String>,
    /// How the feature would help, or what you were trying to do
    #[arg(long)]
    pub context: String,
    #[arg(long)]
    pub email: Option<String>,
}

pub fn send_feedback(ctx: &Context<'_>, args: FeedbackArgs) -> Result<()> {
    let kind = args.kind.parse::<FeedbackKind>()?;
    let text = match args.text {
        Some(value) => value,
        None => read_text_from_stdin("text")?,
    };
    let feedback = Feedback::new(kind, &text, &args.context, args.email.as_deref(), Utc::now())?;

    let settings = &ctx.config.feedback;
    let outcome = if settings.enabled {
        submit_blocking(sink_for(settings), feedback, settings.timeout)?
    } else {
        SubmitOutcome::disabled(&feedback)
    };

    if ctx.json {
        return print_json(&outcome);
    }
    println!("Thank you for your feedback! ({})", outcome.id());
    Ok(())
}

fn sink_for(settings: &FeedbackConfig) -> Arc<dyn FeedbackSink> {
    match (settings.backend, &settings.path, &settings.endpoint) {
        (FeedbackBackend::File, Some(path), _) => Arc::new(JsonlFileSink::new(path.clone())),
        (FeedbackBackend::Http, _, Some(endpoint)) => {
            Arc::new(HttpSink::new(endpoint.clone(), settings.timeout))
        }
        _ => Arc::new(LogSink),
    }
}

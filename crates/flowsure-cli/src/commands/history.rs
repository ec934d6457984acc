use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{configured_actor, parse_lead_id, read_text_from_stdin, resolve_today};
use anyhow::Result;
use clap::Args;
use flowsure_core::{HistoryEntry, LeadId};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct NoteArgs {
    pub id: String,
    /// Entry kind (e.g. Call, Email, Meeting)
    #[arg(long, default_value = "Note")]
    pub kind: String,
    #[arg(long)]
    pub note: Option<String>,
    /// Entry date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub actor: Option<String>,
}

#[derive(Debug, Serialize)]
struct NoteOutput {
    id: LeadId,
    entry: HistoryEntry,
    history_len: usize,
}

pub fn add_note(ctx: &Context<'_>, args: NoteArgs) -> Result<()> {
    let id = parse_lead_id(&args.id)?;
    let date = resolve_today(args.date.as_deref())?;
    let actor = configured_actor(ctx.config, args.actor.as_deref()).ok_or_else(|| {
        invalid_input("no actor: pass --actor or set [user] id in the config")
    })?;
    let note = match args.note {
        Some(value) => value,
        None => read_text_from_stdin("note")?,
    };
    let entry = HistoryEntry::new(date, &args.kind, &note, &actor)?;

    let mut dashboard = ctx.default_dashboard()?;
    dashboard.append_history(id, entry.clone())?;
    ctx.persist(dashboard.store())?;

    let history_len = dashboard
        .store()
        .get(id)
        .map(|lead| lead.history.len())
        .unwrap_or_default();

    if ctx.json {
        return print_json(&NoteOutput {
            id,
            entry,
            history_len,
        });
    }
    println!("added history entry to lead {}", id);
    Ok(())
}

use crate::commands::{print_json, Context};
use crate::util::{configured_actor, parse_lead_id, parse_status, resolve_today, UNKNOWN_ACTOR};
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::Args;
use flowsure_core::time::{format_date, parse_date};
use flowsure_core::{DraftUpdate, FieldError, HistoryEntry, LeadId, LeadStatus, SavePath};
use flowsure_store::{CommitReceipt, Dashboard, LifecycleError};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct DraftArgs {
    pub id: String,
    /// Follow-up date (YYYY-MM-DD)
    #[arg(long)]
    pub next_contact_date: Option<String>,
    /// Drop the lead's existing next contact date from the draft
    #[arg(long, conflicts_with = "next_contact_date")]
    pub clear_next_contact_date: bool,
    /// Discussion summary for the follow-up
    #[arg(long)]
    pub summary: Option<String>,
    /// Handover note
    #[arg(long)]
    pub handover: Option<String>,
    /// Action to commit (e.g. Won, Qualified, Delivered)
    #[arg(long)]
    pub action: Option<String>,
    /// Evaluate dates as of this day (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,
    /// Actor recorded on history entries
    #[arg(long)]
    pub actor: Option<String>,
}

#[derive(Debug, Serialize)]
struct SaveOutput {
    id: LeadId,
    previous_status: LeadStatus,
    status: LeadStatus,
    status_changed: bool,
    path: SavePath,
    next_contact_date: Option<NaiveDate>,
    history_added: usize,
}

#[derive(Debug, Serialize)]
struct CloseOutput {
    id: LeadId,
    closed: bool,
}

#[derive(Debug, Serialize)]
struct RejectionOutput<'a> {
    id: LeadId,
    errors: &'a [FieldError],
}

pub fn save_detail(ctx: &Context<'_>, args: DraftArgs) -> Result<()> {
    let id = parse_lead_id(&args.id)?;
    let today = resolve_today(args.today.as_deref())?;
    let actor = configured_actor(ctx.config, args.actor.as_deref())
        .unwrap_or_else(|| UNKNOWN_ACTOR.to_string());
    let mut dashboard = ctx.default_dashboard()?;
    open_with_draft(&mut dashboard, id, &args, today)?;

    let receipt = match dashboard.attempt_save(id, today) {
        Ok(receipt) => receipt,
        Err(err) => return Err(rejected(ctx, id, err)),
    };

    let entries = history_for(&receipt, today, &actor)?;
    let history_added = entries.len();
    for entry in entries {
        dashboard.append_history(id, entry)?;
    }
    if matches!(receipt.path, SavePath::FollowUp | SavePath::Both) {
        dashboard.schedule_follow_up(id, receipt.draft.next_contact_date)?;
    }
    ctx.persist(dashboard.store())?;
    debug!(lead_id = %id, history_added, "dataset written");

    if ctx.json {
        return print_json(&SaveOutput {
            id,
            previous_status: receipt.previous_status,
            status: receipt.status,
            status_changed: receipt.status_changed(),
            path: receipt.path,
            next_contact_date: receipt.draft.next_contact_date,
            history_added,
        });
    }
    if receipt.status_changed() {
        println!(
            "saved lead {}: {} -> {}",
            id, receipt.previous_status, receipt.status
        );
    } else {
        println!("saved lead {}", id);
    }
    Ok(())
}

pub fn cancel_detail(ctx: &Context<'_>, args: DraftArgs) -> Result<()> {
    let id = parse_lead_id(&args.id)?;
    let today = resolve_today(args.today.as_deref())?;
    let mut dashboard = ctx.default_dashboard()?;
    open_with_draft(&mut dashboard, id, &args, today)?;

    if let Err(err) = dashboard.attempt_close(id, today) {
        return Err(rejected(ctx, id, err));
    }

    if ctx.json {
        return print_json(&CloseOutput { id, closed: true });
    }
    println!("closed lead {}", id);
    Ok(())
}

fn open_with_draft(
    dashboard: &mut Dashboard,
    id: LeadId,
    args: &DraftArgs,
    today: NaiveDate,
) -> Result<()> {
    dashboard.open_detail(id)?;

    if args.clear_next_contact_date {
        dashboard.update_draft(id, DraftUpdate::NextContactDate(None), today)?;
    }
    if let Some(raw) = args.next_contact_date.as_deref() {
        let date = parse_date(raw).with_context(|| "parse --next-contact-date")?;
        dashboard.update_draft(id, DraftUpdate::NextContactDate(Some(date)), today)?;
    }
    if let Some(summary) = args.summary.as_ref() {
        dashboard.update_draft(id, DraftUpdate::DiscussionSummary(summary.clone()), today)?;
    }
    if let Some(note) = args.handover.as_ref() {
        dashboard.update_draft(id, DraftUpdate::HandoverNote(note.clone()), today)?;
    }
    if let Some(raw) = args.action.as_deref() {
        let action = parse_status(raw)?;
        dashboard.select_action(id, action, today)?;
    }
    Ok(())
}

/// History entries a committed draft leaves behind, one per accepted path.
fn history_for(
    receipt: &CommitReceipt,
    today: NaiveDate,
    actor: &str,
) -> Result<Vec<HistoryEntry>> {
    let draft = &receipt.draft;
    let mut entries = Vec::new();
    if matches!(receipt.path, SavePath::FollowUp | SavePath::Both) {
        let mut notes = match draft.next_contact_date {
            Some(date) => format!(
                "{} (next contact {})",
                draft.discussion_summary.trim(),
                format_date(date)
            ),
            None => draft.discussion_summary.trim().to_string(),
        };
        // An action committed without a handover note is only visible here.
        if receipt.path == SavePath::FollowUp && receipt.status_changed() {
            notes.push_str(&format!(
                " ({} -> {})",
                receipt.previous_status, receipt.status
            ));
        }
        entries.push(HistoryEntry::new(today, "Follow-up", &notes, actor)?);
    }
    if matches!(receipt.path, SavePath::Handover | SavePath::Both) {
        let notes = format!(
            "{} ({} -> {})",
            draft.handover_note.trim(),
            receipt.previous_status,
            receipt.status
        );
        entries.push(HistoryEntry::new(today, "Handover", &notes, actor)?);
    }
    Ok(entries)
}

fn rejected(ctx: &Context<'_>, id: LeadId, err: LifecycleError) -> anyhow::Error {
    let errors = err.field_errors();
    if !errors.is_empty() {
        if ctx.json {
            if let Err(print_err) = print_json(&RejectionOutput { id, errors }) {
                return print_err;
            }
        } else {
            for error in errors {
                eprintln!("  - {}", error);
            }
        }
    }
    err.into()
}

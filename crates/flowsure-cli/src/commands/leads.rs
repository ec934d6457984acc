use crate::commands::{print_json, Context, FilterArgs};
use crate::util::parse_lead_id;
use anyhow::Result;
use clap::Args;
use flowsure_core::time::format_date;
use flowsure_core::{LeadDetailDto, LeadRowDto, SummaryDto};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Serialize)]
struct SummaryOutput<'a> {
    label: &'a str,
    #[serde(flatten)]
    summary: SummaryDto,
}

pub fn list_leads(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let filter = args.filter.resolve(&ctx.config.departments)?;
    let dashboard = ctx.dashboard(filter)?;
    let view = dashboard.view();

    if ctx.json {
        return print_json(view);
    }

    println!("{}", display_label(&view.label));
    if view.rows.is_empty() {
        println!("no leads");
        return Ok(());
    }
    for row in &view.rows {
        println!("{}", format_row(row));
    }
    Ok(())
}

pub fn show_summary(ctx: &Context<'_>, args: SummaryArgs) -> Result<()> {
    let filter = args.filter.resolve(&ctx.config.departments)?;
    let dashboard = ctx.dashboard(filter)?;
    let view = dashboard.view();

    if ctx.json {
        return print_json(&SummaryOutput {
            label: &view.label,
            summary: view.summary,
        });
    }

    let summary = view.summary;
    println!("{}", display_label(&view.label));
    println!("total:     {}", summary.total);
    println!("new:       {}", summary.new_count);
    println!("contacted: {}", summary.contacted_count);
    println!("won:       {}", summary.won_count);
    Ok(())
}

pub fn show_lead(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_lead_id(&args.id)?;
    let mut dashboard = ctx.default_dashboard()?;
    let detail = dashboard.open_detail(id)?;

    if ctx.json {
        return print_json(&detail);
    }
    print_detail(&detail);
    Ok(())
}

fn display_label(label: &str) -> &str {
    if label.is_empty() {
        "No departments selected"
    } else {
        label
    }
}

fn format_row(row: &LeadRowDto) -> String {
    format!(
        "{:>4}  {}  ({})  [{}]  {}",
        row.id, row.company, row.contact_person, row.status, row.source
    )
}

fn print_detail(detail: &LeadDetailDto) {
    println!("{}  {}", detail.id, detail.company);
    println!("contact: {}", detail.contact_person);
    println!("department: {}", detail.department);
    println!("source: {}", detail.source);
    println!("status: {}", detail.status);
    println!("created: {}", format_date(detail.created_at));
    match detail.next_contact_date {
        Some(date) => println!("next contact: {}", format_date(date)),
        None => println!("next contact: -"),
    }
    println!("documents: {}", detail.document_count);
    let actions = detail
        .allowed_actions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("actions: {}", actions);
    if detail.history.is_empty() {
        println!("history: -");
    } else {
        println!("history:");
        for entry in &detail.history {
            println!(
                "  {}  {}  {} ({})",
                format_date(entry.date),
                entry.kind,
                entry.notes,
                entry.actor_id
            );
        }
    }
}

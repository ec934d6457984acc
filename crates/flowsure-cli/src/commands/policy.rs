use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use flowsure_core::filter::{role_for_department, RoleKey};
use flowsure_core::{allowed_actions, Department, DepartmentRole, LeadStatus};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ActionsArgs {
    pub department: String,
}

#[derive(Debug, Serialize)]
struct ActionsOutput {
    department: String,
    actions: Vec<LeadStatus>,
}

#[derive(Debug, Serialize)]
struct RoleOutput {
    role: DepartmentRole,
    selected_by_default: bool,
    held_by_user: bool,
    departments: Vec<&'static str>,
}

const KNOWN_DEPARTMENTS: [Department; 4] = [
    Department::Technology,
    Department::Services,
    Department::Retail,
    Department::Manufacturing,
];

pub fn list_actions(ctx: &Context<'_>, args: ActionsArgs) -> Result<()> {
    let department = Department::parse(&args.department)?;
    let output = ActionsOutput {
        department: department.to_string(),
        actions: allowed_actions(&department).to_vec(),
    };

    if ctx.json {
        return print_json(&output);
    }
    for action in output.actions {
        println!("{}", action);
    }
    Ok(())
}

pub fn list_roles(ctx: &Context<'_>) -> Result<()> {
    let user_roles = ctx
        .config
        .user
        .as_ref()
        .map(|user| user.roles.as_slice())
        .unwrap_or_default();
    let roles = DepartmentRole::ALL
        .iter()
        .copied()
        .map(|role| RoleOutput {
            role,
            selected_by_default: ctx.config.departments.contains(role),
            held_by_user: user_roles.contains(&role),
            departments: departments_for(role),
        })
        .collect::<Vec<_>>();

    if ctx.json {
        return print_json(&roles);
    }
    for entry in roles {
        let marker = if entry.selected_by_default { "*" } else { " " };
        let held = if entry.held_by_user { " [you]" } else { "" };
        if entry.departments.is_empty() {
            println!("{} {}{}", marker, entry.role, held);
        } else {
            println!(
                "{} {}{}  ({})",
                marker,
                entry.role,
                held,
                entry.departments.join(", ")
            );
        }
    }
    Ok(())
}

fn departments_for(role: DepartmentRole) -> Vec<&'static str> {
    KNOWN_DEPARTMENTS
        .iter()
        .filter(|department| role_for_department(department) == RoleKey::Role(role))
        .map(|department| match department {
            Department::Technology => "Technology",
            Department::Services => "Services",
            Department::Retail => "Retail",
            Department::Manufacturing => "Manufacturing",
            Department::Other(_) => "",
        })
        .collect()
}

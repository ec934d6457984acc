use anyhow::{Context as _, Result};
use clap::Args;
use flowsure_config::AppConfig;
use flowsure_core::{FilterState, RoleSelection};
use flowsure_store::{Dashboard, JsonFileLoader, LeadStore};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use crate::util::{parse_role, parse_source, parse_status};

pub mod completions;
pub mod detail;
pub mod feedback;
pub mod history;
pub mod leads;
pub mod policy;

pub struct Context<'a> {
    pub data_path: &'a Path,
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    pub fn load_store(&self) -> Result<LeadStore> {
        let loader = JsonFileLoader::new(self.data_path);
        LeadStore::load(&loader)
            .with_context(|| format!("load leads {}", self.data_path.display()))
    }

    pub fn dashboard(&self, filter: FilterState) -> Result<Dashboard> {
        Ok(Dashboard::new(self.load_store()?, filter).with_gate(self.config.gate))
    }

    /// Dashboard under the configured default department selection.
    pub fn default_dashboard(&self) -> Result<Dashboard> {
        self.dashboard(FilterState::with_roles(self.config.departments.clone()))
    }

    pub fn persist(&self, store: &LeadStore) -> Result<()> {
        store
            .write_json(self.data_path)
            .with_context(|| format!("write leads {}", self.data_path.display()))
    }
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Department role to include (repeatable)
    #[arg(long = "dept", value_name = "ROLE", value_delimiter = ',')]
    pub departments: Vec<String>,
    /// Deselect every department
    #[arg(long, conflicts_with = "departments")]
    pub no_dept: bool,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub source: Option<String>,
}

impl FilterArgs {
    pub fn resolve(&self, defaults: &RoleSelection) -> Result<FilterState> {
        let roles = if self.no_dept {
            RoleSelection::empty()
        } else if self.departments.is_empty() {
            defaults.clone()
        } else {
            self.departments
                .iter()
                .map(|raw| parse_role(raw))
                .collect::<Result<RoleSelection>>()?
        };
        let status = self.status.as_deref().map(parse_status).transpose()?;
        let source = self.source.as_deref().map(parse_source).transpose()?;
        Ok(FilterState {
            roles,
            status,
            source,
        })
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

use crate::domain::DepartmentRole;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const ALL_DEPARTMENTS_LABEL: &str = "All departments";

/// Set of selected roles, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSelection(BTreeSet<DepartmentRole>);

impl Default for RoleSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl RoleSelection {
    pub fn all() -> Self {
        Self(DepartmentRole::ALL.into_iter().collect())
    }

    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, role: DepartmentRole) -> bool {
        self.0.contains(&role)
    }

    pub fn insert(&mut self, role: DepartmentRole) -> bool {
        self.0.insert(role)
    }

    pub fn remove(&mut self, role: DepartmentRole) -> bool {
        self.0.remove(&role)
    }

    pub fn is_all(&self) -> bool {
        self.0.len() == DepartmentRole::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = DepartmentRole> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<DepartmentRole> for RoleSelection {
    fn from_iter<I: IntoIterator<Item = DepartmentRole>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub fn active_roles(selection: &RoleSelection) -> Vec<DepartmentRole> {
    selection.iter().collect()
}

pub fn filter_label(selection: &RoleSelection) -> String {
    if selection.is_all() {
        return ALL_DEPARTMENTS_LABEL.to_string();
    }
    selection
        .iter()
        .map(DepartmentRole::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

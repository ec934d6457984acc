use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filter-facing role vocabulary. Declaration order is the display order
/// used by filter labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DepartmentRole {
    #[serde(rename = "presales")]
    Presales,
    #[serde(rename = "presales manager")]
    PresalesManager,
    #[serde(rename = "bd")]
    Bd,
    #[serde(rename = "bd manager")]
    BdManager,
    #[serde(rename = "Delivery")]
    Delivery,
    #[serde(rename = "Delivery Manager")]
    DeliveryManager,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Finance Manager")]
    FinanceManager,
    #[serde(rename = "Owner")]
    Owner,
}

impl DepartmentRole {
    pub const ALL: [DepartmentRole; 9] = [
        DepartmentRole::Presales,
        DepartmentRole::PresalesManager,
        DepartmentRole::Bd,
        DepartmentRole::BdManager,
        DepartmentRole::Delivery,
        DepartmentRole::DeliveryManager,
        DepartmentRole::Finance,
        DepartmentRole::FinanceManager,
        DepartmentRole::Owner,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DepartmentRole::Presales => "presales",
            DepartmentRole::PresalesManager => "presales manager",
            DepartmentRole::Bd => "bd",
            DepartmentRole::BdManager => "bd manager",
            DepartmentRole::Delivery => "Delivery",
            DepartmentRole::DeliveryManager => "Delivery Manager",
            DepartmentRole::Finance => "Finance",
            DepartmentRole::FinanceManager => "Finance Manager",
            DepartmentRole::Owner => "Owner",
        }
    }

    /// Exact, case-sensitive lookup used when a department name is passed
    /// through as a role key.
    pub fn from_exact(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for DepartmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DepartmentRole {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw
            .trim()
            .split(|ch: char| ch.is_whitespace() || ch == '-' || ch == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CoreError::InvalidRole(raw.to_string()))
    }
}

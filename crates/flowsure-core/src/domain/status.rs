use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Unqualified,
    Won,
    Lost,
    Delivered,
    Cancelled,
    Closed,
}

impl LeadStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Unqualified => "Unqualified",
            LeadStatus::Won => "Won",
            LeadStatus::Lost => "Lost",
            LeadStatus::Delivered => "Delivered",
            LeadStatus::Cancelled => "Cancelled",
            LeadStatus::Closed => "Closed",
        }
    }

    pub const fn all() -> &'static [LeadStatus] {
        &[
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
            LeadStatus::Unqualified,
            LeadStatus::Won,
            LeadStatus::Lost,
            LeadStatus::Delivered,
            LeadStatus::Cancelled,
            LeadStatus::Closed,
        ]
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        LeadStatus::all()
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| CoreError::InvalidStatus(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::LeadStatus;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("won".parse::<LeadStatus>().unwrap(), LeadStatus::Won);
        assert_eq!(
            " UNQUALIFIED ".parse::<LeadStatus>().unwrap(),
            LeadStatus::Unqualified
        );
    }

    #[test]
    fn parse_unknown_is_error() {
        assert!("pending".parse::<LeadStatus>().is_err());
    }
}

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Organizational category of a lead. Values outside the four known
/// departments are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Department {
    Technology,
    Services,
    Retail,
    Manufacturing,
    Other(String),
}

impl Department {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyDepartment);
        }
        Ok(Self::from(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Department::Technology => "Technology",
            Department::Services => "Services",
            Department::Retail => "Retail",
            Department::Manufacturing => "Manufacturing",
            Department::Other(value) => value,
        }
    }
}

impl From<String> for Department {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Technology" => Department::Technology,
            "Services" => Department::Services,
            "Retail" => Department::Retail,
            "Manufacturing" => Department::Manufacturing,
            _ => Department::Other(value),
        }
    }
}

impl From<Department> for String {
    fn from(value: Department) -> Self {
        match value {
            Department::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

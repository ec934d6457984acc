use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadSource {
    Website,
    Facebook,
    Google,
    #[serde(rename = "Cold Call")]
    ColdCall,
    Referral,
}

impl LeadSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::Facebook => "Facebook",
            LeadSource::Google => "Google",
            LeadSource::ColdCall => "Cold Call",
            LeadSource::Referral => "Referral",
        }
    }

    pub const fn all() -> &'static [LeadSource] {
        &[
            LeadSource::Website,
            LeadSource::Facebook,
            LeadSource::Google,
            LeadSource::ColdCall,
            LeadSource::Referral,
        ]
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadSource {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        match value.as_str() {
            "website" => Ok(LeadSource::Website),
            "facebook" => Ok(LeadSource::Facebook),
            "google" => Ok(LeadSource::Google),
            "cold call" | "cold-call" | "cold_call" | "coldcall" => Ok(LeadSource::ColdCall),
            "referral" => Ok(LeadSource::Referral),
            _ => Err(CoreError::InvalidSource(raw.to_string())),
        }
    }
}

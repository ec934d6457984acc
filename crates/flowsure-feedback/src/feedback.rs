use crate::error::{FeedbackError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(pub Uuid);

impl FeedbackId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FeedbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Feature,
    Problem,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackKind::Feature => "feature",
            FeedbackKind::Problem => "problem",
        }
    }

    /// Prompt shown for the required context field.
    pub fn context_prompt(self) -> &'static str {
        match self {
            FeedbackKind::Feature => "How would this feature help you?",
            FeedbackKind::Problem => "What were you trying to do?",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackKind {
    type Err = FeedbackError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "feature" => Ok(FeedbackKind::Feature),
            "problem" => Ok(FeedbackKind::Problem),
            _ => Err(FeedbackError::InvalidKind(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub kind: FeedbackKind,
    pub text: String,
    pub context: String,
    pub email: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(
        kind: FeedbackKind,
        text: &str,
        context: &str,
        email: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FeedbackError::EmptyText);
        }
        let context = context.trim();
        if context.is_empty() {
            return Err(FeedbackError::EmptyContext);
        }
        let email = normalize_email(email)?;
        Ok(Self {
            id: FeedbackId::new(),
            kind,
            text: text.to_string(),
            context: context.to_string(),
            email,
            submitted_at: now,
        })
    }
}

fn normalize_email(raw: Option<&str>) -> Result<Option<String>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
            Ok(Some(trimmed.to_string()))
        }
        _ => Err(FeedbackError::InvalidEmail(trimmed.to_string())),
    }
}

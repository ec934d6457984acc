use crate::error::invalid_input;
use anyhow::Result;
use chrono::NaiveDate;
use flowsure_config::AppConfig;
use flowsure_core::time::{parse_date, today_local};
use flowsure_core::{DepartmentRole, LeadId, LeadSource, LeadStatus};
use std::io::{self, Read};
use std::str::FromStr;

pub const UNKNOWN_ACTOR: &str = "unknown";

pub fn parse_lead_id(raw: &str) -> Result<LeadId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("lead id cannot be empty"));
    }
    LeadId::from_str(trimmed).map_err(|_| invalid_input(format!("invalid lead id: {trimmed}")))
}

pub fn parse_status(raw: &str) -> Result<LeadStatus> {
    Ok(raw.parse::<LeadStatus>()?)
}

pub fn parse_source(raw: &str) -> Result<LeadSource> {
    Ok(raw.parse::<LeadSource>()?)
}

pub fn parse_role(raw: &str) -> Result<DepartmentRole> {
    Ok(raw.parse::<DepartmentRole>()?)
}

/// `--today` override, falling back to the local calendar date.
pub fn resolve_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(value) => Ok(parse_date(value)?),
        None => Ok(today_local()),
    }
}

pub fn configured_actor(config: &AppConfig, flag: Option<&str>) -> Option<String> {
    flag.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| config.user.as_ref().map(|user| user.id.clone()))
}

pub fn read_text_from_stdin(what: &str) -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Err(invalid_input(format!(
            "{what} is empty (provide --{what} or stdin)"
        )));
    }
    Ok(buffer.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::{configured_actor, parse_lead_id, resolve_today};
    use chrono::NaiveDate;
    use flowsure_config::{AppConfig, UserConfig};

    #[test]
    fn parse_lead_id_rejects_garbage() {
        assert_eq!(parse_lead_id(" 7 ").unwrap().get(), 7);
        assert!(parse_lead_id("").is_err());
        assert!(parse_lead_id("seven").is_err());
    }

    #[test]
    fn today_override_is_parsed() {
        assert_eq!(
            resolve_today(Some("2025-09-15")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
        );
        assert!(resolve_today(Some("15/09/2025")).is_err());
    }

    #[test]
    fn actor_flag_wins_over_config() {
        let mut config = AppConfig::default();
        assert_eq!(configured_actor(&config, None), None);
        config.user = Some(UserConfig {
            id: "user001".to_string(),
            roles: Vec::new(),
        });
        assert_eq!(configured_actor(&config, None).as_deref(), Some("user001"));
        assert_eq!(
            configured_actor(&config, Some("user002")).as_deref(),
            Some("user002")
        );
    }
}

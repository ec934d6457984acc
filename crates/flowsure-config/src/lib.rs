use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use flowsure_core::{
    DepartmentRole, RoleSelection, ValidationGate, DEFAULT_FOLLOW_UP_WINDOW_MONTHS,
};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "flowsure";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_FEEDBACK_TIMEOUT_MS: u64 = 5_000;
pub const MAX_FEEDBACK_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: Option<PathBuf>,
    pub gate: ValidationGate,
    pub departments: RoleSelection,
    pub user: Option<UserConfig>,
    pub feedback: FeedbackConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConfig {
    pub id: String,
    /// Roles held by the current user; `flowsure roles` marks them.
    pub roles: Vec<DepartmentRole>,
}

#[derive(Debug, Clone)]
pub struct FeedbackConfig {
    pub enabled: bool,
    pub backend: FeedbackBackend,
    pub path: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackBackend {
    Log,
    File,
    Http,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            gate: ValidationGate::default(),
            departments: RoleSelection::all(),
            user: None,
            feedback: FeedbackConfig {
                enabled: true,
                backend: FeedbackBackend::Log,
                path: None,
                endpoint: None,
                timeout: Duration::from_millis(DEFAULT_FEEDBACK_TIMEOUT_MS),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid follow_up_window_months value: {0}")]
    InvalidFollowUpWindow(u32),
    #[error("invalid department role: {0}")]
    InvalidRole(String),
    #[error("invalid user id")]
    InvalidUserId,
    #[error("invalid feedback config: {field} {message}")]
    InvalidFeedbackField {
        field: &'static str,
        message: &'static str,
    },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_path: Option<PathBuf>,
    follow_up_window_months: Option<u32>,
    filter: Option<FilterFile>,
    user: Option<UserFile>,
    feedback: Option<FeedbackFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FilterFile {
    departments: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserFile {
    id: String,
    roles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeedbackFile {
    enabled: Option<bool>,
    backend: Option<FeedbackBackend>,
    path: Option<PathBuf>,
    endpoint: Option<String>,
    timeout_ms: Option<u64>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(path) = parsed.data_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        config.data_path = Some(path);
    }

    let window = parsed
        .follow_up_window_months
        .unwrap_or(DEFAULT_FOLLOW_UP_WINDOW_MONTHS);
    config.gate =
        ValidationGate::new(window).map_err(|_| ConfigError::InvalidFollowUpWindow(window))?;

    if let Some(departments) = parsed.filter.and_then(|filter| filter.departments) {
        config.departments = parse_roles(&departments)?.into_iter().collect();
    }

    if let Some(user) = parsed.user {
        let id = user.id.trim();
        if id.is_empty() {
            return Err(ConfigError::InvalidUserId);
        }
        let roles = match user.roles {
            Some(roles) => parse_roles(&roles)?,
            None => Vec::new(),
        };
        config.user = Some(UserConfig {
            id: id.to_string(),
            roles,
        });
    }

    if let Some(feedback) = parsed.feedback {
        merge_feedback(&mut config.feedback, feedback)?;
    }

    Ok(config)
}

fn merge_feedback(config: &mut FeedbackConfig, parsed: FeedbackFile) -> Result<()> {
    if let Some(enabled) = parsed.enabled {
        config.enabled = enabled;
    }
    if let Some(backend) = parsed.backend {
        config.backend = backend;
    }
    if let Some(path) = parsed.path {
        config.path = Some(path);
    }
    if let Some(endpoint) = parsed.endpoint {
        let trimmed = endpoint.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidFeedbackField {
                field: "endpoint",
                message: "cannot be empty",
            });
        }
        config.endpoint = Some(trimmed.to_string());
    }
    if let Some(timeout_ms) = parsed.timeout_ms {
        if timeout_ms == 0 || timeout_ms > MAX_FEEDBACK_TIMEOUT_MS {
            return Err(ConfigError::InvalidFeedbackField {
                field: "timeout_ms",
                message: "must be between 1 and 60000",
            });
        }
        config.timeout = Duration::from_millis(timeout_ms);
    }

    match config.backend {
        FeedbackBackend::File if config.path.is_none() => Err(ConfigError::InvalidFeedbackField {
            field: "path",
            message: "is required for the file backend",
        }),
        FeedbackBackend::Http if config.endpoint.is_none() => {
            Err(ConfigError::InvalidFeedbackField {
                field: "endpoint",
                message: "is required for the http backend",
            })
        }
        _ => Ok(()),
    }
}

fn parse_roles(raw: &[String]) -> Result<Vec<DepartmentRole>> {
    raw.iter()
        .map(|value| {
            value
                .parse::<DepartmentRole>()
                .map_err(|_| ConfigError::InvalidRole(value.clone()))
        })
        .collect()
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

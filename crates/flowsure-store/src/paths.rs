use crate::error::{Result, StoreError};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "flowsure";
const DATA_FILENAME: &str = "leads.json";

/// Location of the lead dataset. An explicit path is taken as given; the
/// default file sits in the per-user data directory, which is created
/// owner-only on first use.
pub fn resolve_data_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = custom {
        return non_empty(path);
    }
    let dir = default_data_dir(env::var_os("XDG_DATA_HOME"), dirs::home_dir())?;
    fs::create_dir_all(&dir)?;
    restrict_to_owner(&dir)?;
    Ok(dir.join(DATA_FILENAME))
}

fn default_data_dir(xdg_data_home: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    let base = match (xdg_data_home, home) {
        (Some(xdg), _) => non_empty(PathBuf::from(xdg))?,
        (None, Some(home)) => home.join(".local").join("share"),
        (None, None) => return Err(StoreError::MissingHomeDir),
    };
    Ok(base.join(APP_DIR))
}

fn non_empty(path: PathBuf) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(StoreError::InvalidDataPath(path));
    }
    Ok(path)
}

fn restrict_to_owner(dir: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
    }
    #[cfg(not(unix))]
    let _ = dir;
    Ok(())
}

use crate::error::{Result, StoreError};
use flowsure_core::Lead;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of the initial lead collection.
pub trait LeadLoader {
    fn source_name(&self) -> &'static str;
    fn load(&self) -> Result<Vec<Lead>>;
}

#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeadLoader for JsonFileLoader {
    fn source_name(&self) -> &'static str {
        "json-file"
    }

    fn load(&self) -> Result<Vec<Lead>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "lead data missing, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Writes the collection next to `path` and renames it into place.
pub fn write_leads_json(path: &Path, leads: &[Lead]) -> Result<()> {
    let encoded = serde_json::to_vec_pretty(leads).map_err(StoreError::Encode)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, encoded)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_leads_json, JsonFileLoader, LeadLoader};
    use crate::error::StoreErrorKind;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[
      {
        "id": 1,
        "company": "TechGadgets Inc.",
        "contact_person": "Alex Johnson",
        "status": "New",
        "source": "Website",
        "department": "Technology",
        "created_at": "2025-09-10",
        "next_contact_date": "2025-10-25"
      },
      {
        "id": 4,
        "company": "Precision Manufacturing Co.",
        "contact_person": "Robert Williams",
        "status": "Won",
        "source": "Cold Call",
        "department": "Manufacturing",
        "created_at": "2025-08-20",
        "next_contact_date": null,
        "history": [
          {"date": "2025-08-22", "kind": "Call", "notes": "Discussed inventory tracking.", "actor_id": "user003"}
        ],
        "documents": [{"name": "contract.pdf"}]
      }
    ]"#;

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().expect("tempdir");
        let loader = JsonFileLoader::new(temp.path().join("leads.json"));
        assert!(loader.load().expect("load").is_empty());
    }

    #[test]
    fn loads_and_writes_back() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("leads.json");
        fs::write(&path, SAMPLE).expect("write sample");

        let leads = JsonFileLoader::new(&path).load().expect("load");
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[1].history.len(), 1);
        assert_eq!(leads[1].documents.len(), 1);
        assert!(leads[0].history.is_empty());

        let out = temp.path().join("nested").join("out.json");
        write_leads_json(&out, &leads).expect("write");
        let reloaded = JsonFileLoader::new(&out).load().expect("reload");
        assert_eq!(reloaded, leads);
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("leads.json");
        fs::write(&path, "{not json").expect("write");
        let err = JsonFileLoader::new(&path).load().unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Parse);
    }
}

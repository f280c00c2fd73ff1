//! Append-only audit log of content-generation runs, kept as a YAML list at
//! `.warroom/log.yaml`. Every generation attempt is recorded regardless of
//! whether the AI path or the fallback path produced the text.

use crate::error::Result;
use crate::io::atomic_write;
use crate::paths;
use crate::types::{ContentSource, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub incident: String,
    pub action_id: Uuid,
    pub role: Role,
    pub source: ContentSource,
    /// External call attempts made before content was produced. Zero when no
    /// credential was configured.
    pub attempts: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationLog {
    #[serde(default)]
    pub entries: Vec<LogEntry>,
}

impl GenerationLog {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::log_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&data)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        atomic_write(&paths::log_path(root), data.as_bytes())
    }

    /// Load, append, and persist in one step.
    pub fn append(root: &Path, entry: LogEntry) -> Result<()> {
        let mut log = Self::load(root)?;
        log.entries.push(entry);
        log.save(root)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(incident: &str, source: ContentSource, attempts: u32) -> LogEntry {
        LogEntry {
            incident: incident.to_string(),
            action_id: Uuid::new_v4(),
            role: Role::Legal,
            source,
            attempts,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn missing_log_loads_empty() {
        let dir = TempDir::new().unwrap();
        let log = GenerationLog::load(dir.path()).unwrap();
        assert!(log.entries.is_empty());
    }

    #[test]
    fn append_accumulates_entries() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(paths::WARROOM_DIR)).unwrap();

        GenerationLog::append(dir.path(), entry("breach", ContentSource::AiGenerated, 1)).unwrap();
        GenerationLog::append(
            dir.path(),
            entry("breach", ContentSource::FallbackGenerated, 2),
        )
        .unwrap();

        let log = GenerationLog::load(dir.path()).unwrap();
        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].source, ContentSource::AiGenerated);
        assert_eq!(log.entries[1].attempts, 2);
    }
}

use crate::action::Action;
use crate::error::{Result, WarroomError};
use crate::paths;
use crate::plan::ActionPlan;
use crate::types::{IncidentStatus, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Incident
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    #[serde(default)]
    pub control_objective: String,
    #[serde(default)]
    pub framework_citations: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub plans: Vec<ActionPlan>,
}

impl Incident {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, severity: Severity) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            severity,
            status: IncidentStatus::Open,
            control_objective: String::new(),
            framework_citations: String::new(),
            created_at: Utc::now(),
            plans: Vec::new(),
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn create(
        root: &Path,
        slug: impl Into<String>,
        title: impl Into<String>,
        severity: Severity,
    ) -> Result<Self> {
        let slug = slug.into();
        paths::validate_slug(&slug)?;

        let dir = paths::incident_dir(root, &slug);
        if dir.exists() {
            return Err(WarroomError::IncidentExists(slug));
        }

        let incident = Self::new(slug, title, severity);
        incident.save(root)?;
        Ok(incident)
    }

    pub fn load(root: &Path, slug: &str) -> Result<Self> {
        let manifest = paths::incident_manifest(root, slug);
        if !manifest.exists() {
            return Err(WarroomError::IncidentNotFound(slug.to_string()));
        }
        let data = std::fs::read_to_string(&manifest)?;
        let incident: Incident = serde_yaml::from_str(&data)?;
        Ok(incident)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let manifest = paths::incident_manifest(root, &self.slug);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&manifest, data.as_bytes())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let incidents_dir = paths::incidents_dir(root);
        if !incidents_dir.exists() {
            return Ok(Vec::new());
        }

        let mut incidents = Vec::new();
        for entry in std::fs::read_dir(&incidents_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                let slug = entry.file_name().to_string_lossy().into_owned();
                match Self::load(root, &slug) {
                    Ok(i) => incidents.push(i),
                    Err(WarroomError::IncidentNotFound(_)) => {}
                    Err(e) => return Err(e),
                }
            }
        }
        incidents.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(incidents)
    }

    // ---------------------------------------------------------------------------
    // Plan helpers
    // ---------------------------------------------------------------------------

    pub fn plan(&self, id: Uuid) -> Option<&ActionPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn plan_mut(&mut self, id: Uuid) -> Option<&mut ActionPlan> {
        self.plans.iter_mut().find(|p| p.id == id)
    }

    pub fn selected_plan(&self) -> Option<&ActionPlan> {
        self.plans.iter().find(|p| p.selected)
    }

    pub fn selected_plan_mut(&mut self) -> Option<&mut ActionPlan> {
        self.plans.iter_mut().find(|p| p.selected)
    }

    /// Mark exactly one plan as selected, clearing any previous selection.
    pub fn select_plan(&mut self, id: Uuid) -> Result<()> {
        if self.plan(id).is_none() {
            return Err(WarroomError::PlanNotFound(id.to_string()));
        }
        for plan in &mut self.plans {
            plan.selected = plan.id == id;
        }
        self.status = IncidentStatus::InProgress;
        Ok(())
    }

    /// Find an action (and implicitly its deliverable) anywhere in this
    /// incident's plans.
    pub fn action(&self, id: Uuid) -> Option<&Action> {
        self.plans.iter().find_map(|p| p.action(id))
    }

    pub fn action_mut(&mut self, id: Uuid) -> Option<&mut Action> {
        self.plans.iter_mut().find_map(|p| p.action_mut(id))
    }

    // ---------------------------------------------------------------------------
    // Metadata mutations
    // ---------------------------------------------------------------------------

    pub fn set_status(&mut self, status: IncidentStatus) {
        self.status = status;
    }

    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand;
    use tempfile::TempDir;

    #[test]
    fn incident_create_load() {
        let dir = TempDir::new().unwrap();
        let incident =
            Incident::create(dir.path(), "db-outage", "Database outage", Severity::High).unwrap();
        assert_eq!(incident.slug, "db-outage");
        assert_eq!(incident.status, IncidentStatus::Open);

        let loaded = Incident::load(dir.path(), "db-outage").unwrap();
        assert_eq!(loaded.title, "Database outage");
        assert_eq!(loaded.severity, Severity::High);
    }

    #[test]
    fn incident_create_duplicate_fails() {
        let dir = TempDir::new().unwrap();
        Incident::create(dir.path(), "breach", "Breach", Severity::Critical).unwrap();
        assert!(matches!(
            Incident::create(dir.path(), "breach", "Breach again", Severity::Low),
            Err(WarroomError::IncidentExists(_))
        ));
    }

    #[test]
    fn incident_rejects_bad_slug() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Incident::create(dir.path(), "Bad Slug", "x", Severity::Low),
            Err(WarroomError::InvalidSlug(_))
        ));
    }

    #[test]
    fn select_plan_is_exclusive() {
        let mut incident = Incident::new("breach", "Breach", Severity::High);
        expand::expand_incident(&mut incident).unwrap();

        let first = incident.plans[0].id;
        let second = incident.plans[1].id;

        incident.select_plan(first).unwrap();
        incident.select_plan(second).unwrap();

        let selected: Vec<_> = incident.plans.iter().filter(|p| p.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, second);
        assert_eq!(incident.status, IncidentStatus::InProgress);
    }

    #[test]
    fn select_unknown_plan_fails() {
        let mut incident = Incident::new("breach", "Breach", Severity::High);
        expand::expand_incident(&mut incident).unwrap();
        assert!(matches!(
            incident.select_plan(Uuid::new_v4()),
            Err(WarroomError::PlanNotFound(_))
        ));
    }

    #[test]
    fn manifest_roundtrip_preserves_plans() {
        let dir = TempDir::new().unwrap();
        let mut incident =
            Incident::create(dir.path(), "breach", "Breach", Severity::Critical).unwrap();
        expand::expand_incident(&mut incident).unwrap();
        let plan_id = incident.plans[2].id;
        incident.select_plan(plan_id).unwrap();
        expand::expand_plan(&mut incident, plan_id).unwrap();
        incident.save(dir.path()).unwrap();

        let loaded = Incident::load(dir.path(), "breach").unwrap();
        assert_eq!(loaded.plans.len(), 5);
        let plan = loaded.selected_plan().unwrap();
        assert_eq!(plan.id, plan_id);
        assert!(plan.has_actions());
        for action in &plan.actions {
            assert!(action.deliverable.is_empty());
        }
    }
}

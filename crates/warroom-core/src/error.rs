use thiserror::Error;

#[derive(Debug, Error)]
pub enum WarroomError {
    #[error("not initialized: run 'warroom init'")]
    NotInitialized,

    #[error("incident not found: {0}")]
    IncidentNotFound(String),

    #[error("incident already exists: {0}")]
    IncidentExists(String),

    #[error("plan not found: {0}")]
    PlanNotFound(String),

    #[error("no plan selected for incident '{0}': run 'warroom plan select' first")]
    PlanNotSelected(String),

    #[error("incident '{0}' already has action plans: re-expansion would duplicate them")]
    PlansAlreadyExpanded(String),

    #[error("plan '{0}' already has actions: re-expansion would duplicate them")]
    ActionsAlreadyExpanded(String),

    #[error("action not found: {0}")]
    ActionNotFound(String),

    #[error("deliverable for action '{0}' has no content yet")]
    DeliverableEmpty(String),

    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("invalid severity: {0}")]
    InvalidSeverity(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WarroomError>;

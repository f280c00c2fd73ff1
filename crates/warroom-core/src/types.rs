use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = crate::error::WarroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(crate::error::WarroomError::InvalidSeverity(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// IncidentStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Open,
    InProgress,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::InProgress => "in_progress",
            IncidentStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IncidentStatus {
    type Err = crate::error::WarroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(IncidentStatus::Open),
            "in_progress" | "in-progress" => Ok(IncidentStatus::InProgress),
            "resolved" => Ok(IncidentStatus::Resolved),
            _ => Err(crate::error::WarroomError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// IncidentKind
// ---------------------------------------------------------------------------

/// Seed scenario used to pre-fill a new incident's narrative fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentKind {
    Security,
    DataBreach,
    SystemFailure,
}

impl IncidentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentKind::Security => "security",
            IncidentKind::DataBreach => "data-breach",
            IncidentKind::SystemFailure => "system-failure",
        }
    }
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IncidentKind {
    type Err = crate::error::WarroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "security" => Ok(IncidentKind::Security),
            "data-breach" => Ok(IncidentKind::DataBreach),
            "system-failure" => Ok(IncidentKind::SystemFailure),
            _ => Err(crate::error::WarroomError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// PlanTheme
// ---------------------------------------------------------------------------

/// Strategic focus of an action plan. Exactly one plan per theme is produced
/// when an incident is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTheme {
    Communications,
    Regulatory,
    Forensics,
    Executive,
    Continuity,
}

impl PlanTheme {
    pub fn all() -> &'static [PlanTheme] {
        &[
            PlanTheme::Communications,
            PlanTheme::Regulatory,
            PlanTheme::Forensics,
            PlanTheme::Executive,
            PlanTheme::Continuity,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlanTheme::Communications => "communications",
            PlanTheme::Regulatory => "regulatory",
            PlanTheme::Forensics => "forensics",
            PlanTheme::Executive => "executive",
            PlanTheme::Continuity => "continuity",
        }
    }
}

impl fmt::Display for PlanTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlanTheme {
    type Err = crate::error::WarroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "communications" => Ok(PlanTheme::Communications),
            "regulatory" => Ok(PlanTheme::Regulatory),
            "forensics" => Ok(PlanTheme::Forensics),
            "executive" => Ok(PlanTheme::Executive),
            "continuity" => Ok(PlanTheme::Continuity),
            _ => Err(crate::error::WarroomError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// RiskLevel / Confidence
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Expert role an action is assigned to. Fixed at action creation and used to
/// pick the prompt persona, the fallback template, and the required citation
/// set. Never re-derived from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Communications,
    Technical,
    Legal,
    Executive,
    Continuity,
    Coordinator,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[
            Role::Communications,
            Role::Technical,
            Role::Legal,
            Role::Executive,
            Role::Continuity,
            Role::Coordinator,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Communications => "communications",
            Role::Technical => "technical",
            Role::Legal => "legal",
            Role::Executive => "executive",
            Role::Continuity => "continuity",
            Role::Coordinator => "coordinator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::WarroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "communications" => Ok(Role::Communications),
            "technical" => Ok(Role::Technical),
            "legal" => Ok(Role::Legal),
            "executive" => Ok(Role::Executive),
            "continuity" => Ok(Role::Continuity),
            "coordinator" => Ok(Role::Coordinator),
            _ => Err(crate::error::WarroomError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority / ActionStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionStatus::Pending => "pending",
            ActionStatus::InProgress => "in_progress",
            ActionStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for ActionStatus {
    type Err = crate::error::WarroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ActionStatus::Pending),
            "in_progress" | "in-progress" => Ok(ActionStatus::InProgress),
            "completed" => Ok(ActionStatus::Completed),
            _ => Err(crate::error::WarroomError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ContentSource
// ---------------------------------------------------------------------------

/// Which path produced a deliverable's content. Must always reflect the path
/// that actually executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Pending,
    AiGenerated,
    FallbackGenerated,
    ManuallyEdited,
}

impl ContentSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentSource::Pending => "pending",
            ContentSource::AiGenerated => "ai_generated",
            ContentSource::FallbackGenerated => "fallback_generated",
            ContentSource::ManuallyEdited => "manually_edited",
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

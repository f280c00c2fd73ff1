use crate::action::Action;
use crate::types::{Confidence, PlanTheme, RiskLevel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ActionPlan
// ---------------------------------------------------------------------------

/// One strategic option for responding to an incident. Five are generated per
/// incident (one per theme); exactly one is later selected to drive action
/// expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPlan {
    pub id: Uuid,
    pub name: String,
    pub theme: PlanTheme,
    pub strategy: String,
    pub timeline: String,
    pub risk_level: RiskLevel,
    pub confidence: Confidence,
    pub resource_requirements: String,
    pub success_criteria: String,
    /// Compliance citations relevant to this theme. Never empty for a
    /// catalog-generated plan.
    pub citations: Vec<String>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl ActionPlan {
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn action(&self, id: Uuid) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn action_mut(&mut self, id: Uuid) -> Option<&mut Action> {
        self.actions.iter_mut().find(|a| a.id == id)
    }
}

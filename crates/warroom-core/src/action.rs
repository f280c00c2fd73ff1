use crate::deliverable::Deliverable;
use crate::types::{ActionStatus, Priority, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A concrete task derived from a selected plan. The role is assigned when the
/// action is created from the template catalog and drives prompt/fallback
/// selection downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: Uuid,
    pub step: u32,
    pub title: String,
    pub description: String,
    pub role: Role,
    pub priority: Priority,
    /// Due-by offset in hours from plan expansion.
    pub due_hours: u32,
    pub status: ActionStatus,
    pub deliverable: Deliverable,
}

impl Action {
    pub fn new(
        step: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        role: Role,
        priority: Priority,
        due_hours: u32,
    ) -> Self {
        let title = title.into();
        let deliverable = Deliverable::new(&title);
        Self {
            id: Uuid::new_v4(),
            step,
            title,
            description: description.into(),
            role,
            priority,
            due_hours,
            status: ActionStatus::Pending,
            deliverable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_action_has_blank_deliverable() {
        let a = Action::new(
            1,
            "Assess incident scope",
            "Evaluate the full extent of the incident",
            Role::Technical,
            Priority::Critical,
            2,
        );
        assert_eq!(a.status, ActionStatus::Pending);
        assert_eq!(a.deliverable.title, "Assess incident scope");
        assert!(a.deliverable.is_empty());
    }
}

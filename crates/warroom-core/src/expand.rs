//! Deterministic template expansion. An incident expands to exactly five
//! plans (one per theme); a selected plan expands to its theme's fixed action
//! set. Both operations refuse to run twice.

use crate::error::{Result, WarroomError};
use crate::incident::Incident;
use crate::templates;
use tracing::debug;
use uuid::Uuid;

/// Generate the five strategic plans for an incident. Fails if the incident
/// already has plans so re-running never duplicates records.
pub fn expand_incident(incident: &mut Incident) -> Result<()> {
    if !incident.plans.is_empty() {
        return Err(WarroomError::PlansAlreadyExpanded(incident.slug.clone()));
    }

    incident.plans = templates::plan_catalog()
        .iter()
        .map(|t| t.instantiate())
        .collect();

    debug!(
        incident = %incident.slug,
        plans = incident.plans.len(),
        "expanded incident into plans"
    );
    Ok(())
}

/// Populate the given plan with its theme's action templates. The plan must
/// be the selected one and must not already have actions.
pub fn expand_plan(incident: &mut Incident, plan_id: Uuid) -> Result<()> {
    let slug = incident.slug.clone();
    let plan = incident
        .plan_mut(plan_id)
        .ok_or_else(|| WarroomError::PlanNotFound(plan_id.to_string()))?;

    if !plan.selected {
        return Err(WarroomError::PlanNotSelected(slug));
    }
    if plan.has_actions() {
        return Err(WarroomError::ActionsAlreadyExpanded(plan.name.clone()));
    }

    plan.actions = templates::actions_for(plan.theme)
        .iter()
        .enumerate()
        .map(|(i, t)| t.instantiate(i as u32 + 1))
        .collect();

    debug!(
        incident = %slug,
        plan = %plan.name,
        actions = plan.actions.len(),
        "expanded plan into actions"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlanTheme, Severity};

    fn expanded_incident() -> Incident {
        let mut incident = Incident::new("breach", "Data breach", Severity::Critical);
        expand_incident(&mut incident).unwrap();
        incident
    }

    #[test]
    fn incident_expands_to_exactly_five_plans() {
        let incident = expanded_incident();
        assert_eq!(incident.plans.len(), 5);
        for theme in PlanTheme::all() {
            assert_eq!(
                incident.plans.iter().filter(|p| p.theme == *theme).count(),
                1
            );
        }
        assert!(incident.plans.iter().all(|p| !p.selected));
        assert!(incident.plans.iter().all(|p| !p.citations.is_empty()));
    }

    #[test]
    fn re_expanding_incident_fails() {
        let mut incident = expanded_incident();
        assert!(matches!(
            expand_incident(&mut incident),
            Err(WarroomError::PlansAlreadyExpanded(_))
        ));
        assert_eq!(incident.plans.len(), 5);
    }

    #[test]
    fn plan_expands_to_four_to_six_actions_each_with_blank_deliverable() {
        let mut incident = expanded_incident();
        let id = incident.plans[0].id;
        incident.select_plan(id).unwrap();
        expand_plan(&mut incident, id).unwrap();

        let plan = incident.plan(id).unwrap();
        assert!((4..=6).contains(&plan.actions.len()));
        for (i, action) in plan.actions.iter().enumerate() {
            assert_eq!(action.step, i as u32 + 1);
            assert!(action.deliverable.is_empty());
        }
    }

    #[test]
    fn expanding_unselected_plan_fails() {
        let mut incident = expanded_incident();
        let id = incident.plans[0].id;
        assert!(matches!(
            expand_plan(&mut incident, id),
            Err(WarroomError::PlanNotSelected(_))
        ));
    }

    #[test]
    fn re_expanding_plan_fails_and_preserves_actions() {
        let mut incident = expanded_incident();
        let id = incident.plans[0].id;
        incident.select_plan(id).unwrap();
        expand_plan(&mut incident, id).unwrap();
        let ids: Vec<_> = incident.plan(id).unwrap().actions.iter().map(|a| a.id).collect();

        assert!(matches!(
            expand_plan(&mut incident, id),
            Err(WarroomError::ActionsAlreadyExpanded(_))
        ));
        let after: Vec<_> = incident.plan(id).unwrap().actions.iter().map(|a| a.id).collect();
        assert_eq!(ids, after);
    }

    #[test]
    fn expanding_unknown_plan_fails() {
        let mut incident = expanded_incident();
        assert!(matches!(
            expand_plan(&mut incident, Uuid::new_v4()),
            Err(WarroomError::PlanNotFound(_))
        ));
    }
}

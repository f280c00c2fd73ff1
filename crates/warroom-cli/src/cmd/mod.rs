pub mod action;
pub mod deliverable;
pub mod export;
pub mod generate;
pub mod incident;
pub mod init;
pub mod log;
pub mod plan;

use anyhow::bail;
use uuid::Uuid;
use warroom_core::incident::Incident;

/// Resolve a plan by uuid prefix or by theme name.
pub(crate) fn resolve_plan_id(incident: &Incident, reference: &str) -> anyhow::Result<Uuid> {
    if let Ok(theme) = reference.parse::<warroom_core::types::PlanTheme>() {
        if let Some(plan) = incident.plans.iter().find(|p| p.theme == theme) {
            return Ok(plan.id);
        }
        bail!(
            "incident '{}' has no {} plan (run 'warroom plan expand' first)",
            incident.slug,
            theme
        );
    }

    let matches: Vec<Uuid> = incident
        .plans
        .iter()
        .filter(|p| p.id.to_string().starts_with(reference))
        .map(|p| p.id)
        .collect();
    match matches.len() {
        0 => bail!(
            "no plan matching '{reference}' in incident '{}'",
            incident.slug
        ),
        1 => Ok(matches[0]),
        n => bail!("plan reference '{reference}' is ambiguous ({n} matches)"),
    }
}

/// Resolve an action anywhere in the incident by uuid prefix or step number
/// within the selected plan.
pub(crate) fn resolve_action_id(incident: &Incident, reference: &str) -> anyhow::Result<Uuid> {
    if let Ok(step) = reference.parse::<u32>() {
        if let Some(plan) = incident.selected_plan() {
            if let Some(action) = plan.actions.iter().find(|a| a.step == step) {
                return Ok(action.id);
            }
        }
        bail!(
            "no action at step {step} in the selected plan of incident '{}'",
            incident.slug
        );
    }

    let matches: Vec<Uuid> = incident
        .plans
        .iter()
        .flat_map(|p| p.actions.iter())
        .filter(|a| a.id.to_string().starts_with(reference))
        .map(|a| a.id)
        .collect();
    match matches.len() {
        0 => bail!(
            "no action matching '{reference}' in incident '{}'",
            incident.slug
        ),
        1 => Ok(matches[0]),
        n => bail!("action reference '{reference}' is ambiguous ({n} matches)"),
    }
}

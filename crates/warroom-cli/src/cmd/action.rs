use crate::cmd::resolve_action_id;
use crate::output;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use warroom_core::expand;
use warroom_core::incident::Incident;
use warroom_core::types::ActionStatus;
use warroom_core::WarroomError;

#[derive(Subcommand)]
pub enum ActionSubcommand {
    /// Expand the selected plan into its action set
    Expand { incident: String },

    /// List the actions of the selected plan
    List { incident: String },

    /// Show one action in full
    Show {
        incident: String,

        /// Action id prefix or step number
        action: String,
    },

    /// Set action status: pending, in_progress, completed
    Status {
        incident: String,

        /// Action id prefix or step number
        action: String,

        status: ActionStatus,
    },
}

pub fn run(root: &Path, subcommand: ActionSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        ActionSubcommand::Expand { incident } => expand_actions(root, &incident, json),
        ActionSubcommand::List { incident } => list(root, &incident, json),
        ActionSubcommand::Show { incident, action } => show(root, &incident, &action, json),
        ActionSubcommand::Status {
            incident,
            action,
            status,
        } => set_status(root, &incident, &action, status, json),
    }
}

fn expand_actions(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let mut incident = Incident::load(root, slug)?;
    let plan_id = incident
        .selected_plan()
        .ok_or_else(|| WarroomError::PlanNotSelected(slug.to_string()))?
        .id;
    expand::expand_plan(&mut incident, plan_id)
        .with_context(|| format!("expanding actions for '{slug}'"))?;
    incident.save(root)?;

    let plan = incident.plan(plan_id).unwrap();
    if json {
        return output::print_json(&plan.actions);
    }
    println!(
        "expanded plan '{}' into {} actions",
        plan.name,
        plan.actions.len()
    );
    print_action_table(&incident);
    println!("\nnext: warroom generate {slug} --all");
    Ok(())
}

fn list(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let incident = Incident::load(root, slug)?;
    let plan = incident
        .selected_plan()
        .ok_or_else(|| WarroomError::PlanNotSelected(slug.to_string()))?;

    if json {
        return output::print_json(&plan.actions);
    }
    if !plan.has_actions() {
        println!("no actions yet: run 'warroom action expand {slug}'");
        return Ok(());
    }
    print_action_table(&incident);
    Ok(())
}

fn show(root: &Path, slug: &str, action_ref: &str, json: bool) -> anyhow::Result<()> {
    let incident = Incident::load(root, slug)?;
    let id = resolve_action_id(&incident, action_ref)?;
    let action = incident.action(id).unwrap();

    if json {
        return output::print_json(action);
    }

    println!("step {} — {}", action.step, action.title);
    println!(
        "role: {}  priority: {}  due: {}h  status: {}",
        action.role, action.priority, action.due_hours, action.status
    );
    println!("\n{}", action.description);
    println!(
        "\ndeliverable: {} ({})",
        action.deliverable.title, action.deliverable.source
    );
    Ok(())
}

fn set_status(
    root: &Path,
    slug: &str,
    action_ref: &str,
    status: ActionStatus,
    json: bool,
) -> anyhow::Result<()> {
    let mut incident = Incident::load(root, slug)?;
    let id = resolve_action_id(&incident, action_ref)?;
    let action = incident
        .action_mut(id)
        .ok_or_else(|| WarroomError::ActionNotFound(id.to_string()))?;
    action.status = status;
    let title = action.title.clone();
    incident.save(root)?;

    if json {
        output::print_json(incident.action(id).unwrap())?;
    } else {
        println!("action '{title}' is now {status}");
    }
    Ok(())
}

fn print_action_table(incident: &Incident) {
    let Some(plan) = incident.selected_plan() else {
        return;
    };
    let rows = plan
        .actions
        .iter()
        .map(|a| {
            vec![
                a.step.to_string(),
                a.id.to_string()[..8].to_string(),
                a.title.clone(),
                a.role.to_string(),
                a.priority.to_string(),
                format!("{}h", a.due_hours),
                a.deliverable.source.to_string(),
            ]
        })
        .collect();
    output::print_table(
        &["STEP", "ID", "ACTION", "ROLE", "PRIORITY", "DUE", "DELIVERABLE"],
        rows,
    );
}

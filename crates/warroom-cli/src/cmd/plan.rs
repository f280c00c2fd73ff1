use crate::cmd::resolve_plan_id;
use crate::output;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use warroom_core::expand;
use warroom_core::incident::Incident;

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// Generate the five strategic plans for an incident
    Expand { incident: String },

    /// List an incident's plans
    List { incident: String },

    /// Show one plan in full
    Show {
        incident: String,

        /// Plan id prefix or theme name
        plan: String,
    },

    /// Select the plan that will drive action expansion
    Select {
        incident: String,

        /// Plan id prefix or theme name
        plan: String,
    },
}

pub fn run(root: &Path, subcommand: PlanSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        PlanSubcommand::Expand { incident } => expand_plans(root, &incident, json),
        PlanSubcommand::List { incident } => list(root, &incident, json),
        PlanSubcommand::Show { incident, plan } => show(root, &incident, &plan, json),
        PlanSubcommand::Select { incident, plan } => select(root, &incident, &plan, json),
    }
}

fn expand_plans(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let mut incident = Incident::load(root, slug)?;
    expand::expand_incident(&mut incident)
        .with_context(|| format!("expanding plans for '{slug}'"))?;
    incident.save(root)?;

    if json {
        return output::print_json(&incident.plans);
    }
    println!("generated {} strategic plans for '{slug}'", incident.plans.len());
    print_plan_table(&incident);
    println!("\nnext: warroom plan select {slug} <id|theme>");
    Ok(())
}

fn list(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let incident = Incident::load(root, slug)?;
    if json {
        return output::print_json(&incident.plans);
    }
    if incident.plans.is_empty() {
        println!("no plans yet: run 'warroom plan expand {slug}'");
        return Ok(());
    }
    print_plan_table(&incident);
    Ok(())
}

fn show(root: &Path, slug: &str, plan_ref: &str, json: bool) -> anyhow::Result<()> {
    let incident = Incident::load(root, slug)?;
    let id = resolve_plan_id(&incident, plan_ref)?;
    let plan = incident.plan(id).unwrap();

    if json {
        return output::print_json(plan);
    }

    println!("{} [{}]{}", plan.name, plan.theme, if plan.selected { " (selected)" } else { "" });
    println!("\n{}", plan.strategy);
    println!("\ntimeline: {}", plan.timeline);
    println!("risk: {}  confidence: {}", plan.risk_level, plan.confidence);
    println!("resources: {}", plan.resource_requirements);
    println!("success criteria: {}", plan.success_criteria);
    println!("citations: {}", plan.citations.join(", "));
    if plan.has_actions() {
        println!();
        let rows = plan
            .actions
            .iter()
            .map(|a| {
                vec![
                    a.step.to_string(),
                    a.title.clone(),
                    a.role.to_string(),
                    a.priority.to_string(),
                    a.deliverable.source.to_string(),
                ]
            })
            .collect();
        output::print_table(&["STEP", "ACTION", "ROLE", "PRIORITY", "DELIVERABLE"], rows);
    }
    Ok(())
}

fn select(root: &Path, slug: &str, plan_ref: &str, json: bool) -> anyhow::Result<()> {
    let mut incident = Incident::load(root, slug)?;
    let id = resolve_plan_id(&incident, plan_ref)?;
    incident.select_plan(id)?;
    incident.save(root)?;

    let plan = incident.plan(id).unwrap();
    if json {
        output::print_json(plan)?;
    } else {
        println!("selected plan '{}' for '{slug}'", plan.name);
        println!("next: warroom action expand {slug}");
    }
    Ok(())
}

fn print_plan_table(incident: &Incident) {
    let rows = incident
        .plans
        .iter()
        .map(|p| {
            vec![
                p.id.to_string()[..8].to_string(),
                p.theme.to_string(),
                p.name.clone(),
                p.timeline.clone(),
                p.risk_level.to_string(),
                if p.selected { "*".to_string() } else { String::new() },
            ]
        })
        .collect();
    output::print_table(&["ID", "THEME", "PLAN", "TIMELINE", "RISK", "SEL"], rows);
}

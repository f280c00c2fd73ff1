use crate::output;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use warroom_core::incident::Incident;
use warroom_core::templates;
use warroom_core::types::{IncidentKind, IncidentStatus, Severity};

#[derive(Subcommand)]
pub enum IncidentSubcommand {
    /// Create a new incident
    Create {
        /// Incident slug (lowercase, hyphens)
        slug: String,

        /// Human-readable title
        #[arg(long)]
        title: String,

        /// Severity: low, medium, high, critical
        #[arg(long, default_value = "medium")]
        severity: Severity,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },

    /// Create an incident pre-filled from a seed scenario
    Seed {
        /// Incident slug
        slug: String,

        /// Scenario: security, data-breach, system-failure
        #[arg(long)]
        kind: IncidentKind,
    },

    /// List incidents
    List,

    /// Show one incident in full
    Show { slug: String },

    /// Set incident status: open, in_progress, resolved
    Status { slug: String, status: IncidentStatus },

    /// Mark an incident resolved
    Resolve { slug: String },
}

pub fn run(root: &Path, subcommand: IncidentSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        IncidentSubcommand::Create {
            slug,
            title,
            severity,
            description,
        } => create(root, &slug, &title, severity, description.as_deref(), json),
        IncidentSubcommand::Seed { slug, kind } => seed(root, &slug, kind, json),
        IncidentSubcommand::List => list(root, json),
        IncidentSubcommand::Show { slug } => show(root, &slug, json),
        IncidentSubcommand::Status { slug, status } => set_status(root, &slug, status, json),
        IncidentSubcommand::Resolve { slug } => {
            set_status(root, &slug, IncidentStatus::Resolved, json)
        }
    }
}

fn create(
    root: &Path,
    slug: &str,
    title: &str,
    severity: Severity,
    description: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let mut incident = Incident::create(root, slug, title, severity)
        .with_context(|| format!("creating incident '{slug}'"))?;
    if let Some(desc) = description {
        incident.description = desc.to_string();
        incident.save(root)?;
    }

    if json {
        output::print_json(&incident)?;
    } else {
        println!("created incident '{slug}' (severity: {severity})");
        println!("next: warroom plan expand {slug}");
    }
    Ok(())
}

fn seed(root: &Path, slug: &str, kind: IncidentKind, json: bool) -> anyhow::Result<()> {
    let seed = templates::incident_seed(kind);
    let mut incident = Incident::create(root, slug, seed.title, seed.severity)
        .with_context(|| format!("creating incident '{slug}'"))?;
    incident.description = seed.description.to_string();
    incident.control_objective = seed.control_objective.to_string();
    incident.framework_citations = seed.framework_citations.to_string();
    incident.save(root)?;

    if json {
        output::print_json(&incident)?;
    } else {
        println!("created {kind} incident '{slug}' (severity: {})", seed.severity);
        println!("next: warroom plan expand {slug}");
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let incidents = Incident::list(root)?;

    if json {
        return output::print_json(&incidents);
    }

    if incidents.is_empty() {
        println!("no incidents");
        return Ok(());
    }

    let rows = incidents
        .iter()
        .map(|i| {
            vec![
                i.slug.clone(),
                i.title.clone(),
                i.severity.to_string(),
                i.status.to_string(),
                i.plans.len().to_string(),
            ]
        })
        .collect();
    output::print_table(&["SLUG", "TITLE", "SEVERITY", "STATUS", "PLANS"], rows);
    Ok(())
}

fn show(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let incident = Incident::load(root, slug)?;

    if json {
        return output::print_json(&incident);
    }

    println!("{} — {}", incident.slug, incident.title);
    println!("severity: {}  status: {}", incident.severity, incident.status);
    if !incident.description.is_empty() {
        println!("\n{}", incident.description);
    }
    if !incident.control_objective.is_empty() {
        println!("\ncontrol objective: {}", incident.control_objective);
    }
    if !incident.framework_citations.is_empty() {
        println!("frameworks: {}", incident.framework_citations);
    }
    if !incident.plans.is_empty() {
        println!();
        let rows = incident
            .plans
            .iter()
            .map(|p| {
                vec![
                    p.id.to_string()[..8].to_string(),
                    p.theme.to_string(),
                    p.name.clone(),
                    if p.selected { "*".to_string() } else { String::new() },
                    p.actions.len().to_string(),
                ]
            })
            .collect();
        output::print_table(&["ID", "THEME", "PLAN", "SEL", "ACTIONS"], rows);
    }
    Ok(())
}

fn set_status(root: &Path, slug: &str, status: IncidentStatus, json: bool) -> anyhow::Result<()> {
    let mut incident = Incident::load(root, slug)?;
    incident.set_status(status);
    incident.save(root)?;

    if json {
        output::print_json(&incident)?;
    } else {
        println!("incident '{slug}' is now {status}");
    }
    Ok(())
}

use crate::cmd::resolve_action_id;
use crate::output;
use anyhow::Context;
use clap::Subcommand;
use std::path::{Path, PathBuf};
use warroom_core::incident::Incident;
use warroom_core::WarroomError;

#[derive(Subcommand)]
pub enum DeliverableSubcommand {
    /// Print a deliverable's content
    Show {
        incident: String,

        /// Action id prefix or step number
        action: String,
    },

    /// Replace a deliverable's content with a manual edit
    Edit {
        incident: String,

        /// Action id prefix or step number
        action: String,

        /// New content, inline
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,

        /// Read new content from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

pub fn run(root: &Path, subcommand: DeliverableSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        DeliverableSubcommand::Show { incident, action } => show(root, &incident, &action, json),
        DeliverableSubcommand::Edit {
            incident,
            action,
            content,
            file,
        } => edit(root, &incident, &action, content, file.as_deref(), json),
    }
}

fn show(root: &Path, slug: &str, action_ref: &str, json: bool) -> anyhow::Result<()> {
    let incident = Incident::load(root, slug)?;
    let id = resolve_action_id(&incident, action_ref)?;
    let action = incident.action(id).unwrap();

    if json {
        return output::print_json(&action.deliverable);
    }

    let d = &action.deliverable;
    println!("{} [{}]", d.title, d.source);
    if !d.citations.is_empty() {
        println!("citations: {}", d.citations.join(", "));
    }
    if d.is_empty() {
        println!("\n(no content yet: run 'warroom generate {slug} {action_ref}')");
    } else {
        println!("\n{}", d.content);
    }
    Ok(())
}

fn edit(
    root: &Path,
    slug: &str,
    action_ref: &str,
    content: Option<String>,
    file: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let new_content = match (content, file) {
        (Some(c), _) => c,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => anyhow::bail!("provide --content or --file"),
    };
    anyhow::ensure!(!new_content.trim().is_empty(), "replacement content is empty");

    let mut incident = Incident::load(root, slug)?;
    let id = resolve_action_id(&incident, action_ref)?;
    let action = incident
        .action_mut(id)
        .ok_or_else(|| WarroomError::ActionNotFound(id.to_string()))?;
    action.deliverable.mark_edited(new_content);
    let title = action.title.clone();
    incident.save(root)?;

    if json {
        output::print_json(&incident.action(id).unwrap().deliverable)?;
    } else {
        println!("deliverable for '{title}' updated (manually_edited)");
    }
    Ok(())
}

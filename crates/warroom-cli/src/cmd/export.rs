use crate::cmd::resolve_action_id;
use crate::output;
use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};
use warroom_core::export;
use warroom_core::incident::Incident;

#[derive(Serialize)]
struct ExportResult {
    path: PathBuf,
}

pub fn run(root: &Path, slug: &str, action_ref: &str, json: bool) -> anyhow::Result<()> {
    let incident = Incident::load(root, slug)?;
    let id = resolve_action_id(&incident, action_ref)?;
    let action = incident.action(id).unwrap();

    let path = export::export_deliverable(root, &incident, action)
        .with_context(|| format!("exporting deliverable for '{}'", action.title))?;

    if json {
        output::print_json(&ExportResult { path })?;
    } else {
        println!("exported {}", path.display());
    }
    Ok(())
}

use crate::output;
use clap::Subcommand;
use std::path::Path;
use warroom_core::log::GenerationLog;

#[derive(Subcommand)]
pub enum LogSubcommand {
    /// List generation log entries, oldest first
    List {
        /// Only entries for this incident
        #[arg(long)]
        incident: Option<String>,
    },
}

pub fn run(root: &Path, subcommand: LogSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        LogSubcommand::List { incident } => list(root, incident.as_deref(), json),
    }
}

fn list(root: &Path, incident: Option<&str>, json: bool) -> anyhow::Result<()> {
    let log = GenerationLog::load(root)?;
    let entries: Vec<_> = log
        .entries
        .iter()
        .filter(|e| incident.is_none_or(|slug| e.incident == slug))
        .collect();

    if json {
        return output::print_json(&entries);
    }

    if entries.is_empty() {
        println!("no generation log entries");
        return Ok(());
    }

    let rows = entries
        .iter()
        .map(|e| {
            vec![
                e.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                e.incident.clone(),
                e.action_id.to_string()[..8].to_string(),
                e.role.to_string(),
                e.source.to_string(),
                e.attempts.to_string(),
            ]
        })
        .collect();
    output::print_table(
        &["TIME", "INCIDENT", "ACTION", "ROLE", "SOURCE", "ATTEMPTS"],
        rows,
    );
    Ok(())
}

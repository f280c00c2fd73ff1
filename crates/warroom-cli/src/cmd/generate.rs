use crate::cmd::resolve_action_id;
use crate::output;
use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;
use warroom_agent::{
    generate, CompletionClient, GenerationInput, GenerationSettings, HttpCompletionClient,
};
use warroom_core::config::Config;
use warroom_core::incident::Incident;
use warroom_core::log::{GenerationLog, LogEntry};
use warroom_core::types::ContentSource;
use warroom_core::WarroomError;

#[derive(Serialize)]
struct GenerateResult {
    action_id: Uuid,
    action: String,
    source: ContentSource,
    attempts: u32,
}

pub fn run(
    root: &Path,
    slug: &str,
    action_ref: Option<&str>,
    all: bool,
    json: bool,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        action_ref.is_some() || all,
        "provide an action reference or --all"
    );

    let config = Config::load_or_default(root)?;
    let settings = GenerationSettings {
        model: config.generation.model.clone(),
        max_tokens: config.generation.max_tokens,
        ..GenerationSettings::default()
    };
    let client = match config.generation.resolve_api_key() {
        Some(key) => Some(
            HttpCompletionClient::new(
                &config.generation.endpoint,
                key,
                Duration::from_secs(config.generation.timeout_secs),
            )
            .context("building completion client")?,
        ),
        None => None,
    };
    let client_ref = client.as_ref().map(|c| c as &dyn CompletionClient);

    let mut incident = Incident::load(root, slug)?;

    let targets: Vec<Uuid> = if all {
        let plan = incident
            .selected_plan()
            .ok_or_else(|| WarroomError::PlanNotSelected(slug.to_string()))?;
        plan.actions
            .iter()
            .filter(|a| a.deliverable.is_empty())
            .map(|a| a.id)
            .collect()
    } else {
        vec![resolve_action_id(&incident, action_ref.unwrap())?]
    };

    if targets.is_empty() {
        println!("all deliverables already have content");
        return Ok(());
    }

    let mut results = Vec::new();
    for id in targets {
        let outcome = {
            let plan = incident
                .plans
                .iter()
                .find(|p| p.action(id).is_some())
                .ok_or_else(|| WarroomError::ActionNotFound(id.to_string()))?;
            let action = plan.action(id).unwrap();
            let input = GenerationInput {
                incident: &incident,
                plan,
                action,
            };
            generate(client_ref, &input, &settings)
        };

        let action = incident.action_mut(id).unwrap();
        let role = action.role;
        let title = action.title.clone();
        action
            .deliverable
            .apply(outcome.text, outcome.source, outcome.citations);

        // Persist before logging so the record never claims content that
        // failed to reach disk.
        incident
            .save(root)
            .with_context(|| format!("persisting deliverable for '{title}'"))?;
        GenerationLog::append(
            root,
            LogEntry {
                incident: slug.to_string(),
                action_id: id,
                role,
                source: outcome.source,
                attempts: outcome.attempts,
                timestamp: Utc::now(),
            },
        )?;

        results.push(GenerateResult {
            action_id: id,
            action: title,
            source: outcome.source,
            attempts: outcome.attempts,
        });
    }

    if json {
        return output::print_json(&results);
    }
    for r in &results {
        println!(
            "{}: {} ({} attempt{})",
            r.action,
            r.source,
            r.attempts,
            if r.attempts == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn warroom(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("warroom").unwrap();
    cmd.current_dir(dir.path())
        .env("WARROOM_ROOT", dir.path())
        .env_remove("OPENROUTER_API_KEY");
    cmd
}

fn init_project(dir: &TempDir) {
    warroom(dir).arg("init").assert().success();
}

// ---------------------------------------------------------------------------
// warroom init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_directory_tree() {
    let dir = TempDir::new().unwrap();
    warroom(&dir).arg("init").assert().success();

    assert!(dir.path().join(".warroom").is_dir());
    assert!(dir.path().join(".warroom/incidents").is_dir());
    assert!(dir.path().join(".warroom/config.yaml").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    warroom(&dir).arg("init").assert().success();
    warroom(&dir).arg("init").assert().success();
}

// ---------------------------------------------------------------------------
// warroom incident
// ---------------------------------------------------------------------------

#[test]
fn incident_create_and_list() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    warroom(&dir)
        .args([
            "incident",
            "create",
            "db-outage",
            "--title",
            "Database outage",
            "--severity",
            "high",
        ])
        .assert()
        .success();

    warroom(&dir)
        .args(["incident", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("db-outage"))
        .stdout(predicate::str::contains("high"));
}

#[test]
fn incident_create_invalid_slug_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    warroom(&dir)
        .args(["incident", "create", "BAD SLUG", "--title", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid slug"));
}

#[test]
fn incident_create_duplicate_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    warroom(&dir)
        .args(["incident", "create", "breach", "--title", "Breach"])
        .assert()
        .success();
    warroom(&dir)
        .args(["incident", "create", "breach", "--title", "Breach again"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn incident_seed_prefills_narrative() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    warroom(&dir)
        .args(["incident", "seed", "breach-q3", "--kind", "data-breach"])
        .assert()
        .success();

    warroom(&dir)
        .args(["incident", "show", "breach-q3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GDPR Article 33"))
        .stdout(predicate::str::contains("critical"));
}

// ---------------------------------------------------------------------------
// warroom plan
// ---------------------------------------------------------------------------

#[test]
fn plan_expand_produces_five_plans() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    warroom(&dir)
        .args(["incident", "create", "breach", "--title", "Breach"])
        .assert()
        .success();

    warroom(&dir)
        .args(["plan", "expand", "breach"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 strategic plans"))
        .stdout(predicate::str::contains("regulatory"))
        .stdout(predicate::str::contains("forensics"));
}

#[test]
fn plan_expand_twice_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    warroom(&dir)
        .args(["incident", "create", "breach", "--title", "Breach"])
        .assert()
        .success();

    warroom(&dir)
        .args(["plan", "expand", "breach"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "expand", "breach"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already has action plans"));
}

#[test]
fn plan_select_by_theme() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    warroom(&dir)
        .args(["incident", "create", "breach", "--title", "Breach"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "expand", "breach"])
        .assert()
        .success();

    warroom(&dir)
        .args(["plan", "select", "breach", "regulatory"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Regulatory Filing & Compliance Response",
        ));

    warroom(&dir)
        .args(["incident", "show", "breach"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in_progress"));
}

// ---------------------------------------------------------------------------
// warroom action
// ---------------------------------------------------------------------------

#[test]
fn action_expand_requires_selected_plan() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    warroom(&dir)
        .args(["incident", "create", "breach", "--title", "Breach"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "expand", "breach"])
        .assert()
        .success();

    warroom(&dir)
        .args(["action", "expand", "breach"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no plan selected"));
}

#[test]
fn action_expand_twice_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    warroom(&dir)
        .args(["incident", "create", "breach", "--title", "Breach"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "expand", "breach"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "select", "breach", "forensics"])
        .assert()
        .success();

    warroom(&dir)
        .args(["action", "expand", "breach"])
        .assert()
        .success();
    warroom(&dir)
        .args(["action", "expand", "breach"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already has actions"));
}

// ---------------------------------------------------------------------------
// End to end: breach → plans → select → actions → generate → export
// ---------------------------------------------------------------------------

#[test]
fn data_breach_end_to_end() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    warroom(&dir)
        .args([
            "incident",
            "create",
            "breach-10k",
            "--title",
            "Data breach — 10k records",
            "--severity",
            "critical",
        ])
        .assert()
        .success();

    warroom(&dir)
        .args(["plan", "expand", "breach-10k"])
        .assert()
        .success();

    // Exactly one regulatory plan, carrying the GDPR citation.
    warroom(&dir)
        .args(["plan", "show", "breach-10k", "regulatory"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Regulatory Filing & Compliance Response",
        ))
        .stdout(predicate::str::contains("GDPR Article 33"));

    warroom(&dir)
        .args(["plan", "select", "breach-10k", "regulatory"])
        .assert()
        .success();
    warroom(&dir)
        .args(["action", "expand", "breach-10k"])
        .assert()
        .success();

    // No credential in the environment, so generation must take the
    // fallback path and say so.
    warroom(&dir)
        .args(["generate", "breach-10k", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fallback_generated"));

    // Step 2 is the supervisory authority filing, a legal-role action.
    warroom(&dir)
        .args(["deliverable", "show", "breach-10k", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fallback_generated"))
        .stdout(predicate::str::contains("## Executive Summary"))
        .stdout(predicate::str::contains("## Compliance Mapping"))
        .stdout(predicate::str::contains("GDPR Article 33"));

    // The audit log recorded zero external attempts per action.
    warroom(&dir)
        .args(["log", "list", "--incident", "breach-10k"])
        .assert()
        .success()
        .stdout(predicate::str::contains("legal"))
        .stdout(predicate::str::contains("fallback_generated"));

    warroom(&dir)
        .args(["export", "breach-10k", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".warroom/exports"));
}

#[test]
fn generate_all_skips_filled_deliverables() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    warroom(&dir)
        .args(["incident", "create", "outage", "--title", "Outage"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "expand", "outage"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "select", "outage", "continuity"])
        .assert()
        .success();
    warroom(&dir)
        .args(["action", "expand", "outage"])
        .assert()
        .success();

    warroom(&dir)
        .args(["generate", "outage", "--all"])
        .assert()
        .success();
    warroom(&dir)
        .args(["generate", "outage", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already have content"));
}

#[test]
fn manual_edit_flips_source() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    warroom(&dir)
        .args(["incident", "create", "outage", "--title", "Outage"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "expand", "outage"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "select", "outage", "executive"])
        .assert()
        .success();
    warroom(&dir)
        .args(["action", "expand", "outage"])
        .assert()
        .success();
    warroom(&dir)
        .args(["generate", "outage", "1"])
        .assert()
        .success();

    warroom(&dir)
        .args([
            "deliverable",
            "edit",
            "outage",
            "1",
            "--content",
            "Hand-written brief.",
        ])
        .assert()
        .success();

    warroom(&dir)
        .args(["deliverable", "show", "outage", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("manually_edited"))
        .stdout(predicate::str::contains("Hand-written brief."));
}

#[test]
fn export_empty_deliverable_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    warroom(&dir)
        .args(["incident", "create", "outage", "--title", "Outage"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "expand", "outage"])
        .assert()
        .success();
    warroom(&dir)
        .args(["plan", "select", "outage", "continuity"])
        .assert()
        .success();
    warroom(&dir)
        .args(["action", "expand", "outage"])
        .assert()
        .success();

    warroom(&dir)
        .args(["export", "outage", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no content yet"));
}

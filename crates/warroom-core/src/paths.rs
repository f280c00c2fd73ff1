use crate::error::{Result, WarroomError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const WARROOM_DIR: &str = ".warroom";
pub const INCIDENTS_DIR: &str = ".warroom/incidents";
pub const EXPORTS_DIR: &str = ".warroom/exports";

pub const CONFIG_FILE: &str = ".warroom/config.yaml";
pub const LOG_FILE: &str = ".warroom/log.yaml";
pub const MANIFEST_FILE: &str = "manifest.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn warroom_dir(root: &Path) -> PathBuf {
    root.join(WARROOM_DIR)
}

pub fn incidents_dir(root: &Path) -> PathBuf {
    root.join(INCIDENTS_DIR)
}

pub fn incident_dir(root: &Path, slug: &str) -> PathBuf {
    root.join(INCIDENTS_DIR).join(slug)
}

pub fn incident_manifest(root: &Path, slug: &str) -> PathBuf {
    incident_dir(root, slug).join(MANIFEST_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn log_path(root: &Path) -> PathBuf {
    root.join(LOG_FILE)
}

pub fn exports_dir(root: &Path) -> PathBuf {
    root.join(EXPORTS_DIR)
}

// ---------------------------------------------------------------------------
// Slug validation
// ---------------------------------------------------------------------------

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() || slug.len() > 64 || !slug_re().is_match(slug) {
        return Err(WarroomError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_slugs() {
        for slug in ["data-breach-2026", "a", "q3-outage", "x1"] {
            validate_slug(slug).unwrap_or_else(|_| panic!("expected valid: {slug}"));
        }
    }

    #[test]
    fn invalid_slugs() {
        for slug in [
            "",
            "-starts-with-dash",
            "ends-with-dash-",
            "has spaces",
            "UPPER",
            "a_b",
        ] {
            assert!(validate_slug(slug).is_err(), "expected invalid: {slug}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/proj/.warroom/config.yaml")
        );
        assert_eq!(
            incident_manifest(root, "breach"),
            PathBuf::from("/tmp/proj/.warroom/incidents/breach/manifest.yaml")
        );
    }
}

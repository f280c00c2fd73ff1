use crate::types::ContentSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Deliverable
// ---------------------------------------------------------------------------

/// Document artifact tied to exactly one action. Content starts empty and is
/// filled by the content generator or by a manual edit; the `source` flag
/// records which path actually ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub source: ContentSource,
    #[serde(default)]
    pub citations: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl Deliverable {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: String::new(),
            source: ContentSource::Pending,
            citations: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Replace content, source flag, and citation set in one step. The caller
    /// persists the enclosing incident afterwards, so the record on disk is
    /// either fully updated or untouched.
    pub fn apply(&mut self, content: impl Into<String>, source: ContentSource, citations: Vec<String>) {
        self.content = content.into();
        self.source = source;
        self.citations = citations;
        self.updated_at = Utc::now();
    }

    pub fn mark_edited(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.source = ContentSource::ManuallyEdited;
        self.updated_at = Utc::now();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_deliverable_is_pending_and_empty() {
        let d = Deliverable::new("Customer notification");
        assert!(d.is_empty());
        assert_eq!(d.source, ContentSource::Pending);
        assert!(d.citations.is_empty());
    }

    #[test]
    fn apply_sets_all_fields() {
        let mut d = Deliverable::new("Filing");
        let before = d.updated_at;
        d.apply(
            "## Executive Summary\n...",
            ContentSource::FallbackGenerated,
            vec!["GDPR Article 33".to_string()],
        );
        assert!(!d.is_empty());
        assert_eq!(d.source, ContentSource::FallbackGenerated);
        assert_eq!(d.citations.len(), 1);
        assert!(d.updated_at >= before);
    }

    #[test]
    fn manual_edit_flips_source() {
        let mut d = Deliverable::new("Brief");
        d.apply("generated", ContentSource::AiGenerated, vec![]);
        d.mark_edited("hand-tuned");
        assert_eq!(d.source, ContentSource::ManuallyEdited);
        assert_eq!(d.content, "hand-tuned");
    }
}

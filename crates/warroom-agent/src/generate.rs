//! Generation orchestration: bounded external attempts, then deterministic
//! fallback. The returned outcome always carries content, the source flag for
//! whichever path actually produced it, and the attempt count for the audit
//! log.

use crate::client::CompletionClient;
use crate::error::CompletionError;
use crate::fallback;
use crate::prompt;
use crate::roles;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};
use warroom_core::action::Action;
use warroom_core::incident::Incident;
use warroom_core::plan::ActionPlan;
use warroom_core::types::ContentSource;

/// Hard ceiling on external calls per generation. One retry, transport
/// failures only.
pub const MAX_ATTEMPTS: u32 = 2;

pub struct GenerationInput<'a> {
    pub incident: &'a Incident,
    pub plan: &'a ActionPlan,
    pub action: &'a Action,
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub retry_backoff_ms: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "openai/gpt-3.5-turbo".to_string(),
            max_tokens: 900,
            retry_backoff_ms: 500,
        }
    }
}

#[derive(Debug)]
pub struct GenerationOutcome {
    pub text: String,
    pub source: ContentSource,
    pub citations: Vec<String>,
    /// External calls actually made. Zero when no client was configured.
    pub attempts: u32,
}

/// Produce deliverable content for an action. Never fails: when the external
/// path is unavailable or exhausted, the fallback synthesizer supplies the
/// text and the outcome says so.
pub fn generate(
    client: Option<&dyn CompletionClient>,
    input: &GenerationInput<'_>,
    settings: &GenerationSettings,
) -> GenerationOutcome {
    let profile = roles::profile(input.action.role);
    let citations: Vec<String> = profile.citations.iter().map(|c| c.to_string()).collect();

    let Some(client) = client else {
        info!(
            action = %input.action.title,
            "no completion credential configured; synthesizing fallback content"
        );
        return GenerationOutcome {
            text: fallback::synthesize(input, profile),
            source: ContentSource::FallbackGenerated,
            citations,
            attempts: 0,
        };
    };

    let request = prompt::build_request(input, profile, settings);
    let mut attempts = 0;
    while attempts < MAX_ATTEMPTS {
        attempts += 1;
        match client.complete(&request) {
            Ok(text) => {
                info!(action = %input.action.title, attempts, "completion succeeded");
                return GenerationOutcome {
                    text: ensure_cited(text, profile),
                    source: ContentSource::AiGenerated,
                    citations,
                    attempts,
                };
            }
            Err(e) if e.is_retryable() && attempts < MAX_ATTEMPTS => {
                warn!(attempts, error = %e, "transport failure; retrying once");
                thread::sleep(Duration::from_millis(settings.retry_backoff_ms));
            }
            Err(e) => {
                log_terminal(&e, attempts);
                break;
            }
        }
    }

    GenerationOutcome {
        text: fallback::synthesize(input, profile),
        source: ContentSource::FallbackGenerated,
        citations,
        attempts,
    }
}

fn log_terminal(error: &CompletionError, attempts: u32) {
    match error {
        CompletionError::Transport(_) => {
            warn!(attempts, error = %error, "transport failure; attempts exhausted, falling back")
        }
        CompletionError::Rejected { status, .. } => {
            warn!(attempts, status, "service rejected request; falling back without retry")
        }
        CompletionError::Malformed(_) => {
            warn!(attempts, error = %error, "unusable response; falling back without retry")
        }
    }
}

/// AI output must still carry the role's compliance citations. If the model
/// ignored the instruction, append them.
fn ensure_cited(text: String, profile: &roles::RoleProfile) -> String {
    if profile.citations.iter().any(|c| text.contains(c)) {
        return text;
    }
    let mut text = text;
    text.push_str("\n\n## Compliance Mapping\n\n");
    for citation in profile.citations {
        text.push_str(&format!("- {citation}\n"));
    }
    text
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! AI-assisted deliverable content generation.
//!
//! The generator asks an OpenAI-compatible completion endpoint to draft a
//! deliverable in the voice of a role-specific persona, with a bounded retry
//! policy and a deterministic template fallback. Callers always get content
//! back; the outcome records which path produced it and how many external
//! attempts were made.

pub mod client;
pub mod error;
pub mod fallback;
pub mod generate;
pub mod prompt;
pub mod roles;

pub use client::{CompletionClient, CompletionRequest, HttpCompletionClient};
pub use error::CompletionError;
pub use generate::{generate, GenerationInput, GenerationOutcome, GenerationSettings};
pub use roles::RoleProfile;

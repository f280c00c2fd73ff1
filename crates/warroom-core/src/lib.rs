//! Core domain records and the template expander for the incident-response
//! war room: incidents, their five strategic plans, the actions under a
//! selected plan, and the deliverable attached to each action. Everything is
//! persisted as YAML manifests under `.warroom/` with atomic writes.

pub mod action;
pub mod config;
pub mod deliverable;
pub mod error;
pub mod expand;
pub mod export;
pub mod incident;
pub mod io;
pub mod log;
pub mod paths;
pub mod plan;
pub mod templates;
pub mod types;

pub use error::{Result, WarroomError};

//! survey-app library root.
//!
//! Host-side glue for embedding the survey client: persisted config,
//! tracing setup, and construction of the session services.

pub mod config;
pub mod services;
pub mod telemetry;

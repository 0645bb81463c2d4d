//! survey-core
//!
//! Pure domain types and REST path conventions.
//! No HTTP dependency; this is the shared vocabulary of the survey client.

pub mod api_paths;
pub mod error;
pub mod models;

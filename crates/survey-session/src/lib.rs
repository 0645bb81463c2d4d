//! survey-session
//!
//! Client-side session logic for the survey wizard:
//! - `state`: in-memory accumulator for the assessment being filled in
//! - `service`: partial saves and the final remote submission
//! - `patient`: explicit session context for the active patient
//! - `patient_service`: the "your health" patient update

pub mod error;
pub mod patient;
pub mod patient_service;
pub mod service;
pub mod state;

pub use crate::error::SessionError;
pub use crate::patient::PatientSession;
pub use crate::patient_service::PatientService;
pub use crate::service::AssessmentService;
pub use crate::state::{AssessmentState, InMemoryAssessmentState};

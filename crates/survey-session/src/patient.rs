use survey_core::models::health::{HealthVisibility, SurveyFeatures};
use survey_core::models::patient::{PatientInfo, PatientState};

/// The active patient, passed explicitly to whatever needs it.
#[derive(Debug, Clone)]
pub struct PatientSession {
    patient_id: String,
    state: PatientState,
}

impl PatientSession {
    pub fn new(patient_id: impl Into<String>, state: PatientState) -> Self {
        Self {
            patient_id: patient_id.into(),
            state,
        }
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn state(&self) -> &PatientState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PatientState {
        &mut self.state
    }

    /// Location snapshot handed to `AssessmentService::complete`.
    pub fn patient_info(&self) -> &PatientInfo {
        &self.state.location
    }

    pub fn health_visibility(&self, features: &SurveyFeatures) -> HealthVisibility {
        HealthVisibility::for_patient(&self.state, features)
    }
}

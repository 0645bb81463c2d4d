use std::sync::Arc;

use tracing::{info, warn};

use survey_client::PatientRemoteClient;
use survey_core::models::health::{HealthAnswers, SurveyFeatures};

use crate::error::SessionError;
use crate::patient::PatientSession;

pub struct PatientService {
    client: Arc<dyn PatientRemoteClient>,
}

impl PatientService {
    pub fn new(client: Arc<dyn PatientRemoteClient>) -> Self {
        Self { client }
    }

    /// Send the "your health" answers and mark them answered on success.
    ///
    /// The session is only touched once the API has accepted the update.
    pub async fn update_health(
        &self,
        session: &mut PatientSession,
        answers: &HealthAnswers,
        features: &SurveyFeatures,
    ) -> Result<(), SessionError> {
        let visibility = session.health_visibility(features);
        let infos = answers.to_patient_infos(&visibility)?;

        info!(patient_id = %session.patient_id(), "updating patient health");
        self.client
            .update_patient(session.patient_id(), &infos)
            .await
            .inspect_err(|e| warn!(error = %e, "patient health update failed"))?;

        let state = session.state_mut();
        state.has_completed_patient_details = true;
        state.has_blood_pressure_answer = true;
        state.has_period_answer = true;
        state.has_hormone_treatment_answer = true;
        state.has_vitamin_answer = true;
        state.has_atopy_answers = true;
        if answers.has_hayfever {
            state.has_hayfever = true;
        }

        Ok(())
    }
}

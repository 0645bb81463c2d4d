use std::sync::Arc;

use tracing::{debug, info, warn};

use survey_client::AssessmentRemoteClient;
use survey_core::models::assessment::{
    AssessmentPhase, AssessmentRecord, AssessmentResponse, field,
};
use survey_core::models::fields::FieldMap;
use survey_core::models::lifestyle::{LIFESTYLE_VERSION, LifestyleRequest, LifestyleResponse};
use survey_core::models::patient::PatientInfo;

use crate::error::SessionError;
use crate::state::AssessmentState;

/// Drives one assessment from first screen to remote submission.
///
/// Partial saves only touch the in-memory state. The API is contacted when
/// the assessment is completed, with the whole accumulated record.
pub struct AssessmentService {
    client: Arc<dyn AssessmentRemoteClient>,
    state: Box<dyn AssessmentState>,
    lifestyle_version: String,
}

impl AssessmentService {
    pub fn new(client: Arc<dyn AssessmentRemoteClient>, state: Box<dyn AssessmentState>) -> Self {
        Self {
            client,
            state,
            lifestyle_version: LIFESTYLE_VERSION.to_string(),
        }
    }

    /// Override the schema version stamped onto lifestyle submissions.
    pub fn with_lifestyle_version(mut self, version: impl Into<String>) -> Self {
        self.lifestyle_version = version.into();
        self
    }

    pub fn record(&self) -> &AssessmentRecord {
        self.state.get()
    }

    pub fn phase(&self) -> AssessmentPhase {
        self.state.get().phase()
    }

    pub fn init_assessment(&mut self) {
        info!("starting new assessment");
        self.state.init();
    }

    /// Merge one screen's answers into the local record.
    ///
    /// Never contacts the API. The returned response is always empty.
    pub fn save(&mut self, assessment_id: Option<&str>, partial: FieldMap) -> AssessmentResponse {
        debug!(
            assessment_id = ?assessment_id,
            fields = partial.len(),
            "saving assessment fields locally"
        );
        self.state.merge(partial);
        AssessmentResponse::default()
    }

    /// Finish the assessment and send it to the API.
    ///
    /// When `partial` is given (even empty) it is stamped with the patient's
    /// location and saved first. The full record is then created remotely,
    /// or updated if it already has an identifier; `assessment_id` is only
    /// used when the record has none of its own, and an empty one counts as
    /// absent.
    ///
    /// Returns whether the API answered with a response object. A remote
    /// failure is returned as-is. The record then holds exactly what it held
    /// just before the remote call: no identifier is written back, but the
    /// fields from `partial` (location included) stay merged, since the
    /// local save has already happened.
    pub async fn complete(
        &mut self,
        assessment_id: Option<&str>,
        partial: Option<FieldMap>,
        patient_info: &PatientInfo,
    ) -> Result<bool, SessionError> {
        if let Some(mut partial) = partial {
            partial.merge(patient_info.location_fields());
            self.save(assessment_id, partial);
        }

        let response = self.send_full_assessment(assessment_id).await?;
        Ok(response.is_some())
    }

    async fn send_full_assessment(
        &mut self,
        fallback_id: Option<&str>,
    ) -> Result<Option<AssessmentResponse>, SessionError> {
        let record = self.state.get();
        let result = match record.id().or(fallback_id.filter(|id| !id.is_empty())) {
            Some(id) => {
                info!(assessment_id = %id, "updating assessment");
                self.client.update_assessment(id, record).await
            }
            None => {
                info!("creating assessment");
                self.client.add_assessment(record).await
            }
        };

        let response = result.inspect_err(|e| warn!(error = %e, "assessment submission failed"))?;

        if let Some(id) = response.as_ref().and_then(AssessmentResponse::assigned_id) {
            debug!(assessment_id = %id, "recording remote assessment id");
            self.state.merge(FieldMap::new().with(field::ID, id));
        }

        Ok(response)
    }

    /// Send lifestyle answers for a patient, tagged with the schema version.
    pub async fn save_lifestyle(
        &self,
        patient_id: &str,
        payload: FieldMap,
    ) -> Result<LifestyleResponse, SessionError> {
        let request = LifestyleRequest::new(payload, self.lifestyle_version.as_str());
        info!(
            patient_id = %patient_id,
            version = %request.version,
            "submitting lifestyle answers"
        );
        Ok(self.client.add_lifestyle(patient_id, &request).await?)
    }
}

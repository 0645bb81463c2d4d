use std::sync::Arc;
use std::time::Duration;

use survey_client::{HttpApiClient, HttpClientSettings};
use survey_session::{AssessmentService, InMemoryAssessmentState, PatientService};

use crate::config::SurveyConfig;

/// Everything a host needs for one signed-in user, sharing one HTTP client.
pub struct Services {
    pub assessments: AssessmentService,
    pub patients: PatientService,
}

impl Services {
    pub fn from_config(config: &SurveyConfig) -> eyre::Result<Self> {
        let client = Arc::new(HttpApiClient::new(HttpClientSettings {
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        })?);

        tracing::info!(base_url = %client.base_url(), "survey services ready");

        let assessments =
            AssessmentService::new(client.clone(), Box::new(InMemoryAssessmentState::default()))
                .with_lifestyle_version(config.lifestyle_version.clone());
        let patients = PatientService::new(client);

        Ok(Self {
            assessments,
            patients,
        })
    }
}

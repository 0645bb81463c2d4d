//! Smoke test for the assessment submission flow.
//!
//! Walks one assessment through three screens against a live API: two
//! local saves, then a completion that creates the remote record, then a
//! second completion that must update it.
//!
//! Usage:
//!   SURVEY_API_BASE_URL=https://... \
//!   SURVEY_API_TOKEN=... \
//!   SURVEY_PATIENT_ID=... \
//!   cargo run -p survey-app --example submit_smoke

use survey_app::config::SurveyConfig;
use survey_app::services::Services;
use survey_app::telemetry;
use survey_core::models::fields::FieldMap;
use survey_core::models::patient::PatientState;
use survey_session::PatientSession;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    telemetry::init_tracing(false)?;

    let base_url = std::env::var("SURVEY_API_BASE_URL")
        .map_err(|_| eyre::eyre!("set SURVEY_API_BASE_URL env var"))?;
    let token = std::env::var("SURVEY_API_TOKEN")
        .map_err(|_| eyre::eyre!("set SURVEY_API_TOKEN env var"))?;
    let patient_id = std::env::var("SURVEY_PATIENT_ID")
        .map_err(|_| eyre::eyre!("set SURVEY_PATIENT_ID env var"))?;
    let postcode = std::env::var("SURVEY_POSTCODE").unwrap_or_else(|_| "SW1A".to_string());

    let mut config = SurveyConfig::new(base_url);
    config.api_token = Some(token);
    let mut services = Services::from_config(&config)?;

    let mut state = PatientState::default();
    state.location.postcode = Some(postcode);
    let session = PatientSession::new(patient_id.clone(), state);

    let assessments = &mut services.assessments;
    assessments.init_assessment();

    assessments.save(
        None,
        FieldMap::new()
            .with("patient", patient_id.clone())
            .with("health_status", "not_healthy"),
    );
    assessments.save(None, FieldMap::new().with("fever", true).with("temperature", 38.4));
    println!("after local saves: {:?}", assessments.phase());

    let sent = assessments
        .complete(
            None,
            Some(FieldMap::new().with("treatment", "none")),
            session.patient_info(),
        )
        .await?;
    let id = assessments
        .record()
        .id()
        .map(str::to_string)
        .ok_or_else(|| eyre::eyre!("API did not assign an assessment id"))?;
    println!("created assessment {id} (response received: {sent})");

    assessments.save(Some(id.as_str()), FieldMap::new().with("location", "home"));
    assessments
        .complete(Some(id.as_str()), None, session.patient_info())
        .await?;
    println!("updated assessment {id}: {:?}", assessments.phase());

    Ok(())
}

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use survey_client::{BoxFuture, PatientRemoteClient, RemoteError};
use survey_core::models::health::{HealthAnswers, PatientInfosRequest, SmokerStatus, SurveyFeatures};
use survey_core::models::patient::{PatientInfo, PatientState};
use survey_session::{PatientService, PatientSession, SessionError};

#[derive(Default)]
struct FakePatients {
    fail: bool,
    updates: Mutex<Vec<(String, Value)>>,
}

impl PatientRemoteClient for FakePatients {
    fn update_patient<'a>(
        &'a self,
        patient_id: &'a str,
        infos: &'a PatientInfosRequest,
    ) -> BoxFuture<'a, Result<(), RemoteError>> {
        self.updates
            .lock()
            .unwrap()
            .push((patient_id.to_string(), serde_json::to_value(infos).unwrap()));
        let fail = self.fail;
        Box::pin(async move {
            if fail {
                Err(RemoteError::Request("connection reset".to_string()))
            } else {
                Ok(())
            }
        })
    }
}

fn us_patient() -> PatientSession {
    PatientSession::new(
        "p1",
        PatientState {
            is_female: true,
            is_period_capable: true,
            location: PatientInfo {
                country_code: Some("US".into()),
                postcode: Some("10001".into()),
                ..Default::default()
            },
            ..Default::default()
        },
    )
}

#[tokio::test]
async fn successful_update_marks_answers_complete() {
    let remote = Arc::new(FakePatients::default());
    let service = PatientService::new(remote.clone());
    let mut session = us_patient();
    let answers = HealthAnswers {
        has_hayfever: true,
        is_pregnant: true,
        has_cancer: true,
        cancer_type: Some("breast".into()),
        ..Default::default()
    };
    let features = SurveyFeatures {
        show_pregnancy_question: true,
    };

    service
        .update_health(&mut session, &answers, &features)
        .await
        .unwrap();

    let updates = remote.updates.lock().unwrap().clone();
    assert_eq!(updates.len(), 1);
    let (patient_id, body) = &updates[0];
    assert_eq!(patient_id, "p1");
    assert_eq!(body["is_pregnant"], json!(true));
    assert_eq!(body["cancer_type"], json!("breast"));
    assert_eq!(body["has_hayfever"], json!(true));

    let state = session.state();
    assert!(state.has_completed_patient_details);
    assert!(state.has_blood_pressure_answer);
    assert!(state.has_period_answer);
    assert!(state.has_hormone_treatment_answer);
    assert!(state.has_vitamin_answer);
    assert!(state.has_atopy_answers);
    assert!(state.has_hayfever);
}

#[tokio::test]
async fn hayfever_flag_is_only_raised_by_a_yes() {
    let service = PatientService::new(Arc::new(FakePatients::default()));
    let mut session = us_patient();

    service
        .update_health(&mut session, &HealthAnswers::default(), &SurveyFeatures::default())
        .await
        .unwrap();

    assert!(session.state().has_completed_patient_details);
    assert!(!session.state().has_hayfever);
}

#[tokio::test]
async fn failed_update_leaves_session_untouched() {
    let service = PatientService::new(Arc::new(FakePatients {
        fail: true,
        ..Default::default()
    }));
    let mut session = us_patient();
    let before = session.state().clone();

    let err = service
        .update_health(&mut session, &HealthAnswers::default(), &SurveyFeatures::default())
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::Remote(RemoteError::Request(_))));
    assert_eq!(session.state(), &before);
}

#[tokio::test]
async fn invalid_answers_never_reach_the_api() {
    let remote = Arc::new(FakePatients::default());
    let service = PatientService::new(remote.clone());
    let mut session = us_patient();
    let answers = HealthAnswers {
        smoker_status: SmokerStatus::NotCurrently,
        smoked_years_ago: Some("ten".into()),
        ..Default::default()
    };

    let err = service
        .update_health(&mut session, &answers, &SurveyFeatures::default())
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::Core(_)));
    assert!(remote.updates.lock().unwrap().is_empty());
}

#[test]
fn session_exposes_location_snapshot() {
    let session = us_patient();
    assert_eq!(session.patient_id(), "p1");
    assert_eq!(session.patient_info().postcode.as_deref(), Some("10001"));
    assert!(session.health_visibility(&SurveyFeatures::default()).cancer_type);
}

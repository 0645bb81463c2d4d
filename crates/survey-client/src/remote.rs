use std::future::Future;
use std::pin::Pin;

use survey_core::models::assessment::{AssessmentRecord, AssessmentResponse};
use survey_core::models::health::PatientInfosRequest;
use survey_core::models::lifestyle::{LifestyleRequest, LifestyleResponse};

use crate::error::RemoteError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Assessment and lifestyle endpoints.
///
/// Methods return boxed futures for dyn compatibility, so the session
/// services can hold an `Arc<dyn AssessmentRemoteClient>`.
pub trait AssessmentRemoteClient: Send + Sync {
    /// Create a remote assessment from the full record.
    /// `Ok(None)` means the API answered with an empty body.
    fn add_assessment<'a>(
        &'a self,
        record: &'a AssessmentRecord,
    ) -> BoxFuture<'a, Result<Option<AssessmentResponse>, RemoteError>>;

    /// Replace the fields of an existing remote assessment.
    fn update_assessment<'a>(
        &'a self,
        id: &'a str,
        record: &'a AssessmentRecord,
    ) -> BoxFuture<'a, Result<Option<AssessmentResponse>, RemoteError>>;

    fn add_lifestyle<'a>(
        &'a self,
        patient_id: &'a str,
        request: &'a LifestyleRequest,
    ) -> BoxFuture<'a, Result<LifestyleResponse, RemoteError>>;
}

/// Patient profile endpoint.
pub trait PatientRemoteClient: Send + Sync {
    fn update_patient<'a>(
        &'a self,
        patient_id: &'a str,
        infos: &'a PatientInfosRequest,
    ) -> BoxFuture<'a, Result<(), RemoteError>>;
}

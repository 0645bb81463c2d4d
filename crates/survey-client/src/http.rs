use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use survey_core::api_paths;
use survey_core::models::assessment::{AssessmentRecord, AssessmentResponse};
use survey_core::models::health::PatientInfosRequest;
use survey_core::models::lifestyle::{LifestyleRequest, LifestyleResponse};

use crate::error::RemoteError;
use crate::remote::{AssessmentRemoteClient, BoxFuture, PatientRemoteClient};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`HttpApiClient`].
#[derive(Debug, Clone)]
pub struct HttpClientSettings {
    pub base_url: String,
    /// API token, sent as `Authorization: Token <token>`.
    pub token: Option<String>,
    pub timeout: Duration,
}

impl HttpClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// JSON-over-HTTP client for the survey API.
pub struct HttpApiClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

/// Lifestyle body: the tagged answers plus the owning patient.
#[derive(Serialize)]
struct LifestyleBody<'a> {
    patient: &'a str,
    #[serde(flatten)]
    request: &'a LifestyleRequest,
}

impl HttpApiClient {
    pub fn new(settings: HttpClientSettings) -> Result<Self, RemoteError> {
        if settings.base_url.trim().is_empty() {
            return Err(RemoteError::Config("base URL is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| RemoteError::Config(e.to_string()))?;

        Ok(Self {
            base_url: settings.base_url,
            token: settings.token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Send a JSON body and return the raw response body on a 2xx status.
    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>, RemoteError> {
        let url = self.url(path);
        debug!(method = %method, url = %url, "sending request");

        let mut req = self.client.request(method, &url).json(body);
        if let Some(token) = &self.token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Token {token}"));
        }

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        debug!(url = %url, status = status.as_u16(), len = bytes.len(), "request complete");
        Ok(bytes.to_vec())
    }
}

impl AssessmentRemoteClient for HttpApiClient {
    fn add_assessment<'a>(
        &'a self,
        record: &'a AssessmentRecord,
    ) -> BoxFuture<'a, Result<Option<AssessmentResponse>, RemoteError>> {
        Box::pin(async move {
            let body = self
                .send_json(Method::POST, api_paths::ASSESSMENTS, record)
                .await?;
            decode_optional(&body)
        })
    }

    fn update_assessment<'a>(
        &'a self,
        id: &'a str,
        record: &'a AssessmentRecord,
    ) -> BoxFuture<'a, Result<Option<AssessmentResponse>, RemoteError>> {
        Box::pin(async move {
            let body = self
                .send_json(Method::PATCH, &api_paths::assessment(id), record)
                .await?;
            decode_optional(&body)
        })
    }

    fn add_lifestyle<'a>(
        &'a self,
        patient_id: &'a str,
        request: &'a LifestyleRequest,
    ) -> BoxFuture<'a, Result<LifestyleResponse, RemoteError>> {
        Box::pin(async move {
            let payload = LifestyleBody {
                patient: patient_id,
                request,
            };
            let body = self
                .send_json(Method::POST, api_paths::LIFESTYLES, &payload)
                .await?;
            Ok(decode_optional(&body)?.unwrap_or_default())
        })
    }
}

impl PatientRemoteClient for HttpApiClient {
    fn update_patient<'a>(
        &'a self,
        patient_id: &'a str,
        infos: &'a PatientInfosRequest,
    ) -> BoxFuture<'a, Result<(), RemoteError>> {
        Box::pin(async move {
            self.send_json(Method::PATCH, &api_paths::patient(patient_id), infos)
                .await?;
            Ok(())
        })
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Decode a JSON body where an empty body or `null` means "no object".
fn decode_optional<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, RemoteError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice::<Option<T>>(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalises_slashes() {
        assert_eq!(
            join_url("https://api.example.org/v1/", "/assessments/"),
            "https://api.example.org/v1/assessments/"
        );
        assert_eq!(
            join_url("https://api.example.org/v1", "patients/p1/"),
            "https://api.example.org/v1/patients/p1/"
        );
    }

    #[test]
    fn empty_and_null_bodies_decode_to_none() {
        assert_eq!(decode_optional::<AssessmentResponse>(b"").unwrap(), None);
        assert_eq!(decode_optional::<AssessmentResponse>(b"  \n").unwrap(), None);
        assert_eq!(decode_optional::<AssessmentResponse>(b"null").unwrap(), None);
    }

    #[test]
    fn object_body_decodes_with_id() {
        let response = decode_optional::<AssessmentResponse>(br#"{"id":"abc","patient":"p1"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(response.assigned_id(), Some("abc"));
    }

    #[test]
    fn malformed_body_is_a_serialization_error() {
        let err = decode_optional::<AssessmentResponse>(b"{not json").unwrap_err();
        assert!(matches!(err, RemoteError::Serialization(_)));
    }

    #[test]
    fn lifestyle_body_carries_patient_and_version() {
        let request = LifestyleRequest::new(
            survey_core::models::fields::FieldMap::new().with("diet_change", "same"),
            "1.0.0",
        );
        let body = serde_json::to_value(LifestyleBody {
            patient: "p1",
            request: &request,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "patient": "p1", "version": "1.0.0", "diet_change": "same" })
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = HttpApiClient::new(HttpClientSettings::new("  ")).err().unwrap();
        assert!(matches!(err, RemoteError::Config(_)));
    }
}

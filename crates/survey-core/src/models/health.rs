use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::PatientState;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SmokerStatus {
    /// Older app versions sent "no" for never-smokers.
    #[default]
    #[serde(alias = "no")]
    Never,
    NotCurrently,
    Yes,
}

/// Country-level switches that change which health questions are asked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyFeatures {
    pub show_pregnancy_question: bool,
}

/// Which conditional questions the patient was shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthVisibility {
    pub pregnancy: bool,
    pub period: bool,
    pub hormone_therapy: bool,
    pub cancer_type: bool,
}

impl HealthVisibility {
    pub fn for_patient(patient: &PatientState, features: &SurveyFeatures) -> Self {
        Self {
            pregnancy: features.show_pregnancy_question && patient.is_female,
            period: patient.is_period_capable,
            hormone_therapy: patient.is_period_capable,
            cancer_type: patient.is_us(),
        }
    }
}

/// Answers from the "your health" step of patient registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthAnswers {
    pub is_pregnant: bool,
    pub has_heart_disease: bool,
    pub has_diabetes: bool,
    pub has_hayfever: bool,
    pub has_eczema: bool,
    pub has_asthma: bool,
    pub has_lung_disease: bool,
    pub has_kidney_disease: bool,
    pub smoker_status: SmokerStatus,
    /// Free text, as typed.
    pub smoked_years_ago: Option<String>,

    pub has_cancer: bool,
    pub cancer_type: Option<String>,
    pub does_chemiotherapy: bool,

    pub takes_immunosuppressants: bool,
    pub takes_aspirin: bool,
    pub takes_corticosteroids: bool,
    pub takes_any_blood_pressure_medications: bool,
    /// ACE inhibitors ("-pril" drugs).
    pub takes_blood_pressure_medications: bool,
    pub takes_blood_pressure_medications_sartan: bool,

    pub limited_activity: bool,
}

impl HealthAnswers {
    /// Build the patient update document.
    ///
    /// Follow-up answers are only sent when their parent question was shown
    /// and answered in a way that asks them.
    pub fn to_patient_infos(
        &self,
        visibility: &HealthVisibility,
    ) -> Result<PatientInfosRequest, CoreError> {
        let mut infos = PatientInfosRequest {
            has_heart_disease: Some(self.has_heart_disease),
            has_diabetes: Some(self.has_diabetes),
            has_hayfever: Some(self.has_hayfever),
            has_eczema: Some(self.has_eczema),
            has_asthma: Some(self.has_asthma),
            has_lung_disease_only: Some(self.has_lung_disease),
            has_kidney_disease: Some(self.has_kidney_disease),
            has_cancer: Some(self.has_cancer),
            takes_immunosuppressants: Some(self.takes_immunosuppressants),
            takes_aspirin: Some(self.takes_aspirin),
            takes_corticosteroids: Some(self.takes_corticosteroids),
            takes_any_blood_pressure_medications: Some(self.takes_any_blood_pressure_medications),
            limited_activity: Some(self.limited_activity),
            smoker_status: Some(self.smoker_status),
            ..Default::default()
        };

        if visibility.pregnancy {
            infos.is_pregnant = Some(self.is_pregnant);
        }

        if self.takes_any_blood_pressure_medications {
            infos.takes_blood_pressure_medications = Some(self.takes_blood_pressure_medications);
            infos.takes_blood_pressure_medications_sartan =
                Some(self.takes_blood_pressure_medications_sartan);
        }

        if self.smoker_status == SmokerStatus::NotCurrently {
            let raw = self.smoked_years_ago.as_deref().unwrap_or_default();
            infos.smoked_years_ago = Some(strip_and_round("smoked_years_ago", raw)?);
        }

        if self.has_cancer {
            infos.does_chemiotherapy = Some(self.does_chemiotherapy);
            if visibility.cancer_type {
                infos.cancer_type = self.cancer_type.clone();
            }
        }

        Ok(infos)
    }
}

/// Parse a typed number, ignoring whitespace and accepting a decimal
/// comma, rounded to the nearest integer.
fn strip_and_round(field: &str, raw: &str) -> Result<i64, CoreError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.round() as i64)
        .ok_or_else(|| CoreError::InvalidField {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// The patient update document sent to `PATCH patients/{id}/`.
///
/// Every field is optional; unset fields are left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInfosRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pregnant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_heart_disease: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_diabetes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_hayfever: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_eczema: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_asthma: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_lung_disease_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_kidney_disease: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoker_status: Option<SmokerStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoked_years_ago: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_cancer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancer_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub does_chemiotherapy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takes_immunosuppressants: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takes_aspirin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takes_corticosteroids: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takes_any_blood_pressure_medications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takes_blood_pressure_medications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takes_blood_pressure_medications_sartan: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limited_activity: Option<bool>,
}

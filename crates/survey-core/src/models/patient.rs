use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::field;
use super::fields::FieldMap;

/// Location fields of the patient profile, read when an assessment is
/// completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_postcode: Option<String>,
}

impl PatientInfo {
    /// The location fields to stamp onto a completed assessment.
    ///
    /// Exactly one source wins: `current_country_code`, else
    /// `current_postcode`, else the home `postcode`. Empty strings count as
    /// absent. Yields an empty map when the patient has none of them.
    pub fn location_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        if let Some(country) = non_empty(&self.current_country_code) {
            fields.set(field::CURRENT_COUNTRY_CODE, country);
        } else if let Some(postcode) = non_empty(&self.current_postcode) {
            fields.set(field::CURRENT_POSTCODE, postcode);
        } else if let Some(postcode) = non_empty(&self.postcode) {
            fields.set(field::CURRENT_POSTCODE, postcode);
        }
        fields
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// What the client knows about the active patient between screens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientState {
    #[serde(default)]
    pub profile_name: Option<String>,
    pub is_female: bool,
    pub is_period_capable: bool,
    #[serde(default)]
    pub location: PatientInfo,

    // Completion flags, set once the matching question has been answered
    pub has_completed_patient_details: bool,
    pub has_blood_pressure_answer: bool,
    pub has_period_answer: bool,
    pub has_hormone_treatment_answer: bool,
    pub has_vitamin_answer: bool,
    pub has_atopy_answers: bool,
    pub has_hayfever: bool,
}

impl PatientState {
    /// ISO country the patient registered in.
    pub fn country_code(&self) -> Option<&str> {
        non_empty(&self.location.country_code)
    }

    pub fn is_us(&self) -> bool {
        self.country_code() == Some("US")
    }
}

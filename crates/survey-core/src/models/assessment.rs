use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::fields::FieldMap;

/// Field names the client itself reads or writes on an assessment.
/// Every other field is owned by the questionnaire screens.
pub mod field {
    pub const ID: &str = "id";
    pub const CURRENT_COUNTRY_CODE: &str = "current_country_code";
    pub const CURRENT_POSTCODE: &str = "current_postcode";
}

pub type AssessmentId = String;

/// The assessment being filled in, accumulated screen by screen.
///
/// Serializes as the flat field object the API expects. The identifier is
/// just another field, written back after the first remote response that
/// carries one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentRecord {
    fields: FieldMap,
}

impl AssessmentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The remote identifier, if one has been assigned. An empty string
    /// counts as unassigned.
    pub fn id(&self) -> Option<&str> {
        self.fields.get_str(field::ID).filter(|id| !id.is_empty())
    }

    pub fn phase(&self) -> AssessmentPhase {
        if self.id().is_some() {
            AssessmentPhase::Persisted
        } else {
            AssessmentPhase::Draft
        }
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }

    pub fn merge(&mut self, partial: FieldMap) {
        self.fields.merge(partial);
    }
}

impl From<FieldMap> for AssessmentRecord {
    fn from(fields: FieldMap) -> Self {
        Self { fields }
    }
}

/// Whether an assessment exists remotely yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentPhase {
    /// No identifier; only held in memory.
    Draft,
    /// The API has assigned an identifier.
    Persisted,
}

/// Body returned by the assessment create and update endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AssessmentId>,
    #[serde(flatten)]
    pub extra: FieldMap,
}

impl AssessmentResponse {
    /// The identifier the API assigned, ignoring empty strings.
    pub fn assigned_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

use serde::{Deserialize, Serialize};

use super::fields::FieldMap;

/// Schema version stamped onto every lifestyle submission unless the host
/// configures another.
pub const LIFESTYLE_VERSION: &str = "1.0.0";

const VERSION_FIELD: &str = "version";

/// A lifestyle questionnaire submission, tagged with its schema version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleRequest {
    pub version: String,
    #[serde(flatten)]
    pub answers: FieldMap,
}

impl LifestyleRequest {
    /// Tag `answers` with `version`. A `version` key already present in the
    /// answers is replaced by the tag.
    pub fn new(mut answers: FieldMap, version: impl Into<String>) -> Self {
        answers.remove(VERSION_FIELD);
        Self {
            version: version.into(),
            answers,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifestyleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: FieldMap,
}

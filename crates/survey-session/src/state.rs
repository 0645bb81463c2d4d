use survey_core::models::assessment::AssessmentRecord;
use survey_core::models::fields::FieldMap;

/// Holder for the assessment currently being filled in.
///
/// Pure in-memory mutation; nothing here can fail.
pub trait AssessmentState: Send + Sync {
    /// Start a new, empty assessment.
    fn init(&mut self);

    /// Shallow-merge `partial` into the current record.
    fn merge(&mut self, partial: FieldMap);

    fn get(&self) -> &AssessmentRecord;
}

#[derive(Debug, Default)]
pub struct InMemoryAssessmentState {
    record: AssessmentRecord,
}

impl AssessmentState for InMemoryAssessmentState {
    fn init(&mut self) {
        self.record = AssessmentRecord::new();
    }

    fn merge(&mut self, partial: FieldMap) {
        tracing::debug!(fields = partial.len(), "merging assessment fields");
        self.record.merge(partial);
    }

    fn get(&self) -> &AssessmentRecord {
        &self.record
    }
}

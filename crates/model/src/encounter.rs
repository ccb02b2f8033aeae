//! Encounter resource (visit subset)

use serde::{Deserialize, Serialize};

use crate::types::{Coding, Period, Reference};

/// FHIR Encounter resource, limited to the fields this client inspects
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Encounter state, e.g. `planned`, `in-progress`, `finished`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Coding>,

    /// The patient this encounter is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl Encounter {
    /// The subject reference string, e.g. `Patient/DDONYVATHBD6R3KW`
    pub fn subject_reference(&self) -> Option<&str> {
        self.subject.as_ref()?.reference.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_subject_reference() {
        let json = r#"{
            "id": "DDONYVATHBD6R32Y",
            "status": "finished",
            "subject": {"reference": "Patient/DDONYVATHBD6R3KW"}
        }"#;

        let encounter: Encounter = serde_json::from_str(json).unwrap();
        assert_eq!(
            encounter.subject_reference(),
            Some("Patient/DDONYVATHBD6R3KW")
        );
    }
}

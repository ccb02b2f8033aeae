//! Appointment resource

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{CodeableConcept, Identifier, Meta, Narrative, Reference};

/// FHIR Appointment resource
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// Appointment state, e.g. `proposed`, `booked`, `cancelled`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_category: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_code: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant: Vec<Participant>,
}

/// A participant in an appointment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub actor: Reference,

    /// Whether attendance is required, e.g. `required`, `optional`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,

    /// Participation status, e.g. `accepted`, `needs-action`
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let appointment = Appointment {
            id: Some("e1316ca3".to_string()),
            status: Some("proposed".to_string()),
            minutes_duration: Some(15),
            created: NaiveDate::from_ymd_opt(2021, 3, 6),
            service_category: vec![CodeableConcept::default()],
            ..Appointment::default()
        };

        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(json["minutesDuration"], 15);
        assert_eq!(json["created"], "2021-03-06");
        assert!(json.get("serviceCategory").is_some());
        // Absent optionals stay off the wire
        assert!(json.get("appointmentType").is_none());
        assert!(json.get("participant").is_none());
    }
}

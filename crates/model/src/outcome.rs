//! OperationOutcome: the error payload FHIR servers return
//!
//! The client decodes this best-effort from non-2xx response bodies to
//! attach server-side diagnostics to its own errors.

use serde::{Deserialize, Serialize};

/// Severity of the issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

/// A single issue reported by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcomeIssue {
    pub severity: IssueSeverity,

    /// Issue type code from the FHIR issue-type valueset, kept as a
    /// string since the client only reports it
    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,
}

/// FHIR OperationOutcome resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    pub resource_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issue: Vec<OperationOutcomeIssue>,
}

impl OperationOutcome {
    /// Parse an outcome from a response body, if it is one
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let outcome: OperationOutcome = serde_json::from_slice(body).ok()?;
        if outcome.resource_type == "OperationOutcome" {
            Some(outcome)
        } else {
            None
        }
    }

    /// Diagnostics from the first issue that carries any
    pub fn diagnostics(&self) -> Option<&str> {
        self.issue.iter().find_map(|i| i.diagnostics.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_diagnostics_from_first_issue() {
        let body = br#"{
            "resourceType": "OperationOutcome",
            "issue": [
                {"severity": "error", "code": "not-found", "diagnostics": "Patient/x not found"}
            ]
        }"#;

        let outcome = OperationOutcome::from_body(body).unwrap();
        assert_eq!(outcome.diagnostics(), Some("Patient/x not found"));
        assert_eq!(outcome.issue[0].severity, IssueSeverity::Error);
    }

    #[test]
    fn rejects_bodies_that_are_not_outcomes() {
        assert!(OperationOutcome::from_body(b"not json").is_none());
        assert!(OperationOutcome::from_body(br#"{"resourceType": "Patient"}"#).is_none());
    }
}

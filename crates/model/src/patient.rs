//! Patient resource (demographics subset)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{HumanName, Identifier};

/// FHIR Patient resource, limited to the demographic fields this client
/// reads and writes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

impl Patient {
    /// Given names from the first recorded name, if any
    pub fn given_names(&self) -> &[String] {
        self.name.first().map(|n| n.given.as_slice()).unwrap_or(&[])
    }
}

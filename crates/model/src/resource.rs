//! Resource dispatch and addressing

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::encounter::Encounter;
use crate::error::ModelError;
use crate::patient::Patient;

/// The resource types this client understands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResourceType {
    Patient,
    Encounter,
    Appointment,
}

impl ResourceType {
    /// Canonical FHIR name, as it appears in URLs and `resourceType` fields
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Patient => "Patient",
            ResourceType::Encounter => "Encounter",
            ResourceType::Appointment => "Appointment",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable (resource type, id) pair addressing one server-side resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    resource_type: ResourceType,
    id: String,
}

impl ResourceRef {
    /// Build a reference, rejecting empty or whitespace-only ids
    pub fn new(resource_type: ResourceType, id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::Empty("resource id"));
        }
        Ok(Self { resource_type, id })
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Relative path under the FHIR base, e.g. `Patient/DDONYVATHBD6R3KW`
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.resource_type, self.id)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.id)
    }
}

impl From<&ResourceRef> for crate::types::Reference {
    fn from(target: &ResourceRef) -> Self {
        Self {
            reference: Some(target.relative_path()),
            display: None,
        }
    }
}

/// A decoded FHIR resource, dispatched on the wire `resourceType` field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Patient(Patient),
    Encounter(Encounter),
    Appointment(Appointment),
}

impl Resource {
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Resource::Patient(_) => ResourceType::Patient,
            Resource::Encounter(_) => ResourceType::Encounter,
            Resource::Appointment(_) => ResourceType::Appointment,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Resource::Patient(p) => p.id.as_deref(),
            Resource::Encounter(e) => e.id.as_deref(),
            Resource::Appointment(a) => a.id.as_deref(),
        }
    }

    /// Build the server-side reference for this resource.
    ///
    /// Fails when the resource carries no id, since there is nothing to
    /// address a write at.
    pub fn reference(&self) -> Result<ResourceRef, ModelError> {
        let id = self.id().ok_or(ModelError::MissingId)?;
        ResourceRef::new(self.resource_type(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_ref_renders_relative_path() {
        let target = ResourceRef::new(ResourceType::Patient, "DDONYVATHBD6R3KW").unwrap();
        assert_eq!(target.relative_path(), "Patient/DDONYVATHBD6R3KW");
        assert_eq!(target.to_string(), "Patient/DDONYVATHBD6R3KW");
    }

    #[test]
    fn resource_ref_rejects_blank_ids() {
        assert!(ResourceRef::new(ResourceType::Encounter, "").is_err());
        assert!(ResourceRef::new(ResourceType::Encounter, "   ").is_err());
    }

    #[test]
    fn reference_datatype_from_resource_ref() {
        let target = ResourceRef::new(ResourceType::Patient, "DDONYVATHBD6R3KW").unwrap();
        let actor = crate::types::Reference::from(&target);
        assert_eq!(actor.reference.as_deref(), Some("Patient/DDONYVATHBD6R3KW"));
    }

    #[test]
    fn reference_requires_an_id() {
        let anonymous = Resource::Patient(Patient::default());
        assert!(matches!(anonymous.reference(), Err(ModelError::MissingId)));

        let identified = Resource::Patient(Patient {
            id: Some("abc".to_string()),
            ..Patient::default()
        });
        let target = identified.reference().unwrap();
        assert_eq!(target.relative_path(), "Patient/abc");
    }
}

//! fhir-model: Typed FHIR R4 resources and wire-format bridging
//!
//! This crate provides the typed resources the client exchanges
//! (Patient, Encounter, Appointment), the shared FHIR datatypes they
//! are built from, and the [`ResourceCodec`] seam that converts between
//! raw wire bytes and typed resources.

pub mod appointment;
pub mod codec;
pub mod encounter;
pub mod error;
pub mod outcome;
pub mod patient;
pub mod resource;
pub mod types;

pub use appointment::{Appointment, Participant};
pub use codec::{FhirVersion, JsonCodec, ResourceCodec};
pub use encounter::Encounter;
pub use error::ModelError;
pub use outcome::{IssueSeverity, OperationOutcome, OperationOutcomeIssue};
pub use patient::Patient;
pub use resource::{Resource, ResourceRef, ResourceType};
pub use types::{
    CodeableConcept, Coding, HumanName, Identifier, Meta, Narrative, Period, Reference,
};

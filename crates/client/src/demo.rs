//! Demo driver: a fixed proof-of-concept call sequence
//!
//! Fetches a patient and an encounter, then creates an appointment for
//! that patient and reads it back. Kept as example usage of the client
//! rather than a reusable API.

use chrono::Utc;
use uuid::Uuid;

use fhir_model::{
    Appointment, CodeableConcept, Coding, Identifier, JsonCodec, Meta, Narrative, Participant,
    Reference, Resource, ResourceRef, ResourceType,
};

use crate::client::FhirClient;
use crate::config::Config;
use crate::error::ClientError;

/// Run the demo sequence: get-patient, get-encounter,
/// create-appointment, get-appointment
pub async fn run(
    client: &FhirClient,
    codec: &JsonCodec,
    config: &Config,
) -> Result<(), ClientError> {
    get_patient(client, codec, &config.patient_id).await?;
    get_encounter(client, codec, &config.encounter_id).await?;

    let appointment_id = Uuid::new_v4().simple().to_string();
    create_appointment(client, codec, &appointment_id, &config.patient_id).await?;
    get_appointment(client, codec, &appointment_id).await?;

    Ok(())
}

async fn get_patient(
    client: &FhirClient,
    codec: &JsonCodec,
    patient_id: &str,
) -> Result<(), ClientError> {
    let target = ResourceRef::new(ResourceType::Patient, patient_id)?;

    match client.read(codec, &target).await? {
        Resource::Patient(patient) => {
            tracing::info!(resource = %target, given = ?patient.given_names(), "Fetched patient");
        }
        other => {
            tracing::warn!(resource = %target, resource_type = %other.resource_type(), "Expected a Patient");
        }
    }
    Ok(())
}

async fn get_encounter(
    client: &FhirClient,
    codec: &JsonCodec,
    encounter_id: &str,
) -> Result<(), ClientError> {
    let target = ResourceRef::new(ResourceType::Encounter, encounter_id)?;

    match client.read(codec, &target).await? {
        Resource::Encounter(encounter) => {
            tracing::info!(
                resource = %target,
                subject = encounter.subject_reference().unwrap_or("none"),
                "Fetched encounter"
            );
        }
        other => {
            tracing::warn!(resource = %target, resource_type = %other.resource_type(), "Expected an Encounter");
        }
    }
    Ok(())
}

async fn create_appointment(
    client: &FhirClient,
    codec: &JsonCodec,
    appointment_id: &str,
    patient_id: &str,
) -> Result<(), ClientError> {
    let patient = ResourceRef::new(ResourceType::Patient, patient_id)?;
    let resource = Resource::Appointment(sample_appointment(appointment_id, &patient));

    let status = client.update(codec, &resource).await?;
    tracing::info!(id = appointment_id, status = status.as_u16(), "Created appointment");
    Ok(())
}

async fn get_appointment(
    client: &FhirClient,
    codec: &JsonCodec,
    appointment_id: &str,
) -> Result<(), ClientError> {
    let target = ResourceRef::new(ResourceType::Appointment, appointment_id)?;

    match client.read(codec, &target).await? {
        Resource::Appointment(appointment) => {
            tracing::info!(
                resource = %target,
                status = appointment.status.as_deref().unwrap_or("unknown"),
                description = appointment.description.as_deref().unwrap_or(""),
                "Fetched appointment"
            );
        }
        other => {
            tracing::warn!(resource = %target, resource_type = %other.resource_type(), "Expected an Appointment");
        }
    }
    Ok(())
}

/// A follow-up visit appointment for the given patient
pub fn sample_appointment(id: &str, patient: &ResourceRef) -> Appointment {
    Appointment {
        id: Some(id.to_string()),
        meta: Some(Meta {
            security: vec![Coding::new(
                "http://terminology.hl7.org/CodeSystem/v3-ActReason",
                "HTEST",
                "test health data",
            )],
            ..Meta::default()
        }),
        text: Some(Narrative {
            status: "generated".to_string(),
            div: "<div xmlns=\"http://www.w3.org/1999/xhtml\">Appointment: A follow up visit \
                  from a previous appointment</div>"
                .to_string(),
        }),
        identifier: vec![Identifier {
            system: Some("http://happyvalley.com/appointment".to_string()),
            value: Some("13816582032-310".to_string()),
        }],
        status: Some("proposed".to_string()),
        service_category: vec![CodeableConcept::from(Coding::new(
            "http://terminology.hl7.org/CodeSystem/service-type",
            "124",
            "General Practice",
        ))],
        appointment_type: Some(CodeableConcept::from(Coding::new(
            "http://terminology.hl7.org/CodeSystem/v2-0276",
            "FOLLOWUP",
            "A follow up visit from a previous appointment",
        ))),
        reason_code: vec![CodeableConcept::from(Coding::new(
            "http://snomed.info/sct",
            "813001",
            "Ankle instability",
        ))],
        priority: Some(5),
        description: Some("Discuss results of recent MRI".to_string()),
        minutes_duration: Some(15),
        created: Some(Utc::now().date_naive()),
        comment: Some(
            "Further expand on the results of the MRI and determine the next actions that \
             may be appropriate."
                .to_string(),
        ),
        participant: vec![Participant {
            actor: Reference::from(patient),
            required: Some("required".to_string()),
            status: "needs-action".to_string(),
        }],
    }
}

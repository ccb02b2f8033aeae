//! hl7-demo: ORU^R01 inspection binary entrypoint

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fhir_client::hl7;

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let summary = match hl7::summarize_oru(hl7::ORU_R01_MESSAGE) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse HL7 message");
            std::process::exit(1);
        }
    };

    tracing::info!(
        message_type = summary.message_type.as_deref().unwrap_or("unknown"),
        patient_id = summary.patient_id.as_deref().unwrap_or("unknown"),
        family = summary.family_name.as_deref().unwrap_or(""),
        given = summary.given_name.as_deref().unwrap_or(""),
        "Parsed ORU^R01 message"
    );
    tracing::info!(
        observation = summary.observation.as_deref().unwrap_or("unknown"),
        value = summary.value.as_deref().unwrap_or(""),
        units = summary.units.as_deref().unwrap_or(""),
        reference_range = summary.reference_range.as_deref().unwrap_or(""),
        abnormal_flag = summary.abnormal_flag.as_deref().unwrap_or(""),
        notes = summary.note_count,
        "Observation result"
    );
}

//! Client configuration

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the FHIR server, without the `/fhir` prefix
    pub base_url: String,
    /// Time zone for partial date-times without an explicit offset
    pub time_zone: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Patient id the demo sequence fetches
    pub patient_id: String,
    /// Encounter id the demo sequence fetches
    pub encounter_id: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("FHIR_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            time_zone: std::env::var("FHIR_TIME_ZONE")
                .unwrap_or_else(|_| "Australia/Sydney".into()),
            request_timeout_secs: std::env::var("FHIR_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            patient_id: std::env::var("FHIR_PATIENT_ID")
                .unwrap_or_else(|_| "DDONYVATHBD6R3KW".into()),
            encounter_id: std::env::var("FHIR_ENCOUNTER_ID")
                .unwrap_or_else(|_| "DDONYVATHBD6R32Y".into()),
        }
    }
}

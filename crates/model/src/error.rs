use thiserror::Error;

use crate::codec::FhirVersion;

/// Model and codec error types
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to decode {version} resource: {source}")]
    Decode {
        version: FhirVersion,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode resource: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Empty {0}")]
    Empty(&'static str),

    #[error("Resource has no id, cannot build a reference")]
    MissingId,
}

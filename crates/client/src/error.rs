//! Client error taxonomy
//!
//! Every failure path surfaces as a distinct [`ClientError`] kind so
//! callers can tell retryable transport faults from terminal client,
//! server, and codec errors. Nothing here terminates the process.

use fhir_model::{ModelError, OperationOutcome};
use reqwest::StatusCode;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request construction or configuration failure
    #[error("Invalid request: {0}")]
    Request(String),

    /// Network-level failure (connect, timeout); the only retryable kind
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The server rejected the request (4xx)
    #[error("Client error {status}: {}", .diagnostics.as_deref().unwrap_or("no diagnostics"))]
    Client {
        status: StatusCode,
        diagnostics: Option<String>,
    },

    /// The server failed to process the request (5xx)
    #[error("Server error {status}: {}", .diagnostics.as_deref().unwrap_or("no diagnostics"))]
    Server {
        status: StatusCode,
        diagnostics: Option<String>,
    },

    /// Model-level failure: decode/encode, invalid reference
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ClientError {
    /// Classify a non-success response, pulling diagnostics out of an
    /// OperationOutcome body when the server sent one
    pub(crate) fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let diagnostics =
            OperationOutcome::from_body(body).and_then(|o| o.diagnostics().map(str::to_string));

        if status.is_server_error() {
            ClientError::Server {
                status,
                diagnostics,
            }
        } else {
            ClientError::Client {
                status,
                diagnostics,
            }
        }
    }

    /// Classify a send-phase failure: URL and builder problems are
    /// malformed requests that no retry will fix, everything else is a
    /// network fault
    pub(crate) fn from_send(source: reqwest::Error) -> Self {
        if source.is_builder() {
            ClientError::Request(source.to_string())
        } else {
            ClientError::Transport(source)
        }
    }

    /// Whether retrying the same request could reasonably succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// The HTTP status, for status-bearing kinds
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Client { status, .. } | ClientError::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

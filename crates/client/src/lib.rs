//! fhir-client library crate
//!
//! Exposes the HTTP resource client, its configuration, and the demo
//! driver so integration tests can exercise them without the binary.
//! The binary entrypoint is in `main.rs`.

pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod hl7;

pub use client::FhirClient;
pub use config::Config;
pub use error::ClientError;

//! Error types for the SOAP client

use thiserror::Error;

/// Errors that can occur when talking to the speaker
#[derive(Debug, Error)]
pub enum SoapError {
    /// The device answered with a non-success HTTP status
    #[error("device returned {0}")]
    Status(String),

    /// Network-level failure reaching the device
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

//! Versioned envelope for persisted values.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Current schema version for persisted records.
pub const RECORD_VERSION: u32 = 1;

/// Why a persisted record could not be used.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Not valid JSON, or the payload does not match the expected shape.
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Written by a different schema version.
    #[error("unsupported record version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
struct RawEnvelope {
    version: u32,
    data: serde_json::Value,
}

/// Wrap `data` in a versioned envelope.
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized.
pub fn encode<T: Serialize>(data: &T) -> serde_json::Result<String> {
    serde_json::to_string(&Envelope {
        version: RECORD_VERSION,
        data,
    })
}

/// Unwrap a versioned envelope.
///
/// # Errors
///
/// Returns an error if the input is malformed or carries another version.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    let envelope: RawEnvelope = serde_json::from_str(raw)?;
    if envelope.version != RECORD_VERSION {
        return Err(DecodeError::UnsupportedVersion(envelope.version));
    }
    Ok(serde_json::from_value(envelope.data)?)
}

use thiserror::Error;

/// Error types for envelope decoding and wallet record serialization.
///
/// Derivation and encryption never fail; only decoding stored material can.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Base64 decoding error: {0}")]
    Base64DecodeError(String),

    #[error("Wallet record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

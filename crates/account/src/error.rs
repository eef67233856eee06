use anyhow::Error as Report;

/// Errors produced while adapting a remote KMS key into an Ethereum
/// signing identity.
///
/// None of these are retryable by this crate: a malformed key or signature
/// will stay malformed, and a failed recovery means the signature does not
/// belong to the expected key. Retry policy for transient remote failures
/// belongs to the [`RemoteKeyService`](crate::RemoteKeyService)
/// implementation.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("malformed public key: {0}")]
    MalformedKey(String),
    #[error("invalid DER signature encoding: {0}")]
    InvalidSignatureEncoding(String),
    #[error("no recovery id in 0..=3 reproduces the expected public key")]
    RecoveryFailed,
    #[error("remote signer returned an empty signature")]
    SigningFailed,
    #[error(transparent)]
    Remote(#[from] Report),
}

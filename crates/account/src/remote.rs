use alloy_primitives::B256;
use anyhow::Result;

use crate::key::KeyDescriptor;

/// Boundary to the remote key-management service.
///
/// Implementations are sync; async clients should wrap calls with
/// `spawn_blocking`. The handle is stateless request/response, so one
/// long-lived instance can be shared across threads without locking.
/// Retry, timeout, and credential handling all live behind this trait,
/// never in the signing core.
pub trait RemoteKeyService: Send + Sync {
    /// Fetches the PEM-armored public key for a key version.
    fn get_public_key(&self, key: &KeyDescriptor) -> Result<String>;

    /// Asks the service to sign a 32-byte digest, returning the DER ECDSA
    /// signature, or `Ok(None)` when the service reports no signature.
    fn asymmetric_sign(&self, key: &KeyDescriptor, digest: &B256) -> Result<Option<Vec<u8>>>;
}

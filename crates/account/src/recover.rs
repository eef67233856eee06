use alloy_primitives::B256;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use crate::error::AccountError;
use crate::signature::RecoverableSignature;

/// Turns a DER ECDSA signature over `digest` into an Ethereum-canonical
/// recoverable signature, verified against `expected_public_key`.
///
/// The DER form carries no recovery id, so every candidate in `0..=3` is
/// probed and the one whose recovered point matches `expected_public_key`
/// wins. `expected_public_key` may be in compressed (33-byte) or
/// uncompressed (65-byte) SEC1 form; the comparison follows its length.
pub fn recover_signature(
    digest: &B256,
    der_signature: &[u8],
    expected_public_key: &[u8],
) -> Result<RecoverableSignature, AccountError> {
    let decoded = Signature::from_der(der_signature)
        .map_err(|e| AccountError::InvalidSignatureEncoding(e.to_string()))?;

    // Ethereum rejects high-S signatures; (r, n - s) verifies identically,
    // so fold onto the canonical half. Flipping s also flips which recovery
    // id is correct, which the search below resolves.
    let signature = decoded.normalize_s().unwrap_or(decoded);

    let compressed = expected_public_key.len() == 33;
    for candidate in 0u8..=3 {
        let Some(recovery_id) = RecoveryId::from_byte(candidate) else {
            continue;
        };
        // Ids 2 and 3 mean r was reduced past the curve order, which
        // essentially never happens; a failed attempt is a non-match.
        let Ok(recovered) =
            VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id)
        else {
            continue;
        };
        if recovered.to_encoded_point(compressed).as_bytes() == expected_public_key {
            let bytes = signature.to_bytes();
            return Ok(RecoverableSignature {
                r: B256::from_slice(&bytes[..32]),
                s: B256::from_slice(&bytes[32..]),
                v: 27 + u64::from(candidate),
                y_parity: candidate,
            });
        }
    }

    // Corrupted signature, digest/key mismatch, or a remote integrity
    // fault. Guessing a v here would mint an unverifiable signature.
    Err(AccountError::RecoveryFailed)
}

use std::fmt;

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Ethereum-canonical recoverable ECDSA signature.
///
/// `s` is always in low-S form and `y_parity` is the recovery id that was
/// verified to reproduce the signer's public key. `v` carries the legacy
/// `27 + y_parity` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableSignature {
    pub r: B256,
    pub s: B256,
    pub v: u64,
    pub y_parity: u8,
}

impl RecoverableSignature {
    /// Compact 65-byte `r || s || v` encoding with `v` in {27, 28}, the
    /// form expected by `ecrecover` and message-signature verifiers.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(self.r.as_slice());
        out[32..64].copy_from_slice(self.s.as_slice());
        out[64] = 27 + self.y_parity;
        out
    }
}

impl fmt::Display for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_encoding_is_r_s_v() {
        let signature = RecoverableSignature {
            r: B256::repeat_byte(0x11),
            s: B256::repeat_byte(0x22),
            v: 28,
            y_parity: 1,
        };
        let bytes = signature.to_bytes();
        assert_eq!(&bytes[..32], B256::repeat_byte(0x11).as_slice());
        assert_eq!(&bytes[32..64], B256::repeat_byte(0x22).as_slice());
        assert_eq!(bytes[64], 28);
    }

    #[test]
    fn display_is_0x_prefixed_hex() {
        let signature = RecoverableSignature {
            r: B256::ZERO,
            s: B256::ZERO,
            v: 27,
            y_parity: 0,
        };
        let text = signature.to_string();
        assert!(text.starts_with("0x"));
        assert_eq!(text.len(), 2 + 65 * 2);
        assert!(text.ends_with("1b"), "v byte should be 27 (0x1b): {text}");
    }
}

use alloy_primitives::{Address, B256, eip191_hash_message};
use alloy_sol_types::{Eip712Domain, SolStruct};

use crate::error::AccountError;
use crate::key::KeyDescriptor;
use crate::public_key::decode_public_key_pem;
use crate::recover::recover_signature;
use crate::remote::RemoteKeyService;
use crate::signature::RecoverableSignature;

/// An Ethereum account whose private key lives inside a remote KMS.
///
/// Holds only the key descriptor, the decoded public key, and the derived
/// address. Every signature goes through the remote service and is then
/// adapted into recoverable form by [`recover_signature`], so a corrupted
/// or mismatched remote response can never surface as a valid-looking
/// signature.
#[derive(Debug, Clone)]
pub struct KmsAccount {
    descriptor: KeyDescriptor,
    public_key: Vec<u8>,
    address: Address,
}

impl KmsAccount {
    /// Fetches and decodes the remote public key, deriving the account
    /// address from the uncompressed point.
    pub fn connect(
        kms: &dyn RemoteKeyService,
        descriptor: KeyDescriptor,
    ) -> Result<Self, AccountError> {
        let pem = kms.get_public_key(&descriptor)?;
        let public_key = decode_public_key_pem(&pem)?;
        // Decoder guarantees 65 bytes with the 0x04 prefix; the address is
        // keccak-256 of the 64-byte X || Y, last 20 bytes.
        let address = Address::from_raw_public_key(&public_key[1..]);
        Ok(Self {
            descriptor,
            public_key,
            address,
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Uncompressed SEC1 public key (65 bytes, `0x04` prefix).
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn descriptor(&self) -> &KeyDescriptor {
        &self.descriptor
    }

    /// Signs a prehashed 32-byte digest.
    ///
    /// This is the primitive the message and typed-data helpers build on;
    /// callers that serialize transactions themselves hash the payload and
    /// call this directly.
    pub fn sign_digest(
        &self,
        kms: &dyn RemoteKeyService,
        digest: B256,
    ) -> Result<RecoverableSignature, AccountError> {
        let der = kms
            .asymmetric_sign(&self.descriptor, &digest)?
            .ok_or(AccountError::SigningFailed)?;
        recover_signature(&digest, &der, &self.public_key)
    }

    /// Signs a message under the EIP-191 `personal_sign` scheme.
    ///
    /// Takes raw bytes; whether a string should be signed as UTF-8 text or
    /// as decoded hex is the caller's decision, made before this call.
    pub fn sign_message(
        &self,
        kms: &dyn RemoteKeyService,
        message: &[u8],
    ) -> Result<RecoverableSignature, AccountError> {
        self.sign_digest(kms, eip191_hash_message(message))
    }

    /// Signs EIP-712 typed structured data.
    pub fn sign_typed_data<T: SolStruct>(
        &self,
        kms: &dyn RemoteKeyService,
        domain: &Eip712Domain,
        value: &T,
    ) -> Result<RecoverableSignature, AccountError> {
        self.sign_digest(kms, value.eip712_signing_hash(domain))
    }
}

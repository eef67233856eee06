pub mod account;
pub mod error;
pub mod key;
pub mod public_key;
pub mod recover;
pub mod remote;
pub mod signature;

pub use account::KmsAccount;
pub use error::AccountError;
pub use key::KeyDescriptor;
pub use public_key::{compress_public_key, decode_public_key_pem, decompress_public_key};
pub use recover::recover_signature;
pub use remote::RemoteKeyService;
pub use signature::RecoverableSignature;

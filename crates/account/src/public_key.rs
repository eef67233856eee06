use base64ct::{Base64, Encoding};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use spki::SubjectPublicKeyInfoRef;
use spki::der::Decode;

use crate::error::AccountError;

const PEM_HEADER: &str = "-----BEGIN PUBLIC KEY-----";
const PEM_FOOTER: &str = "-----END PUBLIC KEY-----";

/// Decodes the PEM-armored `SubjectPublicKeyInfo` returned by the key
/// service into the raw uncompressed secp256k1 point (65 bytes, `0x04`
/// prefix).
pub fn decode_public_key_pem(pem: &str) -> Result<Vec<u8>, AccountError> {
    let der = pem_to_der(pem)?;
    public_key_from_der(&der)
}

/// Strips the PEM framing and base64-decodes the body.
fn pem_to_der(pem: &str) -> Result<Vec<u8>, AccountError> {
    let mut in_body = false;
    let mut closed = false;
    let mut body = String::new();
    for line in pem.lines() {
        let line = line.trim();
        match line {
            PEM_HEADER => in_body = true,
            PEM_FOOTER => {
                closed = true;
                break;
            }
            _ if in_body => body.push_str(line),
            _ => {}
        }
    }
    if !in_body || !closed {
        return Err(AccountError::MalformedKey(
            "missing BEGIN/END PUBLIC KEY framing".into(),
        ));
    }
    if body.is_empty() {
        return Err(AccountError::MalformedKey("empty PEM body".into()));
    }
    Base64::decode_vec(&body)
        .map_err(|e| AccountError::MalformedKey(format!("invalid base64 in PEM body: {e}")))
}

/// Extracts the EC point from a DER `SubjectPublicKeyInfo`: a SEQUENCE of
/// an algorithm identifier (ignored) and a BIT STRING holding the raw key.
fn public_key_from_der(der: &[u8]) -> Result<Vec<u8>, AccountError> {
    let info = SubjectPublicKeyInfoRef::from_der(der)
        .map_err(|e| AccountError::MalformedKey(format!("invalid SubjectPublicKeyInfo: {e}")))?;
    let point = info
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| AccountError::MalformedKey("key BIT STRING has unused bits".into()))?;
    // The service reports uncompressed points; anything else is a fault.
    if point.first() != Some(&0x04) || point.len() != 65 {
        return Err(AccountError::MalformedKey(format!(
            "expected 65-byte uncompressed point, got {} bytes",
            point.len()
        )));
    }
    // Reject coordinates that are not actually on secp256k1.
    k256::PublicKey::from_sec1_bytes(point)
        .map_err(|e| AccountError::MalformedKey(format!("point not on curve: {e}")))?;
    Ok(point.to_vec())
}

/// Re-encodes a SEC1 point (compressed or uncompressed) in compressed form.
pub fn compress_public_key(point: &[u8]) -> Result<Vec<u8>, AccountError> {
    reencode(point, true)
}

/// Re-encodes a SEC1 point (compressed or uncompressed) in uncompressed form.
pub fn decompress_public_key(point: &[u8]) -> Result<Vec<u8>, AccountError> {
    reencode(point, false)
}

fn reencode(point: &[u8], compress: bool) -> Result<Vec<u8>, AccountError> {
    let key = k256::PublicKey::from_sec1_bytes(point)
        .map_err(|e| AccountError::MalformedKey(format!("invalid SEC1 point: {e}")))?;
    Ok(key.to_encoded_point(compress).as_bytes().to_vec())
}

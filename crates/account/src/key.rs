use std::fmt;

use serde::{Deserialize, Serialize};

/// Address of an asymmetric key held by the remote key-management service.
///
/// Either a full resource path as a raw string, or the individual path
/// components. The descriptor is only ever rendered back into a resource
/// name for remote calls; nothing in this crate dereferences it locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyDescriptor {
    Path(String),
    #[serde(rename_all = "camelCase")]
    Components {
        project_id: String,
        location_id: String,
        key_ring_id: String,
        key_id: String,
        key_version: String,
    },
}

impl KeyDescriptor {
    /// The fully-qualified crypto key version resource name.
    pub fn resource_name(&self) -> String {
        match self {
            KeyDescriptor::Path(path) => path.clone(),
            KeyDescriptor::Components {
                project_id,
                location_id,
                key_ring_id,
                key_id,
                key_version,
            } => format!(
                "projects/{project_id}/locations/{location_id}/keyRings/{key_ring_id}\
                 /cryptoKeys/{key_id}/cryptoKeyVersions/{key_version}"
            ),
        }
    }
}

impl From<String> for KeyDescriptor {
    fn from(path: String) -> Self {
        KeyDescriptor::Path(path)
    }
}

impl From<&str> for KeyDescriptor {
    fn from(path: &str) -> Self {
        KeyDescriptor::Path(path.to_string())
    }
}

impl fmt::Display for KeyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resource_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_render_to_resource_name() {
        let descriptor = KeyDescriptor::Components {
            project_id: "points-409708".into(),
            location_id: "global".into(),
            key_ring_id: "TEST".into(),
            key_id: "signer".into(),
            key_version: "1".into(),
        };
        assert_eq!(
            descriptor.resource_name(),
            "projects/points-409708/locations/global/keyRings/TEST\
             /cryptoKeys/signer/cryptoKeyVersions/1"
        );
    }

    #[test]
    fn raw_path_passes_through_unchanged() {
        let path = "projects/p/locations/l/keyRings/r/cryptoKeys/k/cryptoKeyVersions/2";
        let descriptor = KeyDescriptor::from(path);
        assert_eq!(descriptor.resource_name(), path);
        assert_eq!(descriptor.to_string(), path);
    }

    #[test]
    fn deserializes_from_camel_case_config() {
        let descriptor: KeyDescriptor = serde_json::from_value(serde_json::json!({
            "projectId": "p",
            "locationId": "l",
            "keyRingId": "r",
            "keyId": "k",
            "keyVersion": "1",
        }))
        .unwrap();
        assert_eq!(
            descriptor.resource_name(),
            "projects/p/locations/l/keyRings/r/cryptoKeys/k/cryptoKeyVersions/1"
        );
    }

    #[test]
    fn deserializes_from_plain_string() {
        let descriptor: KeyDescriptor =
            serde_json::from_value(serde_json::json!("projects/p/etc")).unwrap();
        assert_eq!(descriptor, KeyDescriptor::Path("projects/p/etc".into()));
    }
}

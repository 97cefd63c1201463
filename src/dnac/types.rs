//! Types returned by the Catalyst Center API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque bearer credential issued by the token endpoint.
///
/// Expiry is server-side and not tracked here; callers re-authenticate per
/// session or when a request is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthToken(pub String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A network device record, passed through verbatim from the inventory API.
///
/// Only `id` is interpreted (it keys the config endpoint); every other
/// provider-defined attribute is preserved untouched in `attributes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    pub id: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

/// Result of a paginated inventory listing.
///
/// `complete` is false when pagination failed partway and `devices` holds
/// only the prefix accumulated before the failure. An empty inventory with
/// `complete: true` genuinely has zero devices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceInventory {
    pub devices: Vec<Device>,
    pub complete: bool,
}

impl DeviceInventory {
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_preserves_unknown_attributes() {
        let raw = serde_json::json!({
            "id": "dev-1",
            "hostname": "edge-sw-01",
            "platformId": "C9300-48U",
        });
        let device: Device = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(device.id, "dev-1");
        assert_eq!(
            device.attributes.get("hostname"),
            Some(&serde_json::json!("edge-sw-01"))
        );
        // Round-trips losslessly.
        assert_eq!(serde_json::to_value(&device).unwrap(), raw);
    }
}

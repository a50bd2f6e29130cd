use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Platform-assigned audio object identifier. Opaque: unique only among
/// currently connected devices, with no stability guarantee across
/// reconnects or reboots and no structure a caller may rely on.
pub type DeviceId = u32;

/// Snapshot of one OS-reported audio device, valid at the instant of the
/// enumeration that produced it. Serialized as `{name, id, isOutput}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub name: String,
    pub id: DeviceId,
    pub is_output: bool,
}

impl Device {
    pub fn new(name: String, id: DeviceId, is_output: bool) -> Self {
        Self { name, id, is_output }
    }
}

/// Validate the untyped "set default device" argument from the host.
///
/// Accepts a JSON number holding a non-negative integer that fits in a
/// `DeviceId`; anything else (absent, null, string, fractional, negative,
/// overflowing) is `InvalidArgument`. Runs before any OS call.
pub fn parse_device_id(value: Option<&serde_json::Value>) -> Result<DeviceId, RegistryError> {
    let value = value.ok_or_else(|| {
        RegistryError::InvalidArgument("device id argument is missing".to_string())
    })?;

    let id = value.as_u64().ok_or_else(|| {
        RegistryError::InvalidArgument(format!("expected a non-negative integer, got {value}"))
    })?;

    DeviceId::try_from(id).map_err(|_| {
        RegistryError::InvalidArgument(format!("device id {id} is out of range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_parse_valid_ids() {
        assert_eq!(parse_device_id(Some(&json!(0))).unwrap(), 0);
        assert_eq!(parse_device_id(Some(&json!(53))).unwrap(), 53);
        assert_eq!(
            parse_device_id(Some(&json!(4_294_967_295u64))).unwrap(),
            u32::MAX
        );
    }

    #[test]
    fn test_parse_missing_argument() {
        assert!(matches!(
            parse_device_id(None),
            Err(RegistryError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_device_id(Some(&Value::Null)),
            Err(RegistryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(matches!(
            parse_device_id(Some(&json!("53"))),
            Err(RegistryError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_device_id(Some(&json!(true))),
            Err(RegistryError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_device_id(Some(&json!([53]))),
            Err(RegistryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_negative_and_fractional() {
        assert!(matches!(
            parse_device_id(Some(&json!(-1))),
            Err(RegistryError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_device_id(Some(&json!(53.5))),
            Err(RegistryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            parse_device_id(Some(&json!(4_294_967_296u64))),
            Err(RegistryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_device_wire_shape() {
        let device = Device::new("Built-in Speakers".to_string(), 53, true);
        let value = serde_json::to_value(&device).unwrap();
        assert_eq!(
            value,
            json!({"name": "Built-in Speakers", "id": 53, "isOutput": true})
        );
    }

    #[test]
    fn test_device_round_trip() {
        let json = json!({"name": "Built-in Microphone", "id": 54, "isOutput": false});
        let device: Device = serde_json::from_value(json).unwrap();
        assert_eq!(device, Device::new("Built-in Microphone".to_string(), 54, false));
    }

    #[test]
    fn test_error_display_carries_diagnostic_text() {
        let err = RegistryError::DeviceQuery("kAudioHardwareBadDeviceError".to_string());
        assert_eq!(
            err.to_string(),
            "device query failed: kAudioHardwareBadDeviceError"
        );
    }
}

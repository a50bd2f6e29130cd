//! CoreAudio device registry for macOS.
//!
//! Every call re-queries the hardware; nothing is cached, so the returned
//! snapshots are only valid at the instant of the query.

use cidre::core_audio::{
    AudioObjId, AudioObjPropAddr, AudioObjPropElement, AudioObjPropScope, AudioObjPropSelector,
};
use cidre::{arc, cf};

use soundswitch_registry_core::{Device, DeviceId, RegistryError};

const DEVICES_PROPERTY_ADDRESS: AudioObjPropAddr = AudioObjPropAddr {
    selector: AudioObjPropSelector::HARDWARE_DEVICES,
    scope: AudioObjPropScope::GLOBAL,
    element: AudioObjPropElement::MAIN,
};

const DEFAULT_OUTPUT_DEVICE_PROPERTY_ADDRESS: AudioObjPropAddr = AudioObjPropAddr {
    selector: AudioObjPropSelector::HARDWARE_DEFAULT_OUTPUT_DEVICE,
    scope: AudioObjPropScope::GLOBAL,
    element: AudioObjPropElement::MAIN,
};

const NAME_PROPERTY_ADDRESS: AudioObjPropAddr = AudioObjPropAddr {
    selector: AudioObjPropSelector::NAME,
    scope: AudioObjPropScope::GLOBAL,
    element: AudioObjPropElement::MAIN,
};

const OUTPUT_STREAMS_PROPERTY_ADDRESS: AudioObjPropAddr = AudioObjPropAddr {
    selector: AudioObjPropSelector::STREAMS,
    scope: AudioObjPropScope::OUTPUT,
    element: AudioObjPropElement::MAIN,
};

fn query_err(err: cidre::os::Error) -> RegistryError {
    RegistryError::DeviceQuery(format!("{err:?}"))
}

/// List all audio devices currently known to CoreAudio, in OS-reported order.
pub fn list_devices() -> Result<Vec<Device>, RegistryError> {
    let ids: Vec<AudioObjId> = AudioObjId::SYS_OBJECT
        .prop_vec(&DEVICES_PROPERTY_ADDRESS)
        .map_err(query_err)?;

    let mut devices = Vec::with_capacity(ids.len());
    for id in ids {
        devices.push(Device::new(device_name(id), id.0, is_output_device(id)));
    }

    tracing::debug!(count = devices.len(), "enumerated audio devices");
    Ok(devices)
}

/// Get the id of the current default output device.
pub fn default_device() -> Result<DeviceId, RegistryError> {
    let id: AudioObjId = AudioObjId::SYS_OBJECT
        .prop(&DEFAULT_OUTPUT_DEVICE_PROPERTY_ADDRESS)
        .map_err(query_err)?;
    Ok(id.0)
}

/// Ask CoreAudio to make `id` the default output device.
///
/// Returns `Ok(false)` when CoreAudio declines the change (unknown id,
/// disconnected device, non-output device); the id is handed to the OS
/// unfiltered, so input-capable ids are declined by CoreAudio, not by us.
/// The change is system-wide and visible to other processes.
pub fn set_default_device(id: DeviceId) -> Result<bool, RegistryError> {
    match AudioObjId::SYS_OBJECT.set_prop(&DEFAULT_OUTPUT_DEVICE_PROPERTY_ADDRESS, &AudioObjId(id))
    {
        Ok(()) => {
            tracing::info!(device_id = id, "default output device changed");
            Ok(true)
        }
        Err(err) => {
            tracing::debug!(device_id = id, err = ?err, "default device change declined");
            Ok(false)
        }
    }
}

/// Device name, passed through as CoreAudio reports it. Devices that refuse
/// the name query get an empty string rather than failing the enumeration.
fn device_name(id: AudioObjId) -> String {
    id.cf_prop::<cf::String>(&NAME_PROPERTY_ADDRESS)
        .map(|name: arc::R<cf::String>| name.to_string())
        .unwrap_or_default()
}

/// A device with at least one output stream is listed as output-capable;
/// everything else (including duplex devices without output streams in this
/// scope) collapses to input.
fn is_output_device(id: AudioObjId) -> bool {
    id.prop_vec::<AudioObjId>(&OUTPUT_STREAMS_PROPERTY_ADDRESS)
        .map(|streams| !streams.is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // These run against the real CoreAudio HAL and assume at least one
    // audio device is present, which holds on any Mac.

    #[test]
    fn test_list_devices_reports_connected_hardware() {
        let devices = list_devices().unwrap();
        assert!(!devices.is_empty());
    }

    #[test]
    fn test_default_device_appears_in_enumeration() {
        let devices = list_devices().unwrap();
        let current = default_device().unwrap();
        assert!(devices.iter().any(|d| d.id == current));
    }

    #[test]
    fn test_default_device_is_output_capable() {
        let devices = list_devices().unwrap();
        let current = default_device().unwrap();
        let device = devices.iter().find(|d| d.id == current).unwrap();
        assert!(device.is_output);
    }

    #[test]
    fn test_set_unknown_device_is_declined_cleanly() {
        // u32::MAX is kAudioObjectUnknown territory; the OS declines and we
        // must not surface that as a fault.
        assert!(!set_default_device(u32::MAX).unwrap());
    }

    #[test]
    fn test_set_current_device_round_trips() {
        let current = default_device().unwrap();
        assert!(set_default_device(current).unwrap());
        assert_eq!(default_device().unwrap(), current);
    }
}

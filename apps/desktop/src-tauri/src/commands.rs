//! Tauri command handlers for the device registry.
//!
//! Pure marshalling: each command is one synchronous registry call, with
//! registry errors flattened to strings for the webview.

use soundswitch_registry_core::{parse_device_id, Device, DeviceId};

#[cfg(target_os = "macos")]
use soundswitch_registry_macos as registry;

#[cfg(target_os = "windows")]
use soundswitch_registry_windows as registry;

#[cfg(target_os = "linux")]
use soundswitch_registry_linux as registry;

/// List all audio devices currently known to the OS, in OS-reported order.
#[tauri::command]
pub fn list_audio_devices() -> Result<Vec<Device>, String> {
    registry::list_devices().map_err(|e| e.to_string())
}

/// Get the id of the current default output device.
#[tauri::command]
pub fn get_current_audio_device() -> Result<DeviceId, String> {
    registry::default_device().map_err(|e| e.to_string())
}

/// Ask the OS to make `device_id` the default output device.
///
/// The argument arrives untyped so a missing or non-numeric value is
/// rejected as an invalid argument here, before any OS call, rather than
/// disappearing into the host's own deserialization error.
///
/// Returns `Ok(false)` when the OS completed the call but declined the
/// change (unknown id, disconnected device); that is not an error.
#[tauri::command]
pub fn set_default_audio_device(device_id: Option<serde_json::Value>) -> Result<bool, String> {
    let id = parse_device_id(device_id.as_ref()).map_err(|e| e.to_string())?;
    registry::set_default_device(id).map_err(|e| e.to_string())
}

/// Set the default output device to the first device whose name matches
/// exactly. Returns `Ok(false)` when no connected device carries the name.
#[tauri::command]
pub fn set_default_audio_device_by_name(name: String) -> Result<bool, String> {
    let devices = registry::list_devices().map_err(|e| e.to_string())?;

    match devices.iter().find(|d| d.name == name) {
        Some(device) => registry::set_default_device(device.id).map_err(|e| e.to_string()),
        None => {
            tracing::debug!(name, "no device with that name");
            Ok(false)
        }
    }
}

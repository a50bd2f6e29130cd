use soundswitch_registry_core::{Device, DeviceId, RegistryError};

// TODO: Implement Windows device enumeration via IMMDeviceEnumerator and
// default-device switching via the undocumented IPolicyConfig interface

/// List all available audio devices on Windows
pub fn list_devices() -> Result<Vec<Device>, RegistryError> {
    Err(RegistryError::PlatformNotSupported(
        "Windows support coming soon".to_string(),
    ))
}

/// Get the current default output device on Windows
pub fn default_device() -> Result<DeviceId, RegistryError> {
    Err(RegistryError::PlatformNotSupported(
        "Windows support coming soon".to_string(),
    ))
}

/// Set the default output device on Windows
pub fn set_default_device(_id: DeviceId) -> Result<bool, RegistryError> {
    Err(RegistryError::PlatformNotSupported(
        "Windows support coming soon".to_string(),
    ))
}

use soundswitch_registry_core::{Device, DeviceId, RegistryError};

// TODO: Implement Linux device enumeration and default-sink switching via
// libpulse (introspect API, set_default_sink)

/// List all available audio devices on Linux
pub fn list_devices() -> Result<Vec<Device>, RegistryError> {
    Err(RegistryError::PlatformNotSupported(
        "Linux support coming soon".to_string(),
    ))
}

/// Get the current default output device on Linux
pub fn default_device() -> Result<DeviceId, RegistryError> {
    Err(RegistryError::PlatformNotSupported(
        "Linux support coming soon".to_string(),
    ))
}

/// Set the default output device on Linux
pub fn set_default_device(_id: DeviceId) -> Result<bool, RegistryError> {
    Err(RegistryError::PlatformNotSupported(
        "Linux support coming soon".to_string(),
    ))
}

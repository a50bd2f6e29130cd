#[cfg(target_os = "macos")]
mod device;

pub use soundswitch_registry_core::{Device, DeviceId, RegistryError};

#[cfg(target_os = "macos")]
pub use device::{default_device, list_devices, set_default_device};

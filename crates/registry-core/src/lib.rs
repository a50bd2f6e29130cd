mod device;
mod error;

pub use device::{parse_device_id, Device, DeviceId};
pub use error::RegistryError;

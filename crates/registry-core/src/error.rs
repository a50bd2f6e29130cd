use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("device query failed: {0}")]
    DeviceQuery(String),

    #[error("platform not supported: {0}")]
    PlatformNotSupported(String),
}

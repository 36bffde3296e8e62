//! Error types for registry setup.
//!
//! Conversion itself never errors; only bootstrap of the process-wide
//! registry can.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("A process-wide converter registry is already installed")]
    AlreadyInstalled,
}

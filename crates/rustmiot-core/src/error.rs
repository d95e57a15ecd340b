use crate::model::DeviceModel;
use thiserror::Error;

/// Errors raised when selecting a device model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unsupported device model \"{0}\"")]
    UnsupportedModel(String),
}

/// Errors raised when resolving a semantic property name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("model {model} has no property \"{name}\"")]
    UnknownProperty {
        model: DeviceModel,
        name: &'static str,
    },
}

/// Errors raised by typed accessors on a status snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The device never reported this property at all. Distinct from a
    /// failed read, which yields an absent value instead of an error.
    #[error("model {model} did not report property \"{name}\"")]
    MissingProperty {
        model: DeviceModel,
        name: &'static str,
    },
    #[error("property \"{name}\" carried an unexpected wire type")]
    UnexpectedType { name: &'static str },
}

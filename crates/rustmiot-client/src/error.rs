use crate::transport::TransportError;
use rustmiot_core::{MappingError, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

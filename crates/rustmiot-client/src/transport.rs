use rustmiot_core::PropertyValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur at the device-transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("request timed out")]
    Timeout,
    #[error("payload decryption failed")]
    Crypto,
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// One entry of a batch get-properties request. `did` is the caller-supplied
/// correlation id; the device echoes it back in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRequest {
    pub did: String,
    pub siid: u32,
    pub piid: u32,
}

/// One entry of a batch get-properties response. Code 0 is success; any
/// other code marks a per-property failure and `value` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyResponse {
    pub did: String,
    pub code: i32,
    pub value: Option<PropertyValue>,
}

/// Async trait for the miIO/MIoT device transport.
///
/// Implementors own the encrypted UDP exchange, token handshake, and retry
/// policy; they do not interpret property semantics. The in-memory
/// [`SimulatedSwitch`](crate::SimulatedSwitch) implements this for tests
/// and development without hardware.
pub trait Transport: Send + Sync {
    /// Batched property read. The response order may differ from the
    /// request order; callers correlate by the echoed `did`.
    async fn get_properties(
        &self,
        requests: &[PropertyRequest],
    ) -> Result<Vec<PropertyResponse>, TransportError>;

    /// Single property write. Returns `true` when the device acknowledged
    /// the write (the wire `["ok"]` sentinel).
    async fn set_property(
        &self,
        siid: u32,
        piid: u32,
        value: PropertyValue,
    ) -> Result<bool, TransportError>;
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    async fn get_properties(
        &self,
        requests: &[PropertyRequest],
    ) -> Result<Vec<PropertyResponse>, TransportError> {
        (**self).get_properties(requests).await
    }

    async fn set_property(
        &self,
        siid: u32,
        piid: u32,
        value: PropertyValue,
    ) -> Result<bool, TransportError> {
        (**self).set_property(siid, piid, value).await
    }
}

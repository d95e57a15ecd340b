#![allow(async_fn_in_trait)]

pub mod client;
pub mod error;
pub mod simulator;
pub mod transport;

pub use client::{PowerMode, SwitchClient};
pub use error::ClientError;
pub use rustmiot_core::{
    DeviceModel, MappingError, ModelError, PropertyValue, StatusError, SwitchState, SwitchStatus,
    SystemStatus,
};
pub use simulator::SimulatedSwitch;
pub use transport::{PropertyRequest, PropertyResponse, Transport, TransportError};
